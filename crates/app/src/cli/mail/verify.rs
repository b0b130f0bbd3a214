use clap::Args;
use storefront_app::notifications::{Mailer, config::MailConfig};

#[derive(Debug, Args)]
pub(crate) struct VerifyArgs {
    #[command(flatten)]
    mail: MailConfig,
}

pub(crate) async fn run(args: VerifyArgs) -> Result<(), String> {
    let providers = args.mail.providers();

    if providers.is_empty() {
        return Err("no mail provider is configured".to_string());
    }

    let mailer = Mailer::from_config(&args.mail).await;

    let provider = mailer
        .active_provider()
        .await
        .ok_or_else(|| format!("none of the {} configured providers verified", providers.len()))?;

    println!("active_provider: {provider}");

    mailer.teardown().await;

    Ok(())
}
