use clap::{Args, Subcommand};

mod verify;

#[derive(Debug, Args)]
pub(crate) struct MailCommand {
    #[command(subcommand)]
    command: MailSubcommand,
}

#[derive(Debug, Subcommand)]
enum MailSubcommand {
    /// Check which mail provider would be used
    Verify(verify::VerifyArgs),

    /// Send a test email
    Test(send_test::TestArgs),
}

pub(crate) async fn run(command: MailCommand) -> Result<(), String> {
    match command.command {
        MailSubcommand::Verify(args) => verify::run(args).await,
        MailSubcommand::Test(args) => send_test::run(args).await,
    }
}
