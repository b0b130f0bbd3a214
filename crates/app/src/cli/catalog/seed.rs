use std::path::PathBuf;

use clap::Args;
use storefront_app::{
    database::{self, Db},
    domain::products::{
        PgProductsService,
        seed::{self, SeedOutcome},
    },
};

#[derive(Debug, Args)]
pub(crate) struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// YAML catalog to import instead of the bundled one
    #[arg(long)]
    file: Option<PathBuf>,
}

pub(crate) async fn run(args: SeedArgs) -> Result<(), String> {
    let catalog = match &args.file {
        Some(path) => seed::load_catalog(path)
            .map_err(|error| format!("failed to load {}: {error}", path.display()))?,
        None => seed::default_catalog()
            .map_err(|error| format!("failed to load bundled catalog: {error}"))?,
    };

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    let outcome = seed::seed_if_empty(&service, catalog)
        .await
        .map_err(|error| format!("failed to seed catalog: {error}"))?;

    match outcome {
        SeedOutcome::Seeded { created } => println!("seeded {created} products"),
        SeedOutcome::Skipped { existing } => {
            println!("catalog already has {existing} products; nothing imported");
        }
    }

    Ok(())
}
