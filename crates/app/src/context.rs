//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
    notifications::{EmailOrderNotifier, Mailer, config::MailConfig},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Database connection settings for [`AppContext::connect`].
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub auto_migrate: bool,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub mailer: Arc<Mailer>,
    pub notifier: Arc<EmailOrderNotifier>,
}

impl AppContext {
    /// Build application context: connect, optionally migrate, and verify mail providers.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn connect(
        database: &DatabaseSettings,
        mail: &MailConfig,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect_with_max_connections(&database.url, database.max_connections)
            .await
            .map_err(AppInitError::Database)?;

        if database.auto_migrate {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        let mailer = Arc::new(Mailer::from_config(mail).await);

        Ok(Self::from_parts(Db::new(pool), mailer, mail))
    }

    /// Wire services over an existing database handle and mailer.
    #[must_use]
    pub fn from_parts(db: Db, mailer: Arc<Mailer>, mail: &MailConfig) -> Self {
        let notifier = Arc::new(EmailOrderNotifier::new(
            Arc::clone(&mailer),
            mail.notify_address().map(ToString::to_string),
            mail.storefront(),
        ));

        Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db, notifier.clone())),
            mailer,
            notifier,
        }
    }
}
