use std::sync::Arc;

use axum::Router;
use issue_tracker_sdk::IssuesApi;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::api::rest::routes;
use crate::config::IssuesConfig;
use crate::domain::repo::IssuesRepository;
use crate::domain::service::Service;
use crate::infra::storage::{self, SeaOrmIssuesRepository};
use crate::local_client::IssuesLocalClient;

/// The issue-tracker module: storage, domain service and REST surface.
pub struct IssueTrackerModule {
    service: Arc<Service>,
    config: IssuesConfig,
}

impl IssueTrackerModule {
    /// Connect to `dsn`, apply migrations and build the module.
    ///
    /// # Errors
    /// Returns an error if the database is unreachable or a migration fails.
    pub async fn init(dsn: &str, max_conns: u32, config: IssuesConfig) -> anyhow::Result<Self> {
        info!("Initializing issue-tracker module");

        let db = storage::connect(dsn, max_conns).await?;
        let module = Self::from_connection(db, config);

        info!("issue-tracker module initialized");
        Ok(module)
    }

    /// Build the module over an already migrated connection.
    #[must_use]
    pub fn from_connection(db: DatabaseConnection, config: IssuesConfig) -> Self {
        Self::with_repository(Arc::new(SeaOrmIssuesRepository::new(db)), config)
    }

    #[must_use]
    pub fn with_repository(repo: Arc<dyn IssuesRepository>, config: IssuesConfig) -> Self {
        Self {
            service: Arc::new(Service::new(repo)),
            config,
        }
    }

    /// Mount the issues resource and its OpenAPI document on `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        info!(prefix = %self.config.route_prefix, "Registering issue-tracker REST routes");
        routes::register_routes(router, &self.config, self.service.clone())
    }

    /// In-process client over the same service the REST surface uses.
    #[must_use]
    pub fn client(&self) -> Arc<dyn IssuesApi> {
        Arc::new(IssuesLocalClient::new(self.service.clone()))
    }

    #[must_use]
    pub fn config(&self) -> &IssuesConfig {
        &self.config
    }
}
