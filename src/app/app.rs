use axum::{Router, routing::get};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::app_conf::AppConfig;
use crate::config::database_conf::DatabaseConfig;
use crate::repository::client_repo::PgClientRepository;
use crate::repository::electrician_repo::PgElectricianRepository;
use crate::repository::intervention_repo::PgInterventionRepository;
use crate::repository::invoice_repo::PgInvoiceRepository;
use crate::router::client_router::client_router;
use crate::router::electrician_router::electrician_router;
use crate::router::intervention_router::intervention_router;
use crate::router::invoice_router::invoice_router;
use crate::service::client_service::ClientServiceImpl;
use crate::service::electrician_service::ElectricianServiceImpl;
use crate::service::intervention_service::InterventionServiceImpl;
use crate::service::invoice_service::InvoiceServiceImpl;

pub struct App {
    config: AppConfig,
    router: Router,
    pub client_service: Arc<ClientServiceImpl>,
    pub electrician_service: Arc<ElectricianServiceImpl>,
    pub intervention_service: Arc<InterventionServiceImpl>,
    pub invoice_service: Arc<InvoiceServiceImpl>,
}

impl App {
    pub async fn new() -> Self {
        let config = AppConfig::from_env();
        let database_config = DatabaseConfig::from_env().expect("Database config error");

        let pool = Self::connect_pool(&database_config).await;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run database migrations");
        info!("Database migrations applied");

        let client_repo = Arc::new(PgClientRepository::new(pool.clone()));
        let electrician_repo = Arc::new(PgElectricianRepository::new(pool.clone()));
        let intervention_repo = Arc::new(PgInterventionRepository::new(pool.clone()));
        let invoice_repo = Arc::new(PgInvoiceRepository::new(pool.clone()));

        let client_service = Arc::new(ClientServiceImpl::new(client_repo));
        let electrician_service = Arc::new(ElectricianServiceImpl::new(electrician_repo));
        let intervention_service = Arc::new(InterventionServiceImpl::new(intervention_repo));
        let invoice_service = Arc::new(InvoiceServiceImpl::new(invoice_repo));

        let mut app = App {
            config,
            router: Router::new(),
            client_service,
            electrician_service,
            intervention_service,
            invoice_service,
        };
        app.router = app.create_router();
        app
    }

    async fn connect_pool(config: &DatabaseConfig) -> PgPool {
        PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .expect("Failed to connect to database")
    }

    fn create_router(&self) -> Router {
        Router::new()
            .merge(client_router(self.client_service.clone()))
            .merge(electrician_router(self.electrician_service.clone()))
            .merge(intervention_router(self.intervention_service.clone()))
            .merge(invoice_router(self.invoice_service.clone()))
            .route("/health", get(|| async { "OK" }))
    }

    pub async fn start(self) {
        let addr = SocketAddr::new(self.config.host.parse().expect("Invalid host"), self.config.port);
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await.expect("Failed to bind address");
        axum::serve(listener, self.router).await.expect("Failed to start server");
    }
}
