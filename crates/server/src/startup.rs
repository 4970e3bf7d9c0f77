use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use common::utils::logging::init_logging_default;
use service::customer::{CustomerRepository, CustomerService, SeaOrmCustomerRepository};
use service::order::{OrderRepository, OrderService, SeaOrmOrderRepository};
use service::product::{ProductRepository, ProductService, SeaOrmProductRepository};

use crate::routes;

/// Handler state: one service per resource, wired over the shared pool once
/// at startup. The order service shares the customer and product
/// repositories for its referential checks.
#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
    pub products: Arc<ProductService>,
    pub orders: Arc<OrderService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let customer_repo: Arc<dyn CustomerRepository> =
            Arc::new(SeaOrmCustomerRepository { db: db.clone() });
        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(SeaOrmProductRepository { db: db.clone() });
        let order_repo: Arc<dyn OrderRepository> = Arc::new(SeaOrmOrderRepository { db });
        Self {
            customers: Arc::new(CustomerService::new(customer_repo.clone())),
            products: Arc::new(ProductService::new(product_repo.clone())),
            orders: Arc::new(OrderService::new(order_repo, customer_repo, product_repo)),
        }
    }
}

/// Load host/port from configs or env vars, with sensible fallbacks.
fn load_bind_addr() -> anyhow::Result<SocketAddr> {
    let (host, port) = match configs::load_default() {
        Ok(cfg) => (cfg.server.host, cfg.server.port),
        Err(_) => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8081);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: connect, migrate, build the app, and serve.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let state = AppState::new(db);
    let app: Router = routes::build_router(state, CorsLayer::very_permissive());

    let addr = load_bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
