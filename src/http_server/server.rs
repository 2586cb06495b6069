//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers. Handlers share nothing
//! but the cloned connection pool, injected through axum state rather than a
//! process-wide singleton.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::config::HttpServerConfig;
use super::item_routes::item_routes;
use super::meta_routes::meta_routes;
use super::table_routes::table_routes;

/// State shared across all handlers
pub struct AppState {
    pub pool: PgPool,
}

/// HTTP server for the gateway API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(pool: PgPool) -> Self {
        Self::with_config(pool, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(pool: PgPool, config: HttpServerConfig) -> Self {
        let router = Self::build_router(pool);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(pool: PgPool) -> Router {
        let state = Arc::new(AppState { pool });

        // Permissive CORS: any origin, method, and header.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Welcome, health, and connectivity probes at root level
            .merge(meta_routes(state.clone()))
            // Generic table endpoints under /api
            .nest("/api", table_routes(state.clone()))
            // Demo item CRUD under /api
            .nest("/api", item_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting HTTP server");
        tracing::info!("health check: http://{}/api/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    fn lazy_pool() -> PgPool {
        PgPoolOptions::new()
            .connect_lazy("postgres://nobody:@127.0.0.1:1/nothing")
            .unwrap()
    }

    #[tokio::test]
    async fn test_server_creation() {
        let server = HttpServer::new(lazy_pool());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[tokio::test]
    async fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(lazy_pool(), config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[tokio::test]
    async fn test_router_builds() {
        let server = HttpServer::new(lazy_pool());
        let _router = server.router();
        // If we get here, route registration succeeded
    }
}
