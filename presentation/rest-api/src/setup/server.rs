use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    /// Builds the route tree: the API at the root, plus Swagger UI and the
    /// OpenAPI document when `docs_enabled`.
    pub fn routes(container: DependencyContainer, public_url: &str, docs_enabled: bool) -> Route {
        let api_service = OpenApiService::new(
            (container.health_api, container.item_api, container.cart_api),
            "Shop API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(public_url);

        let mut route = Route::new();
        if docs_enabled {
            route = route
                .nest("/docs", api_service.swagger_ui())
                .nest("/openapi.json", api_service.spec_endpoint());
        }
        route.nest("/", api_service)
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let url = config.server.public_url();
        let app = Self::routes(container, &url, config.docs_enabled)
            .with(config.cors)
            .with(Tracing);

        info!("Server running at {}", url);
        if config.docs_enabled {
            info!("Swagger UI at {}/docs", url);
            info!("OpenAPI JSON at {}/openapi.json", url);
        }
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
