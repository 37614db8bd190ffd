mod app;
mod config;
mod server;

use config::Config;
use server::HttpServerBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::formatted_builder()
        .parse_filters(&std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    let config = Config::from_env()?;

    let srv = HttpServerBuilder::default()
        .bind(format!("0.0.0.0:{}", config.port))
        .router(app::app())
        .build()?;

    srv.serve().await
}
