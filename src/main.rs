use url_alias::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}
