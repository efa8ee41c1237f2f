use tracing_subscriber::EnvFilter;

// Entry point for `cargo run -p web-server`: serves with the loaded config
// and skips the CLI of the main binary.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = configuration::load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    web_server::run_server(&config).await
}
