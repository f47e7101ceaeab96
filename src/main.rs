use tracing::Level;
use zonemap::config::Configuration;
use zonemap::error::ServiceError;
use zonemap::server;

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), ServiceError> {
    init_logging();
    let configuration = Configuration::load()?;
    server::startup(configuration).await?;
    Ok(())
}
