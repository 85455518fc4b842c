mod config;
mod errors;
mod logging;
mod serve;
mod server_utils;

use errors::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let start_time = std::time::Instant::now();

    logging::init_logging();

    let config = config::Config::from_env()?;

    serve::start_site_server(start_time, config).await?;

    Ok(())
}
