use hello_pipeline::{bind, config::Config, logging, serve};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config =
        Config::from_env().inspect_err(|err| error!(error = %err, "invalid configuration"))?;
    let listener = bind(&config)
        .await
        .inspect_err(|err| error!(error = %err, "startup failed"))?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        "server starting"
    );

    serve(listener).await?;
    Ok(())
}
