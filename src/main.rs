use line_status::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // .env may carry LOGLEVEL / UP_STAGE, so load it before the logger
    dotenv::dotenv().ok();
    setup_logger();
    info!("line-status {}", version());

    let config = Config::new();
    let state = AppState::from_config(config)?;
    serve(state).await
}
