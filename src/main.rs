mod model;
mod server;

use std::sync::Arc;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, seed, startup, state::AppState, template,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    startup::check_for_admin(&db, &config).await?;
    if config.seed_demo_data {
        seed::seed_demo_data(&db).await?;
    }

    let templates = Arc::new(template::environment()?);

    let app = router::router()
        .with_state(AppState::new(db, templates))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
