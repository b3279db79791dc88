use std::time::Duration;

use actix_web::{web, App, HttpServer};
use backend::config::ServerConfig;
use backend::middleware::cors::cors_middleware;
use backend::routes;
use backend::state::app_state::AppState;
use tracing::info;

mod telemetry;

const REAPER_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting game backend on http://{}:{}",
        config.host, config.port
    );

    let app_state = AppState::new();

    // Idle-session reaper: bounds memory growth from abandoned games.
    let reaper_registry = app_state.registry();
    let game_ttl = config.game_ttl;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(REAPER_INTERVAL);
        loop {
            interval.tick().await;
            let reaped = reaper_registry.reap_idle(game_ttl);
            if reaped > 0 {
                info!(reaped, "idle game sweep");
            }
        }
    });

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
