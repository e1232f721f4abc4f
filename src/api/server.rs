use crate::api::music;
use crate::config::ServerSettings;
use crate::constants::{API_PREFIX, MUSIC_PREFIX};
use crate::summary::SummaryService;

use log::info;
use rocket::{routes, get, Build, Rocket};
use rocket::serde::json::Json;
use rocket::config::Config;
use std::sync::Arc;

// Define the version response struct
#[derive(serde::Serialize)]
struct VersionResponse {
    version: String,
}

// API endpoint to get the version
#[get("/version")]
fn get_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the Rocket instance with all routes mounted
pub fn build_rocket(service: Arc<SummaryService>, settings: &ServerSettings) -> Rocket<Build> {
    let config = Config::figment()
        .merge(("port", settings.port))
        .merge(("address", settings.host.clone()));

    let api_routes = routes![get_version];

    let music_routes = routes![
        music::get_summary,
        music::get_summary_version,
        music::get_test_summary,
        music::get_test_summary_version,
    ];

    rocket::custom(config)
        .mount(API_PREFIX, api_routes)
        .mount(MUSIC_PREFIX, music_routes)
        .manage(service)
}

// Start the Rocket server
pub async fn start_rocket_server(service: Arc<SummaryService>, settings: &ServerSettings) -> Result<(), rocket::Error> {
    if !settings.enable {
        info!("Webserver is disabled in configuration");
        return Ok(());
    }

    info!("Starting webserver on {}:{}", settings.host, settings.port);

    let _rocket = build_rocket(service, settings).launch().await?;

    Ok(())
}
