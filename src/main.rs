use dotenv::dotenv;
use log::info;
use std::net::SocketAddr;
use warp::Filter;

use fincalc_suite::config::AppConfig;
use fincalc_suite::routes;
use fincalc_suite::services::history::HistoryLedger;
use fincalc_suite::services::store::{FileStore, KeyValueStore};
use fincalc_suite::share_ledger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;
    info!("Using PORT: {}", config.port);
    info!("History stored in {} under '{}'", config.history_dir.display(), config.history_key);

    let store: Box<dyn KeyValueStore> = Box::new(FileStore::new(config.history_dir.clone()));
    let ledger = HistoryLedger::with_options(store, config.history_key.clone(), config.history_limit);
    info!("History ledger opened with {} entries", ledger.len());
    let ledger = share_ledger(ledger);

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    // The calculator UI is served from another origin
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST", "DELETE"]);

    let api = routes::routes(ledger).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;

    Ok(())
}
