// src/handlers/history.rs
use log::{error, info};
use warp::http::StatusCode;
use warp::reply::Json;
use warp::Rejection;

use crate::SharedLedger;
use super::error::ApiError;

pub async fn get_history(ledger: SharedLedger) -> Result<Json, Rejection> {
    let ledger = ledger.lock().await;
    info!("Handling request to get history ({} entries)", ledger.len());
    Ok(warp::reply::json(&ledger.entries()))
}

pub async fn clear_history(ledger: SharedLedger) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request to clear history");

    let mut ledger = ledger.lock().await;
    ledger.clear().map_err(|e| {
        error!("Failed to clear history: {}", e);
        warp::reject::custom(ApiError::storage_error(e.to_string()))
    })?;

    Ok(warp::reply::with_status(warp::reply(), StatusCode::NO_CONTENT))
}
