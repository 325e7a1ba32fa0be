// src/routes.rs
use log::info;
use std::convert::Infallible;
use warp::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::calculator::{get_calculators, post_calculation};
use crate::handlers::error::ApiError;
use crate::handlers::history::{clear_history, get_history};
use crate::SharedLedger;

const MAX_BODY_BYTES: u64 = 16 * 1024;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message: String;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(body_error) = err.find::<BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = format!("Invalid request body: {}", body_error);
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        code = StatusCode::PAYLOAD_TOO_LARGE;
        message = "Payload Too Large".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(ledger: SharedLedger) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let ledger_filter = warp::any().map(move || ledger.clone());

    let calculate_route = warp::path!("api" / "v1" / "calculate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(ledger_filter.clone())
        .and_then(post_calculation);

    let calculators_route = warp::path!("api" / "v1" / "calculators")
        .and(warp::get())
        .and_then(get_calculators);

    let history_route = warp::path!("api" / "v1" / "history")
        .and(warp::get())
        .and(ledger_filter.clone())
        .and_then(get_history);

    let clear_history_route = warp::path!("api" / "v1" / "history")
        .and(warp::delete())
        .and(ledger_filter.clone())
        .and_then(clear_history);

    info!("All routes configured successfully.");

    calculate_route
        .or(calculators_route)
        .or(history_route)
        .or(clear_history_route)
        .recover(handle_rejection)
}
