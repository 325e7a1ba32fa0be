// src/handlers/calculator.rs
use log::{debug, error, info};
use serde::Serialize;
use serde_json::json;
use warp::reply::Json;
use warp::Rejection;

use crate::models::{CalculationInput, CalculationResult, CalculatorKind, HistoryField};
use crate::services::calculations::calculate;
use crate::services::formatting::history_fields;
use crate::SharedLedger;
use super::error::ApiError;

#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub calculator: CalculatorKind,
    pub result: CalculationResult,
    pub fields: Vec<HistoryField>,
}

pub async fn post_calculation(input: CalculationInput, ledger: SharedLedger) -> Result<Json, Rejection> {
    let kind = input.kind();
    info!("Handling request to run the {} calculator", kind);

    let input = input.clamped();
    let result = calculate(&input).map_err(|e| {
        error!("Rejected {} input: {}", kind, e);
        warp::reject::custom(ApiError::invalid_input(e.to_string()))
    })?;
    debug!("{} result: {:?}", kind, result);

    let fields = history_fields(&input, &result);
    {
        let mut ledger = ledger.lock().await;
        if let Err(e) = ledger.append(kind.label(), fields.clone()) {
            // The result is still valid; only the history write was lost
            error!("Failed to record {} in history: {}", kind, e);
        }
    }

    Ok(warp::reply::json(&CalculationResponse {
        calculator: kind,
        result,
        fields,
    }))
}

pub async fn get_calculators() -> Result<Json, Rejection> {
    debug!("Listing calculators");
    let calculators: Vec<_> = CalculatorKind::ALL
        .iter()
        .map(|kind| json!({ "id": kind.id(), "label": kind.label() }))
        .collect();
    Ok(warp::reply::json(&calculators))
}
