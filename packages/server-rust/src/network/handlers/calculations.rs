//! `POST /calculations`: build a calculation through the factory and evaluate it.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use calculator_core::{Calculation, Number, UserId, Value};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;
use uuid::Uuid;

use super::AppState;
use crate::network::error::{ApiError, ErrorResponse};

/// Request to create and evaluate a calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationRequest {
    /// Calculation type, case-insensitive: addition, subtraction, multiplication or division.
    #[serde(rename = "type")]
    pub calculation_type: String,
    /// Owner of the calculation.
    pub user_id: Uuid,
    /// Inputs; must be a list of numbers.
    #[schema(value_type = Vec<f64>)]
    pub inputs: Value,
}

/// An evaluated calculation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Normalized lowercase type tag.
    #[serde(rename = "type")]
    pub calculation_type: String,
    #[schema(value_type = Vec<f64>)]
    pub inputs: Value,
    #[schema(value_type = f64)]
    pub result: Number,
}

#[utoipa::path(
    post,
    path = "/calculations",
    tag = "calculations",
    request_body = CalculationRequest,
    responses(
        (status = 200, description = "Evaluated calculation", body = CalculationResponse),
        (status = 400, description = "Unsupported type or invalid inputs", body = ErrorResponse),
        (status = 422, description = "Malformed request body", body = ErrorResponse),
    )
)]
pub async fn calculation_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = payload?;
    let calculation = Calculation::create(
        &request.calculation_type,
        UserId::from(request.user_id),
        request.inputs,
    )?;
    let result = state.calculator.evaluate(&calculation)?;

    info!(
        id = %calculation.id(),
        kind = calculation.kind().as_str(),
        "calculation evaluated"
    );

    Ok(Json(CalculationResponse {
        id: calculation.id(),
        user_id: calculation.user_id().as_uuid(),
        calculation_type: calculation.kind().to_string(),
        inputs: calculation.inputs().clone(),
        result,
    }))
}
