//! Two-operand arithmetic endpoints: `POST /add`, `/subtract`, `/multiply`, `/divide`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use calculator_core::{BinaryOperator, Number};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::network::error::{ApiError, ErrorResponse};

/// Request body shared by the four arithmetic endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperandsRequest {
    /// Left operand.
    #[schema(value_type = f64)]
    pub a: Number,
    /// Right operand.
    #[schema(value_type = f64)]
    pub b: Number,
}

/// Successful arithmetic response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
    #[schema(value_type = f64)]
    pub result: Number,
}

fn apply(
    state: &AppState,
    op: BinaryOperator,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    let Json(OperandsRequest { a, b }) = payload?;
    let result = state.calculator.apply(op, a, b)?;
    Ok(Json(ResultResponse { result }))
}

#[utoipa::path(
    post,
    path = "/add",
    tag = "arithmetic",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Sum of a and b", body = ResultResponse),
        (status = 422, description = "Malformed operands", body = ErrorResponse),
    )
)]
pub async fn add_handler(
    State(state): State<AppState>,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    apply(&state, BinaryOperator::Add, payload)
}

#[utoipa::path(
    post,
    path = "/subtract",
    tag = "arithmetic",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Difference a - b", body = ResultResponse),
        (status = 422, description = "Malformed operands", body = ErrorResponse),
    )
)]
pub async fn subtract_handler(
    State(state): State<AppState>,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    apply(&state, BinaryOperator::Subtract, payload)
}

#[utoipa::path(
    post,
    path = "/multiply",
    tag = "arithmetic",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Product of a and b", body = ResultResponse),
        (status = 422, description = "Malformed operands", body = ErrorResponse),
    )
)]
pub async fn multiply_handler(
    State(state): State<AppState>,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    apply(&state, BinaryOperator::Multiply, payload)
}

#[utoipa::path(
    post,
    path = "/divide",
    tag = "arithmetic",
    request_body = OperandsRequest,
    responses(
        (status = 200, description = "Quotient a / b", body = ResultResponse),
        (status = 400, description = "Division by zero", body = ErrorResponse),
        (status = 422, description = "Malformed operands", body = ErrorResponse),
    )
)]
pub async fn divide_handler(
    State(state): State<AppState>,
    payload: Result<Json<OperandsRequest>, JsonRejection>,
) -> Result<Json<ResultResponse>, ApiError> {
    apply(&state, BinaryOperator::Divide, payload)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;
    use crate::network::NetworkConfig;

    fn operands(a: impl Into<Number>, b: impl Into<Number>) -> Result<Json<OperandsRequest>, JsonRejection> {
        Ok(Json(OperandsRequest {
            a: a.into(),
            b: b.into(),
        }))
    }

    #[tokio::test]
    async fn each_operator_produces_its_result() {
        let state = AppState::new(NetworkConfig::default());

        let add = add_handler(State(state.clone()), operands(10, 5)).await.unwrap();
        assert_eq!(add.0.result, Number::Int(15));

        let sub = subtract_handler(State(state.clone()), operands(10, 5)).await.unwrap();
        assert_eq!(sub.0.result, Number::Int(5));

        let mul = multiply_handler(State(state.clone()), operands(10, 5)).await.unwrap();
        assert_eq!(mul.0.result, Number::Int(50));

        let div = divide_handler(State(state), operands(10, 2)).await.unwrap();
        assert_eq!(div.0.result, Number::Int(5));
    }

    #[tokio::test]
    async fn floats_are_accepted() {
        let state = AppState::new(NetworkConfig::default());
        let sum = add_handler(State(state), operands(2.5, 3.5)).await.unwrap();
        assert_eq!(sum.0.result, Number::Float(6.0));
    }

    #[tokio::test]
    async fn divide_by_zero_maps_to_bad_request() {
        let state = AppState::new(NetworkConfig::default());
        let err = divide_handler(State(state), operands(10, 0)).await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot divide by zero!");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
