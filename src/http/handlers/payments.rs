use crate::domain::payment::{ErrorEnvelope, ErrorPayload, PostPaymentRequest};
use crate::service::payment_processor::ProcessorError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(request): Json<PostPaymentRequest>,
) -> impl IntoResponse {
    match state.processor.process(request).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => to_response(e),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.processor.retrieve(payment_id) {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => to_response(e),
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

fn to_response(e: ProcessorError) -> axum::response::Response {
    let (status, code, message, details) = match e {
        ProcessorError::Validation(violations) => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            "Payment request failed validation".to_string(),
            Some(violations),
        ),
        ProcessorError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            "PAYMENT_NOT_FOUND",
            format!("Payment with ID {id} was not found"),
            None,
        ),
        ProcessorError::Processing(_) => (
            StatusCode::BAD_REQUEST,
            "PROCESSING_ERROR",
            "Payment processing failed due to technical error".to_string(),
            None,
        ),
    };

    let body = ErrorEnvelope {
        error: ErrorPayload {
            code: code.to_string(),
            message,
            details,
        },
    };
    (status, Json(body)).into_response()
}
