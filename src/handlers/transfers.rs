//! Transfer endpoint.
//!
//! Requests are decoded and echoed back. No balances change.

use crate::{error::AppError, extract::ApiJson, models::transfer::TransferRequest};
use axum::Json;

/// # Request Body
///
/// ```json
/// { "toAccount": 2, "amount": 500 }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: the same request
/// - **Error (400)**: body could not be decoded
pub async fn create_transfer(
    ApiJson(request): ApiJson<TransferRequest>,
) -> Result<Json<TransferRequest>, AppError> {
    tracing::info!(to_account = request.to_account, amount = request.amount, "transfer accepted");

    Ok(Json(request))
}
