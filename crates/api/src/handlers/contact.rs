//! Handler for the public contact form.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::validate::ValidatedBody;
use crate::response::DataResponse;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Acknowledgment returned once a message is accepted.
#[derive(Debug, Serialize)]
pub struct ContactReceipt {
    pub received: bool,
    pub email: String,
}

/// POST /api/v1/contact
///
/// Accept a contact form submission. Returns 202; delivery happens
/// out of band.
pub async fn submit_contact(
    ValidatedBody(input): ValidatedBody<ContactRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ContactReceipt>>)> {
    tracing::info!(
        email = %input.email,
        subject = input.subject.as_deref().unwrap_or(""),
        message_len = input.message.len(),
        "Contact message received"
    );
    Ok((
        StatusCode::ACCEPTED,
        Json(DataResponse::new(ContactReceipt {
            received: true,
            email: input.email,
        })),
    ))
}
