//! Handlers for the `/auth` resource.

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::validate::ValidatedBody;
use crate::response::DataResponse;

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
}

/// The public view of a registered account. Never carries the password.
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl From<RegisterRequest> for AccountSummary {
    fn from(input: RegisterRequest) -> Self {
        Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
        }
    }
}

/// POST /api/v1/auth/register
///
/// Accept a registration. Name and email arrive trimmed, the email
/// lower-cased.
pub async fn register(
    ValidatedBody(input): ValidatedBody<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AccountSummary>>)> {
    tracing::info!(email = %input.email, "Registration accepted");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(AccountSummary::from(input))),
    ))
}
