//! Validation middleware binding a static [`RuleChain`] to a route.
//!
//! Attach with `route_layer` so path parameters are already matched:
//!
//! ```ignore
//! get(handlers::packages::list_packages).route_layer(
//!     axum::middleware::from_fn_with_state(&catalogue::LIST_PACKAGES, validate_request),
//! )
//! ```
//!
//! On success the request continues with its body rewritten to the
//! normalized JSON, so `Json<T>` sees normalized values, and with the full
//! normalized [`RequestData`] stored in the request extensions for
//! [`ValidatedBody`], [`ValidatedQuery`] and [`ValidatedPath`]. On failure the handler never
//! runs and the client receives the 400 rejection payload.
//!
//! Bodies larger than the router's [`BodyLimit`] are refused with 413 before
//! any rule runs, whether the size is declared in `Content-Length` or only
//! found while buffering.

use std::collections::HashMap;

use axum::body::{to_bytes, Body};
use axum::extract::{FromRequestParts, Query, RawPathParams, Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http_body_util::LengthLimitError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use shutterbook_core::error::CoreError;
use shutterbook_core::validation::request::is_absent;
use shutterbook_core::validation::{decide, Decision, RequestData, RuleChain};

use crate::config::DEFAULT_BODY_LIMIT_BYTES;
use crate::error::{AppError, AppResult};

/// Largest request body the middleware buffers, in bytes.
///
/// Installed router-wide as an [`axum::Extension`]; requests without one
/// fall back to [`DEFAULT_BODY_LIMIT_BYTES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(DEFAULT_BODY_LIMIT_BYTES)
    }
}

/// Middleware entry point; the chain is the middleware state.
pub async fn validate_request(
    State(chain): State<&'static RuleChain>,
    request: Request,
    next: Next,
) -> Response {
    match apply_chain(chain, request).await {
        Ok(request) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}

async fn apply_chain(chain: &'static RuleChain, request: Request) -> AppResult<Request> {
    let (mut parts, body) = request.into_parts();

    let BodyLimit(limit) = parts.extensions.get::<BodyLimit>().copied().unwrap_or_default();
    if declared_length(&parts).is_some_and(|len| len > limit) {
        return Err(AppError::PayloadTooLarge);
    }

    let mut data = RequestData {
        path: path_params(&mut parts).await,
        query: query_params(&parts)?,
        body: read_json_body(body, limit).await?,
    };

    let outcome = chain.run(&mut data);
    if let Decision::Reject(failure) = decide(&outcome) {
        tracing::debug!(
            chain = chain.name,
            failures = failure.errors().len(),
            "Request rejected by validation"
        );
        return Err(CoreError::Validation(failure).into());
    }

    let normalized = serde_json::to_vec(&data.body)
        .map_err(|e| AppError::InternalError(format!("Failed to encode normalized body: {e}")))?;
    parts
        .headers
        .insert(CONTENT_LENGTH, HeaderValue::from(normalized.len()));
    parts.extensions.insert(data);

    Ok(Request::from_parts(parts, Body::from(normalized)))
}

async fn path_params(parts: &mut Parts) -> Map<String, Value> {
    // Routes without captures have nothing to contribute.
    match RawPathParams::from_request_parts(parts, &()).await {
        Ok(params) => params
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect(),
        Err(_) => Map::new(),
    }
}

fn query_params(parts: &Parts) -> AppResult<Map<String, Value>> {
    let Query(pairs) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map_err(|e| AppError::BadRequest(format!("Invalid query string: {e}")))?;
    Ok(pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect())
}

fn declared_length(parts: &Parts) -> Option<usize> {
    parts
        .headers
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Buffer and parse the body. An empty body reads as an empty object so
/// body rules report missing fields rather than a parse error. Anything
/// other than an object is refused, since body rules address named fields.
async fn read_json_body(body: Body, limit: usize) -> AppResult<Value> {
    let bytes = to_bytes(body, limit).await.map_err(|e| {
        if exceeded_length_limit(&e) {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(format!("Failed to read request body: {e}"))
        }
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    match serde_json::from_slice(&bytes) {
        Ok(body @ Value::Object(_)) => Ok(body),
        Ok(_) => Err(AppError::BadRequest(
            "Request body must be a JSON object".into(),
        )),
        Err(e) => Err(AppError::BadRequest(format!("Malformed JSON body: {e}"))),
    }
}

fn exceeded_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<LengthLimitError>() {
            return true;
        }
        source = current.source();
    }
    false
}

fn validated_data(parts: &Parts) -> AppResult<&RequestData> {
    parts.extensions.get::<RequestData>().ok_or_else(|| {
        AppError::InternalError("Route is missing its validation middleware".into())
    })
}

/// Deserialize one namespace, leaving out blank values so skipped optional
/// fields read as `None`.
fn from_namespace<T: DeserializeOwned>(values: &Map<String, Value>, what: &str) -> AppResult<T> {
    let present: Map<String, Value> = values
        .iter()
        .filter(|(_, value)| !is_absent(Some(value)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    serde_json::from_value(Value::Object(present))
        .map_err(|e| AppError::BadRequest(format!("Invalid {what}: {e}")))
}

/// Query parameters after validation and normalization.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let data = validated_data(parts)?;
        from_namespace(&data.query, "query parameters").map(ValidatedQuery)
    }
}

/// Path parameters after validation and normalization.
#[derive(Debug, Clone)]
pub struct ValidatedPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let data = validated_data(parts)?;
        from_namespace(&data.path, "path parameters").map(ValidatedPath)
    }
}

/// Body fields after validation and normalization.
///
/// Reads the normalized copy kept in the request extensions, so blank
/// optional fields deserialize as `None` and decoding errors keep the JSON
/// error envelope.
#[derive(Debug, Clone)]
pub struct ValidatedBody<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidatedBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let data = validated_data(parts)?;
        match &data.body {
            Value::Object(fields) => from_namespace(fields, "request body").map(ValidatedBody),
            _ => Err(AppError::BadRequest(
                "Request body must be a JSON object".into(),
            )),
        }
    }
}
