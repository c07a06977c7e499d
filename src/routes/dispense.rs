use crate::{
    dispenser::AddressDispenser,
    models::*,
    routes::daemon_error,
    SharedConfig, SharedDaemon,
};
use axum::{
    extract::{Extension, Form, FromRequest, Multipart, Query, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

const ADDRESS_FIELD: &str = "address";

impl IntoResponse for DispenseResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for DispenseInfoResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// First `address` pair wins when the field is repeated.
fn first_address(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == ADDRESS_FIELD)
        .map(|(_, value)| value)
}

/// Reads `address` from a JSON, multipart or urlencoded body. A body that
/// cannot be parsed counts as carrying no address.
async fn body_address(request: Request) -> Option<String> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("application/json") {
        let Json(input) = Json::<DispenseInput>::from_request(request, &()).await.ok()?;
        input.address
    } else if content_type.starts_with("multipart/form-data") {
        let mut multipart = Multipart::from_request(request, &()).await.ok()?;
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some(ADDRESS_FIELD) {
                return field.text().await.ok();
            }
        }
        None
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(request, &())
            .await
            .ok()?;
        first_address(pairs)
    } else {
        None
    }
}

/// A non-empty body field wins over the query string.
fn merge_input(query: Option<String>, body: Option<String>) -> DispenseInput {
    let address = match body {
        Some(body) if !body.is_empty() => Some(body),
        _ => query,
    };
    DispenseInput { address }
}

#[tracing::instrument(skip_all)]
pub async fn handler(
    Extension(daemon): Extension<SharedDaemon>,
    Extension(config): Extension<SharedConfig>,
    Query(query): Query<Vec<(String, String)>>,
    request: Request,
) -> Result<DispenseResponse, ApiError> {
    let input = merge_input(first_address(query), body_address(request).await);

    AddressDispenser::new(daemon, &config)
        .dispense(input)
        .await
        .map_err(daemon_error)
}

#[tracing::instrument(skip_all)]
pub async fn info_handler(Extension(config): Extension<SharedConfig>) -> DispenseInfoResponse {
    DispenseInfoResponse {
        amount: config.dispense_amount,
    }
}
