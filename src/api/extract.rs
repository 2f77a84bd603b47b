//! Request body extraction for the contact endpoint.

use axum::{
    Form,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};

use crate::api::dto::contact::ContactRequest;
use crate::error::AppError;

/// Contact payload read from a JSON body, falling back to form fields.
///
/// # Parsing Order
///
/// 1. The body is parsed as JSON; a non-empty object is used as-is
/// 2. Otherwise the body is parsed as `application/x-www-form-urlencoded`
/// 3. If neither yields anything, an empty request is produced and the
///    required-field check reports every field as missing
#[derive(Debug)]
pub struct ContactPayload(pub ContactRequest);

impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();

        let bytes = Bytes::from_request(Request::from_parts(parts.clone(), body), state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        if let Some(request) = ContactRequest::from_json_slice(&bytes) {
            return Ok(Self(request));
        }

        let request = Request::from_parts(parts, Body::from(bytes));
        match Form::<ContactRequest>::from_request(request, state).await {
            Ok(Form(request)) => Ok(Self(request)),
            Err(rejection) => {
                tracing::debug!(%rejection, "Contact body is neither JSON nor form data");
                Ok(Self(ContactRequest::default()))
            }
        }
    }
}
