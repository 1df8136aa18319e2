//! Contact request endpoints.

use serde::Serialize;

use super::api::{ApiClient, ApiError, Method};
use super::types::{ContactRequest, ContactStatus, Envelope};

#[derive(Debug, Serialize)]
struct StatusUpdate {
    status: ContactStatus,
}

/// `GET /contact`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_contacts(api: &ApiClient) -> Result<Envelope<Vec<ContactRequest>>, ApiError> {
    api.get(&api.config().contact_list()).await
}

/// `PATCH /contact/:id/status` with `{status}`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn update_contact_status(
    api: &ApiClient,
    contact_id: &str,
    status: ContactStatus,
) -> Result<Envelope<serde_json::Value>, ApiError> {
    let body = StatusUpdate { status };
    api.send(Method::Patch, &api.config().contact_status(contact_id), Some(&body))
        .await
}
