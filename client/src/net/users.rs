//! User list endpoints.

use super::api::{ApiClient, ApiError};
use super::types::{Envelope, UserRecord};

/// `GET /users/userlist`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_user_list(api: &ApiClient) -> Result<Envelope<Vec<UserRecord>>, ApiError> {
    api.get(&api.config().user_list()).await
}

/// `GET /users/dashboarduserlist`.
///
/// # Errors
///
/// Returns an `ApiError` when the request does not complete.
pub async fn fetch_dashboard_user_list(api: &ApiClient) -> Result<Envelope<Vec<UserRecord>>, ApiError> {
    api.get(&api.config().dashboard_user_list()).await
}
