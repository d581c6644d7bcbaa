use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::query_params::{build_query, encode_segment};
use crate::models::models::{MessageResponse, User, UserUpdate};

/// The user identified by the bearer token.
pub async fn current(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/api/users/req").await
}

pub async fn by_id(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/api/users/id/{}", id)).await
}

pub async fn by_username(client: &ApiClient, username: &str) -> Result<User, ApiError> {
    client
        .get(&format!("/api/users/username/{}", encode_segment(username)))
        .await
}

/// Username/name search. A blank query short-circuits to no results.
pub async fn search(client: &ApiClient, query: &str) -> Result<Vec<User>, ApiError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }
    client
        .get(&format!("/api/users/search{}", build_query(&[("q", query)])))
        .await
}

/// Toggle-safe at the protocol level; the backend treats a repeated follow
/// as a no-op.
pub async fn follow(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.put(&format!("/api/users/follow/{}", id)).await
}

pub async fn unfollow(client: &ApiClient, id: i64) -> Result<MessageResponse, ApiError> {
    client.put(&format!("/api/users/unfollow/{}", id)).await
}

/// Partial profile update; returns the updated record.
pub async fn update(client: &ApiClient, id: i64, fields: &UserUpdate) -> Result<User, ApiError> {
    client.put_json(&format!("/api/users/update/{}", id), fields).await
}
