use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::helpers::require_non_empty;
use crate::core::query_params::csv_ids;
use crate::models::models::{MessageResponse, NewPost, Post};

pub async fn create(client: &ApiClient, post: &NewPost) -> Result<Post, ApiError> {
    require_non_empty(&post.image, "Image URL")?;

    client.post("/posts/create", post).await
}

pub async fn by_user(client: &ApiClient, user_id: i64) -> Result<Vec<Post>, ApiError> {
    client.get(&format!("/posts/all/{}", user_id)).await
}

/// Posts from a set of users, for the feed. Following nobody means an empty
/// feed without a round trip.
pub async fn by_users(client: &ApiClient, user_ids: &[i64]) -> Result<Vec<Post>, ApiError> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }
    client
        .get(&format!("/posts/following/{}", csv_ids(user_ids)))
        .await
}

pub async fn by_id(client: &ApiClient, post_id: i64) -> Result<Post, ApiError> {
    client.get(&format!("/posts/{}", post_id)).await
}

/// Like endpoints return the updated post so views can reconcile counts.
pub async fn like(client: &ApiClient, post_id: i64) -> Result<Post, ApiError> {
    client.put(&format!("/posts/like/{}", post_id)).await
}

pub async fn unlike(client: &ApiClient, post_id: i64) -> Result<Post, ApiError> {
    client.put(&format!("/posts/unlike/{}", post_id)).await
}

pub async fn save(client: &ApiClient, post_id: i64) -> Result<MessageResponse, ApiError> {
    client.put(&format!("/posts/save/{}", post_id)).await
}

pub async fn unsave(client: &ApiClient, post_id: i64) -> Result<MessageResponse, ApiError> {
    client.put(&format!("/posts/unsave/{}", post_id)).await
}

pub async fn delete(client: &ApiClient, post_id: i64) -> Result<MessageResponse, ApiError> {
    client.delete(&format!("/posts/delete/{}", post_id)).await
}
