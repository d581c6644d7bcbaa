use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::helpers::require_non_empty;
use crate::models::models::{Comment, NewComment};

pub async fn create(client: &ApiClient, post_id: i64, comment: &NewComment) -> Result<Comment, ApiError> {
    require_non_empty(&comment.content, "Comment")?;

    client
        .post(&format!("/api/comments/create/{}", post_id), comment)
        .await
}

pub async fn by_id(client: &ApiClient, comment_id: i64) -> Result<Comment, ApiError> {
    client.get(&format!("/api/comments/{}", comment_id)).await
}

pub async fn like(client: &ApiClient, comment_id: i64) -> Result<Comment, ApiError> {
    client.put(&format!("/api/comments/like/{}", comment_id)).await
}

pub async fn unlike(client: &ApiClient, comment_id: i64) -> Result<Comment, ApiError> {
    client.put(&format!("/api/comments/unlike/{}", comment_id)).await
}
