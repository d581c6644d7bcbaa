use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::helpers::require_non_empty;
use crate::models::models::{NewStory, Story};

pub async fn create(client: &ApiClient, story: &NewStory) -> Result<Story, ApiError> {
    require_non_empty(&story.image, "Image URL")?;

    client.post("/api/story/create", story).await
}

pub async fn by_user(client: &ApiClient, user_id: i64) -> Result<Vec<Story>, ApiError> {
    client.get(&format!("/api/story/{}", user_id)).await
}
