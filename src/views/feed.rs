use crate::client::ApiClient;
use crate::models::models::User;
use crate::posts;
use crate::views::post_card::PostCard;

/// The home feed: posts from followed users, newest first.
///
/// Failures land in `error` for a full-panel error state; calling `load`
/// again is the "try again" action.
#[derive(Debug, Default)]
pub struct FeedView {
    pub cards: Vec<PostCard>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FeedView {
    pub fn new() -> Self {
        FeedView::default()
    }

    pub async fn load(&mut self, api: &ApiClient, viewer: &User) {
        self.is_loading = true;
        self.error = None;

        let following = viewer.following_ids();
        match posts::by_users(api, &following).await {
            Ok(mut feed) => {
                feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                self.cards = feed
                    .into_iter()
                    .map(|post| PostCard::new(post, viewer.id))
                    .collect();
            }
            Err(err) => {
                tracing::warn!(error = %err, "feed load failed");
                self.error = Some(err.to_string());
            }
        }

        self.is_loading = false;
    }
}
