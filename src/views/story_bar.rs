use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::models::models::{NewStory, Story, User};
use crate::stories;

/// One followed user's stories, displayed as a single bubble.
#[derive(Debug)]
pub struct StoryGroup {
    pub user: User,
    pub stories: Vec<Story>,
}

/// The story strip above the feed: stories of followed users, grouped per
/// user. Users whose story fetch fails are skipped rather than failing the
/// whole strip.
#[derive(Debug, Default)]
pub struct StoryBar {
    pub groups: Vec<StoryGroup>,
    pub is_loading: bool,
}

impl StoryBar {
    pub fn new() -> Self {
        StoryBar::default()
    }

    pub async fn load(&mut self, api: &ApiClient, viewer: &User) {
        self.is_loading = true;
        let mut groups = Vec::new();

        for user_id in viewer.following_ids() {
            match stories::by_user(api, user_id).await {
                Ok(user_stories) => {
                    if let Some(first) = user_stories.first() {
                        groups.push(StoryGroup {
                            user: first.user.clone(),
                            stories: user_stories,
                        });
                    }
                }
                Err(err) => {
                    tracing::debug!(user_id, error = %err, "skipping stories for user");
                }
            }
        }

        self.groups = groups;
        self.is_loading = false;
    }
}

/// New-story form: image URL draft, inline error, busy flag.
#[derive(Debug, Default)]
pub struct StoryComposer {
    pub image: String,
    pub caption: String,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl StoryComposer {
    pub async fn submit(&mut self, api: &ApiClient) -> Result<Story, ApiError> {
        self.error = None;
        let caption = self.caption.trim();
        let story = NewStory {
            image: self.image.trim().to_string(),
            caption: if caption.is_empty() { None } else { Some(caption.to_string()) },
        };

        self.is_submitting = true;
        let result = stories::create(api, &story).await;
        self.is_submitting = false;

        match result {
            Ok(created) => Ok(created),
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
