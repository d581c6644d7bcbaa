use crate::client::ApiClient;
use crate::core::errors::ApiError;
use crate::core::helpers::{require_email, require_non_empty};
use crate::models::models::{User, UserUpdate};
use crate::posts;
use crate::session::SessionStore;
use crate::users;
use crate::views::post_card::PostCard;

/// A user's profile page: the profile record, their posts, and the viewer's
/// relationship to them.
#[derive(Debug)]
pub struct ProfileView {
    pub user: User,
    pub cards: Vec<PostCard>,
    pub is_own: bool,
    pub is_following: bool,
    pub follower_count: usize,
    pub is_busy: bool,
}

impl ProfileView {
    pub async fn load(session: &SessionStore, username: &str) -> Result<Self, ApiError> {
        let viewer = session
            .current_user()
            .ok_or_else(|| ApiError::Validation("No active session".to_string()))?;
        let api = session.api();

        let user = users::by_username(api, username).await?;
        let posts = posts::by_user(api, user.id).await?;

        let viewer_id = viewer.id;
        let is_following = viewer.is_following(user.id);
        let follower_count = user.followers.len();
        let cards = posts
            .into_iter()
            .map(|post| PostCard::new(post, viewer_id))
            .collect();

        Ok(ProfileView {
            is_own: user.id == viewer_id,
            is_following,
            follower_count,
            user,
            cards,
            is_busy: false,
        })
    }

    /// Optimistic follow toggle with rollback. On success the session is
    /// refreshed so the viewer's relationship collections reconcile; a
    /// failed refresh is logged and does not undo the confirmed toggle.
    pub async fn toggle_follow(&mut self, session: &mut SessionStore) -> Result<(), ApiError> {
        if self.is_own {
            return Err(ApiError::Validation("Cannot follow yourself".to_string()));
        }

        let was_following = self.is_following;
        self.is_following = !was_following;
        if was_following {
            self.follower_count = self.follower_count.saturating_sub(1);
        } else {
            self.follower_count += 1;
        }

        self.is_busy = true;
        let api = session.api().clone();
        let result = if was_following {
            users::unfollow(&api, self.user.id).await
        } else {
            users::follow(&api, self.user.id).await
        };
        self.is_busy = false;

        match result {
            Ok(_) => {
                if let Err(err) = session.refresh().await {
                    tracing::warn!(error = %err, "session refresh after follow toggle failed");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(user_id = self.user.id, error = %err, "follow toggle failed, rolling back");
                self.is_following = was_following;
                if was_following {
                    self.follower_count += 1;
                } else {
                    self.follower_count = self.follower_count.saturating_sub(1);
                }
                Err(err)
            }
        }
    }
}

/// Profile edit form: field drafts, pre-flight validation, inline error,
/// and a submitting flag for double-click safety.
#[derive(Debug, Default)]
pub struct EditProfileForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub mobile: String,
    pub bio: String,
    pub gender: String,
    pub image: String,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl EditProfileForm {
    pub fn from_user(user: &User) -> Self {
        EditProfileForm {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            mobile: user.mobile.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            gender: user.gender.clone().unwrap_or_default(),
            image: user.image.clone().unwrap_or_default(),
            is_submitting: false,
            error: None,
        }
    }

    fn validate(&self) -> Result<(), ApiError> {
        require_non_empty(&self.name, "Name")?;
        require_non_empty(&self.username, "Username")?;
        require_email(&self.email)?;
        Ok(())
    }

    fn to_update(&self) -> UserUpdate {
        let optional = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
        };
        UserUpdate {
            name: Some(self.name.trim().to_string()),
            username: Some(self.username.trim().to_string()),
            email: Some(self.email.trim().to_string()),
            mobile: optional(&self.mobile),
            bio: optional(&self.bio),
            gender: optional(&self.gender),
            image: optional(&self.image),
        }
    }

    /// Save the edits and refresh the session so dependent views observe
    /// the updated record. The inline error mirrors whatever surfaced.
    pub async fn submit(&mut self, session: &mut SessionStore) -> Result<User, ApiError> {
        self.error = None;
        if let Err(err) = self.validate() {
            self.error = Some(err.to_string());
            return Err(err);
        }

        let user_id = session
            .current_user()
            .map(|u| u.id)
            .ok_or_else(|| ApiError::Validation("No active session".to_string()))?;

        self.is_submitting = true;
        let api = session.api().clone();
        let result = users::update(&api, user_id, &self.to_update()).await;
        self.is_submitting = false;

        match result {
            Ok(user) => {
                if let Err(err) = session.refresh().await {
                    tracing::warn!(error = %err, "session refresh after profile edit failed");
                }
                Ok(user)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
