use crate::client::ApiClient;
use crate::comments;
use crate::core::errors::ApiError;
use crate::models::models::{Comment, NewComment, Post};
use crate::posts;

/// Per-post view state: derived like state, counters, and the comment
/// thread. Holds its own snapshot of the post; nothing is reconciled with
/// the server until the surrounding view refetches.
#[derive(Debug)]
pub struct PostCard {
    pub post: Post,
    pub is_liked: bool,
    pub likes_count: usize,
    pub comments: Vec<Comment>,
    pub is_submitting: bool,
    viewer_id: i64,
}

impl PostCard {
    pub fn new(post: Post, viewer_id: i64) -> Self {
        let is_liked = post.is_liked_by(viewer_id);
        let likes_count = post.like_count();
        let comments = post.comments.clone();
        PostCard {
            post,
            is_liked,
            likes_count,
            comments,
            is_submitting: false,
            viewer_id,
        }
    }

    pub fn viewer_id(&self) -> i64 {
        self.viewer_id
    }

    /// Optimistic like toggle: flip the local state first, then issue the
    /// call. A failed call rolls the flip back so the card never shows
    /// phantom likes. The exclusive borrow serializes rapid toggles, so
    /// responses cannot arrive out of order for one card.
    pub async fn toggle_like(&mut self, api: &ApiClient) -> Result<(), ApiError> {
        let was_liked = self.is_liked;
        self.is_liked = !was_liked;
        if was_liked {
            self.likes_count = self.likes_count.saturating_sub(1);
        } else {
            self.likes_count += 1;
        }

        let result = if was_liked {
            posts::unlike(api, self.post.id).await
        } else {
            posts::like(api, self.post.id).await
        };

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::warn!(post_id = self.post.id, error = %err, "like toggle failed, rolling back");
                self.is_liked = was_liked;
                if was_liked {
                    self.likes_count += 1;
                } else {
                    self.likes_count = self.likes_count.saturating_sub(1);
                }
                Err(err)
            }
        }
    }

    /// Submit a comment; the confirmed comment is appended locally once the
    /// server accepts it. The busy flag covers the whole round trip so a
    /// submit control stays disabled against double submission.
    pub async fn submit_comment(&mut self, api: &ApiClient, draft: &str) -> Result<(), ApiError> {
        self.is_submitting = true;
        let result = comments::create(
            api,
            self.post.id,
            &NewComment { content: draft.trim().to_string() },
        )
        .await;
        self.is_submitting = false;

        let comment = result?;
        self.comments.push(comment);
        Ok(())
    }

    /// Optimistic like toggle on one of this post's comments, same rollback
    /// discipline as the post-level toggle.
    pub async fn toggle_comment_like(
        &mut self,
        api: &ApiClient,
        comment_id: i64,
    ) -> Result<(), ApiError> {
        let viewer_id = self.viewer_id;
        let Some(comment) = self.comments.iter_mut().find(|c| c.id == comment_id) else {
            return Err(ApiError::Validation("Unknown comment".to_string()));
        };

        let was_liked = comment.is_liked_by(viewer_id);
        let result = if was_liked {
            comments::unlike(api, comment_id).await
        } else {
            comments::like(api, comment_id).await
        };

        match result {
            Ok(updated) => {
                // Comment like endpoints echo the updated record; adopt it.
                *comment = updated;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(comment_id, error = %err, "comment like toggle failed");
                Err(err)
            }
        }
    }
}
