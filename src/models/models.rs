use chrono::NaiveDateTime;
use serde::{Serialize, Deserialize};

/// A user record as the backend serializes it. Relationship collections on
/// nested users are pruned server-side, so every collection defaults to
/// empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub following: Vec<User>,
    #[serde(default)]
    pub followers: Vec<User>,
    #[serde(default)]
    pub stories: Vec<Story>,
    // The backend names this collection "savePost".
    #[serde(default, rename = "savePost")]
    pub saved_posts: Vec<Post>,
}

impl User {
    pub fn following_ids(&self) -> Vec<i64> {
        self.following.iter().map(|u| u.id).collect()
    }

    pub fn is_following(&self, user_id: i64) -> bool {
        self.following.iter().any(|u| u.id == user_id)
    }

    pub fn has_saved(&self, post_id: i64) -> bool {
        self.saved_posts.iter().any(|p| p.id == post_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub caption: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub created_at: NaiveDateTime,
    pub user: User,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub liked_by_users: Vec<User>,
}

impl Post {
    /// Like state is derived from membership, never stored as a flag.
    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.liked_by_users.iter().any(|u| u.id == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.liked_by_users.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub user: User,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub timestamp: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub user: User,
    pub content: String,
    #[serde(default)]
    pub liked_by_users: Vec<User>,
    pub created_at: NaiveDateTime,
}

impl Comment {
    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.liked_by_users.iter().any(|u| u.id == user_id)
    }
}

// === Request payloads ===

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub caption: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStory {
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub content: String,
}

/// Message envelope returned by mutating endpoints that carry no entity.
/// Defaults cover empty 2xx bodies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
