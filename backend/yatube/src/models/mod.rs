//! Data models for the Yatube web service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Group {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub text: String,
    /// Set once at creation; edits never touch it.
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub group_id: Option<i64>,
}

/// Read model for rendering a post in lists and on the detail page:
/// the post row joined with its author's username and its group, if any.
#[derive(Debug, Clone, FromRow)]
pub struct PostCard {
    pub id: i64,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: i64,
    pub author_username: String,
    pub group_id: Option<i64>,
    pub group_title: Option<String>,
    pub group_slug: Option<String>,
}

impl PostCard {
    pub fn has_group(&self) -> bool {
        self.group_id.is_some()
    }

    pub fn group_title_str(&self) -> &str {
        self.group_title.as_deref().unwrap_or("")
    }

    pub fn group_slug_str(&self) -> &str {
        self.group_slug.as_deref().unwrap_or("")
    }
}
