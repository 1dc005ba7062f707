//! Askama page templates
//!
//! One struct per page; `current_username` feeds the navigation in
//! `base.html` and is therefore part of every page.

use askama::Template;

use crate::forms::GroupOption;
use crate::models::{Group, PostCard};
use crate::pagination::Page;

#[derive(Template)]
#[template(path = "posts/index.html")]
pub struct IndexTemplate {
    pub current_username: Option<String>,
    pub page: Page<PostCard>,
}

#[derive(Template)]
#[template(path = "posts/group_list.html")]
pub struct GroupListTemplate {
    pub current_username: Option<String>,
    pub group: Group,
    pub page: Page<PostCard>,
}

#[derive(Template)]
#[template(path = "posts/profile.html")]
pub struct ProfileTemplate {
    pub current_username: Option<String>,
    pub author: String,
    pub page: Page<PostCard>,
}

#[derive(Template)]
#[template(path = "posts/post_detail.html")]
pub struct PostDetailTemplate {
    pub current_username: Option<String>,
    pub post: PostCard,
    pub author_post_count: i64,
    pub can_edit: bool,
}

/// Shared by the create and edit views.
#[derive(Template)]
#[template(path = "posts/create_post.html")]
pub struct PostFormTemplate {
    pub current_username: Option<String>,
    pub is_edit: bool,
    pub text: String,
    pub groups: Vec<GroupOption>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "users/login.html")]
pub struct LoginTemplate {
    pub current_username: Option<String>,
    pub next: String,
    pub username: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "users/signup.html")]
pub struct SignupTemplate {
    pub current_username: Option<String>,
    pub username: String,
    pub email: String,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub current_username: Option<String>,
}
