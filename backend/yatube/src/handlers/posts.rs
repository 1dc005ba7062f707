/// Post views: listings, detail, create and edit
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use validator::Validate;

use super::{redirect, render};
use crate::db::{group_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::forms::{self, PostForm};
use crate::pagination::{Page, PageQuery, Paginator, PAGE_SIZE};
use crate::security::{CurrentUser, MaybeUser};
use crate::templates::{
    GroupListTemplate, IndexTemplate, PostDetailTemplate, PostFormTemplate, ProfileTemplate,
};

/// `GET /` — paginated index of all posts
pub async fn index(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
    user: MaybeUser,
) -> Result<HttpResponse> {
    let total = post_repo::count_posts(&pool).await?;
    let paginator = Paginator::new(total, PAGE_SIZE);
    let number = paginator.get_page(query.page.as_deref());
    let items = post_repo::list_cards(&pool, paginator.limit(), paginator.offset(number)).await?;

    render(&IndexTemplate {
        current_username: user.username(),
        page: Page {
            items,
            number,
            num_pages: paginator.num_pages(),
            total,
        },
    })
}

/// `GET /group/{slug}/` — paginated posts of one group
pub async fn group_list(
    pool: web::Data<PgPool>,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
    user: MaybeUser,
) -> Result<HttpResponse> {
    let group = group_repo::find_group_by_slug(&pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("group {}", slug)))?;

    let total = post_repo::count_posts_by_group(&pool, group.id).await?;
    let paginator = Paginator::new(total, PAGE_SIZE);
    let number = paginator.get_page(query.page.as_deref());
    let items = post_repo::list_cards_by_group(
        &pool,
        group.id,
        paginator.limit(),
        paginator.offset(number),
    )
    .await?;

    render(&GroupListTemplate {
        current_username: user.username(),
        group,
        page: Page {
            items,
            number,
            num_pages: paginator.num_pages(),
            total,
        },
    })
}

/// `GET /profile/{username}/` — paginated posts of one author
pub async fn profile(
    pool: web::Data<PgPool>,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
    user: MaybeUser,
) -> Result<HttpResponse> {
    let author = user_repo::find_user_by_username(&pool, &username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {}", username)))?;

    let total = post_repo::count_posts_by_author(&pool, author.id).await?;
    let paginator = Paginator::new(total, PAGE_SIZE);
    let number = paginator.get_page(query.page.as_deref());
    let items = post_repo::list_cards_by_author(
        &pool,
        author.id,
        paginator.limit(),
        paginator.offset(number),
    )
    .await?;

    render(&ProfileTemplate {
        current_username: user.username(),
        author: author.username,
        page: Page {
            items,
            number,
            num_pages: paginator.num_pages(),
            total,
        },
    })
}

/// `GET /posts/{post_id}/` — single post detail
pub async fn post_detail(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    user: MaybeUser,
) -> Result<HttpResponse> {
    let post = post_repo::find_card_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;

    let author_post_count = post_repo::count_posts_by_author(&pool, post.author_id).await?;
    let can_edit = user.id() == Some(post.author_id);

    render(&PostDetailTemplate {
        current_username: user.username(),
        post,
        author_post_count,
        can_edit,
    })
}

/// `GET /create/` — post creation form
pub async fn post_create_page(pool: web::Data<PgPool>, user: CurrentUser) -> Result<HttpResponse> {
    let groups = group_repo::list_groups(&pool).await?;

    render(&PostFormTemplate {
        current_username: Some(user.0.username),
        is_edit: false,
        text: String::new(),
        groups: forms::group_options(&groups, None),
        errors: Vec::new(),
    })
}

/// `POST /create/` — create a post, redirect to the author's profile
pub async fn post_create(
    pool: web::Data<PgPool>,
    user: CurrentUser,
    form: web::Form<PostForm>,
) -> Result<HttpResponse> {
    let (group_id, errors) = clean_post_form(&pool, &form).await?;

    if !errors.is_empty() {
        let groups = group_repo::list_groups(&pool).await?;
        return render(&PostFormTemplate {
            current_username: Some(user.0.username),
            is_edit: false,
            text: form.text.clone(),
            groups: forms::group_options(&groups, group_id),
            errors,
        });
    }

    post_repo::create_post(&pool, user.0.id, form.text.trim(), group_id).await?;

    Ok(redirect(&format!("/profile/{}/", user.0.username)))
}

/// `GET /posts/{post_id}/edit/` — edit form, author only
pub async fn post_edit_page(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    user: CurrentUser,
) -> Result<HttpResponse> {
    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;

    if post.author_id != user.0.id {
        return Ok(redirect(&format!("/posts/{}/", post.id)));
    }

    let groups = group_repo::list_groups(&pool).await?;

    render(&PostFormTemplate {
        current_username: Some(user.0.username),
        is_edit: true,
        text: post.text,
        groups: forms::group_options(&groups, post.group_id),
        errors: Vec::new(),
    })
}

/// `POST /posts/{post_id}/edit/` — apply the edit, redirect to the detail
/// page. The author and publication date are never changed.
pub async fn post_edit(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    user: CurrentUser,
    form: web::Form<PostForm>,
) -> Result<HttpResponse> {
    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", post_id)))?;

    if post.author_id != user.0.id {
        return Ok(redirect(&format!("/posts/{}/", post.id)));
    }

    let (group_id, errors) = clean_post_form(&pool, &form).await?;

    if !errors.is_empty() {
        let groups = group_repo::list_groups(&pool).await?;
        return render(&PostFormTemplate {
            current_username: Some(user.0.username),
            is_edit: true,
            text: form.text.clone(),
            groups: forms::group_options(&groups, group_id),
            errors,
        });
    }

    post_repo::update_post(&pool, post.id, form.text.trim(), group_id).await?;

    Ok(redirect(&format!("/posts/{}/", post.id)))
}

/// Validate the post form, resolving the group selection against the
/// database. Returns the resolved group id along with any error messages.
async fn clean_post_form(pool: &PgPool, form: &PostForm) -> Result<(Option<i64>, Vec<String>)> {
    let mut errors = forms::error_messages(form.validate());

    let group_id = match form.group_id() {
        Ok(gid) => gid,
        Err(msg) => {
            errors.push(msg);
            None
        }
    };

    if let Some(gid) = group_id {
        if group_repo::find_group_by_id(pool, gid).await?.is_none() {
            errors.push("Select a valid group.".to_string());
        }
    }

    Ok((group_id, errors))
}
