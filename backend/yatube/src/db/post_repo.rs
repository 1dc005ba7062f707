use crate::models::{Post, PostCard};
use sqlx::{PgPool, Row};

/// Columns selected for the `PostCard` read model.
const CARD_SELECT: &str = r#"
    SELECT p.id, p.text, p.pub_date, p.author_id, u.username AS author_username,
           p.group_id, g.title AS group_title, g.slug AS group_slug
    FROM posts p
    JOIN users u ON u.id = p.author_id
    LEFT JOIN "groups" g ON g.id = p.group_id
"#;

/// Create a new post. `pub_date` is assigned by the database at insert time.
pub async fn create_post(
    pool: &PgPool,
    author_id: i64,
    text: &str,
    group_id: Option<i64>,
) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (text, author_id, group_id)
        VALUES ($1, $2, $3)
        RETURNING id, text, pub_date, author_id, group_id
        "#,
    )
    .bind(text)
    .bind(author_id)
    .bind(group_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, text, pub_date, author_id, group_id
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Find a post by ID with author and group data joined in
pub async fn find_card_by_id(pool: &PgPool, post_id: i64) -> Result<Option<PostCard>, sqlx::Error> {
    let card = sqlx::query_as::<_, PostCard>(&format!("{CARD_SELECT} WHERE p.id = $1"))
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(card)
}

/// List all posts, newest first
pub async fn list_cards(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostCard>, sqlx::Error> {
    let cards = sqlx::query_as::<_, PostCard>(&format!(
        "{CARD_SELECT} ORDER BY p.pub_date DESC, p.id DESC LIMIT $1 OFFSET $2"
    ))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// List posts belonging to a group, newest first
pub async fn list_cards_by_group(
    pool: &PgPool,
    group_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostCard>, sqlx::Error> {
    let cards = sqlx::query_as::<_, PostCard>(&format!(
        "{CARD_SELECT} WHERE p.group_id = $1 ORDER BY p.pub_date DESC, p.id DESC LIMIT $2 OFFSET $3"
    ))
    .bind(group_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// List posts written by an author, newest first
pub async fn list_cards_by_author(
    pool: &PgPool,
    author_id: i64,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostCard>, sqlx::Error> {
    let cards = sqlx::query_as::<_, PostCard>(&format!(
        "{CARD_SELECT} WHERE p.author_id = $1 ORDER BY p.pub_date DESC, p.id DESC LIMIT $2 OFFSET $3"
    ))
    .bind(author_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(cards)
}

/// Count all posts
pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts")
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count posts in a group
pub async fn count_posts_by_group(pool: &PgPool, group_id: i64) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE group_id = $1")
        .bind(group_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Count posts written by an author
pub async fn count_posts_by_author(pool: &PgPool, author_id: i64) -> Result<i64, sqlx::Error> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM posts WHERE author_id = $1")
        .bind(author_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Update a post's text and group. The author and `pub_date` are never
/// touched by an edit.
pub async fn update_post(
    pool: &PgPool,
    post_id: i64,
    text: &str,
    group_id: Option<i64>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE posts
        SET text = $1, group_id = $2
        WHERE id = $3
        "#,
    )
    .bind(text)
    .bind(group_id)
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a post
pub async fn delete_post(pool: &PgPool, post_id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(())
}
