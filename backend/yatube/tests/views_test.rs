/// Integration tests for page content: ordering, filtering, context
mod common;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serial_test::serial;

    use crate::common::{fixtures, init_app};

    async fn get_body(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        uri: &str,
    ) -> String {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
        let bytes = test::read_body(resp).await;
        String::from_utf8(bytes.to_vec()).expect("non-UTF8 response body")
    }

    #[actix_web::test]
    #[serial]
    async fn index_lists_posts_newest_first() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "Petr").await;
        fixtures::create_test_post(&pool, user.id, "First post text", None).await;
        fixtures::create_test_post(&pool, user.id, "Second post text", None).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;
        let body = get_body(&app, "/").await;

        let newest = body.find("Second post text").expect("newest post missing");
        let oldest = body.find("First post text").expect("oldest post missing");
        assert!(
            newest < oldest,
            "the most recent post should be rendered first"
        );

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn group_page_shows_only_posts_of_that_group() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "Petr").await;
        let group = fixtures::create_test_group(&pool, "Test group", "test-slug").await;
        let group_2 = fixtures::create_test_group(&pool, "Test group 2", "test-slug-2").await;
        fixtures::create_test_post(&pool, user.id, "Post in group one", Some(group.id)).await;
        fixtures::create_test_post(&pool, user.id, "Post in group two", Some(group_2.id)).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;

        let body = get_body(&app, "/group/test-slug/").await;
        assert!(body.contains("Post in group one"));
        assert!(!body.contains("Post in group two"));

        let body_2 = get_body(&app, "/group/test-slug-2/").await;
        assert!(body_2.contains("Post in group two"));
        assert!(!body_2.contains("Post in group one"));

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn profile_page_shows_only_posts_of_that_author() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let petr = fixtures::create_test_user(&pool, "Petr").await;
        let other = fixtures::create_test_user(&pool, "Other").await;
        fixtures::create_test_post(&pool, petr.id, "Petr wrote this", None).await;
        fixtures::create_test_post(&pool, other.id, "Someone else wrote this", None).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;
        let body = get_body(&app, "/profile/Petr/").await;

        assert!(body.contains("Petr wrote this"));
        assert!(!body.contains("Someone else wrote this"));
        assert!(body.contains("1 post(s) published"));

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn post_detail_shows_text_author_and_group() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "Petr").await;
        let group = fixtures::create_test_group(&pool, "Test group", "test-slug").await;
        let post =
            fixtures::create_test_post(&pool, user.id, "Detailed post text", Some(group.id)).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;
        let body = get_body(&app, &format!("/posts/{}/", post.id)).await;

        assert!(body.contains("Detailed post text"));
        assert!(body.contains("Petr"));
        assert!(body.contains("Test group"));
        // Anonymous readers get no edit link.
        assert!(!body.contains(&format!("/posts/{}/edit/", post.id)));

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn author_sees_the_edit_link_on_their_post() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let config = fixtures::test_config();
        let user = fixtures::create_test_user(&pool, "Petr").await;
        let post = fixtures::create_test_post(&pool, user.id, "Editable post", None).await;

        let app = init_app(pool.clone(), config.clone()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}/", post.id))
            .cookie(fixtures::login_cookie(&config, &user))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = test::read_body(resp).await;
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains(&format!("/posts/{}/edit/", post.id)));

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn new_grouped_post_appears_first_on_all_its_pages() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "Petr").await;
        let group = fixtures::create_test_group(&pool, "Test group", "test-slug").await;
        let group_2 = fixtures::create_test_group(&pool, "Test group 2", "test-slug-2").await;
        fixtures::create_test_post(&pool, user.id, "Old post text", Some(group.id)).await;
        fixtures::create_test_post(&pool, user.id, "Fresh post text", Some(group_2.id)).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;

        for uri in ["/", "/group/test-slug-2/", "/profile/Petr/"] {
            let body = get_body(&app, uri).await;
            let first_card = body.find("<article>").expect("no post cards rendered");
            let fresh = body.find("Fresh post text").expect("fresh post missing");
            assert!(
                fresh > first_card,
                "GET {}: fresh post should be inside a card",
                uri
            );
            if let Some(old) = body.find("Old post text") {
                assert!(fresh < old, "GET {}: fresh post should come first", uri);
            }
        }

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn edit_page_is_prefilled_with_the_post() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;

        let config = fixtures::test_config();
        let user = fixtures::create_test_user(&pool, "Petr").await;
        let group = fixtures::create_test_group(&pool, "Test group", "test-slug").await;
        let post =
            fixtures::create_test_post(&pool, user.id, "Prefilled text", Some(group.id)).await;

        let app = init_app(pool.clone(), config.clone()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}/edit/", post.id))
            .cookie(fixtures::login_cookie(&config, &user))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = test::read_body(resp).await;
        let body = String::from_utf8(bytes.to_vec()).unwrap();

        assert!(body.contains("Prefilled text"));
        assert!(body.contains(&format!(
            "<option value=\"{}\" selected>Test group</option>",
            group.id
        )));

        fixtures::cleanup_test_data(&pool).await;
    }
}
