/// Integration tests for listing pagination: 13 posts across two pages
mod common;

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serial_test::serial;

    use crate::common::{fixtures, init_app};

    const LISTING_URIS: [&str; 3] = ["/", "/group/test-slug/", "/profile/Petr/"];

    async fn setup(pool: &sqlx::PgPool) {
        let user = fixtures::create_test_user(pool, "Petr").await;
        let group = fixtures::create_test_group(pool, "Test group", "test-slug").await;
        for n in 0..13 {
            fixtures::create_test_post(pool, user.id, &format!("Test post {n}"), Some(group.id))
                .await;
        }
    }

    async fn card_count(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        uri: &str,
    ) -> usize {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
        let bytes = test::read_body(resp).await;
        let body = String::from_utf8(bytes.to_vec()).expect("non-UTF8 response body");
        body.matches("<article>").count()
    }

    #[actix_web::test]
    #[serial]
    async fn first_page_contains_ten_posts() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        setup(&pool).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;

        for uri in LISTING_URIS {
            assert_eq!(card_count(&app, uri).await, 10, "GET {}", uri);
        }

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn second_page_contains_the_remaining_three() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        setup(&pool).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;

        for uri in LISTING_URIS {
            let uri = format!("{uri}?page=2");
            assert_eq!(card_count(&app, &uri).await, 3, "GET {}", uri);
        }

        fixtures::cleanup_test_data(&pool).await;
    }

    #[actix_web::test]
    #[serial]
    async fn out_of_range_pages_clamp_instead_of_failing() {
        let pool = fixtures::create_test_pool().await;
        fixtures::cleanup_test_data(&pool).await;
        setup(&pool).await;

        let app = init_app(pool.clone(), fixtures::test_config()).await;

        // Past the end lands on the last page, garbage lands on the first.
        assert_eq!(card_count(&app, "/?page=99").await, 3);
        assert_eq!(card_count(&app, "/?page=abc").await, 10);

        fixtures::cleanup_test_data(&pool).await;
    }
}
