//! Shared test harness: application builder and database fixtures.

pub mod fixtures;

use actix_web::{test, web, App};
use sqlx::PgPool;
use yatube::{handlers, routes, Config};

/// Build the full application the way `main.rs` does, on top of a test pool.
pub async fn init_app(
    pool: PgPool,
    config: Config,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .app_data(web::Data::new(pool))
            .app_data(routes::path_config())
            .configure(routes::configure_routes)
            .default_service(web::route().to(handlers::not_found)),
    )
    .await
}
