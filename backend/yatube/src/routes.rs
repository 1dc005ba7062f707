//! Route configuration
//!
//! Centralized route setup; URLs keep their trailing slashes.

use actix_web::{error::PathError, web, HttpRequest};

use crate::error::AppError;
use crate::handlers;

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health::health_summary))
        .service(web::resource("/").route(web::get().to(handlers::posts::index)))
        .service(
            web::resource("/group/{slug}/").route(web::get().to(handlers::posts::group_list)),
        )
        .service(
            web::resource("/profile/{username}/").route(web::get().to(handlers::posts::profile)),
        )
        .service(
            web::resource("/create/")
                .route(web::get().to(handlers::posts::post_create_page))
                .route(web::post().to(handlers::posts::post_create)),
        )
        .service(
            web::resource("/posts/{post_id}/").route(web::get().to(handlers::posts::post_detail)),
        )
        .service(
            web::resource("/posts/{post_id}/edit/")
                .route(web::get().to(handlers::posts::post_edit_page))
                .route(web::post().to(handlers::posts::post_edit)),
        )
        .service(
            web::scope("/auth")
                .service(
                    web::resource("/login/")
                        .route(web::get().to(handlers::auth::login_page))
                        .route(web::post().to(handlers::auth::login)),
                )
                .service(
                    web::resource("/signup/")
                        .route(web::get().to(handlers::auth::signup_page))
                        .route(web::post().to(handlers::auth::signup)),
                )
                .service(web::resource("/logout/").route(web::get().to(handlers::auth::logout))),
        );
}

/// A post id that does not parse as an integer is a missing page, not a bad
/// request: the router of the original site would simply never match it.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|_: PathError, _: &HttpRequest| AppError::NotFound("page".into()).into())
}
