//! HTTP handlers and route configuration.

mod auth;
mod group_blocks;
mod health;
mod likes;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Post routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::get_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{post_id}", web::put().to(posts::update_post))
                    .route("/{post_id}", web::delete().to(posts::delete_post))
                    .route("/{post_id}/likes", web::get().to(likes::get_post_likes)),
            )
            // Like routes
            .service(
                web::scope("/likes")
                    .route("", web::post().to(likes::create_like))
                    .route("/{like_id}", web::delete().to(likes::delete_like)),
            )
            // Group block routes
            .service(
                web::scope("/group-blocks")
                    .route("", web::post().to(group_blocks::create_group_block))
                    .route(
                        "/{block_id}",
                        web::delete().to(group_blocks::delete_group_block),
                    ),
            )
            .service(web::scope("/groups").route(
                "/{group_id}/blocks",
                web::get().to(group_blocks::get_group_blocks),
            )),
    );
}
