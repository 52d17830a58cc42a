//! API route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa_axum::routes!`, so the served
//! OpenAPI document always matches the routes that exist. Handlers sharing a path
//! are registered together.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::api::ErrorDto,
    server::{
        config::Config,
        controller::{
            auth::{self, AUTH_TAG},
            friendship::{self, FRIENDSHIP_TAG},
            leaderboard::{self, LEADERBOARD_TAG},
            movie::{self, MOVIE_TAG},
            reel_progress::{self, REEL_PROGRESS_TAG},
            user::{self, USER_TAG},
        },
        startup::cors_layer,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "The Century Screening Room API",
        description = "Track progress through the Reel Canon, rate films and compare with friends."
    ),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration and login"),
        (name = USER_TAG, description = "User profiles"),
        (name = MOVIE_TAG, description = "Reel Canon and user submitted movies"),
        (name = FRIENDSHIP_TAG, description = "Friend requests and friendships"),
        (name = REEL_PROGRESS_TAG, description = "Watched movies and ratings"),
        (name = LEADERBOARD_TAG, description = "Ranking by reel progress"),
    )
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected routes.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router(config: &Config) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(user::get_all_users))
        .routes(routes!(
            user::get_my_profile,
            user::update_my_profile,
            user::delete_my_profile
        ))
        .routes(routes!(user::update_my_password))
        .routes(routes!(user::get_user, user::update_user, user::delete_user))
        .routes(routes!(movie::get_reel_canon))
        .routes(routes!(movie::search_movies))
        .routes(routes!(movie::create_movie))
        .routes(routes!(
            movie::get_movie,
            movie::update_movie_poster,
            movie::delete_movie
        ))
        .routes(routes!(
            friendship::get_all_friendships,
            friendship::accept_friendship,
            friendship::remove_friendship
        ))
        .routes(routes!(friendship::get_my_friendships))
        .routes(routes!(
            friendship::get_user_friendships,
            friendship::create_friendship
        ))
        .routes(routes!(
            friendship::accept_my_friendship,
            friendship::remove_my_friendship
        ))
        .routes(routes!(
            reel_progress::get_reel_progress,
            reel_progress::add_reel_progress
        ))
        .routes(routes!(
            reel_progress::update_reel_progress,
            reel_progress::delete_reel_progress
        ))
        .routes(routes!(reel_progress::admin_get_all_reel_progress))
        .routes(routes!(reel_progress::admin_delete_reel_progress))
        .routes(routes!(leaderboard::get_leaderboard))
        .split_for_parts();

    router
        .route("/api/{*path}", any(api_not_found))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("default-src 'self'"),
        ))
        .layer(cors_layer(config))
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto::new("No route with that path found!")),
    )
}
