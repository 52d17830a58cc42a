use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        movie::{CreateMovieDto, MovieDto, UpdatePosterDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::AppJson,
        },
        model::movie::CreateMovieParam,
        service::movie::MovieService,
        state::AppState,
    },
};

/// Tag for grouping movie endpoints in OpenAPI documentation
pub static MOVIE_TAG: &str = "movie";

#[derive(Deserialize, IntoParams)]
pub struct SearchParams {
    /// Exact title to match
    pub title: Option<String>,
}

/// Get the Reel Canon.
///
/// Public; lists every movie in the curated canon.
#[utoipa::path(
    get,
    path = "/api/movies/reel-canon",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "Reel Canon movies", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reel_canon(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = MovieService::new(&state.db).reel_canon().await?;
    let movies_dto: Vec<MovieDto> = movies.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(movies_dto)))
}

/// Search movies by exact title.
///
/// # Returns
/// - `200 OK` - Matching movies, possibly none
/// - `400 Bad Request` - No title given
#[utoipa::path(
    get,
    path = "/api/movies/search",
    tag = MOVIE_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching movies", body = Vec<MovieDto>),
        (status = 400, description = "Title search parameter required", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn search_movies(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movies = MovieService::new(&state.db)
        .search(params.title.as_deref())
        .await?;
    let movies_dto: Vec<MovieDto> = movies.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(movies_dto)))
}

#[utoipa::path(
    get,
    path = "/api/movies/{imdb_id}",
    tag = MOVIE_TAG,
    params(
        ("imdb_id" = String, Path, description = "IMDb id, e.g. tt0043014")
    ),
    responses(
        (status = 200, description = "Movie", body = MovieDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(imdb_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movie = MovieService::new(&state.db).get(&imdb_id).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Submit a movie.
///
/// The movie is owned by the caller and never joins the Reel Canon, whatever the
/// request says.
///
/// # Returns
/// - `201 Created` - The stored movie
/// - `400 Bad Request` - A field failed validation
/// - `409 Conflict` - A movie with that IMDb id exists
#[utoipa::path(
    post,
    path = "/api/movies",
    tag = MOVIE_TAG,
    request_body = CreateMovieDto,
    responses(
        (status = 201, description = "Movie created", body = MovieDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 409, description = "Duplicate key violation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(payload): AppJson<CreateMovieDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movie = MovieService::new(&state.db)
        .create(CreateMovieParam::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(movie.into_dto())))
}

/// Replace a movie's poster URL.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated movie
/// - `400 Bad Request` - Invalid URL format for poster
/// - `404 Not Found` - No movie with that IMDb id
#[utoipa::path(
    patch,
    path = "/api/movies/{imdb_id}",
    tag = MOVIE_TAG,
    params(
        ("imdb_id" = String, Path, description = "IMDb id")
    ),
    request_body = UpdatePosterDto,
    responses(
        (status = 200, description = "Poster updated", body = MovieDto),
        (status = 400, description = "Invalid URL format for poster", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_movie_poster(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(imdb_id): Path<String>,
    AppJson(payload): AppJson<UpdatePosterDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let movie = MovieService::new(&state.db)
        .update_poster(&imdb_id, payload.poster)
        .await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}

/// Delete a movie the caller submitted.
///
/// Reel Canon movies can never be deleted.
///
/// # Returns
/// - `200 OK` - The deleted movie
/// - `403 Forbidden` - Canon movie, or submitted by another user
/// - `404 Not Found` - No movie with that IMDb id
#[utoipa::path(
    delete,
    path = "/api/movies/{imdb_id}",
    tag = MOVIE_TAG,
    params(
        ("imdb_id" = String, Path, description = "IMDb id")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MovieDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Movie cannot be deleted by the caller", body = ErrorDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(imdb_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let movie = MovieService::new(&state.db).delete(&imdb_id, &user).await?;

    Ok((StatusCode::OK, Json(movie.into_dto())))
}
