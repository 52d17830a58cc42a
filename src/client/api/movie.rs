use crate::{
    client::{
        api::helper::{authorized, get, parse_response, send_request},
        model::error::ApiError,
    },
    model::movie::MovieDto,
};

pub async fn get_reel_canon() -> Result<Vec<MovieDto>, ApiError> {
    let response = send_request(get("/api/movies/reel-canon")).await?;
    parse_response(response).await
}

pub async fn search_movies(token: &str, title: &str) -> Result<Vec<MovieDto>, ApiError> {
    let url = format!("/api/movies/search?title={}", encode_query(title));
    let response = send_request(authorized(get(&url), token)).await?;
    parse_response(response).await
}

fn encode_query(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
