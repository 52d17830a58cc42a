//! Favourite genre statistics derived from a user's ratings.

use std::collections::HashMap;

use crate::model::{movie::MovieDto, reel_progress::ReelProgressDto};

/// Number of genres reported by [`favourite_genres`].
pub const FAVOURITE_GENRE_LIMIT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct GenreStat {
    pub genre: String,
    pub movie_count: u32,
    pub total_stars: u32,
    /// Average rating rounded to one decimal place
    pub average_rating: f64,
}

impl GenreStat {
    /// Human readable summary, e.g. `"1. Drama: 2 movies rated. Average 4.5 stars!"`.
    pub fn summary(&self, rank: usize) -> String {
        let noun = if self.movie_count == 1 { "movie" } else { "movies" };
        format!(
            "{}. {}: {} {} rated. Average {:.1} stars!",
            rank, self.genre, self.movie_count, noun, self.average_rating
        )
    }
}

/// Tallies rated entries per genre and returns the most rated genres.
///
/// Only entries with a rating above zero count. Entries whose movie is not in
/// `movies` are skipped. Genres are ordered by movie count, descending; ties keep
/// the order in which the genre was first seen.
pub fn favourite_genres(entries: &[ReelProgressDto], movies: &[MovieDto]) -> Vec<GenreStat> {
    let movies_by_id: HashMap<i32, &MovieDto> = movies.iter().map(|m| (m.id, m)).collect();

    let mut stats: Vec<GenreStat> = Vec::new();
    let mut index_by_genre: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let Some(rating) = entry.rating.filter(|r| *r > 0) else {
            continue;
        };
        let Some(movie) = movies_by_id.get(&entry.movie) else {
            continue;
        };

        for genre in &movie.genre {
            let index = *index_by_genre.entry(genre.clone()).or_insert_with(|| {
                stats.push(GenreStat {
                    genre: genre.clone(),
                    movie_count: 0,
                    total_stars: 0,
                    average_rating: 0.0,
                });
                stats.len() - 1
            });

            let stat = &mut stats[index];
            stat.movie_count += 1;
            stat.total_stars += rating as u32;
        }
    }

    for stat in &mut stats {
        let average = stat.total_stars as f64 / stat.movie_count as f64;
        stat.average_rating = (average * 10.0).round() / 10.0;
    }

    stats.sort_by(|a, b| b.movie_count.cmp(&a.movie_count));
    stats.truncate(FAVOURITE_GENRE_LIMIT);
    stats
}
