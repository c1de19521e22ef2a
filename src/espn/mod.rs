//! ESPN box scores: payload types, parsing, fetching and scoring

pub mod boxscore;
pub mod compute;
pub mod http;
pub mod types;
