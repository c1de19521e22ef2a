//! Error types for the college football fantasy pipeline

use thiserror::Error;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse integer: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("{file} is missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    #[error("Invalid value '{value}' in column '{column}' of {file}")]
    InvalidField {
        file: String,
        column: String,
        value: String,
    },

    #[error("No game ids given and {env_var} environment variable not set")]
    MissingGames { env_var: String },

    #[error("Game {game_id} returned HTTP status {status}")]
    FetchStatus { game_id: String, status: u16 },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Scoreboard has fewer than two teams (found {found})")]
    NotEnoughTeams { found: usize },
}
