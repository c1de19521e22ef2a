//! File system cache for fetched box-score payloads
//!
//! Payloads are stored verbatim, one file per game and payload kind, so a
//! rerun can skip the network entirely unless a refresh is requested.

use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use crate::{espn::types::PayloadKind, GameId};

/// Base directory: `~/.cache/cfb-fantasy` (or `./.cache/cfb-fantasy` without a home).
pub fn cache_root() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("cfb-fantasy")
}

/// Path: `{root}/{kind}_{game_id}.{ext}`
pub fn payload_cache_path(root: &Path, kind: PayloadKind, game_id: GameId) -> PathBuf {
    root.join(format!("{}_{}.{}", kind, game_id, kind.file_extension()))
}

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}
