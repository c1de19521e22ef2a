//! Type-safe wrappers and enums for roster and box-score data.

pub mod ids;
pub mod options;
pub mod position;
pub mod status;

pub use ids::{EspnId, GameId, PlayerId, TeamId};
pub use options::{MatchupStyle, MatcherKind};
pub use position::Position;
pub use status::InjuryStatus;
