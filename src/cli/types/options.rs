//! Option enums exposed on the command line.

use std::fmt;

/// Which display-name matcher the resolver uses for scraped box scores.
///
/// Numeric provider IDs are always matched exactly; this only picks the
/// strategy for name references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatcherKind {
    /// Roster name contains the scraped name, case-insensitive (first roster hit wins)
    #[default]
    Substring,
    /// Case-insensitive whole-name equality
    ExactName,
}

impl fmt::Display for MatcherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatcherKind::Substring => "substring",
            MatcherKind::ExactName => "exact-name",
        };
        write!(f, "{}", s)
    }
}

/// Layout of the rendered matchup view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchupStyle {
    /// One line per lineup spot
    #[default]
    Compact,
    /// Adds each chosen slot's roster link under its line
    Detailed,
}

impl fmt::Display for MatchupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchupStyle::Compact => "compact",
            MatchupStyle::Detailed => "detailed",
        };
        write!(f, "{}", s)
    }
}
