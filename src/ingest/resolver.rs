//! Identity resolution: box-score player references to roster identities.
//!
//! Resolution is lossy. An unmatched reference resolves to
//! `None` and the observation simply contributes nothing; no error is ever
//! raised for a missing match.

use crate::espn::types::ProviderRef;
use crate::storage::{Player, RosterStore};
use crate::{MatcherKind, PlayerId, TeamId};

/// Internal identity a provider reference resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedPlayer {
    pub player_id: PlayerId,
    pub team_id: TeamId,
}

impl From<&Player> for ResolvedPlayer {
    fn from(player: &Player) -> Self {
        Self {
            player_id: player.player_id,
            team_id: player.team_id,
        }
    }
}

/// One strategy for matching a provider reference against the roster.
///
/// A matcher returns `None` both for "no roster entry matches" and for
/// reference kinds it does not handle.
pub trait IdentityMatcher: Send + Sync {
    fn name(&self) -> &'static str;

    fn find<'r>(&self, roster: &'r RosterStore, provider_ref: &ProviderRef) -> Option<&'r Player>;
}

/// Exact match on the roster's provider-id column
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactIdMatcher;

impl IdentityMatcher for ExactIdMatcher {
    fn name(&self) -> &'static str {
        "exact-id"
    }

    fn find<'r>(&self, roster: &'r RosterStore, provider_ref: &ProviderRef) -> Option<&'r Player> {
        match provider_ref {
            ProviderRef::Id(espn_id) => roster.by_espn_id(*espn_id),
            ProviderRef::Name(_) => None,
        }
    }
}

/// Case-insensitive containment: the roster name must contain the scraped
/// name. The first roster entry in stored order wins; ambiguous names
/// ("Will Smith" inside "William Smith Jr." style collisions) are not
/// adjudicated further.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringNameMatcher;

impl IdentityMatcher for SubstringNameMatcher {
    fn name(&self) -> &'static str {
        "substring"
    }

    fn find<'r>(&self, roster: &'r RosterStore, provider_ref: &ProviderRef) -> Option<&'r Player> {
        let ProviderRef::Name(name) = provider_ref else {
            return None;
        };
        let needle = name.trim().to_lowercase();
        // An empty needle would match every roster entry
        if needle.is_empty() {
            return None;
        }
        roster
            .players()
            .iter()
            .find(|p| p.player_name.to_lowercase().contains(&needle))
    }
}

/// Case-insensitive whole-name equality, first roster entry wins
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactNameMatcher;

impl IdentityMatcher for ExactNameMatcher {
    fn name(&self) -> &'static str {
        "exact-name"
    }

    fn find<'r>(&self, roster: &'r RosterStore, provider_ref: &ProviderRef) -> Option<&'r Player> {
        let ProviderRef::Name(name) = provider_ref else {
            return None;
        };
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        roster
            .players()
            .iter()
            .find(|p| p.player_name.trim().to_lowercase() == wanted)
    }
}

/// Routes each reference to the matcher for its kind
pub struct Resolver<'r> {
    roster: &'r RosterStore,
    id_matcher: Box<dyn IdentityMatcher>,
    name_matcher: Box<dyn IdentityMatcher>,
}

impl<'r> Resolver<'r> {
    /// Exact-id matching for provider ids plus the chosen name strategy.
    pub fn new(roster: &'r RosterStore, kind: MatcherKind) -> Self {
        let name_matcher: Box<dyn IdentityMatcher> = match kind {
            MatcherKind::Substring => Box::new(SubstringNameMatcher),
            MatcherKind::ExactName => Box::new(ExactNameMatcher),
        };
        Self::with_matchers(roster, Box::new(ExactIdMatcher), name_matcher)
    }

    pub fn with_matchers(
        roster: &'r RosterStore,
        id_matcher: Box<dyn IdentityMatcher>,
        name_matcher: Box<dyn IdentityMatcher>,
    ) -> Self {
        Self {
            roster,
            id_matcher,
            name_matcher,
        }
    }

    pub fn name_strategy(&self) -> &'static str {
        self.name_matcher.name()
    }

    pub fn resolve(&self, provider_ref: &ProviderRef) -> Option<ResolvedPlayer> {
        let matcher = match provider_ref {
            ProviderRef::Id(_) => &self.id_matcher,
            ProviderRef::Name(_) => &self.name_matcher,
        };
        matcher
            .find(self.roster, provider_ref)
            .map(ResolvedPlayer::from)
    }
}
