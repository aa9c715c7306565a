//! Stage name autocomplete.
//!
//! Ranked substring matching over the predefined vocabulary plus every stage
//! name already used. No fuzzy matching: a candidate either contains the
//! input (ignoring case) or it is dropped.

use std::collections::HashSet;

use crate::application::{Application, PREDEFINED_STAGES};

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// Predefined stages first, then used names in collection order, deduplicated.
pub fn stage_name_candidates(applications: &[Application]) -> Vec<String> {
    let mut seen = HashSet::new();
    PREDEFINED_STAGES
        .iter()
        .map(|name| name.to_string())
        .chain(
            applications
                .iter()
                .flat_map(|app| app.stages.iter().map(|stage| stage.name.clone())),
        )
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Suggests up to [`MAX_SUGGESTIONS`] stage names for `input`.
///
/// Blank input returns the first candidates as-is. Otherwise matches are
/// ordered exact (case-insensitive) first, then prefix, then the rest, and
/// lexicographically within each group.
pub fn suggest_stage_names(applications: &[Application], input: &str) -> Vec<String> {
    let candidates = stage_name_candidates(applications);
    let needle = input.trim().to_lowercase();

    if needle.is_empty() {
        return candidates.into_iter().take(MAX_SUGGESTIONS).collect();
    }

    let mut matches: Vec<(MatchRank, String)> = candidates
        .into_iter()
        .filter_map(|name| {
            let lower = name.to_lowercase();
            let rank = if lower == needle {
                MatchRank::Exact
            } else if lower.starts_with(&needle) {
                MatchRank::Prefix
            } else if lower.contains(&needle) {
                MatchRank::Substring
            } else {
                return None;
            };
            Some((rank, name))
        })
        .collect();

    matches.sort();
    matches
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Exact,
    Prefix,
    Substring,
}
