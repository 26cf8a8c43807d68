//! Episode formatting, search filtering and show ordering
//!
//! Pure helpers shared by the selection state, the renderer and the
//! selector controls.

use std::cmp::Ordering;

use crate::types::{Episode, Show};

/// Formats a season/number pair as an episode code
///
/// Both parts are zero-padded to two digits.
///
/// # Example
/// ```
/// use tvguide_core::format_episode_code;
/// assert_eq!(format_episode_code(1, 1), "S01E01");
/// assert_eq!(format_episode_code(12, 3), "S12E03");
/// ```
pub fn format_episode_code(season: u32, number: u32) -> String {
    format!("S{:02}E{:02}", season, number)
}

/// Episode code of an episode, specials numbered 0
pub fn episode_code(episode: &Episode) -> String {
    format_episode_code(episode.season, episode.display_number())
}

/// Checks whether an episode matches a lower-cased search term
fn matches_term(episode: &Episode, term: &str) -> bool {
    episode.name.to_lowercase().contains(term)
        || episode
            .summary
            .as_deref()
            .is_some_and(|summary| summary.to_lowercase().contains(term))
}

/// Filters episodes by a search term
///
/// The term is lower-cased and matched as a substring against the name
/// and, when present, the summary. An empty term keeps every episode.
/// Order is preserved.
///
/// # Arguments
/// * `episodes` - Collection to filter
/// * `term` - Raw search input
///
/// # Returns
/// References to the matching episodes
pub fn filter_episodes<'a>(episodes: &'a [Episode], term: &str) -> Vec<&'a Episode> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return episodes.iter().collect();
    }

    episodes
        .iter()
        .filter(|episode| matches_term(episode, &term))
        .collect()
}

fn compare_show_names(a: &Show, b: &Show) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

/// Sorts shows by name, case-insensitively
///
/// Names equal up to case fall back to a case-sensitive comparison and
/// then the show id, so the order is total.
pub fn sort_shows_by_name(shows: &mut [Show]) {
    shows.sort_by(compare_show_names);
}
