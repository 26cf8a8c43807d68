//! Show picker, episode picker and search field
//!
//! Builds the option lists for the two pickers and defines the
//! [`SelectorControls`] target they are written to. Change events are
//! handled by [`crate::EpisodeBrowser`].

use serde::{Deserialize, Serialize};

use crate::episodes::episode_code;
use crate::error::{Result, TvGuideError};
use crate::types::{Episode, Show, ShowId};
use crate::url::episode_element_id;

/// Label of the empty show picker entry
pub const SHOW_PLACEHOLDER: &str = "Select a show";

/// Label of the empty episode picker entry
pub const EPISODE_PLACEHOLDER: &str = "Select an Episode";

/// One entry of a picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// Target for the picker and search widgets
pub trait SelectorControls {
    /// Replace the show picker entries
    fn populate_show_options(&mut self, options: Vec<SelectOption>);

    /// Replace the episode picker entries
    fn populate_episode_options(&mut self, options: Vec<SelectOption>);

    /// Overwrite the search field text
    fn set_search_term(&mut self, term: &str);
}

/// Options for the show picker
///
/// One entry per show in the given order, after an empty placeholder.
/// Values are the show ids.
pub fn show_options(shows: &[Show]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(SHOW_PLACEHOLDER))
        .chain(shows.iter().map(|show| SelectOption {
            value: show.id.to_string(),
            label: show.name.clone(),
        }))
        .collect()
}

/// Options for the episode picker
///
/// Labels are `<code> - <name>`, values are element ids.
pub fn episode_options(episodes: &[Episode]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(EPISODE_PLACEHOLDER))
        .chain(episodes.iter().map(|episode| SelectOption {
            value: episode_element_id(episode.id),
            label: format!("{} - {}", episode_code(episode), episode.name),
        }))
        .collect()
}

/// Parses a show picker value
///
/// # Returns
/// `None` for the placeholder (empty) value, the show id otherwise
///
/// # Errors
/// - `InvalidShowId` if the value is not a number
pub fn parse_show_value(value: &str) -> Result<Option<ShowId>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed
        .parse()
        .map(Some)
        .map_err(|_| TvGuideError::InvalidShowId(value.to_string()))
}
