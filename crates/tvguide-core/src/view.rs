//! Rendering contract for the episode listing
//!
//! The browser never draws anything itself. It drives a [`ViewRenderer`]
//! and, through [`crate::controls::SelectorControls`], the pickers. Every
//! render call replaces what was there before.
//!
//! [`PageView`] is a snapshot implementation that records the latest
//! rendered state as serializable data, for frontends that draw it
//! themselves.

use serde::{Deserialize, Serialize};

use crate::controls::{SelectOption, SelectorControls};
use crate::episodes::episode_code;
use crate::types::Episode;
use crate::url::episode_element_id;

/// Image shown for episodes without a still
pub const PLACEHOLDER_IMAGE: &str = "placeholder.jpg";

/// Text shown while episodes are being fetched
pub const LOADING_MESSAGE: &str = "Loading episodes, please wait...";

/// Count line shown under the search field
pub fn count_label(count: usize) -> String {
    format!("Episodes found: {}", count)
}

/// Render target for the episode listing
pub trait ViewRenderer {
    /// Replace the listing with a loading indicator
    fn render_loading(&mut self);

    /// Replace the listing with an error message
    fn render_error(&mut self, message: &str);

    /// Replace the listing with these episodes and show their count
    fn render_episodes(&mut self, episodes: &[&Episode]);

    /// Remove the listing and the count
    fn clear(&mut self);

    /// Scroll the rendered episode with this element id into view
    ///
    /// Best effort: returns `false` and does nothing when no such
    /// element is rendered.
    fn scroll_to(&mut self, element_id: &str) -> bool;
}

/// One rendered episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeCard {
    /// Element id, `episode-<id>`
    pub element_id: String,
    /// Heading, e.g. "Pilot (S01E01)"
    pub title: String,
    /// Medium still or [`PLACEHOLDER_IMAGE`]
    pub image_url: String,
    /// Alt text for the image (the episode name)
    pub image_alt: String,
    /// Raw HTML summary
    pub summary: Option<String>,
}

impl EpisodeCard {
    pub fn from_episode(episode: &Episode) -> Self {
        Self {
            element_id: episode_element_id(episode.id),
            title: format!("{} ({})", episode.name, episode_code(episode)),
            image_url: episode
                .image
                .as_ref()
                .map(|image| image.medium.clone())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            image_alt: episode.name.clone(),
            summary: episode.summary.clone(),
        }
    }
}

/// Main content area of the page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Content {
    #[default]
    Empty,
    Loading {
        message: String,
    },
    Error {
        message: String,
    },
    Episodes {
        cards: Vec<EpisodeCard>,
    },
}

/// Snapshot of everything currently shown on the page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageView {
    /// Listing area
    pub content: Content,
    /// "Episodes found: N", absent unless a listing is shown
    pub count_label: Option<String>,
    /// Show picker entries
    pub show_options: Vec<SelectOption>,
    /// Episode picker entries
    pub episode_options: Vec<SelectOption>,
    /// Text in the search field
    pub search_term: String,
    /// Element id of the last successful scroll request
    pub scrolled_to: Option<String>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered cards, empty unless a listing is shown
    pub fn cards(&self) -> &[EpisodeCard] {
        match &self.content {
            Content::Episodes { cards } => cards,
            _ => &[],
        }
    }
}

impl ViewRenderer for PageView {
    fn render_loading(&mut self) {
        self.content = Content::Loading {
            message: LOADING_MESSAGE.to_string(),
        };
        self.count_label = None;
        self.scrolled_to = None;
    }

    fn render_error(&mut self, message: &str) {
        self.content = Content::Error {
            message: message.to_string(),
        };
        self.count_label = None;
        self.scrolled_to = None;
    }

    fn render_episodes(&mut self, episodes: &[&Episode]) {
        let cards = episodes
            .iter()
            .map(|episode| EpisodeCard::from_episode(episode))
            .collect();
        self.content = Content::Episodes { cards };
        self.count_label = Some(count_label(episodes.len()));
        self.scrolled_to = None;
    }

    fn clear(&mut self) {
        self.content = Content::Empty;
        self.count_label = None;
        self.scrolled_to = None;
    }

    fn scroll_to(&mut self, element_id: &str) -> bool {
        let found = self
            .cards()
            .iter()
            .any(|card| card.element_id == element_id);
        if found {
            self.scrolled_to = Some(element_id.to_string());
        }
        found
    }
}

impl SelectorControls for PageView {
    fn populate_show_options(&mut self, options: Vec<SelectOption>) {
        self.show_options = options;
    }

    fn populate_episode_options(&mut self, options: Vec<SelectOption>) {
        self.episode_options = options;
    }

    fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }
}
