//! Core data types for the TVmaze catalog
//!
//! Contains the show and episode records as returned by the catalog.
//! Fields the browser never reads are dropped on deserialization.

use serde::{Deserialize, Serialize};

/// Catalog identifier of a show
pub type ShowId = u64;

/// Catalog identifier of an episode
pub type EpisodeId = u64;

/// A television series from the catalog show index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Catalog show ID (e.g., 82 for "Game of Thrones")
    pub id: ShowId,

    /// Show title
    pub name: String,
}

/// Image links attached to an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeImage {
    /// Medium-sized still, used in listings
    pub medium: String,
}

/// A single installment of a show
///
/// All fields implement Serialize and Deserialize for Tauri compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Catalog episode ID, unique within a show
    pub id: EpisodeId,

    /// Episode title
    pub name: String,

    /// Season number
    pub season: u32,

    /// Episode number within the season, `None` for specials
    #[serde(default)]
    pub number: Option<u32>,

    /// HTML summary, may be missing
    #[serde(default)]
    pub summary: Option<String>,

    /// Still image, may be missing
    #[serde(default)]
    pub image: Option<EpisodeImage>,
}

impl Episode {
    /// Episode number used for display; specials count as 0
    pub fn display_number(&self) -> u32 {
        self.number.unwrap_or(0)
    }
}
