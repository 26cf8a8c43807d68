//! TV Guide Core Library
//!
//! Provides an async episode browser over the TVmaze catalog.
//!
//! # Overview
//!
//! This crate provides everything behind an episode browsing page:
//! - HTTP client for the show index and per-show episode lists
//! - Selection state with a per-show episode cache
//! - Case-insensitive search over episode names and summaries
//! - A rendering contract plus a serializable page snapshot
//!
//! # Example
//!
//! ```no_run
//! use tvguide_core::{EpisodeBrowser, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut browser = EpisodeBrowser::new()?;
//!
//!     // Fill the show picker
//!     browser.load().await?;
//!
//!     // Pick a show, then narrow its episodes down
//!     browser.select_show("82").await?;
//!     browser.search("winter");
//!
//!     for card in browser.view().cards() {
//!         println!("{}", card.title);
//!     }
//!     println!("{:?}", browser.view().count_label);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Caching
//!
//! Episodes are cached per show for the lifetime of the browser and
//! never invalidated. Selecting a cached show renders synchronously
//! without a network request.

mod browser;
mod client;
pub mod controls;
mod episodes;
mod error;
pub mod selection;
mod types;
pub mod url;
pub mod view;

// Re-export the browser API
pub use browser::EpisodeBrowser;

// Re-export client types
pub use client::{Catalog, ClientConfig, TvMazeClient};

// Re-export error types
pub use error::{LoadFailure, Result, TvGuideError};

// Re-export formatting and filtering helpers
pub use episodes::{episode_code, filter_episodes, format_episode_code, sort_shows_by_name};

// Re-export widget and view types
pub use controls::{SelectOption, SelectorControls};
pub use selection::SelectionState;
pub use view::{Content, EpisodeCard, PageView, ViewRenderer};

// Re-export data types
pub use types::{Episode, EpisodeId, EpisodeImage, Show, ShowId};

// Re-export element id helper for convenience
pub use url::episode_element_id;
