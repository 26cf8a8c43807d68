//! Show selection, episode cache and search state
//!
//! Selecting a show is split in two steps so an overlapping selection
//! can be detected: [`SelectionState::begin_select`] either answers from
//! the cache or hands out a [`FetchTicket`], and the caller later
//! reports the fetch result with [`SelectionState::complete_fetch`] or
//! [`SelectionState::fail_fetch`].
//!
//! Every selection change bumps a sequence number. A ticket that is no
//! longer the latest still fills the cache but never touches the
//! current selection.

use std::collections::HashMap;
use std::sync::Arc;

use crate::episodes::filter_episodes;
use crate::types::{Episode, Show, ShowId};

/// Outcome of starting a show selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Begin {
    /// Selection cleared, nothing to fetch
    Cleared,
    /// Episodes were cached; the selection is already applied
    Cached,
    /// Episodes must be fetched and reported back with this ticket
    Fetch(FetchTicket),
}

/// Handle for an in-flight episode fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    show_id: ShowId,
    sequence: u64,
}

impl FetchTicket {
    pub fn show_id(&self) -> ShowId {
        self.show_id
    }
}

/// Current show, its episodes, the search term and the episode cache
#[derive(Debug, Default)]
pub struct SelectionState {
    shows: Vec<Show>,
    cache: HashMap<ShowId, Arc<[Episode]>>,
    current_show: Option<ShowId>,
    episodes: Arc<[Episode]>,
    search_term: String,
    sequence: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Known shows, in picker order
    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn set_shows(&mut self, shows: Vec<Show>) {
        self.shows = shows;
    }

    /// Currently selected show
    pub fn current_show(&self) -> Option<ShowId> {
        self.current_show
    }

    /// Full episode collection of the current show
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Cached episodes of a show, if it was fetched before
    pub fn cached(&self, show_id: ShowId) -> Option<&[Episode]> {
        self.cache.get(&show_id).map(|episodes| &episodes[..])
    }

    /// Number of shows with cached episodes
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Clears the current show, its episodes and the search term
    pub fn clear(&mut self) {
        self.sequence += 1;
        self.current_show = None;
        self.episodes = Arc::default();
        self.search_term.clear();
    }

    /// Starts selecting a show
    ///
    /// The search term is reset in every case. On a cache hit the
    /// selection is applied immediately; on a miss the show becomes
    /// current with no episodes until the fetch completes.
    pub fn begin_select(&mut self, show_id: Option<ShowId>) -> Begin {
        let Some(show_id) = show_id else {
            self.clear();
            return Begin::Cleared;
        };

        self.sequence += 1;
        self.current_show = Some(show_id);
        self.search_term.clear();

        match self.cache.get(&show_id) {
            Some(episodes) => {
                tracing::debug!(show_id = show_id, "episode cache hit");
                self.episodes = Arc::clone(episodes);
                Begin::Cached
            }
            None => {
                tracing::debug!(
                    show_id = show_id,
                    sequence = self.sequence,
                    "episode cache miss"
                );
                self.episodes = Arc::default();
                Begin::Fetch(FetchTicket {
                    show_id,
                    sequence: self.sequence,
                })
            }
        }
    }

    /// Whether a ticket belongs to the latest selection
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.sequence == self.sequence
    }

    /// Stores fetched episodes and applies them if the ticket is current
    ///
    /// # Returns
    /// `true` when the current selection was updated
    pub fn complete_fetch(&mut self, ticket: &FetchTicket, episodes: Vec<Episode>) -> bool {
        let episodes: Arc<[Episode]> = episodes.into();
        self.cache.insert(ticket.show_id, Arc::clone(&episodes));

        if !self.is_current(ticket) {
            tracing::debug!(
                show_id = ticket.show_id,
                sequence = ticket.sequence,
                latest = self.sequence,
                "stale episode fetch cached but not applied"
            );
            return false;
        }

        self.episodes = episodes;
        true
    }

    /// Reports a failed fetch; the cache is left untouched
    ///
    /// # Returns
    /// `true` when the failure belongs to the current selection
    pub fn fail_fetch(&self, ticket: &FetchTicket) -> bool {
        self.is_current(ticket)
    }

    /// Updates the search term
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// Episodes of the current show matching the search term
    pub fn filtered(&self) -> Vec<&Episode> {
        filter_episodes(&self.episodes, &self.search_term)
    }
}
