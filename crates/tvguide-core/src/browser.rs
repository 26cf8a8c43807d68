//! High-level episode browser
//!
//! Wires the catalog, the selection state and the page widgets
//! together. Each public method is one user action; failures are
//! rendered on the page and also returned to the caller.

use crate::client::{Catalog, ClientConfig, TvMazeClient};
use crate::controls::{SelectorControls, episode_options, parse_show_value, show_options};
use crate::episodes::sort_shows_by_name;
use crate::error::{LoadFailure, Result};
use crate::selection::{Begin, SelectionState};
use crate::types::ShowId;
use crate::view::{PageView, ViewRenderer};

/// Episode browser over a catalog and a page
///
/// `V` receives every render and picker update. The browser owns
/// all mutable state; the page only displays it.
pub struct EpisodeBrowser<C, V> {
    catalog: C,
    view: V,
    selection: SelectionState,
}

impl EpisodeBrowser<TvMazeClient, PageView> {
    /// Create a browser over the public TVmaze API with a snapshot page
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a browser with custom client configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = TvMazeClient::with_config(config)?;
        Ok(Self::with_parts(client, PageView::new()))
    }
}

impl<C, V> EpisodeBrowser<C, V>
where
    C: Catalog,
    V: ViewRenderer + SelectorControls,
{
    /// Create a browser from any catalog and page implementation
    pub fn with_parts(catalog: C, view: V) -> Self {
        Self {
            catalog,
            view,
            selection: SelectionState::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Page load: fetch the show list and fill the show picker
    ///
    /// Shows are sorted by name before they reach the picker.
    ///
    /// # Errors
    /// Returns the catalog error after rendering the generic
    /// "loading shows" message.
    pub async fn load(&mut self) -> Result<()> {
        let mut shows = match self.catalog.list_shows().await {
            Ok(shows) => shows,
            Err(error) => {
                tracing::warn!(%error, "failed to load shows");
                self.view.render_error(LoadFailure::Shows.message());
                return Err(error);
            }
        };

        sort_shows_by_name(&mut shows);
        tracing::debug!(count = shows.len(), "shows loaded");

        self.view.populate_show_options(show_options(&shows));
        self.selection.set_shows(shows);
        Ok(())
    }

    /// Show picker change event
    ///
    /// An empty value clears the selection.
    ///
    /// # Errors
    /// - `InvalidShowId` if the value is not a show id; nothing changes
    /// - Any catalog error, after the error message is rendered
    pub async fn select_show(&mut self, value: &str) -> Result<()> {
        let show_id = parse_show_value(value)?;
        self.select(show_id).await
    }

    /// Loads one fixed show without a show picker
    ///
    /// # Errors
    /// Returns the catalog error after rendering the error message.
    pub async fn load_show(&mut self, show_id: ShowId) -> Result<()> {
        self.select(Some(show_id)).await
    }

    async fn select(&mut self, show_id: Option<ShowId>) -> Result<()> {
        self.view.set_search_term("");

        let ticket = match self.selection.begin_select(show_id) {
            Begin::Cleared => {
                self.view.clear();
                self.view.populate_episode_options(episode_options(&[]));
                return Ok(());
            }
            Begin::Cached => {
                self.render_selection();
                return Ok(());
            }
            Begin::Fetch(ticket) => ticket,
        };

        self.view.populate_episode_options(episode_options(&[]));
        self.view.render_loading();

        match self.catalog.list_episodes(ticket.show_id()).await {
            Ok(episodes) => {
                tracing::debug!(
                    show_id = ticket.show_id(),
                    count = episodes.len(),
                    "episodes loaded"
                );
                if self.selection.complete_fetch(&ticket, episodes) {
                    self.render_selection();
                }
                Ok(())
            }
            Err(error) => {
                tracing::warn!(show_id = ticket.show_id(), %error, "failed to load episodes");
                if self.selection.fail_fetch(&ticket) {
                    self.view.render_error(LoadFailure::Episodes.message());
                }
                Err(error)
            }
        }
    }

    /// Search field input event
    ///
    /// Re-renders the subset of the current show's episodes matching
    /// `term`. The episode collection and the cache are not modified.
    pub fn search(&mut self, term: &str) {
        self.selection.set_search_term(term);
        self.view.set_search_term(term);
        self.view.render_episodes(&self.selection.filtered());
    }

    /// Episode picker change event
    ///
    /// # Returns
    /// `true` if a rendered episode with that element id was scrolled to.
    /// The empty placeholder value and ids not currently rendered are
    /// ignored.
    pub fn jump_to_episode(&mut self, element_id: &str) -> bool {
        if element_id.is_empty() {
            return false;
        }
        self.view.scroll_to(element_id)
    }

    fn render_selection(&mut self) {
        self.view
            .populate_episode_options(episode_options(self.selection.episodes()));
        self.view.render_episodes(&self.selection.filtered());
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::TvGuideError;
    use crate::types::{Episode, Show};
    use crate::view::{Content, LOADING_MESSAGE};

    /// In-memory catalog counting its calls
    #[derive(Default)]
    struct FakeCatalog {
        shows: Option<Vec<Show>>,
        episodes: Mutex<HashMap<ShowId, Vec<Episode>>>,
        show_calls: AtomicUsize,
        episode_calls: AtomicUsize,
    }

    impl FakeCatalog {
        fn with_show(mut self, show: Show, episodes: Vec<Episode>) -> Self {
            self.shows.get_or_insert_with(Vec::new).push(show.clone());
            self.episodes.lock().unwrap().insert(show.id, episodes);
            self
        }

        fn episode_calls(&self) -> usize {
            self.episode_calls.load(Ordering::SeqCst)
        }
    }

    fn unavailable(url: String) -> TvGuideError {
        TvGuideError::Status { status: 500, url }
    }

    impl Catalog for FakeCatalog {
        async fn list_shows(&self) -> Result<Vec<Show>> {
            self.show_calls.fetch_add(1, Ordering::SeqCst);
            self.shows
                .clone()
                .ok_or_else(|| unavailable("/shows".to_string()))
        }

        async fn list_episodes(&self, show_id: ShowId) -> Result<Vec<Episode>> {
            self.episode_calls.fetch_add(1, Ordering::SeqCst);
            self.episodes
                .lock()
                .unwrap()
                .get(&show_id)
                .cloned()
                .ok_or_else(|| unavailable(format!("/shows/{}/episodes", show_id)))
        }
    }

    fn show(id: ShowId, name: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
        }
    }

    fn episode(id: u64, name: &str, season: u32, number: u32, summary: &str) -> Episode {
        Episode {
            id,
            name: name.to_string(),
            season,
            number: Some(number),
            summary: Some(summary.to_string()),
            image: None,
        }
    }

    fn lost_catalog() -> FakeCatalog {
        FakeCatalog::default().with_show(
            show(1, "Lost"),
            vec![episode(10, "Pilot", 1, 1, "A crash")],
        )
    }

    fn browser(catalog: FakeCatalog) -> EpisodeBrowser<FakeCatalog, PageView> {
        EpisodeBrowser::with_parts(catalog, PageView::new())
    }

    #[tokio::test]
    async fn test_load_sorts_and_populates_shows() {
        let catalog = FakeCatalog::default()
            .with_show(show(2, "the Wire"), vec![])
            .with_show(show(1, "Lost"), vec![])
            .with_show(show(3, "Arrow"), vec![]);
        let mut browser = browser(catalog);

        browser.load().await.unwrap();

        let labels: Vec<&str> = browser
            .view()
            .show_options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Select a show", "Arrow", "Lost", "the Wire"]);
        assert_eq!(browser.selection().shows().len(), 3);
    }

    #[tokio::test]
    async fn test_load_failure_renders_shows_error() {
        let mut browser = browser(FakeCatalog::default());

        let result = browser.load().await;

        assert!(result.is_err());
        assert_eq!(
            browser.view().content,
            Content::Error {
                message: LoadFailure::Shows.message().to_string()
            }
        );
        assert!(browser.view().show_options.is_empty());
    }

    #[tokio::test]
    async fn test_lost_scenario() {
        let mut browser = browser(lost_catalog());
        browser.load().await.unwrap();

        browser.select_show("1").await.unwrap();
        let cards = browser.view().cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Pilot (S01E01)");
        assert_eq!(browser.view().count_label.as_deref(), Some("Episodes found: 1"));

        browser.search("crash");
        assert_eq!(browser.view().cards().len(), 1);

        browser.search("zzz");
        assert!(browser.view().cards().is_empty());
        assert_eq!(browser.view().count_label.as_deref(), Some("Episodes found: 0"));
    }

    #[tokio::test]
    async fn test_cached_show_does_not_hit_catalog() {
        let catalog = lost_catalog().with_show(show(2, "Fringe"), vec![]);
        let mut browser = browser(catalog);

        browser.select_show("1").await.unwrap();
        assert_eq!(browser.catalog().episode_calls(), 1);
        assert!(browser.selection().cached(1).is_some());

        browser.select_show("2").await.unwrap();
        browser.select_show("1").await.unwrap();

        assert_eq!(browser.catalog().episode_calls(), 2);
        assert_eq!(browser.view().cards().len(), 1);
    }

    #[tokio::test]
    async fn test_select_resets_search() {
        let catalog = lost_catalog().with_show(
            show(2, "Fringe"),
            vec![
                episode(20, "Pilot", 1, 1, "Flight 627"),
                episode(21, "The Same Old Story", 1, 2, "A baby"),
            ],
        );
        let mut browser = browser(catalog);
        browser.select_show("2").await.unwrap();
        browser.search("baby");
        assert_eq!(browser.view().cards().len(), 1);

        browser.select_show("1").await.unwrap();
        browser.select_show("2").await.unwrap();

        assert_eq!(browser.selection().search_term(), "");
        assert_eq!(browser.view().search_term, "");
        assert_eq!(browser.view().cards().len(), 2);
    }

    #[tokio::test]
    async fn test_episode_failure_keeps_cache_and_renders_error() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();

        let result = browser.select_show("99").await;

        assert!(result.is_err());
        assert_eq!(browser.selection().cache_len(), 1);
        assert!(browser.selection().cached(99).is_none());
        assert_eq!(
            browser.view().content,
            Content::Error {
                message: LoadFailure::Episodes.message().to_string()
            }
        );
        assert_eq!(browser.view().count_label, None);
    }

    #[tokio::test]
    async fn test_failure_does_not_block_later_actions() {
        let mut browser = browser(lost_catalog());
        assert!(browser.select_show("99").await.is_err());

        browser.select_show("1").await.unwrap();
        assert_eq!(browser.view().cards().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_value_clears_selection() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();

        browser.select_show("").await.unwrap();

        assert_eq!(browser.selection().current_show(), None);
        assert_eq!(browser.view().content, Content::Empty);
        assert_eq!(browser.view().count_label, None);
        assert_eq!(browser.view().episode_options.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_value_changes_nothing() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();

        let result = browser.select_show("lost").await;

        assert!(matches!(result, Err(TvGuideError::InvalidShowId(_))));
        assert_eq!(browser.selection().current_show(), Some(1));
        assert_eq!(browser.view().cards().len(), 1);
        assert_eq!(browser.catalog().episode_calls(), 1);
    }

    #[tokio::test]
    async fn test_episode_options_follow_selection() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();

        let options = &browser.view().episode_options;
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].value, "episode-10");
        assert_eq!(options[1].label, "S01E01 - Pilot");
    }

    #[tokio::test]
    async fn test_jump_to_episode() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();

        assert!(!browser.jump_to_episode(""));
        assert!(!browser.jump_to_episode("episode-11"));
        assert!(browser.jump_to_episode("episode-10"));
        assert_eq!(browser.view().scrolled_to.as_deref(), Some("episode-10"));
    }

    #[tokio::test]
    async fn test_jump_to_filtered_out_episode_is_noop() {
        let mut browser = browser(lost_catalog());
        browser.select_show("1").await.unwrap();
        browser.search("zzz");

        assert!(!browser.jump_to_episode("episode-10"));
    }

    #[tokio::test]
    async fn test_load_show_single_show_variant() {
        let mut browser = browser(lost_catalog());

        browser.load_show(1).await.unwrap();

        assert_eq!(browser.selection().current_show(), Some(1));
        assert_eq!(browser.view().cards().len(), 1);
        assert!(browser.view().show_options.is_empty());
    }

    /// Page that keeps every render call, to check the loading step
    #[derive(Default)]
    struct RecordingPage {
        calls: Vec<String>,
        inner: PageView,
    }

    impl ViewRenderer for RecordingPage {
        fn render_loading(&mut self) {
            self.calls.push(LOADING_MESSAGE.to_string());
            self.inner.render_loading();
        }

        fn render_error(&mut self, message: &str) {
            self.calls.push(format!("error: {}", message));
            self.inner.render_error(message);
        }

        fn render_episodes(&mut self, episodes: &[&Episode]) {
            self.calls.push(format!("episodes: {}", episodes.len()));
            self.inner.render_episodes(episodes);
        }

        fn clear(&mut self) {
            self.calls.push("clear".to_string());
            self.inner.clear();
        }

        fn scroll_to(&mut self, element_id: &str) -> bool {
            self.inner.scroll_to(element_id)
        }
    }

    impl SelectorControls for RecordingPage {
        fn populate_show_options(&mut self, options: Vec<crate::SelectOption>) {
            self.inner.populate_show_options(options);
        }

        fn populate_episode_options(&mut self, options: Vec<crate::SelectOption>) {
            self.inner.populate_episode_options(options);
        }

        fn set_search_term(&mut self, term: &str) {
            self.inner.set_search_term(term);
        }
    }

    #[tokio::test]
    async fn test_miss_renders_loading_then_episodes_hit_skips_loading() {
        let mut browser = EpisodeBrowser::with_parts(lost_catalog(), RecordingPage::default());

        browser.select_show("1").await.unwrap();
        browser.select_show("").await.unwrap();
        browser.select_show("1").await.unwrap();

        assert_eq!(
            browser.view().calls,
            vec![
                LOADING_MESSAGE.to_string(),
                "episodes: 1".to_string(),
                "clear".to_string(),
                "episodes: 1".to_string(),
            ]
        );
    }
}
