//! TV Guide Tauri Integration
//!
//! Provides a Tauri plugin that runs the episode browser for a webview
//! frontend.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(tvguide_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend and draw the returned page:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Fill the show picker
//! let page = await invoke('plugin:tvguide|load_shows');
//!
//! // Pick a show and search its episodes
//! page = await invoke('plugin:tvguide|select_show', { value: '82' });
//! page = await invoke('plugin:tvguide|search_episodes', { term: 'winter' });
//!
//! // Episode picker: scroll if the element is rendered
//! const target = await invoke('plugin:tvguide|jump_to_episode', { value: 'episode-4952' });
//! if (target) document.getElementById(target)?.scrollIntoView({ behavior: 'smooth' });
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;

use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};
use tvguide_core::{ClientConfig, EpisodeBrowser, TvMazeClient};

mod commands;

// Re-export types for convenience
pub use tvguide_core::{EpisodeCard, PageView};

/// Browser over the TVmaze API with a snapshot page
pub type Browser = EpisodeBrowser<TvMazeClient, PageView>;

/// Thread-safe wrapper for the episode browser
///
/// Commands lock the browser for the whole action, so page actions
/// run one at a time.
pub struct BrowserState {
    pub(crate) browser: Arc<Mutex<Browser>>,
}

impl BrowserState {
    /// Create a new BrowserState with default configuration
    ///
    /// # Errors
    /// Returns error string if the HTTP client cannot be created
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new BrowserState with custom client configuration
    ///
    /// # Errors
    /// Returns error string if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self, String> {
        let browser = EpisodeBrowser::with_config(config).map_err(|e| e.to_string())?;
        Ok(Self {
            browser: Arc::new(Mutex::new(browser)),
        })
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new().expect("Failed to create default BrowserState")
    }
}

/// Initialize the tvguide plugin against the public TVmaze API
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_config(ClientConfig::default())
}

/// Initialize the tvguide plugin with custom client configuration
///
/// # Example
/// ```ignore
/// let config = tvguide_core::ClientConfig {
///     timeout_secs: Some(10),
///     ..Default::default()
/// };
/// tauri::Builder::default()
///     .plugin(tvguide_tauri::init_with_config(config))
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init_with_config<R: Runtime>(config: ClientConfig) -> TauriPlugin<R> {
    Builder::new("tvguide")
        .invoke_handler(tauri::generate_handler![
            commands::load_shows,
            commands::select_show,
            commands::search_episodes,
            commands::jump_to_episode,
            commands::current_view
        ])
        .setup(move |app, _api| {
            let state = BrowserState::with_config(config)
                .map_err(Box::<dyn std::error::Error>::from)?;
            tracing::debug!("tvguide plugin state ready");
            app.manage(state);
            Ok(())
        })
        .build()
}
