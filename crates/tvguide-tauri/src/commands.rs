//! Tauri commands for the tvguide episode browser
//!
//! Each command is one page action and answers with the page snapshot
//! to draw. Catalog failures are already rendered into the snapshot, so
//! they are not returned as command errors.

use tauri::State;
use tvguide_core::{PageView, TvGuideError};

use crate::BrowserState;

/// Keeps rendered load failures out of the command result
fn rendered(result: tvguide_core::Result<()>) -> Result<(), String> {
    match result {
        Err(error @ TvGuideError::InvalidShowId(_)) => Err(error.to_string()),
        Err(error) => {
            tracing::debug!(%error, "action failed, error shown on page");
            Ok(())
        }
        Ok(()) => Ok(()),
    }
}

/// Load the show list into the show picker
#[tauri::command]
pub async fn load_shows(state: State<'_, BrowserState>) -> Result<PageView, String> {
    let mut browser = state.browser.lock().await;
    rendered(browser.load().await)?;
    Ok(browser.view().clone())
}

/// Show picker change
///
/// # Arguments
/// * `value` - Picker value: a show id, or empty to clear the selection
///
/// # Errors
/// Returns error message as String if `value` is not a show id
#[tauri::command]
pub async fn select_show(
    state: State<'_, BrowserState>,
    value: String,
) -> Result<PageView, String> {
    let mut browser = state.browser.lock().await;
    rendered(browser.select_show(&value).await)?;
    Ok(browser.view().clone())
}

/// Search field input
#[tauri::command]
pub async fn search_episodes(
    state: State<'_, BrowserState>,
    term: String,
) -> Result<PageView, String> {
    let mut browser = state.browser.lock().await;
    browser.search(&term);
    Ok(browser.view().clone())
}

/// Episode picker change
///
/// # Returns
/// The element id to scroll to, or null if it is not rendered
#[tauri::command]
pub async fn jump_to_episode(
    state: State<'_, BrowserState>,
    value: String,
) -> Result<Option<String>, String> {
    let mut browser = state.browser.lock().await;
    Ok(browser.jump_to_episode(&value).then_some(value))
}

/// Current page snapshot, e.g. after a frontend reload
#[tauri::command]
pub async fn current_view(state: State<'_, BrowserState>) -> Result<PageView, String> {
    let browser = state.browser.lock().await;
    Ok(browser.view().clone())
}
