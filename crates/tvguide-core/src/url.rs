//! URL and element-id helpers
//!
//! Provides functions for building catalog endpoint URLs and the
//! element ids used to locate rendered episodes.

use crate::types::{EpisodeId, ShowId};

/// Public TVmaze API root
pub const BASE_URL: &str = "https://api.tvmaze.com";

const ELEMENT_ID_PREFIX: &str = "episode-";

/// Builds the show index URL
///
/// # Example
/// ```
/// use tvguide_core::url::build_shows_url;
/// let url = build_shows_url("https://api.tvmaze.com");
/// assert_eq!(url, "https://api.tvmaze.com/shows");
/// ```
pub fn build_shows_url(base_url: &str) -> String {
    format!("{}/shows", base_url.trim_end_matches('/'))
}

/// Builds the episode list URL for a show
///
/// # Example
/// ```
/// use tvguide_core::url::build_episodes_url;
/// let url = build_episodes_url("https://api.tvmaze.com/", 82);
/// assert_eq!(url, "https://api.tvmaze.com/shows/82/episodes");
/// ```
pub fn build_episodes_url(base_url: &str, show_id: ShowId) -> String {
    format!("{}/shows/{}/episodes", base_url.trim_end_matches('/'), show_id)
}

/// Element id of a rendered episode
///
/// # Example
/// ```
/// use tvguide_core::url::episode_element_id;
/// assert_eq!(episode_element_id(4952), "episode-4952");
/// ```
pub fn episode_element_id(episode_id: EpisodeId) -> String {
    format!("{}{}", ELEMENT_ID_PREFIX, episode_id)
}

/// Checks that a base URL looks like an http(s) origin
pub(crate) fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.trim_matches('/').is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_shows_url() {
        assert_eq!(build_shows_url(BASE_URL), "https://api.tvmaze.com/shows");
    }

    #[test]
    fn test_build_episodes_url() {
        assert_eq!(
            build_episodes_url(BASE_URL, 82),
            "https://api.tvmaze.com/shows/82/episodes"
        );
    }

    #[test]
    fn test_build_urls_trailing_slash() {
        assert_eq!(
            build_shows_url("http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/shows"
        );
        assert_eq!(
            build_episodes_url("http://127.0.0.1:8080//", 1),
            "http://127.0.0.1:8080/shows/1/episodes"
        );
    }

    #[test]
    fn test_episode_element_id() {
        assert_eq!(episode_element_id(10), "episode-10");
        assert_eq!(episode_element_id(0), "episode-0");
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("https://api.tvmaze.com"));
        assert!(is_http_url("http://127.0.0.1:4000"));
        assert!(!is_http_url("api.tvmaze.com"));
        assert!(!is_http_url("https://"));
        assert!(!is_http_url("ftp://api.tvmaze.com"));
    }
}
