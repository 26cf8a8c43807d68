//! Browse a show's episodes in the terminal
//!
//! ```text
//! cargo run -p tvguide-core --example browse -- [SHOW_ID] [SEARCH]
//! RUST_LOG=tvguide_core=debug cargo run -p tvguide-core --example browse -- 82 winter
//! ```
//!
//! Without a show id the show index is loaded and the first show is picked.

use tracing_subscriber::EnvFilter;
use tvguide_core::{
    Episode, EpisodeBrowser, EpisodeCard, SelectOption, SelectorControls, TvMazeClient,
    ViewRenderer,
    view::{LOADING_MESSAGE, count_label},
};

/// Prints every render to stdout
struct TerminalPage {
    rendered: Vec<String>,
    show_options: Vec<SelectOption>,
}

impl ViewRenderer for TerminalPage {
    fn render_loading(&mut self) {
        println!("{}", LOADING_MESSAGE);
    }

    fn render_error(&mut self, message: &str) {
        self.rendered.clear();
        eprintln!("{}", message);
    }

    fn render_episodes(&mut self, episodes: &[&Episode]) {
        self.rendered.clear();
        println!();
        for episode in episodes {
            let card = EpisodeCard::from_episode(episode);
            println!("  [{}] {}", card.element_id, card.title);
            self.rendered.push(card.element_id);
        }
        println!("{}", count_label(episodes.len()));
    }

    fn clear(&mut self) {
        self.rendered.clear();
    }

    fn scroll_to(&mut self, element_id: &str) -> bool {
        self.rendered.iter().any(|id| id == element_id)
    }
}

impl SelectorControls for TerminalPage {
    fn populate_show_options(&mut self, options: Vec<SelectOption>) {
        println!("{} shows available", options.len().saturating_sub(1));
        self.show_options = options;
    }

    fn populate_episode_options(&mut self, _options: Vec<SelectOption>) {}

    fn set_search_term(&mut self, term: &str) {
        if !term.is_empty() {
            println!("\nSearching for '{}'", term);
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let show = args.next();
    let search = args.next();

    let page = TerminalPage {
        rendered: Vec::new(),
        show_options: Vec::new(),
    };
    let mut browser = EpisodeBrowser::with_parts(TvMazeClient::new()?, page);

    match show {
        Some(value) => browser.select_show(&value).await?,
        None => {
            browser.load().await?;
            let first = browser
                .view()
                .show_options
                .get(1)
                .map(|option| option.value.clone())
                .unwrap_or_default();
            browser.select_show(&first).await?;
        }
    }

    if let Some(term) = search {
        browser.search(&term);
    }

    Ok(())
}
