//! Tab and favorites bookkeeping for the browser app.

/// URL loaded into freshly opened tabs.
pub const NEW_TAB_URL: &str = "https://www.example.com";

/// One browser tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Stable tab identifier.
    pub id: u64,
    /// Tab label derived from the loaded URL.
    pub title: String,
    /// Loaded URL.
    pub url: String,
}

/// Ordered tab collection with one active tab.
///
/// The strip is never empty: closing the last tab replaces it with a fresh
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStrip {
    tabs: Vec<Tab>,
    active: u64,
    next_id: u64,
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl TabStrip {
    /// Creates a strip holding one fresh tab.
    pub fn new() -> Self {
        Self {
            tabs: vec![Tab {
                id: 1,
                title: "New Tab".to_string(),
                url: NEW_TAB_URL.to_string(),
            }],
            active: 1,
            next_id: 2,
        }
    }

    /// Tabs in strip order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Active tab id.
    pub fn active_id(&self) -> u64 {
        self.active
    }

    /// The active tab.
    pub fn active_tab(&self) -> &Tab {
        self.tabs
            .iter()
            .find(|tab| tab.id == self.active)
            .expect("strip always holds its active tab")
    }

    /// Activates a tab by id; unknown ids are ignored.
    pub fn select(&mut self, id: u64) {
        if self.tabs.iter().any(|tab| tab.id == id) {
            self.active = id;
        }
    }

    /// Appends a fresh tab and activates it.
    pub fn open_tab(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tabs.push(Tab {
            id,
            title: "New Tab".to_string(),
            url: NEW_TAB_URL.to_string(),
        });
        self.active = id;
        id
    }

    /// Closes a tab. Closing the last tab replaces the strip with one fresh
    /// tab; closing the active tab activates the first remaining tab.
    pub fn close_tab(&mut self, id: u64) {
        self.tabs.retain(|tab| tab.id != id);
        if self.tabs.is_empty() {
            self.open_tab();
        } else if self.active == id {
            self.active = self.tabs[0].id;
        }
    }

    /// Points the active tab at `url`, retitling it from the URL's host.
    pub fn navigate(&mut self, url: impl Into<String>) {
        let url = url.into();
        let title = display_host(&url);
        if let Some(tab) = self.tabs.iter_mut().find(|tab| tab.id == self.active) {
            tab.title = title;
            tab.url = url;
        }
    }
}

/// Toggles a URL's membership in the favorites list.
pub fn toggle_favorite(favorites: &mut Vec<String>, url: &str) {
    if let Some(index) = favorites.iter().position(|fav| fav == url) {
        favorites.remove(index);
    } else {
        favorites.push(url.to_string());
    }
}

/// Host portion of a URL for tab labels and favorite chips; falls back to
/// the input when no host can be extracted.
pub fn display_host(url: &str) -> String {
    let without_scheme = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        url.to_string()
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_strip_holds_one_active_fresh_tab() {
        let strip = TabStrip::new();
        assert_eq!(strip.tabs().len(), 1);
        assert_eq!(strip.active_tab().url, NEW_TAB_URL);
        assert_eq!(strip.active_tab().title, "New Tab");
    }

    #[test]
    fn open_tab_appends_and_activates() {
        let mut strip = TabStrip::new();
        let id = strip.open_tab();

        assert_eq!(strip.tabs().len(), 2);
        assert_eq!(strip.active_id(), id);
    }

    #[test]
    fn closing_the_active_tab_activates_the_first_remaining() {
        let mut strip = TabStrip::new();
        let second = strip.open_tab();
        strip.close_tab(second);

        assert_eq!(strip.active_id(), 1);
        assert_eq!(strip.tabs().len(), 1);
    }

    #[test]
    fn closing_the_last_tab_replaces_it_with_a_fresh_one() {
        let mut strip = TabStrip::new();
        strip.close_tab(1);

        assert_eq!(strip.tabs().len(), 1);
        assert_eq!(strip.active_tab().url, NEW_TAB_URL);
        assert_ne!(strip.active_id(), 1);
    }

    #[test]
    fn navigate_updates_url_and_title_of_the_active_tab_only() {
        let mut strip = TabStrip::new();
        let second = strip.open_tab();
        strip.navigate("https://www.wikipedia.org/wiki/Rust");

        assert_eq!(strip.active_tab().url, "https://www.wikipedia.org/wiki/Rust");
        assert_eq!(strip.active_tab().title, "www.wikipedia.org");
        assert_eq!(strip.tabs()[0].title, "New Tab");
        assert_eq!(strip.active_id(), second);
    }

    #[test]
    fn favorites_toggle_on_and_off() {
        let mut favorites = vec!["https://www.google.com".to_string()];
        toggle_favorite(&mut favorites, "https://www.github.com");
        assert_eq!(favorites.len(), 2);

        toggle_favorite(&mut favorites, "https://www.google.com");
        assert_eq!(favorites, vec!["https://www.github.com".to_string()]);
    }

    #[test]
    fn display_host_handles_schemes_paths_and_bare_hosts() {
        assert_eq!(display_host("https://www.github.com/leptos"), "www.github.com");
        assert_eq!(display_host("example.org/a?b#c"), "example.org");
        assert_eq!(display_host("https://"), "https://");
    }
}
