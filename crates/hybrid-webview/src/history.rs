//! Back/forward list rebuilt from page-load callbacks.
//!
//! wry reports page loads but not whether the engine can go back or
//! forward, so the renderer keeps its own list. A committed URL equal to
//! the entry just behind or ahead of the current one is a traversal,
//! whoever started it (toolbar, swipe, or the page's own `history.back()`);
//! anything else is a new entry that truncates the forward branch. A
//! traversal the renderer asked for only breaks ties and is forgotten at
//! the next commit.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
    index: usize,
    pending: Option<Traversal>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mark a back traversal. Returns `false` when there is nothing behind.
    pub fn begin_back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.pending = Some(Traversal::Back);
        true
    }

    /// Mark a forward traversal. Returns `false` at the end of the list.
    pub fn begin_forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.pending = Some(Traversal::Forward);
        true
    }

    pub fn begin_reload(&mut self) {
        self.pending = Some(Traversal::Reload);
    }

    /// Record a committed navigation to `url`.
    pub fn commit(&mut self, url: &str) {
        if url == "about:blank" {
            return;
        }
        let pending = self.pending.take();
        if self.current() == Some(url) {
            return;
        }

        let behind = self
            .index
            .checked_sub(1)
            .filter(|&i| self.entries[i] == url);
        let ahead = Some(self.index + 1)
            .filter(|&i| self.entries.get(i).is_some_and(|e| e == url));

        match (pending, behind, ahead) {
            (Some(Traversal::Forward), _, Some(i)) => self.index = i,
            (_, Some(i), _) | (_, None, Some(i)) => self.index = i,
            _ => self.push(url),
        }
    }

    /// Replace the current entry, e.g. after a redirect.
    pub fn replace_current(&mut self, url: &str) {
        if url == "about:blank" {
            return;
        }
        match self.entries.get_mut(self.index) {
            Some(entry) => *entry = url.to_string(),
            None => self.push(url),
        }
    }

    fn push(&mut self, url: &str) {
        if self.current() == Some(url) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(url.to_string());
        self.index = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visited(urls: &[&str]) -> History {
        let mut h = History::new();
        for u in urls {
            h.commit(u);
        }
        h
    }

    #[test]
    fn empty_history_cannot_move() {
        let mut h = History::new();
        assert!(!h.can_go_back());
        assert!(!h.can_go_forward());
        assert!(!h.begin_back());
        assert!(!h.begin_forward());
        assert_eq!(h.current(), None);
    }

    #[test]
    fn new_pages_stack_up() {
        let h = visited(&["https://a/", "https://b/", "https://c/"]);
        assert_eq!(h.len(), 3);
        assert_eq!(h.current(), Some("https://c/"));
        assert!(h.can_go_back());
        assert!(!h.can_go_forward());
    }

    #[test]
    fn back_then_forward() {
        let mut h = visited(&["https://a/", "https://b/"]);
        assert!(h.begin_back());
        h.commit("https://a/");
        assert_eq!(h.current(), Some("https://a/"));
        assert!(!h.can_go_back());
        assert!(h.can_go_forward());

        assert!(h.begin_forward());
        h.commit("https://b/");
        assert_eq!(h.current(), Some("https://b/"));
        assert!(!h.can_go_forward());
    }

    #[test]
    fn new_page_after_back_truncates_forward_branch() {
        let mut h = visited(&["https://a/", "https://b/", "https://c/"]);
        h.begin_back();
        h.commit("https://b/");
        h.commit("https://d/");
        assert_eq!(h.len(), 3);
        assert_eq!(h.current(), Some("https://d/"));
        assert!(!h.can_go_forward());
    }

    #[test]
    fn reload_and_repeat_commits_do_not_add_entries() {
        let mut h = visited(&["https://a/"]);
        h.begin_reload();
        h.commit("https://a/");
        h.commit("https://a/");
        assert_eq!(h.len(), 1);
    }

    #[test]
    fn engine_back_without_request_moves_index() {
        let mut h = visited(&["https://a/", "https://b/"]);
        h.commit("https://a/");
        assert_eq!(h.len(), 2);
        assert_eq!(h.current(), Some("https://a/"));
        assert!(!h.can_go_back());
        assert!(h.can_go_forward());

        h.commit("https://b/");
        assert_eq!(h.len(), 2);
        assert!(h.can_go_back());
        assert!(!h.can_go_forward());
    }

    #[test]
    fn unperformed_back_is_dropped_by_next_navigation() {
        let mut h = visited(&["https://a/", "https://b/"]);
        assert!(h.begin_back());
        h.commit("https://c/");
        assert_eq!(h.len(), 3);
        assert_eq!(h.current(), Some("https://c/"));

        h.commit("https://d/");
        assert_eq!(h.len(), 4);
        assert_eq!(h.current(), Some("https://d/"));
        assert!(h.can_go_back());
    }

    #[test]
    fn requested_forward_wins_when_both_neighbours_match() {
        let mut h = visited(&["https://a/", "https://b/", "https://c/"]);
        h.replace_current("https://a/");
        h.commit("https://b/");
        assert_eq!(h.current(), Some("https://b/"));
        assert!(h.can_go_forward());

        assert!(h.begin_forward());
        h.commit("https://a/");
        assert!(!h.can_go_forward());
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn about_blank_is_not_recorded() {
        let h = visited(&["about:blank", "https://a/", "about:blank"]);
        assert_eq!(h.len(), 1);
        assert_eq!(h.current(), Some("https://a/"));
    }

    #[test]
    fn redirect_replaces_current_entry() {
        let mut h = visited(&["https://a/", "http://b/"]);
        h.replace_current("https://b/");
        assert_eq!(h.len(), 2);
        assert_eq!(h.current(), Some("https://b/"));
    }
}
