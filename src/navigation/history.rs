//! Session history.

/// A stack of visited locations with a cursor, as exposed by the browser
/// history API in history mode.
pub trait History {
    /// Add a new entry after the current one, discarding forward entries.
    fn push(&mut self, path: &str);

    /// Overwrite the current entry.
    fn replace(&mut self, path: &str);

    /// Move one entry back. Returns the new location, or `None` at the start.
    fn back(&mut self) -> Option<&str>;

    /// Move one entry forward. Returns the new location, or `None` at the end.
    fn forward(&mut self) -> Option<&str>;

    /// The current location.
    fn current(&self) -> &str;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history for tests, servers and non-browser front ends.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Create a history whose only entry is `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True when an entry exists before the current one.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// True when an entry exists after the current one.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn push(&mut self, path: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(path.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, path: &str) {
        self.entries[self.cursor] = path.to_string();
    }

    fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_back_forward() {
        let mut h = MemoryHistory::new("/test1");
        h.push("/test2");
        h.push("/test3");
        assert_eq!(h.current(), "/test3");

        assert_eq!(h.back(), Some("/test2"));
        assert_eq!(h.back(), Some("/test1"));
        assert_eq!(h.back(), None);

        assert_eq!(h.forward(), Some("/test2"));
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut h = MemoryHistory::new("/test1");
        h.push("/test2");
        h.back();
        h.push("/test3");
        assert_eq!(h.entries(), ["/test1", "/test3"]);
        assert!(!h.can_go_forward());
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut h = MemoryHistory::default();
        h.replace("/test1");
        assert_eq!(h.current(), "/test1");
        assert_eq!(h.len(), 1);
    }
}
