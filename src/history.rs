//! Recently copied passwords.

use std::collections::VecDeque;

use zeroize::Zeroize;

pub const HISTORY_CAP: usize = 5;

/// Most-recent-first list of copied passwords, capped at [`HISTORY_CAP`].
///
/// In memory only. Evicted and dropped entries are zeroized, but this is not
/// a vault: anything in the same process can read it.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `password` to the front, evicting the oldest entry when full.
    pub fn push(&mut self, password: impl Into<String>) {
        self.entries.push_front(password.into());
        while self.entries.len() > HISTORY_CAP {
            if let Some(mut oldest) = self.entries.pop_back() {
                oldest.zeroize();
            }
        }
    }

    pub fn get(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        for mut entry in self.entries.drain(..) {
            entry.zeroize();
        }
    }
}

impl Drop for History {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn most_recent_first() {
        let mut history = History::new();
        history.push("one");
        history.push("two");
        assert_eq!(history.iter().collect::<Vec<_>>(), vec!["two", "one"]);
        assert_eq!(history.get(0), Some("two"));
    }

    #[test]
    fn sixth_push_evicts_oldest() {
        let mut history = History::new();
        for i in 1..=6 {
            history.push(format!("pw{i}"));
        }
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(
            history.iter().collect::<Vec<_>>(),
            vec!["pw6", "pw5", "pw4", "pw3", "pw2"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::new();
        history.push("same");
        history.push("same");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn clear_empties() {
        let mut history = History::new();
        history.push("x");
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
    }
}
