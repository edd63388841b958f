// User store: the in-memory list of users and their per-genre watch time.

use crate::error::{AppError, AppResult};
use tracing::{debug, info};

/// Accumulated minutes for one genre.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEntry {
    pub genre: String,
    pub minutes: u64,
}

/// Per-genre watch time, kept in the order genres were first recorded.
/// Unseen genres have no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchHistory {
    entries: Vec<WatchEntry>,
}

impl WatchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `minutes` to `genre`, creating the entry if needed.
    pub fn record(&mut self, genre: &str, minutes: u32) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.genre == genre) {
            existing.minutes = existing.minutes.saturating_add(u64::from(minutes));
        } else {
            self.entries.push(WatchEntry {
                genre: genre.to_string(),
                minutes: u64::from(minutes),
            });
        }
    }

    pub fn minutes_for(&self, genre: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.genre == genre).map(|e| e.minutes)
    }

    pub fn entries(&self) -> &[WatchEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub history: WatchHistory,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: WatchHistory::new(),
        }
    }
}

/// Users in insertion order. Names are not unique: lookups resolve to the
/// first user added under a name.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, name: &str) {
        self.users.push(User::new(name));
        info!(user = %name, total = self.users.len(), "user added");
    }

    /// First user whose name matches exactly (case-sensitive).
    pub fn find_user(&self, name: &str) -> AppResult<&User> {
        self.users
            .iter()
            .find(|u| u.name == name)
            .ok_or_else(|| AppError::UserNotFound(name.to_string()))
    }

    fn find_user_mut(&mut self, name: &str) -> AppResult<&mut User> {
        self.users
            .iter_mut()
            .find(|u| u.name == name)
            .ok_or_else(|| AppError::UserNotFound(name.to_string()))
    }

    /// Add watch time for `name` in `genre`. Nothing changes when the user
    /// does not exist.
    pub fn record_watch(&mut self, name: &str, genre: &str, minutes: u32) -> AppResult<()> {
        let user = self.find_user_mut(name)?;
        user.history.record(genre, minutes);
        debug!(user = %name, genre = %genre, minutes, "watch recorded");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_per_genre() {
        let mut store = UserStore::new();
        store.add_user("Alice");
        store.record_watch("Alice", "Action", 30).unwrap();
        store.record_watch("Alice", "Comedy", 10).unwrap();
        store.record_watch("Alice", "Action", 15).unwrap();
        store.record_watch("Alice", "Action", 0).unwrap();

        let history = &store.find_user("Alice").unwrap().history;
        assert_eq!(history.minutes_for("Action"), Some(45));
        assert_eq!(history.minutes_for("Comedy"), Some(10));
        assert_eq!(history.minutes_for("Drama"), None);
    }

    #[test]
    fn test_history_keeps_first_recorded_order() {
        let mut history = WatchHistory::new();
        history.record("Horror", 5);
        history.record("Action", 50);
        history.record("Horror", 5);
        let genres: Vec<_> = history.entries().iter().map(|e| e.genre.as_str()).collect();
        assert_eq!(genres, vec!["Horror", "Action"]);
    }

    #[test]
    fn test_unknown_user_is_not_found_and_nothing_changes() {
        let mut store = UserStore::new();
        store.add_user("Alice");
        assert_eq!(
            store.record_watch("Bob", "Action", 5),
            Err(AppError::UserNotFound("Bob".into()))
        );
        assert!(store.find_user("Alice").unwrap().history.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut store = UserStore::new();
        store.add_user("Alice");
        assert!(store.find_user("alice").is_err());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let mut store = UserStore::new();
        store.add_user("Sam");
        store.add_user("Sam");
        assert_eq!(store.len(), 2);

        store.record_watch("Sam", "Drama", 20).unwrap();
        assert_eq!(store.users[0].history.minutes_for("Drama"), Some(20));
        assert!(store.users[1].history.is_empty());
    }

    #[test]
    fn test_minutes_saturate() {
        let mut history = WatchHistory::new();
        history.entries.push(WatchEntry {
            genre: "Drama".into(),
            minutes: u64::MAX - 1,
        });
        history.record("Drama", 10);
        assert_eq!(history.minutes_for("Drama"), Some(u64::MAX));
    }
}
