// Application state: everything the shell works on, owned in one place
// and handed to the menu loop.

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::recommend::{self, Recommendation};
use crate::store::UserStore;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct AppState {
    pub catalog: Catalog,
    pub users: UserStore,
    rng: StdRng,
}

impl AppState {
    /// State with an entropy-seeded random source.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            users: UserStore::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// State whose recommendations are reproducible for a given seed.
    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            users: UserStore::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn add_user(&mut self, name: &str) {
        self.users.add_user(name);
    }

    /// Record watch time. Only catalog genres and durations in
    /// `0..=u32::MAX` minutes can enter a watch history.
    pub fn record_watch(&mut self, name: &str, genre: &str, minutes: i64) -> AppResult<()> {
        if !self.catalog.contains(genre) {
            return Err(AppError::UnknownGenre(genre.to_string()));
        }
        let minutes = u32::try_from(minutes).map_err(|_| AppError::InvalidDuration(minutes))?;
        self.users.record_watch(name, genre, minutes)
    }

    pub fn recommend(&mut self, name: &str) -> AppResult<Recommendation> {
        recommend::recommend(&self.users, &self.catalog, name, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_genre_outside_catalog() {
        let mut state = AppState::with_seed(Catalog::reference(), 1);
        state.add_user("Alice");
        assert_eq!(
            state.record_watch("Alice", "Western", 10),
            Err(AppError::UnknownGenre("Western".into()))
        );
        assert!(state.users.find_user("Alice").unwrap().history.is_empty());
    }

    #[test]
    fn test_rejects_negative_duration() {
        let mut state = AppState::with_seed(Catalog::reference(), 1);
        state.add_user("Alice");
        assert_eq!(
            state.record_watch("Alice", "Drama", -5),
            Err(AppError::InvalidDuration(-5))
        );
        assert_eq!(
            state.record_watch("Alice", "Drama", i64::from(u32::MAX) + 1),
            Err(AppError::InvalidDuration(i64::from(u32::MAX) + 1))
        );
        assert!(state.users.find_user("Alice").unwrap().history.is_empty());

        state.record_watch("Alice", "Drama", 0).unwrap();
        assert_eq!(state.users.find_user("Alice").unwrap().history.minutes_for("Drama"), Some(0));
    }

    #[test]
    fn test_seeded_states_agree() {
        let mut a = AppState::with_seed(Catalog::reference(), 2024);
        let mut b = AppState::with_seed(Catalog::reference(), 2024);
        for state in [&mut a, &mut b] {
            state.add_user("Alice");
            state.record_watch("Alice", "Horror", 25).unwrap();
        }
        for _ in 0..5 {
            assert_eq!(a.recommend("Alice"), b.recommend("Alice"));
        }
    }
}
