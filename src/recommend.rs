// Recommendation engine: pick the user's most-watched genre and suggest a
// random title from it.

use crate::catalog::Catalog;
use crate::error::{AppError, AppResult};
use crate::store::{UserStore, WatchHistory};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub genre: String,
    pub title: String,
}

/// Genre with the most accumulated minutes.
///
/// Entries are scanned in the order they were first recorded and a later
/// entry only replaces the current best when it has strictly more minutes,
/// so ties go to the genre recorded first. Genres with zero minutes never
/// win; a history with nothing above zero has no favorite.
pub fn favorite_genre(history: &WatchHistory) -> Option<&str> {
    let mut best: Option<&str> = None;
    let mut max_minutes = 0;
    for entry in history.entries() {
        if entry.minutes > max_minutes {
            max_minutes = entry.minutes;
            best = Some(entry.genre.as_str());
        }
    }
    best
}

/// Recommend a title for `name` using `rng` for the title draw.
pub fn recommend<R: Rng + ?Sized>(
    store: &UserStore,
    catalog: &Catalog,
    name: &str,
    rng: &mut R,
) -> AppResult<Recommendation> {
    let user = store.find_user(name)?;
    let genre = favorite_genre(&user.history).ok_or_else(|| AppError::NoHistory(name.to_string()))?;
    let title = catalog
        .titles_for(genre)
        .choose(rng)
        .ok_or_else(|| AppError::NoTitles(genre.to_string()))?;

    debug!(user = %name, genre = %genre, title = %title, "recommendation made");
    Ok(Recommendation {
        genre: genre.to_string(),
        title: title.clone(),
    })
}
