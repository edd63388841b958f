// Catalog module: the fixed genre -> titles table. It is built once at
// startup (either the built-in reference table or a JSON file) and is
// only ever read afterwards.

use crate::error::{AppError, AppResult};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// One genre and its ordered list of titles.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GenreEntry {
    pub name: String,
    pub titles: Vec<String>,
}

/// On-disk shape of a catalog file. Genres keep the order of the file,
/// which is also the order they are listed in the genre menu.
#[derive(Deserialize, Debug)]
struct CatalogFile {
    genres: Vec<GenreEntry>,
}

/// Immutable genre -> titles mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<GenreEntry>,
}

impl Catalog {
    /// Build a catalog from an ordered list of genres.
    ///
    /// Rejects an empty list, unnamed genres, duplicate genre names and
    /// genres without titles.
    pub fn new(entries: Vec<GenreEntry>) -> AppResult<Self> {
        if entries.is_empty() {
            return Err(AppError::Catalog("no genres configured".into()));
        }
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.name.trim().is_empty() {
                return Err(AppError::Catalog("genre with an empty name".into()));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(AppError::Catalog(format!("duplicate genre {}", entry.name)));
            }
            if entry.titles.is_empty() {
                return Err(AppError::Catalog(format!("genre {} has no titles", entry.name)));
            }
        }
        Ok(Catalog { entries })
    }

    /// The reference catalog: five genres with three titles each.
    pub fn reference() -> Self {
        let table: [(&str, [&str; 3]); 5] = [
            ("Action", ["The Dark Knight", "Mad Max: Fury Road", "John Wick"]),
            ("Comedy", ["Superbad", "The Hangover", "Bridesmaids"]),
            ("Drama", ["The Shawshank Redemption", "Forrest Gump", "The Godfather"]),
            ("Sci-Fi", ["Inception", "Blade Runner 2049", "The Matrix"]),
            ("Horror", ["The Conjuring", "Hereditary", "Get Out"]),
        ];
        let entries = table
            .iter()
            .map(|(name, titles)| GenreEntry {
                name: name.to_string(),
                titles: titles.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        Catalog { entries }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = serde_json::from_str(json).context("Parsing catalog json")?;
        Ok(Catalog::new(file.genres)?)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Catalog::from_json(&data).with_context(|| format!("Loading catalog {}", path.display()))
    }

    /// Genre names in menu order.
    pub fn genres_available(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Titles for `genre`, empty when the genre is unknown.
    pub fn titles_for(&self, genre: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.name == genre)
            .map(|e| e.titles.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.entries.iter().any(|e| e.name == genre)
    }

    /// Resolve a 1-based menu index to a genre name.
    pub fn genre_at(&self, index: i64) -> AppResult<&str> {
        if index < 1 || index as u64 > self.entries.len() as u64 {
            return Err(AppError::InvalidGenreChoice(index));
        }
        Ok(self.entries[(index - 1) as usize].name.as_str())
    }
}
