// Startup configuration: where the catalog comes from.

use crate::catalog::Catalog;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming a JSON catalog file.
pub const CATALOG_ENV: &str = "WATCHLOG_CATALOG";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog file to load. `None` means the built-in reference catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Read `WATCHLOG_CATALOG`. Unset or empty keeps the built-in catalog.
    pub fn from_env() -> Self {
        let catalog_path = std::env::var_os(CATALOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Config { catalog_path }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let catalog = Catalog::load(path)?;
                info!(
                    path = %path.display(),
                    genres = catalog.genres_available().len(),
                    "catalog loaded from file"
                );
                Ok(catalog)
            }
            None => {
                info!("using built-in catalog");
                Ok(Catalog::reference())
            }
        }
    }
}
