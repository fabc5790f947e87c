//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars
//! (`__` separates nested keys, e.g. `APP_SEARCH__SUGGEST_TOP_N`). Provides
//! typed accessors for the `data` and `search` sections and helpers to expand
//! `~` and `${VAR}` in paths.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub const DEFAULT_CATALOG_CSV: &str = "data/menu_kopi.csv";

/// Tuning knobs for both indices and the front-end defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub word_ngram_min: usize,
    pub word_ngram_max: usize,
    pub char_ngram_min: usize,
    pub char_ngram_max: usize,
    /// Word tokens shorter than this are not indexed.
    pub min_token_len: usize,
    pub suggest_top_n: usize,
    pub popular_top_n: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            word_ngram_min: 1,
            word_ngram_max: 2,
            char_ngram_min: 2,
            char_ngram_max: 4,
            min_token_len: 2,
            suggest_top_n: 3,
            popular_top_n: 5,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> crate::error::Result<()> {
        let ranges = [
            ("word_ngram", self.word_ngram_min, self.word_ngram_max),
            ("char_ngram", self.char_ngram_min, self.char_ngram_max),
        ];
        for (name, min, max) in ranges {
            if min == 0 || min > max {
                return Err(Error::InvalidConfig(format!("search.{name}_min/max must satisfy 1 <= min <= max (got {min}..{max})")));
            }
        }
        if self.min_token_len == 0 {
            return Err(Error::InvalidConfig("search.min_token_len must be at least 1".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub catalog_csv: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self { catalog_csv: DEFAULT_CATALOG_CSV.to_string() }
    }
}

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`Config::load`] but looks for the TOML files under `dir`.
    pub fn load_from(dir: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(dir.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn search_settings(&self) -> crate::error::Result<SearchSettings> {
        self.section("search")
    }

    pub fn data_settings(&self) -> crate::error::Result<DataSettings> {
        self.section("data")
    }

    /// Catalog CSV location with `~` and env vars expanded.
    pub fn catalog_path(&self) -> crate::error::Result<PathBuf> {
        Ok(expand_path(self.data_settings()?.catalog_csv))
    }

    fn section<T>(&self, key: &str) -> crate::error::Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if !self.figment.contains(key) {
            return Ok(T::default());
        }
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("'{}': {}", key, e)))
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.search_settings()?.validate()?;
        self.data_settings()?;
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
