//! akasha: a bilingual blog content engine
//!
//! Loads blog posts from a content directory holding two kinds of sources
//! (structured JSON records and front-matter markdown documents), merges
//! them into one date-ordered collection, and exposes a small CLI plus a
//! best-effort generative chat terminal.

pub mod chat;
pub mod commands;
pub mod config;
pub mod content;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application: configuration plus resolved directories
#[derive(Clone)]
pub struct Akasha {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Akasha {
    /// Create an instance from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Create an instance from an explicit configuration
    pub fn with_config<P: AsRef<Path>>(config: config::SiteConfig, base_dir: P) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Directory holding post sources
    pub fn content_dir(&self) -> PathBuf {
        self.base_dir.join(&self.config.content_dir)
    }

    /// Load all posts, sorted by date descending
    pub fn load_posts(&self) -> Vec<content::Post> {
        content::ContentLoader::new(self).load_posts()
    }
}
