// SPDX-License-Identifier: MPL-2.0
//! Slide content fed to the carousel.
//!
//! A slide source is either a TOML deck file, a directory of images, or
//! nothing at all (the built-in demo testimonials). Loading is async and
//! happens once at startup.

mod deck;
mod scanner;

pub use scanner::{is_supported_image, SUPPORTED_EXTENSIONS};

use crate::app::config::SortOrder;
use crate::error::{DeckError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// One card in the carousel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Slide {
    Testimonial {
        quote: String,
        author: String,
        #[serde(default)]
        role: Option<String>,
    },
    Image {
        path: PathBuf,
        #[serde(default)]
        caption: Option<String>,
    },
}

/// Ordered slide content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// Loads slides from `source`, or the demo deck when there is none.
///
/// - a directory is scanned for images, ordered by `sort_order`
/// - a `.toml` file is parsed as a deck
/// - anything else is [`DeckError::UnsupportedSource`]
pub async fn load(source: Option<PathBuf>, sort_order: SortOrder) -> Result<SlideDeck> {
    let Some(source) = source else {
        return Ok(SlideDeck::demo());
    };

    let metadata = tokio::fs::metadata(&source).await?;
    let deck = if metadata.is_dir() {
        scanner::scan_directory(&source, sort_order).await?
    } else if is_deck_file(&source) {
        SlideDeck::load_deck(&source).await?
    } else {
        return Err(DeckError::UnsupportedSource.into());
    };

    tracing::info!(
        source = %source.display(),
        slides = deck.len(),
        "slides loaded"
    );
    Ok(deck)
}

fn is_deck_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}
