// SPDX-License-Identifier: MPL-2.0
//! TOML slide decks.
//!
//! ```toml
//! [[slide]]
//! kind = "testimonial"
//! quote = "It just works."
//! author = "Ada"
//! role = "Engineer"
//!
//! [[slide]]
//! kind = "image"
//! path = "photos/harbor.jpg"
//! caption = "Harbor at dawn"
//! ```
//!
//! Relative image paths are resolved against the deck file's directory.

use super::{Slide, SlideDeck};
use crate::error::{DeckError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default, rename = "slide")]
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Parses a deck from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DeckFile =
            toml::from_str(content).map_err(|e| DeckError::Malformed(e.to_string()))?;
        Ok(Self::new(file.slides))
    }

    /// Reads and parses the deck at `path`.
    pub async fn load_deck(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await?;
        let mut deck = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            deck.resolve_relative_paths(base);
        }
        Ok(deck)
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            if let Slide::Image { path, .. } = slide {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    /// Built-in testimonials shown when no source is given.
    #[must_use]
    pub fn demo() -> Self {
        let testimonial = |quote: &str, author: &str, role: &str| Slide::Testimonial {
            quote: quote.to_string(),
            author: author.to_string(),
            role: Some(role.to_string()),
        };

        Self::new(vec![
            testimonial(
                "The onboarding took an afternoon instead of a week.",
                "Maya Lindqvist",
                "Operations Lead",
            ),
            testimonial(
                "Support answered before I finished my coffee.",
                "Tomás Herrera",
                "Freelance Designer",
            ),
            testimonial(
                "We replaced three internal tools with this one.",
                "Priya Raman",
                "Engineering Manager",
            ),
            testimonial(
                "Our customers noticed the difference in the first month.",
                "Jonas Weber",
                "Founder",
            ),
            testimonial(
                "Clear pricing, no surprises, and it keeps getting better.",
                "Amara Okafor",
                "Finance Director",
            ),
        ])
    }
}
