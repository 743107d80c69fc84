// SPDX-License-Identifier: MPL-2.0
//! Application-edge errors.
//!
//! The carousel core never fails: clamping replaces error signaling there.
//! Errors only surface while reading configuration or loading slide decks.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Deck Error: {0}")]
    Deck(DeckError),
}

/// Specific problems found while reading a slide deck.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck file is not valid TOML or does not match the deck schema.
    #[error("malformed deck: {0}")]
    Malformed(String),

    /// The source is neither a `.toml` deck nor a directory.
    #[error("unsupported slide source")]
    UnsupportedSource,
}

impl DeckError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            DeckError::Malformed(_) => "error-deck-malformed",
            DeckError::UnsupportedSource => "error-deck-unsupported-source",
        }
    }
}

impl Error {
    /// Returns the i18n message key used when reporting this error to the user.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "notification-config-load-error",
            Error::Deck(e) => e.i18n_key(),
        }
    }
}

impl From<DeckError> for Error {
    fn from(err: DeckError) -> Self {
        Error::Deck(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
