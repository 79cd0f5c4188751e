// SPDX-License-Identifier: MPL-2.0
//! Ordered fragment locations.
//!
//! A [`Manifest`] maps slide positions `1..=N` to the place each fragment is
//! fetched from. It is built once at startup, either from an explicit list
//! of fragment names or from a slide count and a file name pattern, resolved
//! against a [`DeckSource`].

use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Placeholder replaced by the slide position in fragment patterns.
pub const POSITION_PLACEHOLDER: &str = "{n}";

/// Errors raised while building a manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("a deck needs at least one fragment")]
    Empty,
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("cannot resolve fragment '{name}': {reason}")]
    InvalidFragment { name: String, reason: String },
    #[error("fragment pattern '{0}' has no {{n}} placeholder")]
    PatternWithoutPlaceholder(String),
}

/// Where a single fragment is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentLocation {
    /// Served over HTTP by a content server.
    Remote(Url),
    /// Read from the local filesystem.
    Local(PathBuf),
    /// Embedded in the binary (sample deck).
    Bundled(String),
}

impl fmt::Display for FragmentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FragmentLocation::Remote(url) => write!(f, "{url}"),
            FragmentLocation::Local(path) => write!(f, "{}", path.display()),
            FragmentLocation::Bundled(name) => write!(f, "sample:{name}"),
        }
    }
}

/// Base against which fragment names are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// A content server; names are joined onto this URL.
    Server(Url),
    /// A directory on disk.
    Directory(PathBuf),
    /// The sample deck embedded in the binary.
    Sample,
}

impl DeckSource {
    /// Parses a server base URL, treating it as a directory.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::InvalidBaseUrl`] for unparsable URLs and for
    /// schemes other than `http`/`https`.
    pub fn server(base_url: &str) -> Result<Self, ManifestError> {
        let trimmed = base_url.trim();
        let normalized = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        let url = Url::parse(&normalized).map_err(|e| ManifestError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ManifestError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(DeckSource::Server(url))
    }

    fn resolve(&self, name: &str) -> Result<FragmentLocation, ManifestError> {
        match self {
            DeckSource::Server(base) => base
                .join(name)
                .map(FragmentLocation::Remote)
                .map_err(|e| ManifestError::InvalidFragment {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
            DeckSource::Directory(dir) => Ok(FragmentLocation::Local(dir.join(name))),
            DeckSource::Sample => Ok(FragmentLocation::Bundled(name.to_string())),
        }
    }
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::Server(url) => write!(f, "{url}"),
            DeckSource::Directory(dir) => write!(f, "{}", dir.display()),
            DeckSource::Sample => f.write_str("sample deck"),
        }
    }
}

/// Ordered list of fragment locations, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    locations: Vec<FragmentLocation>,
}

impl Manifest {
    /// Wraps an ordered list of locations.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Empty`] when `locations` is empty.
    pub fn new(locations: Vec<FragmentLocation>) -> Result<Self, ManifestError> {
        if locations.is_empty() {
            return Err(ManifestError::Empty);
        }
        Ok(Self { locations })
    }

    /// Builds `count` locations by substituting the position into `pattern`.
    ///
    /// # Errors
    ///
    /// Fails when `count` is zero, the pattern lacks the `{n}` placeholder,
    /// or a name cannot be resolved against `source`.
    pub fn from_pattern(
        source: &DeckSource,
        pattern: &str,
        count: usize,
    ) -> Result<Self, ManifestError> {
        if !pattern.contains(POSITION_PLACEHOLDER) {
            return Err(ManifestError::PatternWithoutPlaceholder(pattern.to_string()));
        }

        let locations = (1..=count)
            .map(|position| {
                source.resolve(&pattern.replace(POSITION_PLACEHOLDER, &position.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(locations)
    }

    /// Builds locations from explicit fragment names, in order.
    ///
    /// # Errors
    ///
    /// Fails when `names` is empty or a name cannot be resolved.
    pub fn from_names<S: AsRef<str>>(
        source: &DeckSource,
        names: &[S],
    ) -> Result<Self, ManifestError> {
        let locations = names
            .iter()
            .map(|name| source.resolve(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(locations)
    }

    /// Number of slides, at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Location of the fragment at a 1-based position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FragmentLocation> {
        position
            .checked_sub(1)
            .and_then(|index| self.locations.get(index))
    }

    /// Iterates `(position, location)` pairs in slide order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &FragmentLocation)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(index, location)| (index + 1, location))
    }
}
