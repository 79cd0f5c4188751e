// SPDX-License-Identifier: MPL-2.0
//! Sample deck embedded in the binary.
//!
//! This is the fallback entry point offered when a content server cannot be
//! reached: `deckview --sample` opens these slides without any network.

use super::loader::LoadError;
use super::manifest::{DeckSource, Manifest, ManifestError};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/deck/"]
struct SampleDeck;

/// File name pattern of the embedded slides.
pub const SAMPLE_PATTERN: &str = "slide-{n}.toml";

/// Number of embedded slides.
pub const SAMPLE_SLIDE_COUNT: usize = 8;

/// Returns the text of an embedded fragment.
///
/// # Errors
///
/// [`LoadError::Missing`] when no slide has this name, and
/// [`LoadError::Malformed`] when its bytes are not UTF-8.
pub fn fragment(name: &str) -> Result<String, LoadError> {
    let file = SampleDeck::get(name).ok_or_else(|| LoadError::Missing(name.to_string()))?;
    decode(name, file.data.as_ref())
}

fn decode(name: &str, bytes: &[u8]) -> Result<String, LoadError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|e| LoadError::Malformed(format!("{name}: {e}")))
}

/// Manifest covering every embedded slide.
///
/// # Errors
///
/// Never fails for the shipped pattern; the error type is shared with the
/// other manifest constructors.
pub fn manifest() -> Result<Manifest, ManifestError> {
    Manifest::from_pattern(&DeckSource::Sample, SAMPLE_PATTERN, SAMPLE_SLIDE_COUNT)
}
