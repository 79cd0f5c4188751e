// SPDX-License-Identifier: MPL-2.0
//! Ordered fragment loading.
//!
//! [`load_deck`] fetches every fragment of a [`Manifest`] strictly in slide
//! order and stops at the first failure: fragment `n + 1` is never requested
//! before fragment `n` has been fetched and parsed, and a failure drops
//! everything fetched so far. Fetching itself sits behind the
//! [`FragmentFetcher`] port so the pipeline can be exercised without a
//! network.

use super::fragment::Fragment;
use super::manifest::{FragmentLocation, Manifest};
use super::{sample, Deck};
use futures_util::{stream, StreamExt, TryStreamExt};
use reqwest::Url;
use std::future::Future;
use thiserror::Error;

/// User agent sent to content servers.
const USER_AGENT: &str = concat!("DeckView/", env!("CARGO_PKG_VERSION"));

/// Why a single fragment could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a response (server down, DNS, TLS...).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),
    /// A local fragment file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
    /// The sample deck has no fragment with this name.
    #[error("no bundled fragment named '{0}'")]
    Missing(String),
    /// The fragment was fetched but is not a valid slide document.
    #[error("malformed fragment: {0}")]
    Malformed(String),
}

impl LoadError {
    /// Returns the i18n message key describing this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoadError::Network(_) => "load-error-network",
            LoadError::Status(_) => "load-error-status",
            LoadError::Io(_) => "load-error-io",
            LoadError::Missing(_) => "load-error-missing",
            LoadError::Malformed(_) => "load-error-malformed",
        }
    }
}

/// The single error of a load sequence: which fragment failed, and why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fragment {position} ({location}) failed to load: {cause}")]
pub struct LoadFailure {
    pub position: usize,
    pub location: FragmentLocation,
    #[source]
    pub cause: LoadError,
}

/// Port for fetching the raw text of one fragment.
pub trait FragmentFetcher: Send + Sync {
    /// Fetches the fragment stored at `location`.
    fn fetch(
        &self,
        location: &FragmentLocation,
    ) -> impl Future<Output = Result<String, LoadError>> + Send;
}

/// Fetches remote fragments over HTTP, local ones from disk and sample ones
/// from the binary.
///
/// One HTTP client is built up front and shared by every remote fetch of a
/// load sequence. If it cannot be built, each remote fragment fails with
/// [`LoadError::Network`]; local and sample fragments are unaffected.
#[derive(Debug, Clone)]
pub struct DefaultFetcher {
    client: Result<reqwest::Client, LoadError>,
}

impl DefaultFetcher {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LoadError::Network(e.to_string()));
        if let Err(err) = &client {
            tracing::warn!(error = %err, "HTTP client unavailable");
        }
        Self { client }
    }
}

impl Default for DefaultFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentFetcher for DefaultFetcher {
    fn fetch(
        &self,
        location: &FragmentLocation,
    ) -> impl Future<Output = Result<String, LoadError>> + Send {
        let location = location.clone();
        // Cloning a reqwest client only bumps a reference count.
        let client = self.client.clone();
        async move {
            match location {
                FragmentLocation::Remote(url) => match client {
                    Ok(client) => fetch_remote(&client, url).await,
                    Err(err) => Err(err),
                },
                FragmentLocation::Local(path) => tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| LoadError::Io(e.to_string())),
                FragmentLocation::Bundled(name) => sample::fragment(&name),
            }
        }
    }
}

async fn fetch_remote(client: &reqwest::Client, url: Url) -> Result<String, LoadError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::Status(response.status().as_u16()));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))
}

/// Fetches and parses every fragment of `manifest`, in order.
///
/// # Errors
///
/// Returns the [`LoadFailure`] of the first fragment that cannot be fetched
/// or parsed. Remaining fragments are not requested.
pub async fn load_deck<F: FragmentFetcher>(
    fetcher: &F,
    manifest: &Manifest,
) -> Result<Deck, LoadFailure> {
    tracing::info!(slides = manifest.len(), "loading deck");

    let slides: Vec<Fragment> = stream::iter(manifest.iter())
        .then(|(position, location)| async move {
            tracing::debug!(position, %location, "fetching fragment");
            let failure = |cause| LoadFailure {
                position,
                location: location.clone(),
                cause,
            };

            let body = fetcher.fetch(location).await.map_err(failure)?;
            Fragment::parse(&body).map_err(|e| failure(LoadError::Malformed(e.to_string())))
        })
        .try_collect()
        .await?;

    let deck = Deck::new(slides);
    for id in deck.duplicate_panel_ids() {
        tracing::warn!(%id, "panel identifier used more than once; toggles are shared");
    }
    for id in deck.duplicate_note_ids() {
        tracing::warn!(%id, "note identifier used more than once; toggles are shared");
    }
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::manifest::DeckSource;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory fetcher that records the order of requests.
    #[derive(Default)]
    struct ScriptedFetcher {
        responses: HashMap<String, Result<String, LoadError>>,
        requested: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        fn with(mut self, name: &str, response: Result<String, LoadError>) -> Self {
            self.responses.insert(name.to_string(), response);
            self
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl FragmentFetcher for ScriptedFetcher {
        fn fetch(
            &self,
            location: &FragmentLocation,
        ) -> impl Future<Output = Result<String, LoadError>> + Send {
            let name = match location {
                FragmentLocation::Bundled(name) => name.clone(),
                other => other.to_string(),
            };
            self.requested.lock().unwrap().push(name.clone());
            let response = self
                .responses
                .get(&name)
                .cloned()
                .unwrap_or(Err(LoadError::Status(404)));
            async move { response }
        }
    }

    fn manifest(count: usize) -> Manifest {
        Manifest::from_pattern(&DeckSource::Sample, "s{n}", count).unwrap()
    }

    fn slide(title: &str) -> String {
        format!("title = \"{title}\"")
    }

    #[tokio::test]
    async fn loads_all_fragments_in_order() {
        let fetcher = ScriptedFetcher::default()
            .with("s1", Ok(slide("one")))
            .with("s2", Ok(slide("two")))
            .with("s3", Ok(slide("three")));

        let deck = load_deck(&fetcher, &manifest(3)).await.expect("deck loads");

        let titles: Vec<_> = deck.slides().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["one", "two", "three"]);
        assert_eq!(fetcher.requested(), vec!["s1", "s2", "s3"]);
    }

    #[tokio::test]
    async fn first_failure_stops_the_pipeline() {
        let fetcher = ScriptedFetcher::default()
            .with("s1", Ok(slide("one")))
            .with("s2", Err(LoadError::Status(500)))
            .with("s3", Ok(slide("three")));

        let failure = load_deck(&fetcher, &manifest(3)).await.unwrap_err();

        assert_eq!(failure.position, 2);
        assert_eq!(failure.cause, LoadError::Status(500));
        assert_eq!(fetcher.requested(), vec!["s1", "s2"]);
    }

    #[tokio::test]
    async fn malformed_fragment_fails_its_position() {
        let fetcher = ScriptedFetcher::default()
            .with("s1", Ok("<section>not toml</section>".to_string()))
            .with("s2", Ok(slide("two")));

        let failure = load_deck(&fetcher, &manifest(2)).await.unwrap_err();

        assert_eq!(failure.position, 1);
        assert!(matches!(failure.cause, LoadError::Malformed(_)));
        assert_eq!(fetcher.requested(), vec!["s1"]);
    }

    #[tokio::test]
    async fn default_fetcher_reads_local_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("slide-1.toml"), slide("local")).unwrap();
        let manifest = Manifest::from_pattern(
            &DeckSource::Directory(dir.path().to_path_buf()),
            "slide-{n}.toml",
            1,
        )
        .unwrap();

        let deck = load_deck(&DefaultFetcher::new(), &manifest).await.expect("deck loads");

        assert_eq!(deck.slides()[0].title, "local");
    }

    #[tokio::test]
    async fn default_fetcher_reports_missing_local_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let manifest = Manifest::from_pattern(
            &DeckSource::Directory(dir.path().to_path_buf()),
            "slide-{n}.toml",
            2,
        )
        .unwrap();

        let failure = load_deck(&DefaultFetcher::new(), &manifest).await.unwrap_err();

        assert_eq!(failure.position, 1);
        assert!(matches!(failure.cause, LoadError::Io(_)));
    }

    #[tokio::test]
    async fn default_fetcher_reports_missing_bundled_fragment() {
        let manifest =
            Manifest::from_names(&DeckSource::Sample, &["no-such-slide.toml"]).unwrap();

        let failure = load_deck(&DefaultFetcher::new(), &manifest).await.unwrap_err();

        assert_eq!(
            failure.cause,
            LoadError::Missing("no-such-slide.toml".to_string())
        );
    }

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            LoadError::Network(String::new()).i18n_key(),
            LoadError::Status(404).i18n_key(),
            LoadError::Io(String::new()).i18n_key(),
            LoadError::Missing(String::new()).i18n_key(),
            LoadError::Malformed(String::new()).i18n_key(),
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn failure_message_names_position_and_location() {
        let failure = LoadFailure {
            position: 4,
            location: FragmentLocation::Bundled("slide-4.toml".into()),
            cause: LoadError::Status(404),
        };
        assert_eq!(
            failure.to_string(),
            "fragment 4 (sample:slide-4.toml) failed to load: HTTP status 404"
        );
    }
}
