//! Distributional-thesaurus collaborator.
//!
//! The graph builder can remove links between distributionally similar
//! terms. Lookups go through a blocking external client behind the
//! [`ThesaurusClient`] trait; [`CachedThesaurus`] adds an in-memory cache
//! keyed by `term#coarsePOS` so each term is fetched at most once.

use std::sync::Mutex;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::ThesaurusError;
use crate::types::Token;

/// A client for an external distributional thesaurus.
///
/// `connect` is called once before any sentence is processed; a connection
/// failure there is fatal. `similar_terms` is a blocking call; failures
/// while running are surfaced to the caller rather than treated as "not
/// similar".
pub trait ThesaurusClient: Send + Sync {
    /// Establish the connection. Called once at resource initialization.
    fn connect(&mut self) -> Result<(), ThesaurusError>;

    /// The set of terms similar to `term`.
    fn similar_terms(&self, term: &str) -> Result<FxHashSet<String>, ThesaurusError>;
}

/// A connected thesaurus client with a local lookup cache.
pub struct CachedThesaurus {
    client: Box<dyn ThesaurusClient>,
    cache: Mutex<FxHashMap<String, FxHashSet<String>>>,
}

impl std::fmt::Debug for CachedThesaurus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self.cache.lock().map(|c| c.len()).unwrap_or(0);
        f.debug_struct("CachedThesaurus")
            .field("cached_terms", &cached)
            .finish()
    }
}

impl CachedThesaurus {
    /// Connect the client and wrap it. Fails if the connection cannot be
    /// established, aborting resource initialization.
    pub fn connect(mut client: Box<dyn ThesaurusClient>) -> Result<Self, ThesaurusError> {
        client.connect()?;
        Ok(Self {
            client,
            cache: Mutex::new(FxHashMap::default()),
        })
    }

    /// Whether `b` is listed among the terms similar to `a`.
    ///
    /// The similar-term set of `a` is fetched through the client on first
    /// use and cached for the lifetime of the resource.
    pub fn is_similar(&self, a: &str, b: &str) -> Result<bool, ThesaurusError> {
        let mut cache = self
            .cache
            .lock()
            .map_err(|_| ThesaurusError::Lookup {
                term: a.to_string(),
                message: "thesaurus cache poisoned".into(),
            })?;
        if let Some(similar) = cache.get(a) {
            return Ok(similar.contains(b));
        }
        let similar = self.client.similar_terms(a)?;
        let hit = similar.contains(b);
        cache.insert(a.to_string(), similar);
        Ok(hit)
    }
}

/// Build the thesaurus lookup key for a token: lemma (or surface form) plus
/// the coarse POS, joined by `#`.
pub fn term_key(token: &Token, use_lemma: bool) -> String {
    let word = if use_lemma {
        token.lemma_or_text().to_lowercase()
    } else {
        token.text.clone()
    };
    format!("{}#{}", word, coarse_pos(token.pos().unwrap_or("")))
}

/// Collapse a Penn-Treebank-style tag to the coarse POS used by thesaurus
/// entries.
fn coarse_pos(pos: &str) -> &str {
    if pos.starts_with("NNP") {
        "NP"
    } else if pos.starts_with("NNS") {
        "NN"
    } else if pos.starts_with("VB") {
        "VB"
    } else if pos.starts_with("JJ") {
        "JJ"
    } else {
        pos
    }
}
