//! Read-only lexical resources consulted during graph and tree construction.
//!
//! All resources are loaded once before processing begins and passed into
//! the parser as an explicit, immutable [`LexicalResources`] bundle — there
//! is no ambient or per-sentence resource state.

pub mod function_words;
pub mod mwe;
pub mod pos_map;
pub mod rules;
pub mod thesaurus;

pub use function_words::FunctionWords;
pub use mwe::MweLexicon;
pub use pos_map::PosTagMap;
pub use rules::UniversalRuleSet;
pub use thesaurus::{CachedThesaurus, ThesaurusClient};

/// The bundle of lexical resources a parser consults.
///
/// The default bundle is entirely empty: no function words, no MWEs, no
/// universal rules, no thesaurus. Each part can be swapped independently,
/// which also makes testing with alternate lexicons trivial.
#[derive(Debug, Default)]
pub struct LexicalResources {
    pub function_words: FunctionWords,
    pub mwe: MweLexicon,
    pub rules: UniversalRuleSet,
    pub thesaurus: Option<CachedThesaurus>,
}

impl LexicalResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_function_words(mut self, function_words: FunctionWords) -> Self {
        self.function_words = function_words;
        self
    }

    pub fn with_mwe(mut self, mwe: MweLexicon) -> Self {
        self.mwe = mwe;
        self
    }

    pub fn with_rules(mut self, rules: UniversalRuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_thesaurus(mut self, thesaurus: CachedThesaurus) -> Self {
        self.thesaurus = Some(thesaurus);
        self
    }
}
