//! Linguistic annotation used by question generation.
//!
//! A [`Document`] is an ordered list of [`Sentence`]s, each carrying its
//! [`Token`]s and recognised [`Entity`] spans. Byte spans always refer to the
//! text the document was built from.

pub mod analyzer;
pub mod embedding;
pub mod lexicon;
pub mod ner;
pub mod segment;
pub mod tagger;

use serde::{Deserialize, Serialize};
use std::ops::Range;

pub use analyzer::RuleBasedAnalyzer;
pub use embedding::{cosine_sim, HashedEmbedder, VectorTable};
/// Universal Dependencies part-of-speech tags.
pub use rs_conllu::UPOS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Norp,
    Fac,
    Org,
    Gpe,
    Loc,
    Product,
    Event,
    WorkOfArt,
    Law,
    Language,
    Date,
    Time,
    Percent,
    Money,
    Quantity,
    Ordinal,
    Cardinal,
    Misc,
}

impl EntityLabel {
    /// Numeric and calendar labels never make good blanks or distractors.
    pub fn is_question_worthy(&self) -> bool {
        !matches!(
            self,
            EntityLabel::Cardinal | EntityLabel::Date | EntityLabel::Quantity
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Law => "LAW",
            EntityLabel::Language => "LANGUAGE",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Misc => "MISC",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub pos: UPOS,
    pub is_stop: bool,
    pub vector: Option<Vec<f32>>,
    pub span: Range<usize>,
}

impl Token {
    pub fn has_vector(&self) -> bool {
        self.vector.is_some()
    }

    /// Cosine similarity of the two token vectors, 0 when either is missing.
    pub fn similarity(&self, other: &Token) -> f32 {
        match (&self.vector, &other.vector) {
            (Some(a), Some(b)) => cosine_sim(a, b),
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub text: String,
    pub span: Range<usize>,
    pub tokens: Vec<Token>,
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub text: String,
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|s| s.tokens.iter())
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.sentences.iter().flat_map(|s| s.entities.iter())
    }
}

/// Annotation provider consumed by question generation.
///
/// Implementations must be immutable after construction so a single instance
/// can serve concurrent requests. Empty or whitespace-only input yields an
/// empty [`Document`].
#[cfg_attr(test, mockall::automock)]
pub trait TextAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Document;
}
