use std::collections::HashSet;

use super::lexicon::is_stop_word;
use super::segment::{self, RawToken};
use super::{ner, tagger, Document, Entity, HashedEmbedder, Sentence, TextAnalyzer, Token};

/// Deterministic English analyzer built from lexicons and suffix rules.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnalyzer {
    embedder: HashedEmbedder,
}

impl RuleBasedAnalyzer {
    pub fn new(embedder: HashedEmbedder) -> Self {
        Self { embedder }
    }

    fn build_sentence(
        &self,
        source: &str,
        raw: &[RawToken<'_>],
        proper_hints: &HashSet<String>,
    ) -> Option<Sentence> {
        let first = raw.first()?;
        let last = raw.last()?;
        let tags = tagger::tag_sentence(raw, proper_hints);

        let tokens = raw
            .iter()
            .zip(&tags)
            .map(|(t, pos)| Token {
                text: t.text.to_string(),
                pos: pos.clone(),
                is_stop: is_stop_word(&t.text.to_lowercase()),
                vector: self.embedder.embed(t.text),
                span: t.span.clone(),
            })
            .collect();

        let entities = ner::recognize(raw, &tags)
            .into_iter()
            .map(|(range, label)| {
                let span = raw[range.start].span.start..raw[range.end - 1].span.end;
                Entity {
                    text: source[span.clone()].to_string(),
                    label,
                    span,
                }
            })
            .collect();

        let span = first.span.start..last.span.end;
        Some(Sentence {
            text: source[span.clone()].to_string(),
            span,
            tokens,
            entities,
        })
    }
}

impl TextAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Document {
        if text.trim().is_empty() {
            return Document::empty();
        }

        let raw = segment::tokenize(text);
        let ranges = segment::split_sentences(&raw);
        let proper_hints = tagger::collect_proper_hints(&raw, &ranges);

        let sentences = ranges
            .into_iter()
            .filter_map(|range| self.build_sentence(text, &raw[range], &proper_hints))
            .collect();

        Document {
            text: text.to_string(),
            sentences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{EntityLabel, UPOS};

    #[test]
    fn empty_input_yields_empty_document() {
        let analyzer = RuleBasedAnalyzer::default();
        assert!(analyzer.analyze("").is_empty());
        assert!(analyzer.analyze("   \n\t ").is_empty());
    }

    #[test]
    fn annotates_sentences_tokens_and_entities() {
        let analyzer = RuleBasedAnalyzer::default();
        let text = "The Eiffel Tower is in Paris. Photosynthesis occurs in plants.";
        let doc = analyzer.analyze(text);

        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0].text, "The Eiffel Tower is in Paris.");
        assert_eq!(doc.sentences[1].text, "Photosynthesis occurs in plants.");

        let labels: Vec<(&str, EntityLabel)> = doc
            .entities()
            .map(|e| (e.text.as_str(), e.label))
            .collect();
        assert_eq!(
            labels,
            vec![("Eiffel Tower", EntityLabel::Fac), ("Paris", EntityLabel::Gpe)]
        );

        let the = &doc.sentences[0].tokens[0];
        assert!(the.is_stop);
        assert_eq!(the.pos, UPOS::DET);
        let period = doc.sentences[0].tokens.last().unwrap();
        assert!(!period.has_vector());
    }

    #[test]
    fn spans_index_the_source_text() {
        let analyzer = RuleBasedAnalyzer::default();
        let text = "  Marie Curie studied radium.\n\nShe won two prizes.";
        let doc = analyzer.analyze(text);
        for sentence in &doc.sentences {
            assert_eq!(&text[sentence.span.clone()], sentence.text);
            for token in &sentence.tokens {
                assert_eq!(&text[token.span.clone()], token.text);
            }
            for entity in &sentence.entities {
                assert_eq!(&text[entity.span.clone()], entity.text);
            }
        }
    }

    #[test]
    fn similar_tokens_score_higher() {
        let analyzer = RuleBasedAnalyzer::default();
        let doc = analyzer.analyze("plant plants tower");
        let tokens: Vec<&Token> = doc.tokens().collect();
        assert!(tokens[0].similarity(tokens[1]) > tokens[0].similarity(tokens[2]));
    }
}
