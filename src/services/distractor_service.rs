use rand::Rng;
use std::collections::BTreeSet;

use crate::nlp::{cosine_sim, Document, TextAnalyzer, Token, VectorTable, UPOS};

pub const DISTRACTOR_COUNT: usize = 3;

/// Document-wide set of lowercase terms eligible as wrong answers.
///
/// Backed by a sorted set so iteration order, and therefore seeded
/// generation, does not depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePool {
    entries: BTreeSet<String>,
}

impl CandidatePool {
    /// Entity texts outside CARDINAL/DATE/QUANTITY plus non-stopword nouns.
    pub fn build(doc: &Document) -> Self {
        let entities = doc
            .entities()
            .filter(|e| e.label.is_question_worthy())
            .map(|e| e.text.to_lowercase());
        let nouns = doc
            .tokens()
            .filter(|t| t.pos == UPOS::NOUN && !t.is_stop)
            .map(|t| t.text.to_lowercase());

        Self {
            entries: entities.chain(nouns).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

struct RankedEntry {
    text: String,
    lower: String,
    vector: Option<Vec<f32>>,
}

/// Ranks pool entries against a subject by embedding similarity.
///
/// Vectors come from the precomputed table when one is supplied. Otherwise
/// every entry is annotated once up front and its first token's vector is
/// used.
pub struct DistractorRanker {
    entries: Vec<RankedEntry>,
}

impl DistractorRanker {
    pub fn new(pool: &CandidatePool, analyzer: &dyn TextAnalyzer, table: &VectorTable) -> Self {
        let entries = pool
            .iter()
            .map(|text| RankedEntry {
                text: text.to_string(),
                lower: text.to_lowercase(),
                vector: term_vector(analyzer, table, text),
            })
            .collect();
        Self { entries }
    }

    /// Up to [`DISTRACTOR_COUNT`] distinct distractors for `subject`.
    ///
    /// Entries are taken in descending similarity order, skipping any whose
    /// lowercase text equals the subject's. If that leaves fewer than
    /// [`DISTRACTOR_COUNT`], random remaining entries top the list up.
    pub fn pick<R: Rng + ?Sized>(
        &self,
        subject: &str,
        subject_vector: Option<&[f32]>,
        rng: &mut R,
    ) -> Vec<String> {
        let subject_lower = subject.to_lowercase();

        let mut scored: Vec<(f32, &RankedEntry)> = self
            .entries
            .iter()
            .map(|entry| (score(subject_vector, entry.vector.as_deref()), entry))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut distractors: Vec<String> = scored
            .iter()
            .filter(|(_, entry)| entry.lower != subject_lower)
            .take(DISTRACTOR_COUNT)
            .map(|(_, entry)| entry.text.clone())
            .collect();

        let mut remaining: Vec<&str> = self
            .entries
            .iter()
            .filter(|e| e.lower != subject_lower && !distractors.contains(&e.text))
            .map(|e| e.text.as_str())
            .collect();
        while distractors.len() < DISTRACTOR_COUNT && !remaining.is_empty() {
            let picked = remaining.remove(rng.gen_range(0..remaining.len()));
            distractors.push(picked.to_string());
        }

        distractors
    }
}

fn score(subject: Option<&[f32]>, candidate: Option<&[f32]>) -> f32 {
    match (subject, candidate) {
        (Some(s), Some(c)) => cosine_sim(s, c),
        _ => 0.0,
    }
}

/// Vector for `text`: the table's entry when a table is in use, else the
/// first token of `text` as annotated on its own.
pub fn term_vector(analyzer: &dyn TextAnalyzer, table: &VectorTable, text: &str) -> Option<Vec<f32>> {
    if !table.is_empty() {
        return table.get(text).map(<[f32]>::to_vec);
    }
    first_token(analyzer, text).and_then(|t| t.vector)
}

/// First token of `text` as annotated on its own.
pub fn first_token(analyzer: &dyn TextAnalyzer, text: &str) -> Option<Token> {
    analyzer.analyze(text).tokens().next().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::RuleBasedAnalyzer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "The Eiffel Tower is in Paris. Photosynthesis occurs in plants.";

    #[test]
    fn pool_holds_lowercase_entities_and_nouns() {
        let doc = RuleBasedAnalyzer::default().analyze(SAMPLE);
        let pool = CandidatePool::build(&doc);
        let entries: Vec<&str> = pool.iter().collect();
        assert_eq!(entries, vec!["eiffel tower", "paris", "photosynthesis", "plants"]);
    }

    #[test]
    fn pool_building_is_idempotent() {
        let doc = RuleBasedAnalyzer::default().analyze(SAMPLE);
        assert_eq!(CandidatePool::build(&doc), CandidatePool::build(&doc));
    }

    #[test]
    fn numeric_entities_and_stopwords_are_excluded() {
        let doc = RuleBasedAnalyzer::default()
            .analyze("In 1889 the tower was 300 m tall. Something happened there.");
        let pool = CandidatePool::build(&doc);
        assert!(!pool.contains("1889"));
        assert!(!pool.contains("300 m"));
        assert!(!pool.contains("something"));
        assert!(pool.contains("tower"));
    }

    #[test]
    fn empty_document_gives_empty_pool() {
        let pool = CandidatePool::build(&Document::empty());
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
    }

    #[test]
    fn ranking_excludes_subject_case_insensitively() {
        let analyzer = RuleBasedAnalyzer::default();
        let table = VectorTable::default();
        let pool = CandidatePool::build(&analyzer.analyze(SAMPLE));
        let ranker = DistractorRanker::new(&pool, &analyzer, &table);
        let mut rng = StdRng::seed_from_u64(7);

        let subject = term_vector(&analyzer, &table, "Paris");
        let picked = ranker.pick("Paris", subject.as_deref(), &mut rng);
        assert_eq!(picked.len(), DISTRACTOR_COUNT);
        assert!(!picked.iter().any(|d| d.eq_ignore_ascii_case("paris")));
    }

    #[test]
    fn precomputed_vectors_order_by_meaning() {
        let analyzer = RuleBasedAnalyzer::default();
        let pool = CandidatePool::build(&analyzer.analyze("Plants need water. Rockets reach orbit."));
        let table = VectorTable::from_pairs(
            [
                ("plants", vec![1.0, 0.0, 0.0]),
                ("water", vec![0.6, 0.0, 0.8]),
                ("rockets", vec![0.0, 1.0, 0.0]),
                ("orbit", vec![0.1, 0.9, 0.0]),
            ]
            .map(|(t, v)| (t.to_string(), v)),
        );
        let ranker = DistractorRanker::new(&pool, &analyzer, &table);
        let mut rng = StdRng::seed_from_u64(1);

        let satellite: [f32; 3] = [0.0, 1.0, 0.1];
        let picked = ranker.pick("satellite", Some(&satellite), &mut rng);
        assert_eq!(picked[..2], ["rockets".to_string(), "orbit".to_string()]);
    }

    #[test]
    fn table_entries_missing_from_the_pool_text_score_zero() {
        let analyzer = RuleBasedAnalyzer::default();
        let table = VectorTable::from_pairs([("unrelated".to_string(), vec![1.0])]);
        assert_eq!(term_vector(&analyzer, &table, "plants"), None);
        assert!(term_vector(&analyzer, &VectorTable::default(), "plants").is_some());
    }

    #[test]
    fn verbs_stay_out_of_the_pool() {
        let doc = RuleBasedAnalyzer::default()
            .analyze("Paris hosts museums and Paris hosts gardens near the Seine River.");
        let pool = CandidatePool::build(&doc);
        assert!(!pool.contains("hosts"));
        assert!(pool.contains("museums"));
        assert!(pool.contains("seine river"));
    }

    #[test]
    fn small_pool_yields_fewer_distractors() {
        let analyzer = RuleBasedAnalyzer::default();
        let pool = CandidatePool::build(&analyzer.analyze("Photosynthesis occurs in plants."));
        let ranker = DistractorRanker::new(&pool, &analyzer, &VectorTable::default());
        let mut rng = StdRng::seed_from_u64(3);

        let picked = ranker.pick("plants", None, &mut rng);
        assert_eq!(picked, vec!["photosynthesis".to_string()]);
    }
}
