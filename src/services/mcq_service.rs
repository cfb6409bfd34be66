use rand::seq::SliceRandom;
use rand::Rng;
use regex::{NoExpand, Regex};
use std::collections::HashMap;

use crate::models::mcq::{option_letter, McqRecord};
use crate::nlp::{Document, Sentence, TextAnalyzer, VectorTable, UPOS};
use crate::services::distractor_service::{term_vector, CandidatePool, DistractorRanker};

/// Placeholder written into the stem where the subject used to be.
pub const BLANK: &str = "______";

/// Fewer options than this and the question is dropped.
const MIN_OPTIONS: usize = 2;

/// Turns free text into fill-in-the-blank multiple-choice questions.
pub struct McqGenerator<'a> {
    analyzer: &'a dyn TextAnalyzer,
    vectors: VectorTable,
}

impl<'a> McqGenerator<'a> {
    pub fn new(analyzer: &'a dyn TextAnalyzer) -> Self {
        Self {
            analyzer,
            vectors: VectorTable::default(),
        }
    }

    /// Ranks distractors with precomputed vectors instead of the analyzer's.
    pub fn with_vectors(mut self, vectors: VectorTable) -> Self {
        self.vectors = vectors;
        self
    }

    /// Generates at most `min(num_questions, sentence count)` questions.
    ///
    /// Sentences that yield no subject, no blank or too few options are
    /// skipped, so the result can be shorter than requested or empty.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        text: &str,
        num_questions: usize,
        rng: &mut R,
    ) -> Vec<McqRecord> {
        if num_questions == 0 || text.trim().is_empty() {
            return Vec::new();
        }
        let doc = self.analyzer.analyze(text);
        self.generate_from_document(&doc, num_questions, rng)
    }

    pub fn generate_from_document<R: Rng + ?Sized>(
        &self,
        doc: &Document,
        num_questions: usize,
        rng: &mut R,
    ) -> Vec<McqRecord> {
        if doc.is_empty() || num_questions == 0 {
            return Vec::new();
        }

        let pool = CandidatePool::build(doc);
        tracing::debug!(pool_size = pool.len(), sentences = doc.sentences.len(), "built candidate pool");
        let ranker = DistractorRanker::new(&pool, self.analyzer, &self.vectors);

        let target = num_questions.min(doc.sentences.len());
        let mut order: Vec<&Sentence> = doc.sentences.iter().collect();
        order.shuffle(rng);

        let mut questions = Vec::with_capacity(target);
        for sentence in order {
            if questions.len() >= target {
                break;
            }
            match self.question_for(sentence, &ranker, rng) {
                Some(q) => questions.push(q),
                None => tracing::trace!(sentence = %sentence.text, "skipped sentence"),
            }
        }

        tracing::debug!(requested = num_questions, generated = questions.len(), "generation finished");
        questions
    }

    fn question_for<R: Rng + ?Sized>(
        &self,
        sentence: &Sentence,
        ranker: &DistractorRanker,
        rng: &mut R,
    ) -> Option<McqRecord> {
        let subject = pick_subject(sentence, rng)?;
        let stem = mask_subject(&sentence.text, &subject)?;

        let subject_vector = term_vector(self.analyzer, &self.vectors, &subject);
        let distractors = ranker.pick(&subject, subject_vector.as_deref(), rng);

        let mut options = Vec::with_capacity(distractors.len() + 1);
        options.push(subject.clone());
        options.extend(distractors);
        if options.len() < MIN_OPTIONS {
            return None;
        }
        options.shuffle(rng);

        let correct_index = options.iter().position(|o| *o == subject)?;
        let options = options
            .into_iter()
            .enumerate()
            .map(|(idx, text)| (option_letter(idx), text))
            .collect();

        Some(McqRecord {
            stem,
            options,
            correct_letter: option_letter(correct_index),
        })
    }
}

/// A random question-worthy entity, else the sentence's most frequent noun.
fn pick_subject<R: Rng + ?Sized>(sentence: &Sentence, rng: &mut R) -> Option<String> {
    let entities: Vec<&str> = sentence
        .entities
        .iter()
        .filter(|e| e.label.is_question_worthy())
        .map(|e| e.text.as_str())
        .collect();

    if let Some(entity) = entities.choose(rng) {
        return Some(entity.to_string());
    }
    most_frequent_noun(sentence).map(str::to_string)
}

/// Ties go to the noun seen first.
fn most_frequent_noun(sentence: &Sentence) -> Option<&str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for token in sentence
        .tokens
        .iter()
        .filter(|t| t.pos == UPOS::NOUN && !t.is_stop)
    {
        let count = counts.entry(token.text.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.text.as_str());
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for text in order {
        let count = counts[text];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((text, count));
        }
    }
    best.map(|(text, _)| text)
}

/// Replaces the first whole-word occurrence of `subject` with [`BLANK`].
///
/// Word boundaries follow `\b`. Returns `None` when nothing matched or the
/// subject is still readable in the stem, either repeated or inside a
/// longer word. Text outside the blank is left untouched.
pub fn mask_subject(sentence: &str, subject: &str) -> Option<String> {
    if subject.is_empty() {
        return None;
    }
    let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(subject))).ok()?;
    if !pattern.is_match(sentence) {
        return None;
    }

    let stem = pattern.replacen(sentence, 1, NoExpand(BLANK)).into_owned();
    if stem.contains(subject) {
        return None;
    }
    Some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{MockTextAnalyzer, RuleBasedAnalyzer};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SAMPLE: &str = "The Eiffel Tower is in Paris. Photosynthesis occurs in plants.";

    fn generate(text: &str, n: usize, seed: u64) -> Vec<McqRecord> {
        let analyzer = RuleBasedAnalyzer::default();
        let mut rng = StdRng::seed_from_u64(seed);
        McqGenerator::new(&analyzer).generate(text, n, &mut rng)
    }

    #[test]
    fn sample_text_yields_two_questions() {
        let questions = generate(SAMPLE, 2, 42);
        assert_eq!(questions.len(), 2);

        let expected = ["Eiffel Tower", "Paris", "Photosynthesis", "plants"];
        for q in &questions {
            assert!((2..=4).contains(&q.options.len()));
            let correct = q.correct_text().unwrap();
            assert!(expected.contains(&correct), "unexpected subject {correct}");
            assert!(q.stem.contains(BLANK));
            assert!(!q.stem.contains(correct));
        }
    }

    #[test]
    fn letters_are_contiguous_and_correct_letter_resolves() {
        for seed in 0..20 {
            for q in generate(SAMPLE, 2, seed) {
                let letters: Vec<&str> = q.options.keys().map(String::as_str).collect();
                let expected: Vec<String> = (0..q.options.len()).map(option_letter).collect();
                assert_eq!(letters, expected.iter().map(String::as_str).collect::<Vec<_>>());
                assert!(q.options.contains_key(&q.correct_letter));

                let correct = q.correct_text().unwrap();
                let occurrences = q.options.values().filter(|v| *v == correct).count();
                assert_eq!(occurrences, 1);
            }
        }
    }

    #[test]
    fn same_seed_same_output() {
        let text = "Marie Curie studied radium in Paris. \
                    The Nobel Committee honoured her twice. \
                    Radium glows in the dark laboratory.";
        assert_eq!(generate(text, 3, 9), generate(text, 3, 9));
    }

    #[test]
    fn zero_requested_gives_nothing() {
        assert!(generate(SAMPLE, 0, 1).is_empty());
    }

    #[test]
    fn at_most_one_question_per_sentence() {
        let questions = generate(SAMPLE, 10, 5);
        assert!(questions.len() <= 2);
    }

    #[test]
    fn text_without_subjects_gives_nothing() {
        assert!(generate("It is what it is. We were there.", 5, 1).is_empty());
        assert!(generate("   ", 5, 1).is_empty());
    }

    #[test]
    fn empty_annotation_gives_nothing() {
        let mut analyzer = MockTextAnalyzer::new();
        analyzer.expect_analyze().returning(|_| Document::empty());
        let mut rng = StdRng::seed_from_u64(0);

        let questions = McqGenerator::new(&analyzer).generate("Some text.", 3, &mut rng);
        assert!(questions.is_empty());
    }

    #[test]
    fn masking_replaces_a_single_whole_word() {
        assert_eq!(
            mask_subject("The Eiffel Tower is in Paris.", "Paris").as_deref(),
            Some("The Eiffel Tower is in ______.")
        );
        assert_eq!(mask_subject("Parisians like bread.", "Paris"), None);
        assert_eq!(mask_subject("Plants need light.", "plants"), None);
    }

    #[test]
    fn repeated_subject_skips_the_sentence() {
        assert_eq!(mask_subject("Paris is the capital; Paris hosts it.", "Paris"), None);
    }

    #[test]
    fn masking_refuses_partial_leaks() {
        assert_eq!(mask_subject("Paris and Parisians.", "Paris"), None);
    }

    #[test]
    fn masking_leaves_surrounding_whitespace_alone() {
        assert_eq!(
            mask_subject("The Eiffel\nTower  is in Paris.", "Paris").as_deref(),
            Some("The Eiffel\nTower  is in ______.")
        );
        assert_eq!(
            mask_subject("The Eiffel\nTower is in Paris.", "Eiffel\nTower").as_deref(),
            Some("The ______ is in Paris.")
        );
    }

    #[test]
    fn stems_carry_exactly_one_blank_and_no_verbs_as_options() {
        let text = "Paris hosts museums and Paris hosts gardens near the Seine River.";
        for seed in 0..30 {
            for q in generate(text, 1, seed) {
                assert_eq!(q.stem.matches(BLANK).count(), 1, "seed {seed}: {}", q.stem);
                assert!(!q.options.values().any(|o| o == "hosts"), "seed {seed}: {:?}", q.options);
            }
        }
    }

    #[test]
    fn filling_the_blank_restores_the_sentence() {
        let text = "The Eiffel\nTower is in Paris. Photosynthesis occurs in plants.";
        let analyzer = RuleBasedAnalyzer::default();
        let sentences: Vec<String> = analyzer
            .analyze(text)
            .sentences
            .into_iter()
            .map(|s| s.text)
            .collect();
        for seed in 0..20 {
            for q in generate(text, 2, seed) {
                let filled = q.stem.replacen(BLANK, q.correct_text().unwrap(), 1);
                assert!(sentences.contains(&filled), "seed {seed}: {filled:?}");
            }
        }
    }

    #[test]
    fn frequent_noun_wins_ties_by_position() {
        let analyzer = RuleBasedAnalyzer::default();
        let doc = analyzer.analyze("The cat chased the dog and the cat won.");
        assert_eq!(most_frequent_noun(&doc.sentences[0]), Some("cat"));

        let doc = analyzer.analyze("The cat chased the dog.");
        assert_eq!(most_frequent_noun(&doc.sentences[0]), Some("cat"));
    }
}
