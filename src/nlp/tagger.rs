//! Rule-based part-of-speech tagging over a single sentence.

use std::collections::HashSet;
use std::ops::Range;

use super::lexicon::*;
use super::segment::{RawToken, TokenKind};
use super::UPOS;

fn is_closed_class(lower: &str) -> bool {
    is_determiner(lower)
        || is_pronoun(lower)
        || is_adposition(lower)
        || is_auxiliary(lower)
        || is_coordinating_conjunction(lower)
        || is_subordinating_conjunction(lower)
        || is_particle(lower)
}

fn first_word_index(tokens: &[RawToken<'_>]) -> Option<usize> {
    tokens.iter().position(RawToken::is_wordlike)
}

/// Lowercased words that appear capitalized away from the start of a
/// sentence somewhere in the document. A sentence-initial occurrence of one
/// of these is tagged as a proper noun too.
pub fn collect_proper_hints(tokens: &[RawToken<'_>], sentences: &[Range<usize>]) -> HashSet<String> {
    let mut hints = HashSet::new();
    for range in sentences {
        let sentence = &tokens[range.clone()];
        let Some(first) = first_word_index(sentence) else {
            continue;
        };
        for token in sentence.iter().skip(first + 1) {
            if token.kind != TokenKind::Word || !token.is_capitalized() {
                continue;
            }
            let lower = token.text.to_lowercase();
            if lower != "i" && !is_closed_class(&lower) {
                hints.insert(lower);
            }
        }
    }
    hints
}

pub fn tag_sentence(tokens: &[RawToken<'_>], proper_hints: &HashSet<String>) -> Vec<UPOS> {
    let first = first_word_index(tokens);
    let mut tags = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        let tag = match token.kind {
            TokenKind::Punct => UPOS::PUNCT,
            TokenKind::Symbol => UPOS::SYM,
            TokenKind::Number => UPOS::NUM,
            TokenKind::Word => tag_word(tokens, i, first == Some(i), &tags, proper_hints),
        };
        tags.push(tag);
    }
    tags
}

fn tag_word(
    tokens: &[RawToken<'_>],
    i: usize,
    initial: bool,
    tags: &[UPOS],
    proper_hints: &HashSet<String>,
) -> UPOS {
    let token = &tokens[i];
    let lower = token.text.to_lowercase();
    let capitalized = token.is_capitalized();
    let next_lower = tokens.get(i + 1).map(|t| t.text.to_lowercase());

    if capitalized && (is_month(&lower) || is_weekday(&lower)) && !(initial && lower == "may") {
        return UPOS::PROPN;
    }
    if is_acronym(token.text) {
        return UPOS::PROPN;
    }
    if lower.starts_with(|c: char| c.is_ascii_digit()) {
        return if is_digit_ordinal(&lower) {
            UPOS::ADJ
        } else {
            UPOS::NUM
        };
    }
    if is_number_word(&lower) && lower != "one" {
        return UPOS::NUM;
    }

    if let Some(tag) = closed_class_tag(&lower, next_lower.as_deref()) {
        return tag;
    }

    if capitalized
        && (!initial || proper_hints.contains(&lower) || next_is_proper_candidate(tokens, i))
    {
        return UPOS::PROPN;
    }

    if is_ordinal_word(&lower) || is_adjective(&lower) {
        return UPOS::ADJ;
    }
    if is_adverb(&lower) {
        return UPOS::ADV;
    }
    if looks_like_verb(&lower, tags, next_lower.as_deref()) {
        return UPOS::VERB;
    }
    if is_noun_despite_suffix(&lower) {
        return UPOS::NOUN;
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        return UPOS::ADV;
    }
    if has_adjective_suffix(&lower) {
        return UPOS::ADJ;
    }
    UPOS::NOUN
}

fn closed_class_tag(lower: &str, next_lower: Option<&str>) -> Option<UPOS> {
    if lower == "to" {
        let verb_follows = next_lower.is_some_and(|n| is_verb_base(n) || is_auxiliary(n));
        return Some(if verb_follows { UPOS::PART } else { UPOS::ADP });
    }
    let tag = if is_determiner(lower) {
        UPOS::DET
    } else if is_pronoun(lower) {
        UPOS::PRON
    } else if is_auxiliary(lower) {
        UPOS::AUX
    } else if is_particle(lower) {
        UPOS::PART
    } else if is_adposition(lower) {
        UPOS::ADP
    } else if is_coordinating_conjunction(lower) {
        UPOS::CCONJ
    } else if is_subordinating_conjunction(lower) {
        UPOS::SCONJ
    } else if is_interjection(lower) {
        UPOS::INTJ
    } else {
        return None;
    };
    Some(tag)
}

fn next_is_proper_candidate(tokens: &[RawToken<'_>], i: usize) -> bool {
    tokens.get(i + 1).is_some_and(|next| {
        next.kind == TokenKind::Word
            && next.is_capitalized()
            && !is_closed_class(&next.text.to_lowercase())
    })
}

fn is_acronym(text: &str) -> bool {
    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    letters >= 2
        && text
            .chars()
            .all(|c| c.is_uppercase() || c == '.' || c.is_ascii_digit())
}

fn is_digit_ordinal(lower: &str) -> bool {
    let digits = lower.trim_end_matches(|c: char| c.is_alphabetic());
    let suffix = &lower[digits.len()..];
    !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_digit())
        && matches!(suffix, "st" | "nd" | "rd" | "th")
}

/// Candidate base forms of an inflected word.
pub(crate) fn lemma_candidates(lower: &str) -> Vec<String> {
    let mut out = vec![lower.to_string()];
    if let Some(stem) = lower.strip_suffix("ies") {
        out.push(format!("{stem}y"));
    }
    for suffix in ["es", "s", "ed", "d"] {
        if let Some(stem) = lower.strip_suffix(suffix) {
            out.push(stem.to_string());
        }
    }
    if let Some(stem) = lower.strip_suffix("ing") {
        out.push(stem.to_string());
        out.push(format!("{stem}e"));
    }
    out
}

fn looks_like_verb(lower: &str, tags: &[UPOS], next_lower: Option<&str>) -> bool {
    let prev = tags.iter().rev().find(|t| **t != UPOS::PUNCT);
    let after_subject = matches!(prev, Some(UPOS::NOUN | UPOS::PROPN | UPOS::PRON));
    let after_auxiliary = matches!(prev, Some(UPOS::AUX | UPOS::PART | UPOS::ADV));
    if !(after_subject || after_auxiliary) {
        return false;
    }
    if is_noun_despite_suffix(lower) {
        return false;
    }

    if lemma_candidates(lower).iter().any(|l| is_verb_base(l)) {
        return true;
    }
    if lower.len() > 4 && (lower.ends_with("ing") || lower.ends_with("ed")) {
        return true;
    }

    // "Water boils at ...", "Paris hosts museums": a bare -s form right after
    // the subject, before any verb of the current clause.
    let has_verb = tags
        .iter()
        .rev()
        .take_while(|t| !matches!(t, UPOS::CCONJ | UPOS::SCONJ | UPOS::PUNCT))
        .any(|t| matches!(t, UPOS::VERB | UPOS::AUX));
    let ends_clause = next_lower.map_or(true, |n| {
        is_adposition(n) || is_determiner(n) || is_adverb(n) || !n.chars().any(char::is_alphanumeric)
    });
    let after_name = matches!(prev, Some(UPOS::PROPN | UPOS::PRON));
    let next_is_verb = next_lower.is_some_and(|n| lemma_candidates(n).iter().any(|l| is_verb_base(l)));
    after_subject
        && !has_verb
        && lower.len() > 3
        && lower.ends_with('s')
        && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s))
        && (ends_clause || (after_name && !next_is_verb))
}

fn has_adjective_suffix(lower: &str) -> bool {
    const SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "ical", "ional", "ual", "less"];
    if lower.len() <= 4 {
        return false;
    }
    SUFFIXES.iter().any(|s| lower.ends_with(s))
        || (lower.len() >= 7 && lower.ends_with("ic"))
        || (lower.len() > 5 && lower.ends_with("ish"))
        || lower.ends_with("ed")
}
