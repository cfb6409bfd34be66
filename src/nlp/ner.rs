//! Named-entity recognition from tagged tokens.
//!
//! Entities are returned as token index ranges within the sentence. Numeric
//! expressions get CARDINAL, DATE, TIME, QUANTITY, PERCENT or MONEY depending
//! on their neighbours; runs of proper nouns are labelled from keyword cues.

use std::ops::Range;

use super::lexicon::*;
use super::segment::{RawToken, TokenKind};
use super::{EntityLabel, UPOS};

pub fn recognize(tokens: &[RawToken<'_>], tags: &[UPOS]) -> Vec<(Range<usize>, EntityLabel)> {
    let lower: Vec<String> = tokens.iter().map(|t| t.text.to_lowercase()).collect();
    let n = tokens.len();
    let is_calendar = |i: usize| {
        tags[i] == UPOS::PROPN && (is_month(&lower[i]) || is_weekday(&lower[i]))
    };

    let mut entities = Vec::new();
    let mut i = 0;
    while i < n {
        if is_calendar(i) {
            let start = if i > 0 && tags[i - 1] == UPOS::NUM { i - 1 } else { i };
            let mut end = i + 1;
            loop {
                if end < n && tags[end] == UPOS::NUM {
                    end += 1;
                } else if end + 1 < n
                    && tokens[end].text == ","
                    && tokens[end + 1].kind == TokenKind::Number
                {
                    end += 2;
                } else {
                    break;
                }
            }
            entities.push((start..end, EntityLabel::Date));
            i = end;
            continue;
        }

        if tags[i] == UPOS::NUM {
            let mut end = i + 1;
            while end < n && tags[end] == UPOS::NUM {
                end += 1;
            }
            if end < n && is_calendar(end) {
                // "14 July": the date branch picks up the day.
                i = end;
                continue;
            }
            let (span, label) = classify_number(tokens, &lower, i..end);
            i = span.end;
            entities.push((span, label));
            continue;
        }

        if tags[i] == UPOS::ADJ && is_ordinal(&lower[i]) {
            entities.push((i..i + 1, EntityLabel::Ordinal));
            i += 1;
            continue;
        }

        if tags[i] == UPOS::PROPN {
            let end = proper_run_end(tags, &lower, i, &is_calendar);
            let run = i..end;
            i = end;

            let honorific_lead = is_honorific(&lower[run.start]);
            if honorific_lead && run.len() == 1 {
                continue;
            }
            let span = if honorific_lead { run.start + 1..run.end } else { run };
            let label = if honorific_lead || follows_honorific(&lower, span.start) {
                EntityLabel::Person
            } else {
                classify_proper(tokens, &lower, span.clone())
            };
            entities.push((span, label));
            continue;
        }

        i += 1;
    }
    entities
}

fn is_ordinal(lower: &str) -> bool {
    is_ordinal_word(lower) || lower.starts_with(|c: char| c.is_ascii_digit())
}

fn is_year(token: &RawToken<'_>) -> bool {
    token.kind == TokenKind::Number
        && token.text.len() == 4
        && token
            .text
            .parse::<u32>()
            .is_ok_and(|y| (1000..=2099).contains(&y))
}

fn is_decade(lower: &str) -> bool {
    lower.len() == 5
        && lower.ends_with('s')
        && lower[..4].chars().all(|c| c.is_ascii_digit())
}

fn classify_number(
    tokens: &[RawToken<'_>],
    lower: &[String],
    run: Range<usize>,
) -> (Range<usize>, EntityLabel) {
    let next = lower.get(run.end).map(String::as_str);
    let currency_before = run.start > 0
        && matches!(tokens[run.start - 1].text, "$" | "€" | "£" | "¥");

    if currency_before {
        return (run.start - 1..run.end, EntityLabel::Money);
    }
    match next {
        Some(n) if is_percent_word(n) => (run.start..run.end + 1, EntityLabel::Percent),
        Some(n) if is_quantity_unit(n) => (run.start..run.end + 1, EntityLabel::Quantity),
        Some(n) if is_time_unit(n) => (run.start..run.end + 1, EntityLabel::Time),
        Some(n) if is_date_unit(n) => (run.start..run.end + 1, EntityLabel::Date),
        _ if run.len() == 1 && (is_year(&tokens[run.start]) || is_decade(&lower[run.start])) => {
            (run, EntityLabel::Date)
        }
        _ => (run, EntityLabel::Cardinal),
    }
}

/// End of a proper-noun run starting at `start`; connectors such as "of the"
/// are absorbed when another proper noun follows them.
fn proper_run_end(
    tags: &[UPOS],
    lower: &[String],
    start: usize,
    is_calendar: &dyn Fn(usize) -> bool,
) -> usize {
    let n = tags.len();
    let mut end = start + 1;
    loop {
        if end < n && tags[end] == UPOS::PROPN && !is_calendar(end) {
            end += 1;
            continue;
        }
        let mut k = end;
        while k < n && k < end + 2 && is_entity_connector(&lower[k]) {
            k += 1;
        }
        if k > end && k < n && tags[k] == UPOS::PROPN && !is_calendar(k) {
            end = k + 1;
            continue;
        }
        return end;
    }
}

fn follows_honorific(lower: &[String], start: usize) -> bool {
    match start {
        0 => false,
        1 => is_honorific(&lower[0]),
        _ => {
            is_honorific(&lower[start - 1])
                || (lower[start - 1] == "." && is_honorific(&lower[start - 2]))
        }
    }
}

fn classify_proper(tokens: &[RawToken<'_>], lower: &[String], span: Range<usize>) -> EntityLabel {
    let words = &lower[span.clone()];
    let any = |pred: fn(&str) -> bool| words.iter().any(|w| pred(w));
    let single = words.len() == 1;

    if any(is_org_word) {
        EntityLabel::Org
    } else if any(is_facility_word) {
        EntityLabel::Fac
    } else if any(is_location_word) {
        EntityLabel::Loc
    } else if any(is_event_word) {
        EntityLabel::Event
    } else if any(is_law_word) {
        EntityLabel::Law
    } else if single && is_language_word(&words[0]) {
        EntityLabel::Language
    } else if single && ["ese", "ish", "ian", "ians"].iter().any(|s| words[0].ends_with(s)) {
        EntityLabel::Norp
    } else if single && tokens[span.start].text.chars().all(|c| !c.is_lowercase()) {
        EntityLabel::Org
    } else if span.start > 0 && is_locative_preposition(&lower[span.start - 1]) {
        EntityLabel::Gpe
    } else if (2..=3).contains(&words.len()) {
        EntityLabel::Person
    } else {
        EntityLabel::Misc
    }
}
