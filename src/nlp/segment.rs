//! Tokenization and sentence boundary detection.

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

use super::lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
    Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
    pub kind: TokenKind,
    /// Line breaks between the previous token and this one.
    pub newlines_before: usize,
}

impl RawToken<'_> {
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    pub fn is_wordlike(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number)
    }
}

const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Acronyms, grouped numbers, words joined by `-` or an apostrophe,
/// currency and math symbols, then any other single character.
const TOKEN_PATTERN: &str = r"(?x)
    (?P<word>
        \p{L}\.(?:\p{L}\.)+
      | \d+(?:[.,]\d+)+
      | [\p{L}\p{N}]+(?:[-'’][\p{L}\p{N}]+)*
    )
  | (?P<symbol>[$€£¥%&+=<>\#@*/\\^~|°])
  | (?P<punct>\S)
";

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is a valid regex"))
}

pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut last_end = 0;
    for caps in token_regex().captures_iter(text) {
        let (m, kind) = if let Some(m) = caps.name("word") {
            (m, word_kind(m.as_str()))
        } else if let Some(m) = caps.name("symbol") {
            (m, TokenKind::Symbol)
        } else if let Some(m) = caps.name("punct") {
            (m, TokenKind::Punct)
        } else {
            continue;
        };

        let newlines_before = text[last_end..m.start()].matches('\n').count();
        last_end = m.end();

        let split = match kind {
            TokenKind::Word => clitic_start(m.as_str()),
            _ => None,
        };
        match split {
            Some(at) => {
                let at = m.start() + at;
                tokens.push(raw(text, m.start()..at, TokenKind::Word, newlines_before));
                tokens.push(raw(text, at..m.end(), TokenKind::Word, 0));
            }
            None => tokens.push(raw(text, m.range(), kind, newlines_before)),
        }
    }
    tokens
}

fn raw(text: &str, span: Range<usize>, kind: TokenKind, newlines_before: usize) -> RawToken<'_> {
    RawToken {
        text: &text[span.clone()],
        span,
        kind,
        newlines_before,
    }
}

fn word_kind(word: &str) -> TokenKind {
    if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

/// Byte offset of a trailing clitic such as `'s` or `’re`, if the word has one.
fn clitic_start(word: &str) -> Option<usize> {
    let at = word.rfind(['\'', '’'])?;
    let suffix = &word[at..];
    let letters = suffix.trim_start_matches(['\'', '’']);
    (at > 0 && CLITICS.contains(&letters.to_lowercase().as_str())).then_some(at)
}

fn is_terminal(token: &RawToken<'_>) -> bool {
    token.kind == TokenKind::Punct && matches!(token.text, "." | "!" | "?" | "…")
}

fn is_closer(token: &RawToken<'_>) -> bool {
    is_terminal(token)
        || (token.kind == TokenKind::Punct
            && matches!(token.text, "\"" | "'" | "”" | "’" | ")" | "]"))
}

fn opens_sentence(token: &RawToken<'_>) -> bool {
    match token.text.chars().next() {
        Some(c) => {
            c.is_uppercase()
                || c.is_ascii_digit()
                || matches!(c, '"' | '“' | '‘' | '\'' | '(' | '[')
        }
        None => false,
    }
}

/// A period after an initial or a known abbreviation does not end a sentence.
fn is_abbreviation_period(tokens: &[RawToken<'_>], i: usize) -> bool {
    if tokens[i].text != "." || i == 0 {
        return false;
    }
    let prev = &tokens[i - 1];
    if prev.kind != TokenKind::Word {
        return false;
    }
    let mut chars = prev.text.chars();
    let single_initial = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase());
    single_initial || lexicon::is_abbreviation(&prev.text.to_lowercase())
}

/// Splits a token stream into sentences, returned as token index ranges.
pub fn split_sentences(tokens: &[RawToken<'_>]) -> Vec<Range<usize>> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < tokens.len() {
        if i > start && tokens[i].newlines_before >= 2 {
            sentences.push(start..i);
            start = i;
        }

        if is_terminal(&tokens[i]) && !is_abbreviation_period(tokens, i) {
            let mut end = i + 1;
            while end < tokens.len() && tokens[end].newlines_before == 0 && is_closer(&tokens[end])
            {
                end += 1;
            }
            let boundary = tokens.get(end).map_or(true, opens_sentence);
            if boundary {
                sentences.push(start..end);
                start = end;
                i = end;
                continue;
            }
        }
        i += 1;
    }
    if start < tokens.len() {
        sentences.push(start..tokens.len());
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &'a [RawToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn tokenizes_words_numbers_and_punctuation() {
        let tokens = tokenize("The Eiffel Tower is 330 m tall, isn't it?");
        assert_eq!(
            texts(&tokens),
            vec!["The", "Eiffel", "Tower", "is", "330", "m", "tall", ",", "isn't", "it", "?"]
        );
        assert_eq!(tokens[4].kind, TokenKind::Number);
        assert_eq!(tokens[7].kind, TokenKind::Punct);
    }

    #[test]
    fn splits_possessive_clitic() {
        let tokens = tokenize("Paris's museums");
        assert_eq!(texts(&tokens), vec!["Paris", "'s", "museums"]);
    }

    #[test]
    fn keeps_decimals_and_acronyms_whole() {
        let tokens = tokenize("It grew 3.5 percent in the U.S. economy");
        assert!(texts(&tokens).contains(&"3.5"));
        assert!(texts(&tokens).contains(&"U.S."));
    }

    #[test]
    fn counts_line_breaks_and_keeps_symbols_apart() {
        let tokens = tokenize("Cost: $5\n\nThe Eiffel\nTower");
        assert_eq!(texts(&tokens), vec!["Cost", ":", "$", "5", "The", "Eiffel", "Tower"]);
        assert_eq!(tokens[2].kind, TokenKind::Symbol);
        assert_eq!(tokens[4].newlines_before, 2);
        assert_eq!(tokens[6].newlines_before, 1);
        assert_eq!(tokens[3].newlines_before, 0);
    }

    #[test]
    fn curly_apostrophe_clitics_split_but_contractions_stay() {
        let tokens = tokenize("Darwin’s finches don't fly far.");
        assert_eq!(
            texts(&tokens),
            vec!["Darwin", "’s", "finches", "don't", "fly", "far", "."]
        );
    }

    #[test]
    fn spans_point_back_into_source() {
        let text = "Café au lait.";
        for token in tokenize(text) {
            assert_eq!(&text[token.span.clone()], token.text);
        }
    }

    #[test]
    fn splits_on_terminal_punctuation() {
        let text = "The Eiffel Tower is in Paris. Photosynthesis occurs in plants.";
        let tokens = tokenize(text);
        let sentences = split_sentences(&tokens);
        assert_eq!(sentences.len(), 2);
        assert_eq!(tokens[sentences[1].start].text, "Photosynthesis");
    }

    #[test]
    fn honorifics_and_initials_do_not_split() {
        let tokens = tokenize("Dr. Smith met J. K. Rowling. They talked.");
        assert_eq!(split_sentences(&tokens).len(), 2);
    }

    #[test]
    fn lowercase_continuation_does_not_split() {
        let tokens = tokenize("Values near 2. most of the time are fine.");
        assert_eq!(split_sentences(&tokens).len(), 1);
    }

    #[test]
    fn blank_line_ends_a_sentence() {
        let tokens = tokenize("Chapter One\n\nThe story begins here.");
        assert_eq!(split_sentences(&tokens).len(), 2);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        let tokens = tokenize("He said \"Stop.\" Then he left.");
        let sentences = split_sentences(&tokens);
        assert_eq!(sentences.len(), 2);
        assert_eq!(tokens[sentences[0].end - 1].text, "\"");
    }
}
