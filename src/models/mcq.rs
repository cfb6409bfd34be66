use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// One generated multiple-choice question.
///
/// `options` is keyed by contiguous letters starting at `A`; exactly one
/// option carries the unmasked subject and `correct_letter` names it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct McqRecord {
    pub stem: String,
    pub options: BTreeMap<String, String>,
    pub correct_letter: String,
}

impl McqRecord {
    pub fn correct_text(&self) -> Option<&str> {
        self.options.get(&self.correct_letter).map(String::as_str)
    }
}

pub fn option_letter(index: usize) -> String {
    char::from(b'A' + (index % 26) as u8).to_string()
}
