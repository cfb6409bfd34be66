use std::collections::HashMap;

/// Sub-word hashing embedder, the offline stand-in for model embeddings.
///
/// Each word is lowercased, wrapped in `<` `>` and split into character
/// n-grams (3 to 5 chars). Every n-gram is hashed into one of `dims` buckets
/// with a hash-derived sign, then the vector is L2-normalised. Words sharing
/// stems and affixes land close together, unrelated words near zero.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dims: usize,
}

const MIN_NGRAM: usize = 3;
const MAX_NGRAM: usize = 5;

impl HashedEmbedder {
    pub fn new(dims: usize) -> Self {
        Self { dims: dims.max(8) }
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns `None` for text without any alphanumeric character.
    pub fn embed(&self, word: &str) -> Option<Vec<f32>> {
        if !word.chars().any(char::is_alphanumeric) {
            return None;
        }

        let wrapped: Vec<char> = std::iter::once('<')
            .chain(word.chars().flat_map(char::to_lowercase))
            .chain(std::iter::once('>'))
            .collect();

        let mut vector = vec![0f32; self.dims];
        // The whole word counts as its own feature so short words still differ.
        self.add_feature(&mut vector, &wrapped);
        for n in MIN_NGRAM..=MAX_NGRAM {
            for gram in wrapped.windows(n) {
                self.add_feature(&mut vector, gram);
            }
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm == 0.0 {
            return None;
        }
        vector.iter_mut().for_each(|v| *v /= norm);
        Some(vector)
    }

    fn add_feature(&self, vector: &mut [f32], gram: &[char]) {
        let hash = fnv1a(gram);
        let bucket = (hash % self.dims as u64) as usize;
        let sign = if hash >> 63 == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign;
    }
}

impl Default for HashedEmbedder {
    fn default() -> Self {
        Self::new(128)
    }
}

fn fnv1a(chars: &[char]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for c in chars {
        let mut buf = [0u8; 4];
        for byte in c.encode_utf8(&mut buf).bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
    hash
}

/// Precomputed term vectors keyed by lowercase text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorTable {
    vectors: HashMap<String, Vec<f32>>,
}

impl VectorTable {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, Vec<f32>)>) -> Self {
        Self {
            vectors: pairs
                .into_iter()
                .map(|(term, vector)| (term.to_lowercase(), vector))
                .collect(),
        }
    }

    pub fn get(&self, term: &str) -> Option<&[f32]> {
        self.vectors.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

pub fn cosine_sim(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0f32;
    let mut na = 0f32;
    let mut nb = 0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na.sqrt() * nb.sqrt())
    }
}
