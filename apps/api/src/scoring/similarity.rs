//! Role similarity ranking: suggests roles whose skill lists look like the user's.
//!
//! Each role becomes one document (its skills, space-joined and lowercased); the
//! user's skills become the query document. A TF-IDF model is fitted on all role
//! documents plus the query, so scores are only comparable within one call.
//!
//! Weighting:
//! - tokens are runs of 2+ word characters (letters, digits, `_`)
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`, with `n` counting the query document
//! - raw term counts times idf, each vector L2-normalised
//!
//! A query without any token (no skills, or only one-letter names like "R") scores
//! 0.0 against every role.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::model::Catalog;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub similarity: f64,
}

/// TF-IDF model fitted on a fixed corpus.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// term → dimension index
    vocabulary: HashMap<String, usize>,
    /// smoothed IDF weight per dimension
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Self {
        let n = documents.len() as f64;
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for doc in documents {
            // Sorted so dimension indices don't depend on hash order.
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                let idx = *vocabulary.entry(term).or_insert_with(|| {
                    doc_freq.push(0);
                    doc_freq.len() - 1
                });
                doc_freq[idx] += 1;
            }
        }

        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self { vocabulary, idf }
    }

    /// Dense, unit-length TF-IDF vector. All zeros when no token is in the vocabulary.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.dimensions()];
        for token in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += self.idf[idx];
            }
        }
        l2_normalize(&mut vector);
        vector
    }

    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }
}

/// Ranks catalog roles by cosine similarity to the user's skills.
///
/// Highest first; equal scores keep catalog order. At most `top_n` results.
pub fn rank_roles<S: AsRef<str>>(user_skills: &[S], catalog: &Catalog, top_n: usize) -> Vec<RoleMatch> {
    if catalog.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let roles: Vec<(&str, &[String])> = catalog.roles().collect();
    let mut corpus: Vec<String> = roles
        .iter()
        .map(|(_, skills)| skills.join(" ").to_lowercase())
        .collect();
    let query = user_skills
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    corpus.push(query);

    let vectorizer = TfIdfVectorizer::fit(&corpus);
    let query_vector = vectorizer.transform(&corpus[roles.len()]);

    let mut ranked: Vec<RoleMatch> = roles
        .iter()
        .zip(&corpus)
        .map(|((role, _), doc)| RoleMatch {
            role: role.to_string(),
            similarity: cosine_similarity(&query_vector, &vectorizer.transform(doc)),
        })
        .collect();

    // sort_by is stable, which keeps catalog order among ties.
    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(top_n);

    debug!(
        "Ranked {} roles over {} terms; best: {:?}",
        roles.len(),
        vectorizer.dimensions(),
        ranked.first().map(|m| (&m.role, m.similarity))
    );

    ranked
}

/// Cosine of the angle between two vectors; 0.0 if either has no magnitude.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(String::from)
        .collect()
}

fn l2_normalize(v: &mut [f64]) {
    let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
