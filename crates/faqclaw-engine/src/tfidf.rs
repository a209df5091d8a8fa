//! Per-call TF-IDF vector space + cosine similarity.
//!
//! The vocabulary and document frequencies are derived fresh from
//! {query} ∪ candidates on every call — no persistent corpus state, so
//! scores depend only on the current catalog content.

use std::collections::{HashMap, HashSet};

/// Cosine similarity between the query and each candidate, one score
/// per candidate in input order, each in [0, 1].
///
/// Inputs are already-normalized token streams (space-separated).
/// Weighting: tf(t,d) × idf(t) with smoothed
/// idf(t) = ln((1+N)/(1+df(t))) + 1, vectors L2-normalized.
/// An empty combined vocabulary yields all zeros rather than failing.
pub fn similarity_scores(query: &str, candidates: &[String]) -> Vec<f64> {
    let docs: Vec<Vec<&str>> = std::iter::once(query)
        .chain(candidates.iter().map(String::as_str))
        .map(|doc| doc.split_whitespace().collect())
        .collect();

    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    for doc in &docs {
        for &term in doc {
            let next = vocabulary.len();
            vocabulary.entry(term).or_insert(next);
        }
    }
    if vocabulary.is_empty() {
        return vec![0.0; candidates.len()];
    }

    let n = docs.len() as f64;
    let mut doc_freq = vec![0usize; vocabulary.len()];
    for doc in &docs {
        let unique: HashSet<&str> = doc.iter().copied().collect();
        for term in unique {
            doc_freq[vocabulary[term]] += 1;
        }
    }
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            let mut v = vec![0.0; vocabulary.len()];
            for &term in doc {
                v[vocabulary[term]] += 1.0;
            }
            for (weight, idf) in v.iter_mut().zip(&idf) {
                *weight *= idf;
            }
            l2_normalize(&mut v);
            v
        })
        .collect();

    let query_vec = &vectors[0];
    vectors[1..].iter().map(|c| dot(query_vec, c)).collect()
}

fn l2_normalize(v: &mut [f64]) {
    let norm: f64 = v.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
