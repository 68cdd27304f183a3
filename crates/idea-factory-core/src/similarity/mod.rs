//! Similar-concept detection across batches
//!
//! Each concept becomes a weighted bag of terms (title terms count double),
//! weighted by TF-IDF over every concept in the workspace. Pairs are only
//! reported across different batches.

mod tfidf;

use std::collections::HashMap;

use serde::Serialize;

use crate::error::Result;
use crate::store::Workspace;
use crate::text::tokenize_with_stemming;

use tfidf::{cosine_similarity, get_tfidf_vector, Corpus};

const TITLE_WEIGHT: f64 = 2.0;
const BODY_WEIGHT: f64 = 1.0;

/// A concept taking part in a similar pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptRef {
    pub batch_id: String,
    pub ordinal: usize,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimilarPair {
    pub a: ConceptRef,
    pub b: ConceptRef,
    pub score: f64,
}

struct ConceptDoc {
    concept: ConceptRef,
    vector: HashMap<String, f64>,
}

/// TF-IDF model over every concept of every batch
pub struct SimilarityEngine {
    docs: Vec<ConceptDoc>,
}

impl SimilarityEngine {
    /// Build the model from the workspace's batches
    #[tracing::instrument(skip(workspace))]
    pub fn build(workspace: &Workspace) -> Result<Self> {
        let start = std::time::Instant::now();
        let stem = workspace.config().stemming;

        let mut corpus = Corpus::default();
        let mut raw = Vec::new();
        for scanned in workspace.batches()? {
            let batch_id = scanned.record.id().to_string();
            for concept in scanned.record.concepts() {
                let term_freqs = term_frequencies(&concept.title, &concept.content, stem);
                corpus.add_document(&term_freqs);
                raw.push((
                    ConceptRef {
                        batch_id: batch_id.clone(),
                        ordinal: concept.ordinal,
                        title: concept.display_title(),
                    },
                    term_freqs,
                ));
            }
        }

        let docs: Vec<ConceptDoc> = raw
            .into_iter()
            .map(|(concept, term_freqs)| ConceptDoc {
                concept,
                vector: get_tfidf_vector(&corpus, &term_freqs),
            })
            .collect();

        crate::trace_time!(start, "similarity_build", concepts = docs.len());
        Ok(SimilarityEngine { docs })
    }

    /// Number of concepts in the model
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// Pairs from different batches scoring at least `threshold`, highest first
    pub fn find_similar(&self, threshold: f64) -> Vec<SimilarPair> {
        let mut pairs = Vec::new();
        for (i, a) in self.docs.iter().enumerate() {
            for b in &self.docs[i + 1..] {
                if a.concept.batch_id == b.concept.batch_id {
                    continue;
                }
                let score = cosine_similarity(&a.vector, &b.vector);
                if score >= threshold {
                    pairs.push(SimilarPair {
                        a: a.concept.clone(),
                        b: b.concept.clone(),
                        score,
                    });
                }
            }
        }

        pairs.sort_by(|x, y| y.score.total_cmp(&x.score));
        tracing::debug!(pairs = pairs.len(), threshold, "similar concepts");
        pairs
    }
}

fn term_frequencies(title: &str, content: &str, stem: bool) -> HashMap<String, f64> {
    let mut term_freqs: HashMap<String, f64> = HashMap::new();
    for term in tokenize_with_stemming(title, stem) {
        *term_freqs.entry(term).or_insert(0.0) += TITLE_WEIGHT;
    }
    for term in tokenize_with_stemming(content, stem) {
        *term_freqs.entry(term).or_insert(0.0) += BODY_WEIGHT;
    }
    term_freqs
}
