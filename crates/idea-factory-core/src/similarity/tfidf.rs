use std::collections::HashMap;

/// Term statistics over the whole concept corpus
#[derive(Debug, Default)]
pub(super) struct Corpus {
    pub total_docs: usize,
    /// Number of documents containing each term
    pub term_df: HashMap<String, usize>,
}

impl Corpus {
    pub fn add_document(&mut self, term_freqs: &HashMap<String, f64>) {
        self.total_docs += 1;
        for term in term_freqs.keys() {
            *self.term_df.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Smoothed inverse document frequency
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.term_df.get(term).copied().unwrap_or(0) as f64;
        let n = self.total_docs as f64;
        ((1.0 + n) / (1.0 + df)).ln() + 1.0
    }
}

/// Weight raw term frequencies by inverse document frequency
pub(super) fn get_tfidf_vector(
    corpus: &Corpus,
    term_freqs: &HashMap<String, f64>,
) -> HashMap<String, f64> {
    term_freqs
        .iter()
        .map(|(term, tf)| (term.clone(), tf * corpus.idf(term)))
        .collect()
}

/// Cosine of the angle between two sparse vectors; 0.0 when either is empty
pub(super) fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();

    let norm_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
