//! Text processing utilities for matching, previews and similarity

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English stop words to filter out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

const ELLIPSIS: &str = "...";

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have",
            "he", "her", "his", "if", "in", "into", "is", "it", "its", "no", "not", "of", "on",
            "or", "she", "such", "that", "the", "their", "then", "there", "these", "they", "this",
            "to", "was", "who", "will", "with",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Word tokenizer splitting on non-alphanumeric characters with stop word removal
pub fn tokenize(text: &str) -> Vec<String> {
    let stop_words = get_stop_words();
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .filter(|s| !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text with optional Porter stemming
pub fn tokenize_with_stemming(text: &str, stem: bool) -> Vec<String> {
    let tokens = tokenize(text);
    if !stem {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Case-insensitive search returning the char offset of the first match.
///
/// An empty needle matches at offset 0.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let hay: Vec<char> = haystack.chars().collect();
    let pat: Vec<char> = needle.chars().collect();
    if pat.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - pat.len()).find(|&start| {
        pat.iter()
            .zip(&hay[start..])
            .all(|(&p, &h)| chars_eq_ignore_case(p, h))
    })
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    find_ignore_case(haystack, needle).is_some()
}

/// Excerpt of `text` around the first match of `term`.
///
/// Keeps `context` characters on each side of the match and marks cut
/// ends with `...`. Whitespace runs are collapsed to single spaces.
pub fn preview(text: &str, term: &str, context: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    let term_len = term.chars().count();

    let (start, end) = match find_ignore_case(text, term) {
        Some(at) => (
            at.saturating_sub(context),
            (at + term_len + context).min(chars.len()),
        ),
        None => (0, (context * 2).min(chars.len())),
    };

    let excerpt: String = chars[start..end].iter().collect();
    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    out.push_str(&excerpt.split_whitespace().collect::<Vec<_>>().join(" "));
    if end < chars.len() {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Fuzzy containment score of `needle` in `haystack`, case-insensitive.
///
/// The best normalized Levenshtein similarity between the shorter string and
/// every equally long window of the longer one, in `0.0..=1.0`. An empty
/// needle scores 1.0.
pub fn partial_ratio(needle: &str, haystack: &str) -> f64 {
    let needle: Vec<char> = needle.to_lowercase().chars().collect();
    let hay: Vec<char> = haystack.to_lowercase().chars().collect();
    if needle.is_empty() {
        return 1.0;
    }
    let (short, long) = if needle.len() <= hay.len() {
        (&needle, &hay)
    } else {
        (&hay, &needle)
    };
    if short.is_empty() {
        return 0.0;
    }

    let pattern: String = short.iter().collect();
    let mut best = 0.0f64;
    for window in long.windows(short.len()) {
        let window: String = window.iter().collect();
        best = best.max(strsim::normalized_levenshtein(&pattern, &window));
        if best >= 1.0 {
            break;
        }
    }
    best
}

/// File-name slug for a title, `untitled` when nothing usable remains
pub fn slugify(title: &str) -> String {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}
