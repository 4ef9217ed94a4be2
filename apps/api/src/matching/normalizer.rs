//! Text normalizer for job-description matching.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// English stopwords (NLTK list). Contractions are omitted: apostrophes are
/// stripped before the lookup, so they could never match.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
        "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
        "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
        "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
        "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
    ]
    .into_iter()
    .collect()
});

/// Lowercases `text`, blanks out everything except `[a-z0-9]`, whitespace, `+`, `#`
/// and `-`, then drops stopwords and single-character tokens.
///
/// Surviving tokens keep their relative order and are joined by single spaces.
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 1 && !is_stopword(token))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '#' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn test_lowercases_and_drops_stopwords() {
        assert_eq!(
            normalize("Looking for Python and SQL skills"),
            "looking python sql skills"
        );
    }

    #[test]
    fn test_keeps_plus_hash_and_dash() {
        assert_eq!(normalize("C++, C# and scikit-learn!"), "c++ c# scikit-learn");
    }

    #[test]
    fn test_slash_splits_tokens() {
        assert_eq!(normalize("CI/CD pipelines"), "ci cd pipelines");
    }

    #[test]
    fn test_single_char_tokens_dropped() {
        // "R" and "C" vanish; "Go" survives.
        assert_eq!(normalize("R, C, Go"), "go");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(normalize("Résumé writing"), "sum writing");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  docker\n\n   kubernetes\t"), "docker kubernetes");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "We are looking for Python, Docker and CI/CD experience and familiarity with APIs and SQL.",
            "Senior C++/C# engineer -- 5+ years; ML & data-pipelines (Spark).",
            "",
            "a b c d e",
            "Über-Engineer für Rust",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_stopword_lookup() {
        assert!(is_stopword("the"));
        assert!(is_stopword("wouldn"));
        assert!(!is_stopword("python"));
    }
}
