// Document-wide word frequency table. Counts exclude stopwords and
// non-alphanumeric tokens because callers feed it filtered token lists.
// Ranking and tie-breaking belong to the components that consume the table.
use std::collections::HashMap;

/// Cumulative counts over all token lists of a document.
pub fn build_frequency(token_lists: &[Vec<String>]) -> HashMap<String, usize> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for tokens in token_lists {
        for token in tokens {
            *freq.entry(token.clone()).or_insert(0) += 1;
        }
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_across_lists() {
        let lists = vec![
            vec!["cat".to_string(), "mat".to_string()],
            vec!["cat".to_string(), "dog".to_string()],
        ];
        let freq = build_frequency(&lists);
        assert_eq!(freq.get("cat"), Some(&2));
        assert_eq!(freq.get("mat"), Some(&1));
        assert_eq!(freq.get("dog"), Some(&1));
        assert_eq!(freq.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let freq = build_frequency(&[]);
        assert!(freq.is_empty());
    }
}
