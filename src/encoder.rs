//! Label encoding for the categorical feature columns.
//!
//! The classifier was trained on integer codes produced by fitting an
//! encoder over the dataset's distinct values in lexicographic order, so
//! the runtime encoder must reproduce exactly that mapping. Fit once at
//! startup, read-only afterwards.

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
#[error("value not seen during fit: {0:?}")]
pub struct UnseenValue(pub String);

/// Deterministic name → integer mapping, fitted over a set of distinct
/// values sorted lexicographically.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    codes: HashMap<String, u32>,
}

impl LabelEncoder {
    /// Fit over an iterator of values. Duplicates are collapsed; codes are
    /// assigned by sorted order of the distinct values.
    pub fn fit<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut distinct: Vec<String> =
            values.into_iter().map(|v| v.as_ref().to_string()).collect();
        distinct.sort();
        distinct.dedup();

        let codes = distinct
            .into_iter()
            .enumerate()
            .map(|(code, value)| (value, code as u32))
            .collect();

        Self { codes }
    }

    /// Look up the code for a value. Exact match only; an unseen value is
    /// an error because the classifier has no code for it.
    pub fn transform(&self, value: &str) -> Result<u32, UnseenValue> {
        self.codes
            .get(value)
            .copied()
            .ok_or_else(|| UnseenValue(value.to_string()))
    }

    /// Number of distinct classes seen during fit.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_sorted_order() {
        let enc = LabelEncoder::fit(["Jawa Timur", "Aceh", "Banten"]);
        assert_eq!(enc.transform("Aceh").unwrap(), 0);
        assert_eq!(enc.transform("Banten").unwrap(), 1);
        assert_eq!(enc.transform("Jawa Timur").unwrap(), 2);
    }

    #[test]
    fn duplicates_collapse() {
        let enc = LabelEncoder::fit(["Bali", "Bali", "Aceh", "Bali"]);
        assert_eq!(enc.len(), 2);
        assert_eq!(enc.transform("Bali").unwrap(), 1);
    }

    #[test]
    fn unseen_value_is_an_error() {
        let enc = LabelEncoder::fit(["Aceh"]);
        let err = enc.transform("Papua").unwrap_err();
        assert!(err.to_string().contains("Papua"));
    }

    #[test]
    fn exact_match_only_no_case_folding() {
        let enc = LabelEncoder::fit(["Aceh"]);
        assert!(enc.transform("aceh").is_err());
        assert!(enc.transform(" Aceh").is_err());
    }
}
