//! Query normalization and relaxation
//!
//! Every outgoing query has to mention the anchor term so that results stay
//! on topic. When a query comes back empty the caller can relax it with
//! [`QueryNormalizer::simplify`] and try once more.

/// Keyword every outgoing query must contain
pub const ANCHOR_TERM: &str = "vietnam";

/// Number of tokens a simplified query keeps
const SIMPLIFIED_TOKENS: usize = 3;

/// Adds the anchor term to queries and relaxes long ones
#[derive(Debug, Clone)]
pub struct QueryNormalizer {
    anchor: String,
}

impl QueryNormalizer {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into().to_lowercase(),
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Make sure the query mentions the anchor term
    ///
    /// Blank queries become the anchor alone. Queries that already contain the
    /// anchor (any case, substring match) are returned untouched; the others
    /// get `" AND <anchor>"` appended.
    pub fn normalize(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return self.anchor.clone();
        }

        if query.to_lowercase().contains(&self.anchor) {
            query.to_string()
        } else {
            format!("{} AND {}", query, self.anchor)
        }
    }

    /// Reduce a query to its first three words, keeping the anchor term
    ///
    /// Queries of two words or fewer are returned unchanged so the caller can
    /// detect that there is nothing left to relax by comparing with the input.
    pub fn simplify(&self, query: &str) -> String {
        let words: Vec<&str> = query.split_whitespace().collect();
        if words.len() <= 2 {
            return query.to_string();
        }

        let mut kept: Vec<&str> = words.into_iter().take(SIMPLIFIED_TOKENS).collect();
        if !kept.iter().any(|w| w.eq_ignore_ascii_case(&self.anchor)) {
            kept.insert(0, &self.anchor);
        }

        kept.join(" ")
    }
}

impl Default for QueryNormalizer {
    fn default() -> Self {
        Self::new(ANCHOR_TERM)
    }
}
