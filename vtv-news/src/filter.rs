//! Keyword filter over fetched articles

use vtv_core::Article;

/// Tokens this short carry no meaning for filtering
const MIN_TERM_CHARS: usize = 3;

/// Keep the articles mentioning at least one word of `term`
///
/// Words of two characters or fewer are ignored. Matching is a
/// case-insensitive substring test over title, description and content;
/// one matching word in one field is enough. A blank term, or one made only
/// of short words, returns the input unchanged.
pub fn filter_articles(articles: Vec<Article>, term: &str) -> Vec<Article> {
    let terms: Vec<String> = term
        .to_lowercase()
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect();

    if terms.is_empty() {
        return articles;
    }

    articles
        .into_iter()
        .filter(|article| {
            let title = article.title.to_lowercase();
            let description = article
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            let content = article
                .content
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();

            terms.iter().any(|t| {
                title.contains(t.as_str())
                    || description.contains(t.as_str())
                    || content.contains(t.as_str())
            })
        })
        .collect()
}
