//! Sample articles served when every provider fails

use chrono::{SecondsFormat, Utc};

use vtv_core::{Article, ArticleSource};

/// (title, description, image label, source)
const SAMPLES: [(&str, &str, &str, &str); 5] = [
    (
        "Vietnam's Economy Shows Strong Growth Despite Global Challenges",
        "Vietnam continues to be one of the fastest-growing economies in Southeast Asia, with GDP growth exceeding expectations in the latest quarter.",
        "Vietnam+Economy",
        "Economic Times",
    ),
    (
        "Tourism in Vietnam Rebounds to Pre-Pandemic Levels",
        "International arrivals to Vietnam have surpassed pre-COVID numbers, with significant increases in visitors from Europe, North America, and neighboring Asian countries.",
        "Vietnam+Tourism",
        "Travel Weekly",
    ),
    (
        "Vietnam Emerges as Key Manufacturing Hub Amid Supply Chain Shifts",
        "Global companies continue to relocate manufacturing operations to Vietnam as part of their 'China plus one' strategy, driving industrial growth and foreign investment.",
        "Vietnam+Manufacturing",
        "Business Insider",
    ),
    (
        "Vietnam's Tech Startups Attract Record Investment",
        "Venture capital flowing into Vietnamese tech startups reached an all-time high this year, with fintech, e-commerce, and edtech sectors leading the way.",
        "Vietnam+Tech",
        "Tech in Asia",
    ),
    (
        "Vietnam's Coffee Exports Set New Records",
        "Vietnam, the world's second-largest coffee producer, has reported record export volumes this year despite climate challenges affecting global supply.",
        "Vietnam+Coffee",
        "Reuters",
    ),
];

/// The fixed sample dataset, stamped with the current time
///
/// The content never depends on the query that failed.
pub fn sample_articles() -> Vec<Article> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    SAMPLES
        .iter()
        .map(|(title, description, image, source)| Article {
            source: ArticleSource {
                id: None,
                name: Some(source.to_string()),
            },
            description: Some(description.to_string()),
            image_url: Some(format!(
                "https://via.placeholder.com/400x250?text={}",
                image
            )),
            published_at: now.clone(),
            ..Article::new(*title, "#")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_articles() {
        let articles = sample_articles();
        assert_eq!(articles.len(), SAMPLES.len());
        assert!(articles.iter().all(|a| !a.title.is_empty() && a.url == "#"));
        assert!(articles
            .iter()
            .all(|a| chrono::DateTime::parse_from_rfc3339(&a.published_at).is_ok()));
    }
}
