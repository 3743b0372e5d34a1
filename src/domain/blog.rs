use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blog categories offered as filters on the listing page.
pub const BLOG_CATEGORIES: [&str; 7] = [
    "All",
    "Technical Guide",
    "Application",
    "Product Innovation",
    "Sustainability",
    "Quality Assurance",
    "Case Study",
];

/// Pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    #[serde(default, rename(deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Maps a user-selected category to the API filter value.
///
/// Unknown categories and `All` disable filtering.
pub fn category_filter(selected: Option<&str>) -> Option<&'static str> {
    let selected = selected?.trim();
    BLOG_CATEGORIES
        .iter()
        .copied()
        .filter(|category| *category != ALL_CATEGORIES)
        .find(|category| category.eq_ignore_ascii_case(selected))
}
