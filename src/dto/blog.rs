use serde::Serialize;

use crate::domain::blog::Blog;
use crate::pagination::Paginated;

/// Data for the blog listing.
#[derive(Debug, Serialize)]
pub struct BlogIndexData {
    /// Shown only when no category is selected.
    pub featured: Vec<Blog>,
    pub posts: Paginated<Blog>,
    pub categories: Vec<&'static str>,
    pub selected_category: &'static str,
}

/// Data for a single post.
#[derive(Debug, Serialize)]
pub struct BlogPostData {
    pub post: Blog,
    /// Body rendered to HTML; already escaped.
    pub body_html: String,
    pub related: Vec<Blog>,
}
