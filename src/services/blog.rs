use rand::seq::SliceRandom;

use crate::content;
use crate::domain::blog::{ALL_CATEGORIES, BLOG_CATEGORIES, category_filter};
use crate::domain::types::BlogSlug;
use crate::dto::blog::{BlogIndexData, BlogPostData};
use crate::pagination::{BLOG_POSTS_PER_PAGE, Paginated};
use crate::repository::{BlogListQuery, BlogReader};
use crate::services::{ServiceError, ServiceResult};

/// Posts fetched as candidates for the "related" section.
pub const RELATED_POOL: usize = 10;
/// Related posts shown under a post.
pub const RELATED_SHOWN: usize = 3;

/// Loads the blog listing for an optional category.
///
/// Featured posts are listed separately and only when no category is
/// selected; the remaining posts are paginated in memory.
pub async fn load_blog_index<R>(
    repo: &R,
    category: Option<&str>,
    page: Option<usize>,
) -> ServiceResult<BlogIndexData>
where
    R: BlogReader + ?Sized,
{
    let filter = category_filter(category);
    let mut query = BlogListQuery::new();
    if let Some(category) = filter {
        query = query.category(category);
    }

    let blogs = repo.list_blogs(&query).await.map_err(|err| {
        log::error!("Failed to load blogs: {err}");
        err
    })?;

    let (featured, regular): (Vec<_>, Vec<_>) = blogs.into_iter().partition(|blog| blog.featured);

    Ok(BlogIndexData {
        featured: if filter.is_none() { featured } else { Vec::new() },
        posts: Paginated::from_vec(regular, page.unwrap_or(1), BLOG_POSTS_PER_PAGE),
        categories: BLOG_CATEGORIES.to_vec(),
        selected_category: filter.unwrap_or(ALL_CATEGORIES),
    })
}

/// Loads one post with its rendered body and a random set of related posts.
pub async fn load_blog_post<R>(repo: &R, slug: &str) -> ServiceResult<BlogPostData>
where
    R: BlogReader + ?Sized,
{
    let slug = BlogSlug::new(slug).map_err(|_| ServiceError::NotFound)?;
    let post = repo.get_blog_by_slug(&slug).await.map_err(|err| {
        log::error!("Failed to load blog {slug}: {err}");
        err
    })?;

    let query = BlogListQuery::new()
        .limit(RELATED_POOL)
        .exclude_slug(slug.as_str());
    let mut related = match repo.list_blogs(&query).await {
        Ok(related) => related,
        Err(err) => {
            log::warn!("Failed to load related blogs for {slug}: {err}");
            Vec::new()
        }
    };
    related.retain(|candidate| candidate.slug != post.slug);
    related.shuffle(&mut rand::rng());
    related.truncate(RELATED_SHOWN);

    Ok(BlogPostData {
        body_html: content::render(&post.content),
        post,
        related,
    })
}
