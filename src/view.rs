//! Blog list view model.
//!
//! [`BlogFilters`] holds the interactive state of the blog index
//! (search text, filters, sort order, current page) and turns the
//! full post collection into one [`BlogPage`] slice. Everything is
//! recomputed per call; the collection is small enough that caching
//! would only add staleness bugs.

use crate::{
    config::SiteConfig,
    content::{Level, Post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sort orders of the blog index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    /// Shortest reading time first.
    ReadingTime,
    /// Beginner before advanced.
    Level,
}

/// Filter and pagination state. Any filter or sort change resets the
/// page to 1 so a stale page index can never outlive its result set.
#[derive(Debug, Clone)]
pub struct BlogFilters {
    search: String,
    series: Option<String>,
    level: Option<Level>,
    tag: Option<String>,
    sort: SortKey,
    page: usize,
    page_size: usize,
}

/// One page of filtered, sorted posts plus the totals the pagination
/// controls need.
#[derive(Debug, Serialize)]
pub struct BlogPage {
    pub posts: Vec<Post>,
    pub page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    /// Zero-based index of the first post on this page within the
    /// filtered set.
    pub start_index: usize,
}

/// Aggregate numbers for the blog index header.
#[derive(Debug, PartialEq, Serialize)]
pub struct BlogStats {
    pub post_count: usize,
    pub tag_count: usize,
    pub series_count: usize,
    pub total_reading_time: u32,
    pub average_reading_time: u32,
}

/// Distinct values the filter controls offer.
#[derive(Debug, Serialize)]
pub struct Facets {
    pub series: Vec<String>,
    pub levels: Vec<Level>,
    pub tags: Vec<String>,
}

/// Value that clears a filter when passed to a setter.
const ALL: &str = "all";

impl BlogFilters {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            series: None,
            level: None,
            tag: None,
            sort: SortKey::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.blog.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    // ========================================================================
    // Mutators. Every filter/sort change resets the page.
    // ========================================================================

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.page = 1;
    }

    /// `"all"` clears the series filter.
    pub fn set_series(&mut self, series: &str) {
        self.series = (series != ALL).then(|| series.to_owned());
        self.page = 1;
    }

    /// Unrecognized values (including `"all"`) clear the level filter.
    pub fn set_level(&mut self, level: &str) {
        self.level = Level::parse(level);
        self.page = 1;
    }

    /// `"all"` clears the tag filter.
    pub fn set_tag(&mut self, tag: &str) {
        self.tag = (tag != ALL).then(|| tag.to_owned());
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
        self.page = 1;
    }

    /// Set the current page. The lower bound is clamped here; the
    /// upper bound is clamped against the result set in [`paginate`],
    /// since only it knows the filtered total.
    ///
    /// [`paginate`]: Self::paginate
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    fn matches(&self, post: &Post) -> bool {
        if !self.search.is_empty() {
            let query = self.search.to_lowercase();
            let hit = post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query)
                || post.tags.iter().any(|tag| tag.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if let Some(series) = &self.series
            && post.series.as_deref() != Some(series)
        {
            return false;
        }

        if let Some(level) = self.level
            && post.level != level
        {
            return false;
        }

        if let Some(tag) = &self.tag
            && !post.tags.iter().any(|t| t == tag)
        {
            return false;
        }

        true
    }

    fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self.sort {
            SortKey::DateDesc => compare_dates(&b.date, &a.date),
            SortKey::DateAsc => compare_dates(&a.date, &b.date),
            SortKey::TitleAsc => a.title.cmp(&b.title),
            SortKey::TitleDesc => b.title.cmp(&a.title),
            SortKey::ReadingTime => a.reading_time.cmp(&b.reading_time),
            SortKey::Level => a.level.ordinal().cmp(&b.level.ordinal()),
        }
    }

    /// Filter, sort and slice the post collection into the current
    /// page. An empty result is a valid page with `total_pages` 0.
    pub fn paginate(&self, posts: &[Post]) -> BlogPage {
        let mut filtered: Vec<&Post> = posts.iter().filter(|post| self.matches(post)).collect();
        filtered.sort_by(|a, b| self.compare(a, b));

        let total_posts = filtered.len();
        let total_pages = total_posts.div_ceil(self.page_size);
        let page = self.page.min(total_pages.max(1));
        let start_index = (page - 1) * self.page_size;

        let posts = filtered
            .into_iter()
            .skip(start_index)
            .take(self.page_size)
            .cloned()
            .collect();

        BlogPage {
            posts,
            page,
            total_pages,
            total_posts,
            start_index,
        }
    }
}

/// Compare two ISO date strings. Dates chrono can parse compare as
/// dates; anything else falls back to lexicographic order, which for
/// well-formed ISO strings is the same thing.
fn compare_dates(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

impl BlogStats {
    pub fn compute(posts: &[Post]) -> Self {
        let tags: BTreeSet<&str> = posts
            .iter()
            .flat_map(|post| post.tags.iter().map(String::as_str))
            .collect();
        let series: BTreeSet<&str> = posts
            .iter()
            .filter_map(|post| post.series.as_deref())
            .collect();
        let total_reading_time: u32 = posts.iter().map(|post| post.reading_time).sum();
        let average_reading_time = if posts.is_empty() {
            0
        } else {
            total_reading_time / posts.len() as u32
        };

        Self {
            post_count: posts.len(),
            tag_count: tags.len(),
            series_count: series.len(),
            total_reading_time,
            average_reading_time,
        }
    }
}

impl Facets {
    /// Collect the distinct filterable values from the collection.
    /// Series and tags come out sorted; levels are always all three.
    pub fn collect(posts: &[Post]) -> Self {
        let series: BTreeSet<String> = posts
            .iter()
            .filter_map(|post| post.series.clone())
            .collect();
        let tags: BTreeSet<String> = posts
            .iter()
            .flat_map(|post| post.tags.iter().cloned())
            .collect();

        Self {
            series: series.into_iter().collect(),
            levels: vec![Level::Beginner, Level::Intermediate, Level::Advanced],
            tags: tags.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, title: &str, date: &str) -> Post {
        Post {
            slug: slug.into(),
            title: title.into(),
            date: date.into(),
            ..Post::default()
        }
    }

    fn sample_posts() -> Vec<Post> {
        vec![
            Post {
                excerpt: "Getting started with Rust".into(),
                tags: vec!["rust".into(), "basics".into()],
                series: Some("rust-basics".into()),
                level: Level::Beginner,
                reading_time: 5,
                ..post("intro", "Intro to Rust", "2024-01-01")
            },
            Post {
                excerpt: "Futures and executors".into(),
                tags: vec!["rust".into(), "async".into()],
                level: Level::Advanced,
                reading_time: 15,
                ..post("async", "Async Rust", "2024-02-01")
            },
            Post {
                excerpt: "Modeling data".into(),
                tags: vec!["python".into()],
                level: Level::Intermediate,
                reading_time: 10,
                ..post("pandas", "Pandas Basics", "2024-03-01")
            },
        ]
    }

    #[test]
    fn test_search_case_insensitive_across_fields() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(9);

        filters.set_search("ASYNC");
        let page = filters.paginate(&posts);
        assert_eq!(page.total_posts, 1);
        assert_eq!(page.posts[0].slug, "async");

        // Excerpt match
        filters.set_search("modeling");
        assert_eq!(filters.paginate(&posts).posts[0].slug, "pandas");

        // Tag match
        filters.set_search("basics");
        assert_eq!(filters.paginate(&posts).total_posts, 2);
    }

    #[test]
    fn test_filters_and_combined() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(9);

        filters.set_tag("rust");
        assert_eq!(filters.paginate(&posts).total_posts, 2);

        filters.set_level("advanced");
        let page = filters.paginate(&posts);
        assert_eq!(page.total_posts, 1);
        assert_eq!(page.posts[0].slug, "async");

        // "all" clears a filter
        filters.set_level("all");
        filters.set_tag("all");
        assert_eq!(filters.paginate(&posts).total_posts, 3);
    }

    #[test]
    fn test_series_filter() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(9);

        filters.set_series("rust-basics");
        let page = filters.paginate(&posts);

        assert_eq!(page.total_posts, 1);
        assert_eq!(page.posts[0].slug, "intro");
    }

    #[test]
    fn test_sort_keys() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(9);

        let slugs = |page: BlogPage| -> Vec<String> {
            page.posts.into_iter().map(|p| p.slug).collect()
        };

        // Default: date descending
        assert_eq!(slugs(filters.paginate(&posts)), ["pandas", "async", "intro"]);

        filters.set_sort(SortKey::DateAsc);
        assert_eq!(slugs(filters.paginate(&posts)), ["intro", "async", "pandas"]);

        filters.set_sort(SortKey::TitleAsc);
        assert_eq!(slugs(filters.paginate(&posts)), ["async", "intro", "pandas"]);

        // Reading time sorts ascending, quick reads first
        filters.set_sort(SortKey::ReadingTime);
        assert_eq!(slugs(filters.paginate(&posts)), ["intro", "pandas", "async"]);

        filters.set_sort(SortKey::Level);
        assert_eq!(slugs(filters.paginate(&posts)), ["intro", "pandas", "async"]);
    }

    #[test]
    fn test_mutators_reset_page() {
        let mut filters = BlogFilters::new(1);
        filters.set_page(3);
        assert_eq!(filters.page(), 3);

        filters.set_search("rust");
        assert_eq!(filters.page(), 1);

        filters.set_page(2);
        filters.set_sort(SortKey::TitleAsc);
        assert_eq!(filters.page(), 1);

        filters.set_page(2);
        filters.set_tag("rust");
        assert_eq!(filters.page(), 1);
    }

    #[test]
    fn test_pagination_slicing() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(2);

        let first = filters.paginate(&posts);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_posts, 3);
        assert_eq!(first.posts.len(), 2);
        assert_eq!(first.start_index, 0);

        filters.set_page(2);
        let second = filters.paginate(&posts);
        assert_eq!(second.posts.len(), 1);
        assert_eq!(second.start_index, 2);

        // Out-of-range page clamps to the last page
        filters.set_page(99);
        assert_eq!(filters.paginate(&posts).page, 2);
    }

    #[test]
    fn test_pages_concatenate_to_full_collection() {
        let posts: Vec<Post> = (0..10)
            .map(|i| {
                post(
                    &format!("p{i}"),
                    &format!("Post {i}"),
                    &format!("2024-01-{:02}", i + 1),
                )
            })
            .collect();
        // Default sort: date descending
        let expected: Vec<String> = (0..10).rev().map(|i| format!("p{i}")).collect();

        for page_size in [1, 6, 9, 20] {
            let mut filters = BlogFilters::new(page_size);
            let first = filters.paginate(&posts);
            assert_eq!(first.total_pages, 10usize.div_ceil(page_size));

            let mut collected: Vec<String> = Vec::new();
            for page in 1..=first.total_pages {
                filters.set_page(page);
                let slice = filters.paginate(&posts);
                assert!(slice.posts.len() <= page_size);
                collected.extend(slice.posts.into_iter().map(|p| p.slug));
            }

            assert_eq!(collected, expected, "page size {page_size}");
        }
    }

    #[test]
    fn test_empty_result_is_valid_page() {
        let posts = sample_posts();
        let mut filters = BlogFilters::new(9);
        filters.set_search("no such thing");

        let page = filters.paginate(&posts);

        assert_eq!(page.total_posts, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.posts.is_empty());
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_non_iso_dates_fall_back_to_lexicographic() {
        let posts = vec![
            post("b", "B", "later"),
            post("a", "A", "earlier"),
        ];
        let filters = BlogFilters::new(9);

        let page = filters.paginate(&posts);

        assert_eq!(page.posts[0].slug, "b");
    }

    #[test]
    fn test_stats() {
        let stats = BlogStats::compute(&sample_posts());

        assert_eq!(stats.post_count, 3);
        assert_eq!(stats.tag_count, 4);
        assert_eq!(stats.series_count, 1);
        assert_eq!(stats.total_reading_time, 30);
        assert_eq!(stats.average_reading_time, 10);
    }

    #[test]
    fn test_stats_empty_collection() {
        let stats = BlogStats::compute(&[]);

        assert_eq!(stats.post_count, 0);
        assert_eq!(stats.average_reading_time, 0);
    }

    #[test]
    fn test_facets_sorted_distinct() {
        let facets = Facets::collect(&sample_posts());

        assert_eq!(facets.series, vec!["rust-basics"]);
        assert_eq!(facets.tags, vec!["async", "basics", "python", "rust"]);
        assert_eq!(facets.levels.len(), 3);
    }
}
