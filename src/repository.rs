//! Read-only content repository.
//!
//! Loads every collection once at construction and then answers
//! lookups without touching the filesystem again. Constructed per
//! process; there is no global instance.

use crate::{
    config::{SeriesConfig, SiteConfig},
    content::{
        self, AssetStore, BlogSeries, Certificate, FsAssets, Post, Profile, Project,
        profile::{
            AboutContent, BasicInfo, ContactContent, EducationItem, ExperienceItem,
            ResearchContent, Skill,
        },
    },
};

/// Previous/next links for a post within its series.
///
/// All fields are `None` when the post does not belong to a series,
/// or sits at the corresponding end of it.
#[derive(Debug, Default)]
pub struct SeriesNavigation<'a> {
    pub previous: Option<&'a Post>,
    pub next: Option<&'a Post>,
    pub series_info: Option<&'a SeriesConfig>,
}

/// All site content, loaded once and immutable afterwards.
pub struct ContentRepository<'c> {
    config: &'c SiteConfig,
    posts: Vec<Post>,
    projects: Vec<Project>,
    certifications: Vec<Certificate>,
    profile: Profile,
}

impl<'c> ContentRepository<'c> {
    /// Load all collections from the configured content directories,
    /// validating image paths against the real assets tree.
    pub fn load(config: &'c SiteConfig) -> Self {
        let assets = FsAssets::new(&config.content.assets);
        Self::load_with_assets(config, &assets)
    }

    /// Load with an injected asset store (tests pass a closure).
    pub fn load_with_assets(config: &'c SiteConfig, assets: &dyn AssetStore) -> Self {
        Self {
            posts: content::load_posts(config, assets),
            projects: content::load_projects(config, assets),
            certifications: content::load_certifications(config, assets),
            profile: content::load_profile(config, assets),
            config,
        }
    }

    // ========================================================================
    // Posts
    // ========================================================================

    /// All posts, date descending.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Exact slug lookup. The key is percent-decoded first so
    /// URL-encoded route parameters resolve.
    pub fn post_by_slug(&self, key: &str) -> Option<&Post> {
        let slug = urlencoding::decode(key).ok()?;
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Posts belonging to a series, ordered by `series_order`
    /// ascending. A missing order sorts as 0.
    pub fn posts_by_series(&self, series_id: &str) -> Vec<&Post> {
        let mut members: Vec<&Post> = self
            .posts
            .iter()
            .filter(|post| post.series.as_deref() == Some(series_id))
            .collect();
        members.sort_by_key(|post| post.series_order.unwrap_or(0));
        members
    }

    /// Every configured series with its member posts attached.
    /// Recomputed on each call; series without posts are included.
    pub fn series_with_posts(&self) -> Vec<BlogSeries> {
        self.config
            .blog
            .series
            .iter()
            .map(|series| {
                let posts = self
                    .posts_by_series(&series.id)
                    .into_iter()
                    .cloned()
                    .collect();
                BlogSeries::from_config(series, posts)
            })
            .collect()
    }

    /// Previous/next posts around `post` within its series.
    pub fn series_navigation(&self, post: &Post) -> SeriesNavigation<'_> {
        let Some(series_id) = post.series.as_deref() else {
            return SeriesNavigation::default();
        };

        let members = self.posts_by_series(series_id);
        let position = members.iter().position(|member| member.slug == post.slug);

        let (previous, next) = match position {
            Some(index) => (
                index.checked_sub(1).and_then(|i| members.get(i).copied()),
                members.get(index + 1).copied(),
            ),
            None => (None, None),
        };

        SeriesNavigation {
            previous,
            next,
            series_info: self.config.series_by_id(series_id),
        }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// All projects, date descending.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project_by_slug(&self, key: &str) -> Option<&Project> {
        let slug = urlencoding::decode(key).ok()?;
        self.projects.iter().find(|project| project.slug == slug)
    }

    /// Slugs of every project, in collection order.
    pub fn project_slugs(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(|project| project.slug.as_str())
            .collect()
    }

    // ========================================================================
    // Certifications
    // ========================================================================

    /// All certifications, issue date descending.
    pub fn certifications(&self) -> &[Certificate] {
        &self.certifications
    }

    pub fn certification_by_id(&self, key: &str) -> Option<&Certificate> {
        let id = urlencoding::decode(key).ok()?;
        self.certifications.iter().find(|cert| cert.id == id)
    }

    // ========================================================================
    // Profile
    // ========================================================================

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn basic_info(&self) -> &BasicInfo {
        &self.profile.basic_info
    }

    pub fn skills(&self) -> &[Skill] {
        &self.profile.skills
    }

    pub fn education(&self) -> &[EducationItem] {
        &self.profile.education
    }

    pub fn experience(&self) -> &[ExperienceItem] {
        &self.profile.experience
    }

    pub fn research(&self) -> &ResearchContent {
        &self.profile.research
    }

    pub fn about(&self) -> &AboutContent {
        &self.profile.about
    }

    pub fn contact(&self) -> &ContactContent {
        &self.profile.contact
    }
}
