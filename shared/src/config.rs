//! Compile-time defaults and the settings object the pages read.

use crate::{cache::CachePolicy, iterative::COMMITS_PER_PROJECT};

/// Default admin API base.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Default GitHub account owning the tracked projects.
pub const DEFAULT_GITHUB_OWNER: &str = "LiuYuYang01";

/// GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Runtime settings of the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Admin API base url, without trailing slash.
    pub api_base: String,
    /// Owner of the tracked GitHub repositories.
    pub github_owner: String,
    /// Commits shown per project.
    pub commits_per_project: usize,
    /// Expiry of cached timelines.
    pub cache_policy: CachePolicy,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_GITHUB_OWNER)
    }
}

impl AdminConfig {
    /// Settings for `api_base` and `github_owner`, defaults elsewhere.
    pub fn new(api_base: &str, github_owner: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            github_owner: github_owner.to_string(),
            commits_per_project: COMMITS_PER_PROJECT,
            cache_policy: CachePolicy::default(),
        }
    }

    /// Absolute url of an admin API path such as `/article/list`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// Commits API url of `repo`.
    pub fn commits_url(&self, repo: &str, per_page: usize) -> String {
        format!(
            "{}/repos/{}/{}/commits?per_page={}",
            GITHUB_API_BASE, self.github_owner, repo, per_page
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_without_double_slashes() {
        let config = AdminConfig::new("http://api.test/api/", "someone");
        assert_eq!(config.endpoint("/article/list"), "http://api.test/api/article/list");
        assert_eq!(config.endpoint("tag"), "http://api.test/api/tag");
    }

    #[test]
    fn commits_url_targets_owner_repo() {
        let config = AdminConfig::default();
        assert_eq!(
            config.commits_url("Thrive_Blog", 10),
            "https://api.github.com/repos/LiuYuYang01/Thrive_Blog/commits?per_page=10"
        );
        assert_eq!(config.cache_policy.ttl_ms, None);
    }
}
