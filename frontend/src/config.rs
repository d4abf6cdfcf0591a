// Configuration for the frontend application
use thrive_admin_shared::config::{AdminConfig, DEFAULT_API_BASE, DEFAULT_GITHUB_OWNER};

// API base URL - 编译时从环境变量读取，默认本地开发地址
pub const API_BASE: &str = match option_env!("THRIVE_ADMIN_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE,
};

/// GitHub account owning the tracked projects
pub const GITHUB_OWNER: &str = match option_env!("THRIVE_ADMIN_GITHUB_OWNER") {
    Some(owner) => owner,
    None => DEFAULT_GITHUB_OWNER,
};

/// Settings assembled from the compile-time environment
pub fn admin_config() -> AdminConfig {
    AdminConfig::new(API_BASE, GITHUB_OWNER)
}
