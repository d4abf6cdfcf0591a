//! Success and error notices shown after page operations.

/// Transient message shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or failure.
    pub kind: NoticeKind,
    /// Text shown to the operator.
    pub message: String,
}

/// Tone of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

impl Notice {
    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Success messages of the management pages.
pub mod messages {
    /// Article deleted.
    pub const ARTICLE_DELETED: &str = "🎉 删除文章成功";
    /// Comment deleted.
    pub const COMMENT_DELETED: &str = "🎉 删除评论成功";
    /// Link deleted.
    pub const LINK_DELETED: &str = "🎉 删除网站成功";
    /// Link created.
    pub const LINK_CREATED: &str = "🎉 新增网站成功";
    /// Link updated.
    pub const LINK_UPDATED: &str = "🎉 编辑网站成功";
}
