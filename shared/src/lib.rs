//! Models and page logic shared by the Thrive admin console.
//!
//! Everything here is platform independent: the Yew front-end binds the
//! traits in [`api`] and [`cache`] to `gloo-net` and `sessionStorage`, while
//! the tests bind them to in-memory fakes.

use serde::{Deserialize, Serialize};

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod iterative;
pub mod link;
pub mod notice;
pub mod query;
pub mod seq;
pub mod table;
pub mod time;
pub mod workflow;

pub use error::ApiError;

/// Page-local state driven by actions.
///
/// The front-end wraps implementors in a Yew reducer so async callbacks
/// always act on the latest state.
pub trait PageState: Clone + PartialEq {
    /// Events the page reacts to.
    type Action;

    /// Apply one event in place.
    fn apply(&mut self, action: Self::Action);
}

/// Category as returned by the category endpoint.
///
/// The same endpoint also serves navigation entries; only `kind == "cate"`
/// entries are real article categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Server id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Entry kind, `"cate"` for article categories.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Nested categories, used by the cascader filter.
    #[serde(default)]
    pub children: Vec<Category>,
}

/// Article tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Server id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Article row of the management table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Server id.
    pub id: u32,
    /// Title.
    pub title: String,
    /// Summary, may be empty.
    #[serde(default)]
    pub description: String,
    /// Ordered categories.
    #[serde(default)]
    pub cate_list: Vec<Category>,
    /// Ordered tags.
    #[serde(default)]
    pub tag_list: Vec<Tag>,
    /// View count.
    #[serde(default)]
    pub view: u64,
    /// Comment count.
    #[serde(default)]
    pub comment: u64,
    /// Creation time, epoch milliseconds as a string.
    pub create_time: String,
}

/// Reader comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Server id.
    pub id: u32,
    /// Author name.
    pub name: String,
    /// Comment body.
    pub content: String,
    /// Author email.
    #[serde(default)]
    pub email: Option<String>,
    /// Author website.
    #[serde(default)]
    pub url: Option<String>,
    /// Title of the article the comment belongs to.
    #[serde(default)]
    pub article_title: Option<String>,
    /// Creation time, epoch milliseconds as a string.
    pub create_time: String,
}

/// Link directory type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkType {
    /// Server id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Link directory entry ("网站").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Web {
    /// Server id, absent before creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    /// Site title.
    pub title: String,
    /// Site description.
    pub description: String,
    /// Webmaster email. Sent as `null` when cleared so an update erases it.
    #[serde(default)]
    pub email: Option<String>,
    /// Site icon url.
    pub image: String,
    /// Site url, `null` when cleared.
    #[serde(default)]
    pub url: Option<String>,
    /// Id of the link type.
    pub type_id: u32,
    /// Resolved link type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LinkType>,
    /// Creation time, epoch milliseconds as a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Web {
    /// Stable render key: the server id, or the title for an unsaved entry.
    pub fn list_key(&self) -> String {
        self.id.map_or_else(|| self.title.clone(), |id| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_reads_camel_case_payload() {
        let raw = r#"{
            "id": 7,
            "title": "Hello",
            "description": "",
            "cateList": [{ "id": 1, "name": "Rust", "type": "cate" }],
            "tagList": [{ "id": 3, "name": "wasm" }],
            "view": 12,
            "comment": 2,
            "createTime": "1700000000000"
        }"#;
        let article: Article = serde_json::from_str(raw).expect("parse article");
        assert_eq!(article.cate_list[0].kind, "cate");
        assert!(article.cate_list[0].children.is_empty());
        assert_eq!(article.tag_list[0].name, "wasm");
        assert_eq!(article.create_time, "1700000000000");
    }

    #[test]
    fn web_without_id_omits_it_but_keeps_empty_optionals() {
        let web = Web {
            id: None,
            title: "Thrive".to_string(),
            description: "blog".to_string(),
            email: None,
            image: "https://example.com/logo.png".to_string(),
            url: None,
            type_id: 2,
            kind: None,
            create_time: None,
        };
        let value = serde_json::to_value(&web).expect("serialize web");
        assert!(value.get("id").is_none());
        assert_eq!(value.get("email"), Some(&serde_json::Value::Null));
        assert_eq!(value.get("url"), Some(&serde_json::Value::Null));
        assert_eq!(value["typeId"], 2);
    }

    #[test]
    fn list_key_follows_id_not_position() {
        let saved = |id: u32, title: &str| Web {
            id: Some(id),
            title: title.to_string(),
            description: String::new(),
            email: None,
            image: String::new(),
            url: None,
            type_id: 1,
            kind: None,
            create_time: None,
        };
        let first = saved(9, "Same");
        let second = saved(4, "Same");
        assert_eq!(first.list_key(), "9");
        assert_ne!(first.list_key(), second.list_key());

        let draft = Web { id: None, ..saved(0, "Draft") };
        assert_eq!(draft.list_key(), "Draft");
    }
}
