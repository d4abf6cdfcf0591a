//! Filter forms and the query bodies they produce.
//!
//! The server decides what a filter means; these types only carry the
//! populated fields through unchanged and leave the empty ones out.

use std::fmt::Display;

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::{
    Category,
    time::{day_end_ms, day_start_ms},
};

/// Date range picked in a filter form, as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeInput {
    /// First day, empty when unset.
    pub start: String,
    /// Last day, empty when unset.
    pub end: String,
}

impl DateRangeInput {
    /// Epoch-millisecond bounds in `tz`: start of the first day, end of the
    /// last day. Unset or unparsable days yield `None`.
    pub fn bounds_in<Tz>(&self, tz: &Tz) -> (Option<String>, Option<String>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        (
            day_start_ms(&self.start, tz).map(|ms| ms.to_string()),
            day_end_ms(&self.end, tz).map(|ms| ms.to_string()),
        )
    }
}

/// Article filter form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilterForm {
    /// Title keyword.
    pub title: String,
    /// Cascader path of category ids.
    pub cate_ids: Vec<u32>,
    /// Selected tag.
    pub tag_id: Option<u32>,
    /// Creation time range.
    pub range: DateRangeInput,
}

/// Body of the article list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    /// Title keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Category ids.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cate_ids: Vec<u32>,
    /// Tag id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<u32>,
    /// Lower bound, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Upper bound, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ArticleFilterForm {
    /// Build the query with day bounds in local time.
    pub fn to_query(&self) -> ArticleQuery {
        self.to_query_in(&Local)
    }

    /// Build the query with day bounds in `tz`.
    pub fn to_query_in<Tz>(&self, tz: &Tz) -> ArticleQuery
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (start_date, end_date) = self.range.bounds_in(tz);
        ArticleQuery {
            key: non_empty(&self.title),
            cate_ids: self.cate_ids.clone(),
            tag_id: self.tag_id,
            start_date,
            end_date,
        }
    }
}

/// Comment filter form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentFilterForm {
    /// Article title keyword.
    pub title: String,
    /// Content keyword.
    pub content: String,
    /// Creation time range.
    pub range: DateRangeInput,
}

/// Body of the comment list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    /// Article title keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Content keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Lower bound, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Upper bound, epoch milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl CommentFilterForm {
    /// Build the query with day bounds in local time.
    pub fn to_query(&self) -> CommentQuery {
        self.to_query_in(&Local)
    }

    /// Build the query with day bounds in `tz`.
    pub fn to_query_in<Tz>(&self, tz: &Tz) -> CommentQuery
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let (start_date, end_date) = self.range.bounds_in(tz);
        CommentQuery {
            key: non_empty(&self.title),
            content: non_empty(&self.content),
            start_date,
            end_date,
        }
    }
}

/// Link lists are never filtered server side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoQuery {}

/// Only real article categories, navigation entries dropped.
pub fn article_categories(all: Vec<Category>) -> Vec<Category> {
    all.into_iter().filter(|item| item.kind == "cate").collect()
}

/// One selectable cascader option: the id path from the root and a label
/// joining the names along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeOption {
    /// Ids from the root category down to this one.
    pub path: Vec<u32>,
    /// `Parent / Child` label.
    pub label: String,
}

/// Every node of the category tree as a cascader option, depth first.
pub fn cascade_options(categories: &[Category]) -> Vec<CascadeOption> {
    fn walk(nodes: &[Category], prefix: &CascadeOption, out: &mut Vec<CascadeOption>) {
        for node in nodes {
            let mut path = prefix.path.clone();
            path.push(node.id);
            let label = if prefix.label.is_empty() {
                node.name.clone()
            } else {
                format!("{} / {}", prefix.label, node.name)
            };
            let option = CascadeOption {
                path,
                label,
            };
            out.push(option.clone());
            walk(&node.children, &option, out);
        }
    }

    let mut out = Vec::new();
    let root = CascadeOption {
        path: Vec::new(),
        label: String::new(),
    };
    walk(categories, &root, &mut out);
    out
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;

    use super::*;

    #[test]
    fn populated_article_fields_pass_through_unchanged() {
        let form = ArticleFilterForm {
            title: " rust ".to_string(),
            cate_ids: vec![1, 4],
            tag_id: Some(9),
            range: DateRangeInput {
                start: "2024-01-01".to_string(),
                end: "2024-01-02".to_string(),
            },
        };
        let query = form.to_query_in(&Utc);
        assert_eq!(query.key.as_deref(), Some(" rust "));
        assert_eq!(query.cate_ids, vec![1, 4]);
        assert_eq!(query.tag_id, Some(9));
        assert_eq!(query.start_date.as_deref(), Some("1704067200000"));
        assert_eq!(query.end_date.as_deref(), Some("1704239999999"));
    }

    #[test]
    fn cascade_options_carry_full_id_path() {
        let tree = vec![Category {
            id: 1,
            name: "开发".to_string(),
            kind: "cate".to_string(),
            children: vec![Category {
                id: 4,
                name: "Rust".to_string(),
                kind: "cate".to_string(),
                children: Vec::new(),
            }],
        }];
        let options = cascade_options(&tree);
        assert_eq!(options.len(), 2);
        assert_eq!(options[1].path, vec![1, 4]);
        assert_eq!(options[1].label, "开发 / Rust");
    }

    #[test]
    fn navigation_entries_are_not_categories() {
        let all = vec![
            Category {
                id: 1,
                name: "首页".to_string(),
                kind: "nav".to_string(),
                children: Vec::new(),
            },
            Category {
                id: 2,
                name: "随笔".to_string(),
                kind: "cate".to_string(),
                children: Vec::new(),
            },
        ];
        let cates = article_categories(all);
        assert_eq!(cates.len(), 1);
        assert_eq!(cates[0].id, 2);
    }

    #[test]
    fn empty_article_form_serializes_to_empty_object() {
        let query = ArticleFilterForm::default().to_query_in(&Utc);
        assert_eq!(serde_json::to_value(&query).expect("serialize"), json!({}));
    }

    #[test]
    fn comment_query_uses_camel_case_and_skips_unset_bounds() {
        let form = CommentFilterForm {
            title: String::new(),
            content: "nice".to_string(),
            range: DateRangeInput {
                start: "2024-01-01".to_string(),
                end: String::new(),
            },
        };
        let value = serde_json::to_value(form.to_query_in(&Utc)).expect("serialize");
        assert_eq!(value, json!({ "content": "nice", "startDate": "1704067200000" }));
    }
}
