// Mock 数据，`--features mock` 时替代后台接口
use std::cell::RefCell;

use thrive_admin_shared::{
    iterative::{CommitAuthor, CommitDetail, GithubCommit},
    query::{ArticleQuery, CommentQuery},
    ApiError, Article, Category, Comment, LinkType, Tag, Web,
};

// 2024-01-01 00:00:00 UTC
const BASE_TIME_MS: i64 = 1_704_067_200_000;
const DAY_MS: i64 = 86_400_000;

thread_local! {
    static ARTICLES: RefCell<Vec<Article>> = RefCell::new(seed_articles());
    static COMMENTS: RefCell<Vec<Comment>> = RefCell::new(seed_comments());
    static LINKS: RefCell<Vec<Web>> = RefCell::new(seed_links());
}

fn stamp(day: i64) -> String {
    (BASE_TIME_MS + day * DAY_MS).to_string()
}

fn in_range(create_time: &str, start: Option<&String>, end: Option<&String>) -> bool {
    let Ok(time) = create_time.parse::<i64>() else {
        return true;
    };
    let after = start.and_then(|s| s.parse::<i64>().ok()).is_none_or(|s| time >= s);
    let before = end.and_then(|e| e.parse::<i64>().ok()).is_none_or(|e| time <= e);
    after && before
}

pub fn mock_categories() -> Vec<Category> {
    let cate = |id: u32, name: &str, children: Vec<Category>| Category {
        id,
        name: name.to_string(),
        kind: "cate".to_string(),
        children,
    };
    vec![
        cate(1, "开发", vec![cate(11, "前端", Vec::new()), cate(12, "后端", Vec::new())]),
        cate(2, "生活随笔", Vec::new()),
        Category {
            id: 3,
            name: "友链".to_string(),
            kind: "nav".to_string(),
            children: Vec::new(),
        },
    ]
}

pub fn mock_tags() -> Vec<Tag> {
    ["Rust", "Yew", "WebAssembly", "Python", "随笔"]
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Tag {
            id,
            name: name.to_string(),
        })
        .collect()
}

pub fn mock_link_types() -> Vec<LinkType> {
    vec![
        LinkType {
            id: 1,
            name: "技术博客".to_string(),
        },
        LinkType {
            id: 2,
            name: "工具网站".to_string(),
        },
    ]
}

fn seed_articles() -> Vec<Article> {
    let categories = mock_categories();
    let tags = mock_tags();
    (1..=15u32)
        .map(|id| {
            let cate = &categories[(id as usize) % 2];
            let leaf = cate.children.get((id as usize) % 2).cloned();
            let mut cate_list = vec![Category {
                children: Vec::new(),
                ..cate.clone()
            }];
            cate_list.extend(leaf);
            Article {
                id,
                title: format!("示例文章 {id}"),
                description: if id % 4 == 0 {
                    String::new()
                } else {
                    format!("第 {id} 篇文章的摘要")
                },
                cate_list,
                tag_list: tags.iter().skip((id as usize) % 3).take(2).cloned().collect(),
                view: u64::from(id) * 37,
                comment: u64::from(id % 5),
                create_time: stamp(i64::from(id) * 9),
            }
        })
        .collect()
}

fn seed_comments() -> Vec<Comment> {
    (1..=12u32)
        .map(|id| Comment {
            id,
            name: format!("访客{id}"),
            content: format!("这是第 {id} 条评论，写得很好！"),
            email: (id % 3 != 0).then(|| format!("guest{id}@example.com")),
            url: (id % 2 == 0).then(|| format!("https://guest{id}.example.com")),
            article_title: (id % 4 != 0).then(|| format!("示例文章 {id}")),
            create_time: stamp(i64::from(id) * 11),
        })
        .collect()
}

fn seed_links() -> Vec<Web> {
    let types = mock_link_types();
    (1..=5u32)
        .map(|id| {
            let kind = types[(id as usize) % types.len()].clone();
            Web {
                id: Some(id),
                title: format!("示例网站 {id}"),
                description: format!("示例网站 {id} 的描述"),
                email: Some(format!("site{id}@example.com")),
                image: format!("https://picsum.photos/seed/site{id}/64"),
                url: Some(format!("https://site{id}.example.com")),
                type_id: kind.id,
                kind: Some(kind),
                create_time: Some(stamp(i64::from(id))),
            }
        })
        .collect()
}

pub fn mock_articles(query: Option<&ArticleQuery>) -> Vec<Article> {
    ARTICLES.with(|store| {
        let all = store.borrow().clone();
        let Some(query) = query else {
            return all;
        };
        all.into_iter()
            .filter(|a| query.key.as_ref().is_none_or(|key| a.title.contains(key.as_str())))
            .filter(|a| {
                query
                    .cate_ids
                    .last()
                    .is_none_or(|id| a.cate_list.iter().any(|c| c.id == *id))
            })
            .filter(|a| query.tag_id.is_none_or(|id| a.tag_list.iter().any(|t| t.id == id)))
            .filter(|a| in_range(&a.create_time, query.start_date.as_ref(), query.end_date.as_ref()))
            .collect()
    })
}

pub fn mock_delete_article(id: u32) {
    ARTICLES.with(|store| store.borrow_mut().retain(|a| a.id != id));
}

pub fn mock_comments(query: Option<&CommentQuery>) -> Vec<Comment> {
    COMMENTS.with(|store| {
        let all = store.borrow().clone();
        let Some(query) = query else {
            return all;
        };
        all.into_iter()
            .filter(|c| {
                query.key.as_ref().is_none_or(|key| {
                    c.article_title
                        .as_deref()
                        .is_some_and(|title| title.contains(key.as_str()))
                })
            })
            .filter(|c| query.content.as_ref().is_none_or(|content| c.content.contains(content.as_str())))
            .filter(|c| in_range(&c.create_time, query.start_date.as_ref(), query.end_date.as_ref()))
            .collect()
    })
}

pub fn mock_delete_comment(id: u32) {
    COMMENTS.with(|store| store.borrow_mut().retain(|c| c.id != id));
}

pub fn mock_links() -> Vec<Web> {
    LINKS.with(|store| store.borrow().clone())
}

pub fn mock_delete_link(id: u32) {
    LINKS.with(|store| store.borrow_mut().retain(|w| w.id != Some(id)));
}

pub fn mock_create_link(mut web: Web) -> Web {
    LINKS.with(|store| {
        let mut links = store.borrow_mut();
        let next_id = links.iter().filter_map(|w| w.id).max().unwrap_or(0) + 1;
        web.id = Some(next_id);
        web.create_time = Some(stamp(30));
        links.push(web.clone());
        web
    })
}

pub fn mock_update_link(web: Web) -> Result<Web, ApiError> {
    LINKS.with(|store| {
        let mut links = store.borrow_mut();
        let slot = links
            .iter_mut()
            .find(|w| w.id.is_some() && w.id == web.id)
            .ok_or_else(|| ApiError::Api {
                code: 400,
                message: "网站不存在".to_string(),
            })?;
        *slot = web.clone();
        Ok(web)
    })
}

pub fn mock_commits(repo: &str, per_page: usize) -> Vec<GithubCommit> {
    (0..per_page)
        .map(|index| {
            let day = 1 + (index * 3) % 28;
            let month = 1 + index % 12;
            GithubCommit {
                commit: CommitDetail {
                    author: CommitAuthor {
                        date: format!("2024-{month:02}-{day:02}T08:{index:02}:00Z"),
                    },
                    message: format!("{repo}: 第 {} 次迭代", per_page - index),
                },
            }
        })
        .collect()
}
