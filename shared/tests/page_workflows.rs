//! Integration tests for page workflows.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use thrive_admin_shared::{
    ApiError, Article, Category, LinkType, PageState, Tag, Web,
    api::{CommitSource, ListResource, MutableResource, TaxonomySource},
    cache::{CachePolicy, MemoryStore, SessionStore, TimelineCache},
    iterative::{CommitAuthor, CommitDetail, GithubCommit, TRACKED_PROJECTS},
    link::{FormMode, LinkAction, LinkField, LinkPageState},
    query::{ArticleFilterForm, ArticleQuery, NoQuery},
    seq::RequestSeq,
    table::{TableAction, TableState},
    workflow::{delete_then_refetch, load_article_taxonomy, load_timeline, submit_link},
};

fn category(id: u32, name: &str, kind: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
        kind: kind.to_string(),
        children: Vec::new(),
    }
}

fn article(id: u32, title: &str, cate: Category) -> Article {
    Article {
        id,
        title: title.to_string(),
        description: String::new(),
        cate_list: vec![cate],
        tag_list: Vec::new(),
        view: 0,
        comment: 0,
        create_time: "1700000000000".to_string(),
    }
}

/// Article endpoint stand-in that filters by the last category id of the
/// cascader path, the way the server does.
#[derive(Default)]
struct FakeArticles {
    rows: RefCell<Vec<Article>>,
    calls: RefCell<Vec<String>>,
    queries: RefCell<Vec<Option<ArticleQuery>>>,
    fail_delete: bool,
}

#[async_trait(?Send)]
impl ListResource for FakeArticles {
    type Entity = Article;
    type Query = ArticleQuery;

    async fn list(&self, query: Option<&ArticleQuery>) -> Result<Vec<Article>, ApiError> {
        self.calls.borrow_mut().push("list".to_string());
        self.queries.borrow_mut().push(query.cloned());
        let rows = self.rows.borrow().clone();
        let Some(cate) = query.and_then(|q| q.cate_ids.last().copied()) else {
            return Ok(rows);
        };
        Ok(rows
            .into_iter()
            .filter(|row| row.cate_list.iter().any(|c| c.id == cate))
            .collect())
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("delete:{id}"));
        if self.fail_delete {
            return Err(ApiError::Http(500));
        }
        self.rows.borrow_mut().retain(|row| row.id != id);
        Ok(())
    }
}

#[derive(Default)]
struct FakeLinks {
    rows: RefCell<Vec<Web>>,
    calls: RefCell<Vec<String>>,
    created: RefCell<Option<Web>>,
    updated: RefCell<Option<Web>>,
}

#[async_trait(?Send)]
impl ListResource for FakeLinks {
    type Entity = Web;
    type Query = NoQuery;

    async fn list(&self, _query: Option<&NoQuery>) -> Result<Vec<Web>, ApiError> {
        self.calls.borrow_mut().push("list".to_string());
        Ok(self.rows.borrow().clone())
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(format!("delete:{id}"));
        self.rows.borrow_mut().retain(|row| row.id != Some(id));
        Ok(())
    }
}

#[async_trait(?Send)]
impl MutableResource for FakeLinks {
    async fn create(&self, entity: &Web) -> Result<Web, ApiError> {
        self.calls.borrow_mut().push("create".to_string());
        *self.created.borrow_mut() = Some(entity.clone());
        let mut created = entity.clone();
        created.id = Some(self.rows.borrow().len() as u32 + 1);
        self.rows.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, entity: &Web) -> Result<Web, ApiError> {
        self.calls.borrow_mut().push("update".to_string());
        *self.updated.borrow_mut() = Some(entity.clone());
        for row in self.rows.borrow_mut().iter_mut() {
            if row.id == entity.id {
                *row = entity.clone();
            }
        }
        Ok(entity.clone())
    }
}

struct FakeTaxonomy;

#[async_trait(?Send)]
impl TaxonomySource for FakeTaxonomy {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        Ok(vec![category(1, "首页", "nav"), category(2, "随笔", "cate")])
    }

    async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        Ok(vec![Tag {
            id: 7,
            name: "rust".to_string(),
        }])
    }

    async fn link_types(&self) -> Result<Vec<LinkType>, ApiError> {
        Ok(Vec::new())
    }
}

#[derive(Default)]
struct FakeGithub {
    fetches: Cell<usize>,
}

#[async_trait(?Send)]
impl CommitSource for FakeGithub {
    async fn fetch_commits(&self, repo: &str, per_page: usize) -> Result<Vec<GithubCommit>, ApiError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok((0..per_page.min(2))
            .map(|n| GithubCommit {
                commit: CommitDetail {
                    author: CommitAuthor {
                        date: format!("2024-05-0{}T08:00:00Z", n + 1),
                    },
                    message: format!("{repo} change {n}"),
                },
            })
            .collect())
    }
}

fn seeded_articles() -> FakeArticles {
    let articles = FakeArticles::default();
    *articles.rows.borrow_mut() = vec![
        article(3, "c", category(10, "Rust", "cate")),
        article(1, "a", category(11, "Go", "cate")),
        article(2, "b", category(11, "Go", "cate")),
    ];
    articles
}

#[tokio::test]
async fn mount_fetch_fills_table_in_server_order() {
    let articles = seeded_articles();
    let mut state = TableState::default();
    state.apply(TableAction::Loading);
    let rows = articles.list(None).await.expect("list articles");
    state.apply(TableAction::Loaded(rows));

    let ids: Vec<u32> = state.items.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert!(!state.loading);
}

#[tokio::test]
async fn category_filter_narrows_to_matching_article() {
    let articles = seeded_articles();
    let form = ArticleFilterForm {
        cate_ids: vec![10],
        ..ArticleFilterForm::default()
    };
    let query = form.to_query();
    let rows = articles.list(Some(&query)).await.expect("filtered list");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 3);
    assert_eq!(articles.queries.borrow()[0].as_ref(), Some(&query));
}

#[tokio::test]
async fn confirmed_delete_issues_one_delete_then_one_unfiltered_refetch() {
    let articles = seeded_articles();
    let rows = delete_then_refetch(&articles, 1)
        .await
        .expect("delete succeeds")
        .expect("refetch succeeds");

    assert_eq!(*articles.calls.borrow(), vec!["delete:1", "list"]);
    assert_eq!(*articles.queries.borrow(), vec![None]);
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn failed_delete_skips_refetch() {
    let articles = FakeArticles {
        fail_delete: true,
        ..seeded_articles()
    };
    let err = delete_then_refetch(&articles, 1).await.expect_err("delete fails");

    assert_eq!(err, ApiError::Http(500));
    assert_eq!(*articles.calls.borrow(), vec!["delete:1"]);
}

#[tokio::test]
async fn editing_link_merges_form_over_record() {
    let existing = Web {
        id: Some(5),
        title: "A".to_string(),
        description: "desc".to_string(),
        email: None,
        image: "https://example.com/a.png".to_string(),
        url: None,
        type_id: 1,
        kind: None,
        create_time: Some("1700000000000".to_string()),
    };
    let links = FakeLinks::default();
    links.rows.borrow_mut().push(existing.clone());

    let mut state = LinkPageState::default();
    state.apply(LinkAction::Loaded(links.list(None).await.expect("list links")));
    state.apply(LinkAction::Edit(existing.clone()));
    state.apply(LinkAction::Input(LinkField::Title, "B".to_string()));
    assert!(matches!(state.mode, FormMode::Edit(_)));

    let submission = state
        .form
        .validate()
        .expect("valid form")
        .into_submission(&state.mode, &state.types);
    let rows = submit_link(&links, &submission)
        .await
        .expect("update succeeds")
        .expect("refetch succeeds");

    let updated = links.updated.borrow().clone().expect("update called");
    assert_eq!(updated.id, Some(5));
    assert_eq!(updated.title, "B");
    assert_eq!(updated.description, "desc");
    assert_eq!(*links.calls.borrow(), vec!["list", "update", "list"]);
    assert_eq!(rows[0].title, "B");
}

#[tokio::test]
async fn creating_link_sends_no_id_then_refetches_once() {
    let links = FakeLinks::default();

    let mut state = LinkPageState::default();
    state.apply(LinkAction::TypesLoaded(vec![LinkType {
        id: 2,
        name: "工具网站".to_string(),
    }]));
    for (field, value) in [
        (LinkField::Title, "Thrive"),
        (LinkField::Description, "blog"),
        (LinkField::Image, "https://example.com/logo.png"),
        (LinkField::TypeId, "2"),
    ] {
        state.apply(LinkAction::Input(field, value.to_string()));
    }
    assert_eq!(state.mode, FormMode::Create);

    let submission = state
        .form
        .validate()
        .expect("valid form")
        .into_submission(&state.mode, &state.types);
    let rows = submit_link(&links, &submission)
        .await
        .expect("create succeeds")
        .expect("refetch succeeds");

    assert_eq!(*links.calls.borrow(), vec!["create", "list"]);
    let sent = links.created.borrow().clone().expect("create called");
    let body = serde_json::to_value(&sent).expect("serialize create body");
    assert!(body.get("id").is_none());
    assert_eq!(body["typeId"], 2);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, Some(1));
}

#[tokio::test]
async fn link_delete_refetches_once() {
    let links = FakeLinks::default();
    let rows = delete_then_refetch(&links, 9)
        .await
        .expect("delete succeeds")
        .expect("refetch succeeds");
    assert!(rows.is_empty());
    assert_eq!(*links.calls.borrow(), vec!["delete:9", "list"]);
}

#[tokio::test]
async fn article_taxonomy_keeps_only_article_categories() {
    let (categories, tags) = load_article_taxonomy(&FakeTaxonomy).await.expect("taxonomy");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "随笔");
    assert_eq!(tags[0].id, 7);
}

#[tokio::test]
async fn second_timeline_load_in_session_hits_cache() {
    let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
    let github = FakeGithub::default();
    let project = &TRACKED_PROJECTS[0];

    let first = load_timeline(&cache, &github, project, 10, 1_000)
        .await
        .expect("first load");
    assert_eq!(github.fetches.get(), 1);
    assert!(cache.store().get_item(project.cache_key).is_some());

    let second = load_timeline(&cache, &github, project, 10, 2_000)
        .await
        .expect("second load");
    assert_eq!(github.fetches.get(), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn expired_timeline_is_fetched_again() {
    let cache = TimelineCache::new(
        MemoryStore::default(),
        CachePolicy {
            ttl_ms: Some(60_000),
        },
    );
    let github = FakeGithub::default();
    let project = &TRACKED_PROJECTS[1];

    load_timeline(&cache, &github, project, 10, 0).await.expect("first load");
    load_timeline(&cache, &github, project, 10, 120_000)
        .await
        .expect("reload");
    assert_eq!(github.fetches.get(), 2);
}

#[tokio::test]
async fn each_project_writes_its_own_cache_key() {
    let cache = TimelineCache::new(MemoryStore::default(), CachePolicy::default());
    let github = FakeGithub::default();
    for project in &TRACKED_PROJECTS {
        load_timeline(&cache, &github, project, 10, 0).await.expect("load");
    }

    for project in &TRACKED_PROJECTS {
        let records = cache.get(project.cache_key, 0).expect("cached");
        assert!(records[0].children.starts_with(project.repo));
    }
}

#[test]
fn stale_response_is_dropped() {
    let mut seq = RequestSeq::default();
    let mut state = TableState::<u32>::default();

    let slow = seq.begin();
    let fast = seq.begin();
    for (ticket, rows) in [(fast, vec![2]), (slow, vec![1])] {
        if seq.is_current(ticket) {
            state.apply(TableAction::Loaded(rows));
        }
    }
    assert_eq!(state.items, vec![2]);
}
