use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use serde::{de::DeserializeOwned, Serialize};
use thrive_admin_shared::{
    api::{CommitSource, ListResource, MutableResource, TaxonomySource},
    config::AdminConfig,
    iterative::GithubCommit,
    query::{ArticleQuery, CommentQuery, NoQuery},
    ApiError, Article, Category, Comment, LinkType, Tag, Web,
};
#[cfg(not(feature = "mock"))]
use thrive_admin_shared::api::ApiEnvelope;

use crate::config::admin_config;
#[cfg(feature = "mock")]
use crate::models;

/// 文章接口
#[derive(Clone)]
pub struct ArticleApi {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock mode never builds urls"))]
    config: AdminConfig,
}

/// 评论接口
#[derive(Clone)]
pub struct CommentApi {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock mode never builds urls"))]
    config: AdminConfig,
}

/// 网站（友链）接口
#[derive(Clone)]
pub struct LinkApi {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock mode never builds urls"))]
    config: AdminConfig,
}

/// 分类、标签、网站类型接口
#[derive(Clone)]
pub struct TaxonomyApi {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock mode never builds urls"))]
    config: AdminConfig,
}

/// GitHub 提交记录接口
#[derive(Clone)]
pub struct GithubApi {
    #[cfg_attr(feature = "mock", allow(dead_code, reason = "mock mode never builds urls"))]
    config: AdminConfig,
}

pub fn articles() -> ArticleApi {
    ArticleApi {
        config: admin_config(),
    }
}

pub fn comments() -> CommentApi {
    CommentApi {
        config: admin_config(),
    }
}

pub fn links() -> LinkApi {
    LinkApi {
        config: admin_config(),
    }
}

pub fn taxonomy() -> TaxonomyApi {
    TaxonomyApi {
        config: admin_config(),
    }
}

pub fn github() -> GithubApi {
    GithubApi {
        config: admin_config(),
    }
}

#[async_trait(?Send)]
impl ListResource for ArticleApi {
    type Entity = Article;
    type Query = ArticleQuery;

    /// 获取文章列表，过滤条件由服务端处理
    async fn list(&self, query: Option<&ArticleQuery>) -> Result<Vec<Article>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_articles(query));
        }

        #[cfg(not(feature = "mock"))]
        {
            let body = query.cloned().unwrap_or_default();
            post_json(&self.config.endpoint("/article/list"), &body).await
        }
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        #[cfg(feature = "mock")]
        {
            models::mock_delete_article(id);
            return Ok(());
        }

        #[cfg(not(feature = "mock"))]
        {
            delete(&self.config.endpoint(&format!("/article/{id}"))).await
        }
    }
}

#[async_trait(?Send)]
impl ListResource for CommentApi {
    type Entity = Comment;
    type Query = CommentQuery;

    async fn list(&self, query: Option<&CommentQuery>) -> Result<Vec<Comment>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_comments(query));
        }

        #[cfg(not(feature = "mock"))]
        {
            let body = query.cloned().unwrap_or_default();
            post_json(&self.config.endpoint("/comment/list"), &body).await
        }
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        #[cfg(feature = "mock")]
        {
            models::mock_delete_comment(id);
            return Ok(());
        }

        #[cfg(not(feature = "mock"))]
        {
            delete(&self.config.endpoint(&format!("/comment/{id}"))).await
        }
    }
}

#[async_trait(?Send)]
impl ListResource for LinkApi {
    type Entity = Web;
    type Query = NoQuery;

    async fn list(&self, query: Option<&NoQuery>) -> Result<Vec<Web>, ApiError> {
        #[cfg(feature = "mock")]
        {
            let _ = query;
            return Ok(models::mock_links());
        }

        #[cfg(not(feature = "mock"))]
        {
            let body = query.cloned().unwrap_or_default();
            post_json(&self.config.endpoint("/link/list"), &body).await
        }
    }

    async fn delete(&self, id: u32) -> Result<(), ApiError> {
        #[cfg(feature = "mock")]
        {
            models::mock_delete_link(id);
            return Ok(());
        }

        #[cfg(not(feature = "mock"))]
        {
            delete(&self.config.endpoint(&format!("/link/{id}"))).await
        }
    }
}

#[async_trait(?Send)]
impl MutableResource for LinkApi {
    async fn create(&self, entity: &Web) -> Result<Web, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_create_link(entity.clone()));
        }

        #[cfg(not(feature = "mock"))]
        {
            send_json(Request::post(&self.config.endpoint("/link")), entity).await
        }
    }

    async fn update(&self, entity: &Web) -> Result<Web, ApiError> {
        #[cfg(feature = "mock")]
        {
            return models::mock_update_link(entity.clone());
        }

        #[cfg(not(feature = "mock"))]
        {
            send_json(Request::patch(&self.config.endpoint("/link")), entity).await
        }
    }
}

#[async_trait(?Send)]
impl TaxonomySource for TaxonomyApi {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_categories());
        }

        #[cfg(not(feature = "mock"))]
        {
            get_json(&self.config.endpoint("/cate")).await
        }
    }

    async fn tags(&self) -> Result<Vec<Tag>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_tags());
        }

        #[cfg(not(feature = "mock"))]
        {
            get_json(&self.config.endpoint("/tag")).await
        }
    }

    async fn link_types(&self) -> Result<Vec<LinkType>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_link_types());
        }

        #[cfg(not(feature = "mock"))]
        {
            get_json(&self.config.endpoint("/link/type")).await
        }
    }
}

#[async_trait(?Send)]
impl CommitSource for GithubApi {
    /// 从 GitHub 获取最近的提交记录（不经过后台接口，没有外层包装）
    async fn fetch_commits(&self, repo: &str, per_page: usize) -> Result<Vec<GithubCommit>, ApiError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_commits(repo, per_page));
        }

        #[cfg(not(feature = "mock"))]
        {
            let url = self.config.commits_url(&urlencoding::encode(repo), per_page);
            let response = Request::get(&url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

            if !response.ok() {
                return Err(ApiError::Http(response.status()));
            }

            response
                .json()
                .await
                .map_err(|e| ApiError::Parse(format!("{:?}", e)))
        }
    }
}

#[cfg(not(feature = "mock"))]
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Http(response.status()));
    }

    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Parse(format!("{:?}", e)))?;
    envelope.into_result()
}

#[cfg(not(feature = "mock"))]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    read_envelope(response).await
}

#[cfg(not(feature = "mock"))]
async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    send_json(Request::post(url), body).await
}

#[cfg(not(feature = "mock"))]
async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<T, ApiError> {
    let response = builder
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Serialize(format!("{:?}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    read_envelope(response).await
}

#[cfg(not(feature = "mock"))]
async fn delete(url: &str) -> Result<(), ApiError> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    // 删除接口的 data 可能为空，只关心 code
    read_envelope::<Option<serde_json::Value>>(response)
        .await
        .map(|_| ())
}
