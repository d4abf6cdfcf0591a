//! Async page flows: each issues its calls in a fixed order so the pages
//! never have to.

use crate::{
    Category, Tag, Web,
    api::{CommitSource, ListResource, MutableResource, TaxonomySource},
    cache::{SessionStore, TimelineCache},
    error::ApiError,
    iterative::{IterativeRecord, TrackedProject, normalize_commits},
    link::LinkSubmission,
    query::article_categories,
};

/// Outcome of the list refetch that follows a successful mutation.
pub type Refetched<T> = Result<Vec<T>, ApiError>;

/// Delete `id`, then refetch the unfiltered list once.
///
/// The outer error means the delete itself failed and nothing was
/// refetched; the inner one means the delete went through but the refetch
/// did not.
pub async fn delete_then_refetch<R>(
    resource: &R,
    id: u32,
) -> Result<Refetched<R::Entity>, ApiError>
where
    R: ListResource,
{
    resource.delete(id).await.inspect_err(|err| {
        tracing::warn!(id, error = %err, "delete failed");
    })?;
    Ok(resource.list(None).await)
}

/// Issue the create or update `submission` asks for, then refetch once.
pub async fn submit_link<R>(
    resource: &R,
    submission: &LinkSubmission,
) -> Result<Refetched<Web>, ApiError>
where
    R: MutableResource<Entity = Web>,
{
    let saved = match submission {
        LinkSubmission::Create(web) => resource.create(web).await,
        LinkSubmission::Update(web) => resource.update(web).await,
    };
    saved.inspect_err(|err| tracing::warn!(error = %err, "link submit failed"))?;
    Ok(resource.list(None).await)
}

/// Categories (article kind only) and tags for the article filter.
pub async fn load_article_taxonomy<T>(source: &T) -> Result<(Vec<Category>, Vec<Tag>), ApiError>
where
    T: TaxonomySource,
{
    let categories = article_categories(source.categories().await?);
    let tags = source.tags().await?;
    Ok((categories, tags))
}

/// Timeline of `project`: from the cache when it holds a fresh non-empty
/// entry, otherwise fetched, normalized and written back.
pub async fn load_timeline<S, C>(
    cache: &TimelineCache<S>,
    source: &C,
    project: &TrackedProject,
    per_page: usize,
    now_ms: i64,
) -> Result<Vec<IterativeRecord>, ApiError>
where
    S: SessionStore,
    C: CommitSource,
{
    if let Some(records) = cache.get(project.cache_key, now_ms) {
        tracing::debug!(repo = project.repo, "timeline served from session cache");
        return Ok(records);
    }

    let commits = source.fetch_commits(project.repo, per_page).await?;
    let records = normalize_commits(&commits);
    cache.put(project.cache_key, &records, now_ms);
    tracing::debug!(repo = project.repo, count = records.len(), "timeline fetched");
    Ok(records)
}
