use thrive_admin_shared::{
    notice::messages,
    query::{cascade_options, ArticleFilterForm, CascadeOption},
    table::TableAction,
    time::format_epoch_ms,
    workflow::load_article_taxonomy,
    Article, Category, Tag,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        chips::Chips,
        confirm_button::{button_classes, primary_button_classes, ConfirmButton},
        loading_spinner::Spin,
        notice::NoticeBar,
        page_title::PageTitle,
        pagination::Pagination,
    },
    hooks::use_list_table,
    router::{EditQuery, Route},
    utils::{input_value, or_fallback, select_value},
};

const SUMMARY_FALLBACK: &str = "该文章暂未设置文章摘要";

#[function_component(ArticlePage)]
pub fn article_page() -> Html {
    let table = use_list_table(api::articles, "文章", messages::ARTICLE_DELETED);
    let filter = use_state(ArticleFilterForm::default);
    let categories = use_state(Vec::<Category>::new);
    let tags = use_state(Vec::<Tag>::new);

    {
        let categories = categories.clone();
        let tags = tags.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_article_taxonomy(&api::taxonomy()).await {
                    Ok((cates, all_tags)) => {
                        categories.set(cates);
                        tags.set(all_tags);
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch taxonomy: {e}").into());
                    },
                }
            });
            || ()
        });
    }

    let options = use_memo((*categories).clone(), |cates| cascade_options(cates));

    let on_title = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.title = input_value(&e);
            filter.set(next);
        })
    };
    let on_category = {
        let filter = filter.clone();
        let options = options.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.cate_ids = select_value(&e)
                .parse::<usize>()
                .ok()
                .and_then(|index| options.get(index))
                .map(|option| option.path.clone())
                .unwrap_or_default();
            filter.set(next);
        })
    };
    let on_tag = {
        let filter = filter.clone();
        Callback::from(move |e: Event| {
            let mut next = (*filter).clone();
            next.tag_id = select_value(&e).parse().ok();
            filter.set(next);
        })
    };
    let on_start = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.range.start = input_value(&e);
            filter.set(next);
        })
    };
    let on_end = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.range.end = input_value(&e);
            filter.set(next);
        })
    };
    let on_submit = {
        let filter = filter.clone();
        let fetch = table.fetch.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            fetch.emit(Some(filter.to_query()));
        })
    };

    let state = table.state.clone();
    let on_page_change = {
        let state = state.clone();
        Callback::from(move |page: usize| state.dispatch(TableAction::SetPage(page)))
    };
    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(TableAction::DismissNotice))
    };

    let selected_category = options
        .iter()
        .position(|option: &CascadeOption| option.path == filter.cate_ids)
        .map(|index| index.to_string())
        .unwrap_or_default();

    let row = |article: &Article| {
        let id = article.id;
        let on_request = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(TableAction::RequestDelete(id)))
        };
        let on_cancel = {
            let state = state.clone();
            Callback::from(move |_| state.dispatch(TableAction::CancelDelete))
        };
        let on_confirm = {
            let delete = table.delete.clone();
            Callback::from(move |_| delete.emit(id))
        };
        let cates = article
            .cate_list
            .iter()
            .map(|cate| (cate.id, cate.name.clone()))
            .collect::<Vec<_>>();
        let tag_chips = article
            .tag_list
            .iter()
            .map(|tag| (tag.id, tag.name.clone()))
            .collect::<Vec<_>>();

        html! {
            <tr key={id} class="border-b border-[var(--border)] align-top">
                <td class="px-3 py-2 text-center">{ id }</td>
                <td class="px-3 py-2">{ article.title.clone() }</td>
                <td class="px-3 py-2 max-w-xs truncate" title={article.description.clone()}>
                    { or_fallback(Some(article.description.as_str()), SUMMARY_FALLBACK) }
                </td>
                <td class="px-3 py-2"><Chips items={cates} /></td>
                <td class="px-3 py-2"><Chips items={tag_chips} /></td>
                <td class="px-3 py-2 text-center">{ article.view }</td>
                <td class="px-3 py-2 text-center">{ article.comment }</td>
                <td class="px-3 py-2 whitespace-nowrap">{ format_epoch_ms(&article.create_time) }</td>
                <td class="px-3 py-2 whitespace-nowrap space-x-2">
                    <Link<Route, EditQuery>
                        to={Route::Create}
                        query={Some(EditQuery { id: Some(id) })}
                        classes={button_classes()}
                    >
                        { "修改" }
                    </Link<Route, EditQuery>>
                    <ConfirmButton
                        label="删除"
                        open={state.pending_delete == Some(id)}
                        {on_request}
                        {on_confirm}
                        {on_cancel}
                    />
                </td>
            </tr>
        }
    };

    html! {
        <>
            <PageTitle value="文章管理" />
            <NoticeBar notice={state.notice.clone()} on_close={on_dismiss} />

            <form class="flex flex-wrap items-end gap-4 rounded-lg bg-[var(--surface)] p-4 shadow-sm" onsubmit={on_submit}>
                <label class="flex flex-col gap-1 text-sm">
                    { "标题" }
                    <input
                        class="h-8 rounded border border-[var(--border)] px-2"
                        placeholder="请输入关键词"
                        value={filter.title.clone()}
                        oninput={on_title}
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    { "分类" }
                    <select class="h-8 rounded border border-[var(--border)] px-2" onchange={on_category}>
                        <option value="" selected={selected_category.is_empty()}>{ "请选择分类" }</option>
                        { for options.iter().enumerate().map(|(index, option)| html! {
                            <option
                                value={index.to_string()}
                                selected={selected_category == index.to_string()}
                            >
                                { option.label.clone() }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    { "标签" }
                    <select class="h-8 rounded border border-[var(--border)] px-2" onchange={on_tag}>
                        <option value="" selected={filter.tag_id.is_none()}>{ "请选择标签" }</option>
                        { for tags.iter().map(|tag| html! {
                            <option value={tag.id.to_string()} selected={filter.tag_id == Some(tag.id)}>
                                { tag.name.clone() }
                            </option>
                        }) }
                    </select>
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    { "开始日期" }
                    <input
                        type="date"
                        class="h-8 rounded border border-[var(--border)] px-2"
                        value={filter.range.start.clone()}
                        oninput={on_start}
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm">
                    { "结束日期" }
                    <input
                        type="date"
                        class="h-8 rounded border border-[var(--border)] px-2"
                        value={filter.range.end.clone()}
                        oninput={on_end}
                    />
                </label>
                <button type="submit" class={primary_button_classes()}>{ "查询" }</button>
            </form>

            <Spin spinning={state.loading}>
                <div class="overflow-x-auto rounded-lg bg-[var(--surface)] shadow-sm">
                    <table class="w-full text-sm">
                        <thead class="bg-[var(--surface-alt)] text-left">
                            <tr>
                                <th class="px-3 py-2 text-center">{ "ID" }</th>
                                <th class="px-3 py-2">{ "标题" }</th>
                                <th class="px-3 py-2">{ "摘要" }</th>
                                <th class="px-3 py-2">{ "分类" }</th>
                                <th class="px-3 py-2">{ "标签" }</th>
                                <th class="px-3 py-2 text-center">{ "浏览量" }</th>
                                <th class="px-3 py-2 text-center">{ "评论数量" }</th>
                                <th class="px-3 py-2">{ "发布时间" }</th>
                                <th class="px-3 py-2">{ "操作" }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for state.visible().iter().map(row) }
                        </tbody>
                    </table>
                </div>
                <Pagination
                    current_page={state.page}
                    total_pages={state.total_pages()}
                    total_items={state.items.len()}
                    {on_page_change}
                />
            </Spin>
        </>
    }
}
