use thrive_admin_shared::{
    notice::messages, query::CommentFilterForm, table::TableAction, time::format_epoch_ms, Comment,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        confirm_button::{button_classes, primary_button_classes, ConfirmButton},
        loading_spinner::Spin,
        modal::Modal,
        notice::NoticeBar,
        page_title::PageTitle,
        pagination::Pagination,
    },
    hooks::use_list_table,
    utils::{input_value, or_fallback},
};

const NO_EMAIL: &str = "暂无邮箱";
const NO_SITE: &str = "无网站";
const NO_ARTICLE: &str = "该评论暂未绑定文章";

#[function_component(CommentPage)]
pub fn comment_page() -> Html {
    let table = use_list_table(api::comments, "评论", messages::COMMENT_DELETED);
    let filter = use_state(CommentFilterForm::default);

    let on_title = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.title = input_value(&e);
            filter.set(next);
        })
    };
    let on_content = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*filter).clone();
            next.content = input_value(&e);
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
    let on_close_detail = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(TableAction::CloseDetail))
    };

    let row = |comment: &Comment| {
        let id = comment.id;
        let show_detail = {
            let state = state.clone();
            let comment = comment.clone();
            Callback::from(move |_: MouseEvent| state.dispatch(TableAction::ShowDetail(comment.clone())))
        };
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

        html! {
            <tr key={id} class="border-b border-[var(--border)] align-top">
                <td class="px-3 py-2 text-center">{ id }</td>
                <td class="px-3 py-2">{ comment.name.clone() }</td>
                <td
                    class="px-3 py-2 max-w-xs truncate cursor-pointer hover:text-[var(--primary)]"
                    onclick={show_detail.clone()}
                >
                    { comment.content.clone() }
                </td>
                <td class="px-3 py-2">{ or_fallback(comment.email.as_deref(), NO_EMAIL) }</td>
                <td class="px-3 py-2">
                    if let Some(url) = comment.url.as_deref().filter(|url| !url.trim().is_empty()) {
                        <a href={url.to_string()} target="_blank" rel="noopener noreferrer" class="text-[var(--primary)]">
                            { url }
                        </a>
                    } else {
                        { NO_SITE }
                    }
                </td>
                <td class="px-3 py-2">{ or_fallback(comment.article_title.as_deref(), NO_ARTICLE) }</td>
                <td class="px-3 py-2 whitespace-nowrap">{ format_epoch_ms(&comment.create_time) }</td>
                <td class="px-3 py-2 whitespace-nowrap space-x-2">
                    <button type="button" class={button_classes()} onclick={show_detail}>{ "查看" }</button>
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

    let detail = state.detail.as_ref().map(|comment| {
        html! {
            <dl class="grid grid-cols-[6rem_1fr] gap-y-2 text-sm">
                <dt class="text-[var(--muted)]">{ "名称" }</dt>
                <dd>{ comment.name.clone() }</dd>
                <dt class="text-[var(--muted)]">{ "邮箱" }</dt>
                <dd>{ or_fallback(comment.email.as_deref(), NO_EMAIL) }</dd>
                <dt class="text-[var(--muted)]">{ "网站" }</dt>
                <dd>{ or_fallback(comment.url.as_deref(), NO_SITE) }</dd>
                <dt class="text-[var(--muted)]">{ "所属文章" }</dt>
                <dd>{ or_fallback(comment.article_title.as_deref(), NO_ARTICLE) }</dd>
                <dt class="text-[var(--muted)]">{ "评论时间" }</dt>
                <dd>{ format_epoch_ms(&comment.create_time) }</dd>
                <dt class="text-[var(--muted)]">{ "内容" }</dt>
                <dd class="whitespace-pre-wrap break-words">{ comment.content.clone() }</dd>
            </dl>
        }
    });

    html! {
        <>
            <PageTitle value="评论管理" />
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
                    { "内容" }
                    <input
                        class="h-8 rounded border border-[var(--border)] px-2"
                        placeholder="请输入内容关键词"
                        value={filter.content.clone()}
                        oninput={on_content}
                    />
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
                                <th class="px-3 py-2">{ "名称" }</th>
                                <th class="px-3 py-2">{ "内容" }</th>
                                <th class="px-3 py-2">{ "邮箱" }</th>
                                <th class="px-3 py-2">{ "网站" }</th>
                                <th class="px-3 py-2">{ "所属文章" }</th>
                                <th class="px-3 py-2">{ "评论时间" }</th>
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

            <Modal title="评论详情" open={detail.is_some()} on_close={on_close_detail}>
                { detail.unwrap_or_default() }
            </Modal>
        </>
    }
}
