use thrive_admin_shared::{
    api::{ListResource, TaxonomySource},
    link::{FormMode, LinkAction, LinkField, LinkPageState, LinkTab},
    notice::{messages, Notice},
    workflow::{delete_then_refetch, submit_link},
    Web,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api,
    components::{
        confirm_button::{button_classes, primary_button_classes, ConfirmButton},
        loading_spinner::Spin,
        notice::NoticeBar,
        page_title::PageTitle,
    },
    hooks::{use_page_state, use_request_seq, PageStore},
    utils::{input_value, open_in_new_tab, select_value},
};

type LinkDispatcher = UseReducerDispatcher<PageStore<LinkPageState>>;

#[derive(Properties, PartialEq)]
struct FieldProps {
    label: AttrValue,
    field: LinkField,
    value: AttrValue,
    #[prop_or_default]
    error: Option<&'static str>,
    #[prop_or_default]
    multiline: bool,
    #[prop_or_default]
    placeholder: AttrValue,
    on_input: Callback<(LinkField, String)>,
}

#[function_component(FormField)]
fn form_field(props: &FieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| on_input.emit((field, input_value(&e))))
    };
    let input_class = classes!(
        "w-full",
        "rounded",
        "border",
        "px-2",
        "py-1",
        if props.error.is_some() { "border-red-500" } else { "border-[var(--border)]" }
    );

    html! {
        <label class="flex flex-col gap-1 text-sm">
            { props.label.clone() }
            if props.multiline {
                <textarea
                    class={input_class}
                    rows="3"
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            } else {
                <input
                    class={input_class}
                    placeholder={props.placeholder.clone()}
                    value={props.value.clone()}
                    {oninput}
                />
            }
            if let Some(error) = props.error {
                <span class="text-xs text-red-500">{ error }</span>
            }
        </label>
    }
}

fn web_card(web: &Web, state: &LinkPageState, dispatch: &LinkDispatcher, delete: &Callback<u32>) -> Html {
    let on_edit = {
        let dispatch = dispatch.clone();
        let web = web.clone();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(LinkAction::Edit(web.clone())))
    };
    let on_visit = web.url.clone().filter(|url| !url.trim().is_empty()).map(|url| {
        Callback::from(move |_: MouseEvent| open_in_new_tab(&url))
    });
    let delete_controls = web.id.map(|id| {
        let on_request = {
            let dispatch = dispatch.clone();
            Callback::from(move |_| dispatch.dispatch(LinkAction::RequestDelete(id)))
        };
        let on_cancel = {
            let dispatch = dispatch.clone();
            Callback::from(move |_| dispatch.dispatch(LinkAction::CancelDelete))
        };
        let on_confirm = {
            let delete = delete.clone();
            Callback::from(move |_| delete.emit(id))
        };
        html! {
            <ConfirmButton
                label="删除"
                open={state.pending_delete == Some(id)}
                {on_request}
                {on_confirm}
                {on_cancel}
            />
        }
    });

    html! {
        <article key={web.list_key()} class="flex flex-col gap-3 rounded-lg bg-[var(--surface)] p-4 shadow-sm">
            <div class="flex items-center gap-3">
                <img src={web.image.clone()} alt={web.title.clone()} class="h-12 w-12 rounded-full object-cover" />
                <div class="min-w-0">
                    <h3 class="font-semibold truncate">{ web.title.clone() }</h3>
                    <p class="text-xs text-[var(--muted)]">
                        { web.kind.as_ref().map(|kind| kind.name.clone()).unwrap_or_default() }
                    </p>
                </div>
            </div>
            <p class="text-sm text-[var(--muted)] line-clamp-2">{ web.description.clone() }</p>
            <div class="flex flex-wrap gap-2">
                <button type="button" class={button_classes()} onclick={on_edit}>{ "修改" }</button>
                { delete_controls.unwrap_or_default() }
                if let Some(on_visit) = on_visit {
                    <button type="button" class={primary_button_classes()} onclick={on_visit}>
                        { "前往该网站 →" }
                    </button>
                }
            </div>
        </article>
    }
}

#[function_component(WebPage)]
pub fn web_page() -> Html {
    let state = use_page_state(LinkPageState::default);
    let seq = use_request_seq();

    let fetch = {
        let dispatch = state.dispatcher();
        let seq = seq.clone();
        use_callback((), move |_: (), _| {
            let dispatch = dispatch.clone();
            let seq = seq.clone();
            let ticket = seq.borrow_mut().begin();
            dispatch.dispatch(LinkAction::Loading);
            spawn_local(async move {
                let result = api::links().list(None).await;
                if !seq.borrow().is_current(ticket) {
                    return;
                }
                match result {
                    Ok(links) => dispatch.dispatch(LinkAction::Loaded(links)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch links: {e}").into());
                        dispatch.dispatch(LinkAction::Failed(format!("获取网站列表失败：{e}")));
                    },
                }
            });
        })
    };

    {
        let fetch = fetch.clone();
        let dispatch = state.dispatcher();
        use_effect_with((), move |_| {
            fetch.emit(());
            spawn_local(async move {
                match api::taxonomy().link_types().await {
                    Ok(types) => dispatch.dispatch(LinkAction::TypesLoaded(types)),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to fetch link types: {e}").into());
                    },
                }
            });
            || ()
        });
    }

    let delete = {
        let dispatch = state.dispatcher();
        let seq = seq.clone();
        Callback::from(move |id: u32| {
            let dispatch = dispatch.clone();
            let seq = seq.clone();
            dispatch.dispatch(LinkAction::ConfirmDelete);
            let ticket = seq.borrow_mut().begin();
            spawn_local(async move {
                match delete_then_refetch(&api::links(), id).await {
                    Ok(refetched) => {
                        dispatch.dispatch(LinkAction::Notify(Notice::success(messages::LINK_DELETED)));
                        if !seq.borrow().is_current(ticket) {
                            return;
                        }
                        match refetched {
                            Ok(links) => dispatch.dispatch(LinkAction::Loaded(links)),
                            Err(e) => dispatch.dispatch(LinkAction::Failed(format!("获取网站列表失败：{e}"))),
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to delete link {id}: {e}").into());
                        dispatch.dispatch(LinkAction::Failed(format!("删除网站失败：{e}")));
                    },
                }
            });
        })
    };

    let on_submit = {
        let state = state.clone();
        let seq = seq.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = match state.form.validate() {
                Ok(draft) => draft,
                Err(errors) => {
                    state.dispatch(LinkAction::Invalid(errors));
                    return;
                },
            };
            let success = match state.mode {
                FormMode::Create => messages::LINK_CREATED,
                FormMode::Edit(_) => messages::LINK_UPDATED,
            };
            let submission = draft.into_submission(&state.mode, &state.types);
            let dispatch = state.dispatcher();
            let seq = seq.clone();
            dispatch.dispatch(LinkAction::Loading);
            let ticket = seq.borrow_mut().begin();
            spawn_local(async move {
                match submit_link(&api::links(), &submission).await {
                    Ok(refetched) => {
                        dispatch.dispatch(LinkAction::Submitted(Notice::success(success)));
                        if !seq.borrow().is_current(ticket) {
                            return;
                        }
                        match refetched {
                            Ok(links) => dispatch.dispatch(LinkAction::Loaded(links)),
                            Err(e) => dispatch.dispatch(LinkAction::Failed(format!("获取网站列表失败：{e}"))),
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to save link: {e}").into());
                        dispatch.dispatch(LinkAction::Failed(format!("保存网站失败：{e}")));
                    },
                }
            });
        })
    };

    let on_input = {
        let dispatch = state.dispatcher();
        Callback::from(move |(field, value): (LinkField, String)| dispatch.dispatch(LinkAction::Input(field, value)))
    };
    let on_type = {
        let dispatch = state.dispatcher();
        Callback::from(move |e: Event| dispatch.dispatch(LinkAction::Input(LinkField::TypeId, select_value(&e))))
    };
    let on_search = {
        let dispatch = state.dispatcher();
        Callback::from(move |e: InputEvent| dispatch.dispatch(LinkAction::Search(input_value(&e))))
    };
    let switch_tab = |tab: LinkTab| {
        let dispatch = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(LinkAction::SwitchTab(tab)))
    };
    let on_dismiss = {
        let dispatch = state.dispatcher();
        Callback::from(move |_| dispatch.dispatch(LinkAction::DismissNotice))
    };

    let tab_class = |tab: LinkTab| {
        classes!(
            "px-4",
            "py-2",
            "text-left",
            "text-sm",
            "border-r-2",
            if state.tab == tab {
                "border-[var(--primary)] text-[var(--primary)] font-semibold"
            } else {
                "border-transparent"
            }
        )
    };

    let dispatch = state.dispatcher();
    let list_tab = html! {
        <div class="flex-1 space-y-4">
            <input
                class="h-9 w-full max-w-sm rounded border border-[var(--border)] px-3"
                placeholder="搜索网站标题或描述"
                value={state.search.clone()}
                oninput={on_search}
            />
            if state.visible.is_empty() {
                <p class="py-16 text-center text-[var(--muted)]">{ "暂无数据" }</p>
            } else {
                <div class="grid gap-4 sm:grid-cols-2 xl:grid-cols-3">
                    { for state.visible.iter().map(|web| web_card(web, &state, &dispatch, &delete)) }
                </div>
            }
        </div>
    };

    let form = &state.form;
    let operate_tab = html! {
        <form class="flex-1 max-w-xl space-y-4" onsubmit={on_submit}>
            <FormField
                label="网站标题"
                field={LinkField::Title}
                value={form.title.clone()}
                error={state.errors.get(&LinkField::Title).copied()}
                on_input={on_input.clone()}
            />
            <FormField
                label="网站描述"
                field={LinkField::Description}
                value={form.description.clone()}
                error={state.errors.get(&LinkField::Description).copied()}
                multiline={true}
                on_input={on_input.clone()}
            />
            <FormField
                label="站长邮箱"
                field={LinkField::Email}
                value={form.email.clone()}
                on_input={on_input.clone()}
            />
            <FormField
                label="网站图标"
                field={LinkField::Image}
                value={form.image.clone()}
                placeholder="https://"
                error={state.errors.get(&LinkField::Image).copied()}
                on_input={on_input.clone()}
            />
            <FormField
                label="网站链接"
                field={LinkField::Url}
                value={form.url.clone()}
                placeholder="https://"
                on_input={on_input}
            />
            <label class="flex flex-col gap-1 text-sm">
                { "网站类型" }
                <select class="h-8 rounded border border-[var(--border)] px-2" onchange={on_type}>
                    <option value="" selected={form.type_id.is_none()}>{ "请选择网站类型" }</option>
                    { for state.types.iter().map(|kind| html! {
                        <option value={kind.id.to_string()} selected={form.type_id == Some(kind.id)}>
                            { kind.name.clone() }
                        </option>
                    }) }
                </select>
                if let Some(error) = state.errors.get(&LinkField::TypeId) {
                    <span class="text-xs text-red-500">{ *error }</span>
                }
            </label>
            <button type="submit" class={primary_button_classes()}>{ state.mode.label() }</button>
        </form>
    };

    html! {
        <>
            <PageTitle value="网站管理" />
            <NoticeBar notice={state.notice.clone()} on_close={on_dismiss} />
            <Spin spinning={state.loading}>
                <div class="flex gap-6 rounded-lg bg-[var(--surface)] p-4 shadow-sm">
                    <nav class="flex flex-col shrink-0" aria-label="网站管理">
                        <button type="button" class={tab_class(LinkTab::List)} onclick={switch_tab(LinkTab::List)}>
                            { "网站列表" }
                        </button>
                        <button type="button" class={tab_class(LinkTab::Operate)} onclick={switch_tab(LinkTab::Operate)}>
                            { state.mode.label() }
                        </button>
                    </nav>
                    if state.tab == LinkTab::List {
                        { list_tab }
                    } else {
                        { operate_tab }
                    }
                </div>
            </Spin>
        </>
    }
}
