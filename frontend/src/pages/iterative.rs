use thrive_admin_shared::{
    cache::TimelineCache,
    iterative::{active_days, calendar_weeks, IterativeAction, IterativeState, TRACKED_PROJECTS},
    time::{current_year, now_ms},
    workflow::load_timeline,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{
    api,
    components::{loading_spinner::Spin, page_title::PageTitle},
    config::admin_config,
    hooks::use_page_state,
    storage::BrowserSession,
    utils::select_value,
};

const WEEKDAYS: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

#[derive(Properties, PartialEq)]
struct CalendarProps {
    year: i32,
    active: Vec<String>,
}

/// One column per week, one cell per day; days with a commit are filled.
#[function_component(CommitCalendar)]
fn commit_calendar(props: &CalendarProps) -> Html {
    let weeks = use_memo(props.year, |year| calendar_weeks(*year));

    html! {
        <div class="flex gap-1 overflow-x-auto pb-2">
            <div class="flex flex-col gap-1 pr-1 text-[10px] text-[var(--muted)]">
                { for WEEKDAYS.iter().map(|day| html! { <span class="h-3 leading-3">{ *day }</span> }) }
            </div>
            { for weeks.iter().map(|week| html! {
                <div class="flex flex-col gap-1">
                    { for week.iter().map(|cell| match cell {
                        Some(date) => {
                            let day = date.to_string();
                            let active = props.active.contains(&day);
                            html! {
                                <span
                                    class={classes!(
                                        "h-3",
                                        "w-3",
                                        "rounded-sm",
                                        if active { "bg-[var(--primary)]" } else { "bg-[var(--surface-alt)]" }
                                    )}
                                    title={day}
                                />
                            }
                        },
                        None => html! { <span class="h-3 w-3" /> },
                    }) }
                </div>
            }) }
        </div>
    }
}

#[function_component(IterativePage)]
pub fn iterative_page() -> Html {
    let state = use_page_state(|| IterativeState::new(current_year()));

    {
        let dispatch = state.dispatcher();
        use_effect_with((), move |_| {
            let config = admin_config();
            for project in TRACKED_PROJECTS {
                let dispatch = dispatch.clone();
                let policy = config.cache_policy;
                let per_page = config.commits_per_project;
                spawn_local(async move {
                    let cache = TimelineCache::new(BrowserSession::open(), policy);
                    match load_timeline(&cache, &api::github(), &project, per_page, now_ms()).await {
                        Ok(records) => dispatch.dispatch(IterativeAction::Loaded {
                            repo: project.repo,
                            records,
                        }),
                        Err(e) => {
                            web_sys::console::error_1(
                                &format!("Failed to fetch commits of {}: {e}", project.repo).into(),
                            );
                            dispatch.dispatch(IterativeAction::Failed {
                                repo: project.repo,
                                message: format!("获取 {} 迭代记录失败：{e}", project.title),
                            });
                        },
                    }
                });
            }
            || ()
        });
    }

    let on_year = {
        let dispatch = state.dispatcher();
        Callback::from(move |e: Event| {
            if let Ok(year) = select_value(&e).parse() {
                dispatch.dispatch(IterativeAction::SetYear(year));
            }
        })
    };

    let mut active = active_days(state.timelines.values().flatten())
        .into_iter()
        .collect::<Vec<_>>();
    active.sort_unstable();

    html! {
        <>
            <PageTitle value="项目迭代记录" />
            <section class="rounded-lg bg-[var(--surface)] p-4 shadow-sm space-y-3">
                <div class="flex items-center justify-between">
                    <h3 class="font-semibold">{ "提交日历" }</h3>
                    <select class="h-8 rounded border border-[var(--border)] px-2" onchange={on_year}>
                        { for state.years.iter().map(|year| html! {
                            <option value={year.to_string()} selected={*year == state.year}>
                                { format!("{year} 年") }
                            </option>
                        }) }
                    </select>
                </div>
                <CommitCalendar year={state.year} {active} />
            </section>

            <div class="grid gap-4 lg:grid-cols-3">
                { for TRACKED_PROJECTS.iter().map(|project| {
                    let records = state.timeline(project.repo);
                    html! {
                        <section key={project.repo} class="rounded-lg bg-[var(--surface)] p-4 shadow-sm">
                            <h3 class="mb-4 text-lg font-semibold">{ project.title }</h3>
                            <Spin spinning={state.loading.contains(project.repo)}>
                                if let Some(error) = state.errors.get(project.repo) {
                                    <p class="text-sm text-red-500">{ error.clone() }</p>
                                } else if records.is_empty() {
                                    <p class="py-8 text-center text-sm text-[var(--muted)]">{ "暂无数据" }</p>
                                } else {
                                    <ol class="relative border-l border-[var(--border)] ml-2 space-y-4">
                                        { for records.iter().map(|record| html! {
                                            <li class="ml-4">
                                                <span class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-[var(--primary)]" />
                                                <time class="text-xs text-[var(--muted)]">{ record.label.clone() }</time>
                                                <p class="text-sm whitespace-pre-wrap break-words">{ record.children.clone() }</p>
                                            </li>
                                        }) }
                                    </ol>
                                }
                            </Spin>
                        </section>
                    }
                }) }
            </div>
        </>
    }
}
