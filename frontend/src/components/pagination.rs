use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub on_page_change: Callback<usize>,
}

enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

/// Centered pager under the management tables.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let total_pages = props.total_pages.max(1);
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let step = |target: usize| {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_: MouseEvent| on_page_change.emit(target))
    };

    let btn = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2rem]",
        "h-8",
        "px-2",
        "rounded",
        "border",
        "border-[var(--border)]",
        "text-sm",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex items-center justify-center gap-2 pt-4" aria-label="分页">
            <span class="text-sm text-[var(--muted)] mr-2">{ format!("共 {} 条", props.total_items) }</span>
            <button
                type="button"
                class={btn.clone()}
                disabled={current_page <= 1}
                onclick={step(current_page.saturating_sub(1).max(1))}
                aria-label="上一页"
            >
                {"<"}
            </button>
            { for visible_slots(current_page, total_pages).into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let active = page == current_page;
                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={classes!(
                                btn.clone(),
                                active.then_some("bg-[var(--primary)] text-white border-transparent")
                            )}
                            aria-current={active.then_some(AttrValue::from("page"))}
                            disabled={active}
                            onclick={step(page)}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span key={format!("ellipsis-{id}")} class="px-1 text-[var(--muted)]" aria-hidden="true">
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={btn.clone()}
                disabled={current_page >= total_pages}
                onclick={step((current_page + 1).min(total_pages))}
                aria-label="下一页"
            >
                {">"}
            </button>
        </nav>
    }
}

fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total - 4, total - 1)
    } else {
        (current - 1, current + 1)
    };

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));
    slots
}
