use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::page_title::PageTitle,
    router::{EditQuery, Route},
};

/// Landing point of the "修改" links. The editor itself is served by the
/// writing app; this page only tells the operator which article was picked.
#[function_component(CreatePage)]
pub fn create_page() -> Html {
    let location = use_location();
    let id = location
        .as_ref()
        .and_then(|loc| loc.query::<EditQuery>().ok())
        .and_then(|query| query.id);

    let body = match id {
        Some(id) => format!("正在编辑 ID 为 {id} 的文章"),
        None => "新建文章".to_string(),
    };

    html! {
        <>
            <PageTitle value={if id.is_some() { "编辑文章" } else { "发布文章" }} />
            <section class="rounded-lg bg-[var(--surface)] p-6 shadow-sm space-y-3">
                <p>{ body }</p>
                <p class="text-sm text-[var(--muted)]">{ "文章编辑器不在管理台中提供。" }</p>
                <Link<Route> to={Route::Article} classes="text-[var(--primary)]">{ "返回文章管理" }</Link<Route>>
            </section>
        </>
    }
}
