use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="py-24 text-center space-y-3">
            <h2 class="text-2xl font-bold">{"404 - 页面未找到"}</h2>
            <p class="text-[var(--muted)]">{"抱歉，你访问的页面不存在。"}</p>
            <Link<Route> to={Route::Article} classes="text-[var(--primary)]">{"返回文章管理"}</Link<Route>>
        </section>
    }
}
