use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const NAV_ITEMS: [(Route, &str); 4] = [
    (Route::Article, "文章管理"),
    (Route::Comment, "评论管理"),
    (Route::Web, "网站管理"),
    (Route::Iterative, "项目迭代记录"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let route = use_route::<Route>();

    html! {
        <aside class={classes!(
            "w-52",
            "shrink-0",
            "border-r",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "min-h-screen",
            "py-6"
        )}>
            <Link<Route> to={Route::Article} classes="block px-6 pb-6 text-xl font-bold">
                { "Thrive Admin" }
            </Link<Route>>
            <nav class="flex flex-col" aria-label="管理导航">
                { for NAV_ITEMS.iter().map(|(target, label)| {
                    let active = route.as_ref() == Some(target);
                    html! {
                        <Link<Route>
                            to={target.clone()}
                            classes={classes!(
                                "px-6",
                                "py-3",
                                "text-sm",
                                "transition-colors",
                                "hover:text-[var(--primary)]",
                                active.then_some("bg-[var(--surface-alt)] text-[var(--primary)] font-semibold")
                            )}
                        >
                            { *label }
                        </Link<Route>>
                    }
                }) }
            </nav>
        </aside>
    }
}
