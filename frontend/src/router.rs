use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::sidebar::Sidebar, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Root,

    #[at("/article")]
    Article,

    #[at("/comment")]
    Comment,

    #[at("/web")]
    Web,

    #[at("/iterative")]
    Iterative,

    /// 文章编辑器入口，`?id=` 指定要修改的文章
    #[at("/create")]
    Create,

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Query string of [`Route::Create`].
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct EditQuery {
    pub id: Option<u32>,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Article} /> },
        Route::Article => html! { <pages::article::ArticlePage /> },
        Route::Comment => html! { <pages::comment::CommentPage /> },
        Route::Web => html! { <pages::web::WebPage /> },
        Route::Iterative => html! { <pages::iterative::IterativePage /> },
        Route::Create => html! { <pages::create::CreatePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex bg-[var(--bg)] text-[var(--text)]" style="min-height: 100vh;">
                <Sidebar />
                <main class="flex-1 min-w-0 p-4 space-y-2">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}
