use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageTitleProps {
    pub value: AttrValue,
}

#[function_component(PageTitle)]
pub fn page_title(props: &PageTitleProps) -> Html {
    html! {
        <div class={classes!(
            "rounded-lg",
            "bg-[var(--surface)]",
            "px-6",
            "py-4",
            "shadow-sm"
        )}>
            <h2 class="text-lg font-bold">{ props.value.clone() }</h2>
        </div>
    }
}
