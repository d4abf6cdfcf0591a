use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinProps {
    pub spinning: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Keeps the wrapped content visible and lays a spinner over it while
/// `spinning` is set.
#[function_component(Spin)]
pub fn spin(props: &SpinProps) -> Html {
    let overlay = if props.spinning {
        html! {
            <div
                class={classes!(
                    "absolute",
                    "inset-0",
                    "z-10",
                    "flex",
                    "items-center",
                    "justify-center",
                    "bg-white/60",
                    "dark:bg-black/40"
                )}
                role="status"
                aria-live="polite"
                aria-busy="true"
            >
                <div
                    class={classes!(
                        "w-10",
                        "h-10",
                        "rounded-full",
                        "border-[3px]",
                        "border-transparent",
                        "bg-[conic-gradient(var(--primary),transparent)]",
                        "[mask:radial-gradient(farthest-side,transparent_calc(100%-4px),#000_calc(100%-3px))]",
                        "animate-[spin_0.9s_linear_infinite]"
                    )}
                />
                <span class={classes!("sr-only")}>{ "加载中..." }</span>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <div class={classes!("relative", "min-h-[6rem]")}>
            { overlay }
            { for props.children.iter() }
        </div>
    }
}
