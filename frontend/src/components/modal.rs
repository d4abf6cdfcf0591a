use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-40 flex items-center justify-center bg-black/40"
            onclick={close.clone()}
        >
            <div
                class="w-full max-w-lg rounded-xl bg-[var(--surface)] p-6 shadow-2xl"
                role="dialog"
                aria-modal="true"
                onclick={keep_open}
            >
                <div class="flex items-center justify-between">
                    <h3 class="text-base font-semibold">{ props.title.clone() }</h3>
                    <button type="button" class="text-lg leading-none" aria-label="关闭" onclick={close}>
                        {"×"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
