use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmButtonProps {
    pub label: AttrValue,
    /// The confirmation bubble is open for this button.
    pub open: bool,
    pub on_request: Callback<()>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
}

/// Danger button guarded by an inline "你确定要删除吗" bubble. Nothing is
/// emitted through `on_confirm` until the operator accepts.
#[function_component(ConfirmButton)]
pub fn confirm_button(props: &ConfirmButtonProps) -> Html {
    let request = {
        let on_request = props.on_request.clone();
        Callback::from(move |_: MouseEvent| on_request.emit(()))
    };
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <span class="relative inline-block">
            <button type="button" class={classes!(danger_button_classes(), props.class.clone())} onclick={request}>
                { props.label.clone() }
            </button>
            if props.open {
                <div
                    class={classes!(
                        "absolute",
                        "right-0",
                        "top-full",
                        "mt-2",
                        "z-20",
                        "w-48",
                        "rounded-lg",
                        "border",
                        "border-[var(--border)]",
                        "bg-[var(--surface)]",
                        "p-3",
                        "text-left",
                        "shadow-lg"
                    )}
                    role="dialog"
                >
                    <p class="font-semibold">{ "警告" }</p>
                    <p class="text-sm text-[var(--muted)] mt-1">{ "你确定要删除吗" }</p>
                    <div class="flex justify-end gap-2 mt-3">
                        <button type="button" class={button_classes()} onclick={cancel}>{ "取消" }</button>
                        <button type="button" class={primary_button_classes()} onclick={confirm}>{ "确定" }</button>
                    </div>
                </div>
            }
        </span>
    }
}

pub fn button_classes() -> Classes {
    classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "h-8",
        "px-3",
        "rounded",
        "border",
        "border-[var(--border)]",
        "text-sm",
        "transition-colors",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]"
    )
}

pub fn primary_button_classes() -> Classes {
    classes!(button_classes(), "bg-[var(--primary)]", "text-white", "border-transparent")
}

pub fn danger_button_classes() -> Classes {
    classes!(button_classes(), "bg-red-500", "text-white", "border-transparent", "hover:bg-red-600")
}
