use thrive_admin_shared::notice::{Notice, NoticeKind};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

#[derive(Properties, PartialEq)]
pub struct NoticeBarProps {
    pub notice: Option<Notice>,
    pub on_close: Callback<()>,
}

/// Toast in the top right corner. Success notices dismiss themselves after
/// three seconds, errors stay until closed.
#[function_component(NoticeBar)]
pub fn notice_bar(props: &NoticeBarProps) -> Html {
    let auto_dismiss = matches!(
        props.notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Success)
    );

    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), if auto_dismiss { 3000 } else { 0 })
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(props.notice.clone(), move |notice| {
            if notice.as_ref().map(|n| n.kind) == Some(NoticeKind::Success) {
                auto_timeout.reset();
            } else {
                auto_timeout.cancel();
            }
        });
    }

    let Some(notice) = props.notice.as_ref() else {
        return Html::default();
    };

    let (icon, tone) = match notice.kind {
        NoticeKind::Success => ("✅", classes!("border-emerald-400/40", "bg-emerald-50", "text-emerald-800")),
        NoticeKind::Error => ("⚠️", classes!("border-red-400/40", "bg-red-50", "text-red-800")),
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "fixed",
                "top-6",
                "right-6",
                "z-50",
                "flex",
                "items-start",
                "gap-3",
                "rounded-xl",
                "border",
                "px-4",
                "py-3",
                "text-sm",
                "shadow-xl",
                "max-w-md",
                tone
            )}
            role={if notice.kind == NoticeKind::Error { "alert" } else { "status" }}
        >
            <span aria-hidden="true">{ icon }</span>
            <p class="flex-1">{ notice.message.clone() }</p>
            <button type="button" class="ml-2 text-lg leading-none" aria-label="关闭提示" onclick={close}>
                {"×"}
            </button>
        </div>
    }
}
