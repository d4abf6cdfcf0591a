use thrive_admin_shared::table::chip_color;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChipsProps {
    /// `(id, name)` pairs in display order.
    pub items: Vec<(u32, String)>,
}

/// Category/tag decorations. The first chip is neutral, the next ones take
/// the palette colours in order.
#[function_component(Chips)]
pub fn chips(props: &ChipsProps) -> Html {
    html! {
        <div class="flex flex-wrap justify-center gap-1">
            { for props.items.iter().enumerate().map(|(index, (id, name))| {
                let color = chip_color(index);
                let style = if color.is_empty() {
                    String::new()
                } else {
                    format!("background:{color};border-color:{color};color:#fff;")
                };
                html! {
                    <span
                        key={*id}
                        class="inline-block rounded border border-[var(--border)] px-2 py-0.5 text-xs"
                        style={style}
                    >
                        { name.clone() }
                    </span>
                }
            }) }
        </div>
    }
}
