use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node);
    let (seen, set_seen) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_seen.set(true);
        }
    });

    view! {
        <div
            node_ref=node
            class=move || {
                if seen.get() { format!("reveal revealed {class}") } else { format!("reveal {class}") }
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
