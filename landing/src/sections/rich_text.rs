use leptos::prelude::*;
use solae_core::{RichText, Span};

/// Inline spans as elements. Text is always inserted as text nodes.
#[component]
pub fn RichTextView(text: RichText) -> impl IntoView {
    text.spans()
        .iter()
        .cloned()
        .map(|span| match span {
            Span::Plain(text) => text.into_any(),
            Span::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            Span::Link { text, href } => {
                let external = !href.starts_with("mailto:");
                view! {
                    <a
                        href=href
                        target=external.then_some("_blank")
                        rel=external.then_some("noopener noreferrer")
                    >
                        {text}
                    </a>
                }
                .into_any()
            }
        })
        .collect_view()
}
