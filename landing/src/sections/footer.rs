use std::sync::Arc;

use leptos::prelude::*;
use solae_core::{Overlay, SiteContent, content::TickerItem};

use crate::reveal::{RevealFlags, revealed};

#[component]
pub fn Footer(
    content: Arc<SiteContent>,
    reveal: RevealFlags,
    overlay: RwSignal<Option<Overlay>>,
) -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year() as i32;
    let copyright = content.copyright(year);

    view! {
        <footer class=move || revealed("footer", reveal.page.get() && reveal.content.get())>
            <ToolsTicker items=content.ticker() caption=content.site.tools_caption.clone() />
            <div class="footer-meta">
                <p class="footer-copyright">{copyright}</p>
                <nav class="footer-links">
                    {Overlay::ALL
                        .into_iter()
                        .map(|target| {
                            view! {
                                <button class="footer-link" on:click=move |_| overlay.set(Some(target))>
                                    {target.layout().nav_label}
                                </button>
                            }
                        })
                        .collect_view()}
                    <a href=content.mailto() class="footer-link">
                        "CONTACT"
                    </a>
                </nav>
            </div>
        </footer>
    }
}

/// Endless horizontal strip of tool names. The list arrives doubled so the
/// CSS animation can wrap at the halfway mark without a visible jump.
#[component]
fn ToolsTicker(items: Vec<TickerItem>, caption: String) -> impl IntoView {
    view! {
        <div class="ticker">
            <p class="ticker-caption">{caption}</p>
            <div class="ticker-window">
                <div class="ticker-track">
                    <For
                        each=move || items.clone()
                        key=|item| item.key.clone()
                        children=|item| view! { <span class="ticker-item">{item.name}</span> }
                    />
                </div>
            </div>
        </div>
    }
}
