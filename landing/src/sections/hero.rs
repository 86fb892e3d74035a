use std::sync::Arc;

use leptos::prelude::*;
use solae_core::SiteContent;

use super::FaviconIcon;
use crate::reveal::{RevealFlags, revealed};

#[component]
pub fn Hero(content: Arc<SiteContent>, reveal: RevealFlags) -> impl IntoView {
    let site = content.site.clone();
    let mailto = content.mailto();

    view! {
        <section class=move || revealed("hero", reveal.page.get())>
            <h1 class="hero-title">
                <span class="brand-mark">{site.brand}</span>
                <span class="brand-glyph">
                    <FaviconIcon />
                </span>
            </h1>

            // Tagline and call to action arrive after the logo settles
            <div class=move || revealed("hero-body", reveal.content.get())>
                <p class="hero-tagline">{site.tagline}</p>
                <a href=mailto class="btn btn-primary">
                    {site.cta_label}
                </a>
            </div>
        </section>
    }
}

/// Blurred glow behind the logo.
#[component]
pub fn Orb(visible: ReadSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="orb">
                <div class="orb-core"></div>
            </div>
        </Show>
    }
}
