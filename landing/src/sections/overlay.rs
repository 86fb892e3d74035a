//! Full-screen panel host for the About / Services / Privacy overlays.

use std::sync::Arc;

use leptos::prelude::*;
use solae_core::{Overlay, SiteContent};

use super::{AboutPanel, CloseButton, FaviconIcon, PrivacyPanel, ServicesPanel};

/// Renders the open overlay, if any.
///
/// Clicking the backdrop closes it; clicks inside the panel stay inside.
#[component]
pub fn OverlayHost(content: Arc<SiteContent>, overlay: RwSignal<Option<Overlay>>) -> impl IntoView {
    let close = Callback::new(move |_: ()| overlay.set(None));

    move || {
        let which = overlay.get()?;
        let layout = which.layout();
        let body = match which {
            Overlay::About => view! { <AboutPanel about=content.about.clone() /> }.into_any(),
            Overlay::Services => view! { <ServicesPanel content=content.clone() /> }.into_any(),
            Overlay::Privacy => view! { <PrivacyPanel sections=content.privacy.clone() /> }.into_any(),
        };

        Some(view! {
            <div class="overlay" on:click=move |_| close.run(())>
                <div class="page-glow"></div>
                <div class="orb centered">
                    <div class="orb-core"></div>
                </div>
                <div
                    class=layout.width.class()
                    on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <h2 class="overlay-title">
                        {layout.title}
                        <span class="brand-glyph">
                            <FaviconIcon size=18 />
                        </span>
                    </h2>
                    {body}
                    <CloseButton on_close=close />
                </div>
            </div>
        })
    }
}
