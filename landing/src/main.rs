// solae Landing Page — Leptos 0.8 Edition
// Developed by The Solae Team (c)2025

mod logging;
mod reveal;
mod sections;

use std::sync::Arc;

use leptos::prelude::*;
use sections::*;
use solae_core::content::LoggingConfig;
use solae_core::{Overlay, SiteContent};

fn main() {
    console_error_panic_hook::set_once();

    match SiteContent::embedded() {
        Ok(content) => {
            logging::init(&content.logging);
            logging::print_banner(&content);
            let content = Arc::new(content);
            leptos::mount::mount_to_body(move || view! { <App content=content /> });
        }
        Err(err) => {
            logging::init(&LoggingConfig::default());
            tracing::error!(%err, "site content rejected");
            leptos::mount::mount_to_body(|| view! { <Unavailable /> });
        }
    }
}

#[component]
fn App(content: Arc<SiteContent>) -> impl IntoView {
    let reveal = reveal::start(content.reveal);
    let overlay = RwSignal::new(None::<Overlay>);

    // Escape closes whichever overlay is open
    let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && overlay.get_untracked().is_some() {
            overlay.set(None);
        }
    });

    Effect::new(move |_| match overlay.get() {
        Some(which) => tracing::debug!(overlay = which.layout().title, "overlay opened"),
        None => tracing::trace!("overlay closed"),
    });

    view! {
        <div class="page">
            <div class="page-glow"></div>
            <Orb visible=reveal.orb />
            <main class="page-main">
                <Hero content=content.clone() reveal=reveal />
            </main>
            <Footer content=content.clone() reveal=reveal overlay=overlay />
            <OverlayHost content=content overlay=overlay />
        </div>
    }
}

/// Shown instead of the page when the bundled content fails validation.
#[component]
fn Unavailable() -> impl IntoView {
    view! {
        <main class="page unavailable">
            <h1 class="hero-title">
                <span class="brand-mark">"solae"</span>
            </h1>
            <p class="hero-tagline">"This page could not be loaded. Please try again later."</p>
        </main>
    }
}
