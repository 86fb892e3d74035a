//! Inline SVG glyphs and icon buttons.

use leptos::prelude::*;

/// Brand gold, used for strokes and fills.
pub const GOLD: &str = "#E6C15B";

/// Ring-and-dot brand glyph, the same shape as the favicon.
#[component]
pub fn FaviconIcon(
    /// Width and height in pixels
    #[prop(default = 24)]
    size: u32,
) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size.clone()
            height=size
            viewBox="0 0 100 100"
            fill="none"
            class="favicon"
        >
            <circle cx="50" cy="50" r="45" fill="none" stroke=GOLD stroke-width="4" />
            <circle cx="50" cy="50" r="20" fill=GOLD />
        </svg>
    }
}

/// Which way a chevron points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Previous service",
            Self::Right => "Next service",
        }
    }

    fn points(self) -> &'static str {
        match self {
            Self::Left => "15 18 9 12 15 6",
            Self::Right => "9 6 15 12 9 18",
        }
    }
}

/// Gold chevron button. Fades out and stops taking clicks while `disabled`.
#[component]
pub fn GoldChevron(
    direction: Direction,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_press: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=move || if disabled.get() { "chevron hidden" } else { "chevron" }
            disabled=move || disabled.get()
            aria-label=direction.label()
            on:click=move |_| on_press.run(())
        >
            <svg
                width="32"
                height="32"
                viewBox="0 0 24 24"
                fill="none"
                stroke=GOLD
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <polyline points=direction.points() />
            </svg>
        </button>
    }
}

/// Quiet "home" link that closes an overlay.
#[component]
pub fn CloseButton(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <button class="close-button" on:click=move |_| on_close.run(())>
            "home"
        </button>
    }
}
