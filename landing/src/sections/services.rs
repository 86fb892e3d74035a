//! Services overlay: a card grid on wide screens, a swipe carousel on phones.
//!
//! Both layouts are rendered; CSS decides which one is visible. The carousel
//! state lives in a signal owned by [`ServicesPanel`], so it starts at the
//! first service every time the overlay opens.

use std::sync::Arc;

use leptos::prelude::*;
use solae_core::{Carousel, Highlight, Service, SiteContent};

use super::{Direction, GoldChevron, RichTextView};

#[component]
pub fn ServicesPanel(content: Arc<SiteContent>) -> impl IntoView {
    let services = content.services.clone();

    let carousel = match content.service_carousel() {
        Ok(carousel) => RwSignal::new(carousel),
        Err(err) => {
            tracing::error!(%err, "services carousel unavailable");
            return view! { <ServiceGrid services=services /> }.into_any();
        }
    };

    let keys = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
        "ArrowLeft" => {
            carousel.maybe_update(|c| c.go_to_previous());
        }
        "ArrowRight" => {
            carousel.maybe_update(|c| c.go_to_next());
        }
        _ => {}
    });
    on_cleanup(move || keys.remove());

    view! {
        <ServiceGrid services=services />
        <ServiceCarousel carousel=carousel />
    }
    .into_any()
}

#[component]
fn ServiceGrid(services: Vec<Service>) -> impl IntoView {
    view! {
        <div class="service-grid">
            {services
                .into_iter()
                .map(|service| {
                    view! {
                        <article class="service-card">
                            <h3 class="service-title">{service.title}</h3>
                            <p class="service-text">
                                <RichTextView text=service.text />
                            </p>
                            <HighlightBlock highlight=service.highlight />
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// One service at a time; touch swipes, mouse drags and chevrons move it.
#[component]
fn ServiceCarousel(carousel: RwSignal<Carousel<Service>>) -> impl IntoView {
    let current = Memo::new(move |_| carousel.with(|c| c.current().clone()));
    let at_start = Signal::derive(move || carousel.with(|c| c.at_start()));
    let at_end = Signal::derive(move || carousel.with(|c| c.at_end()));
    let position = move || carousel.with(|c| format!("{} / {}", c.current_index() + 1, c.len()));

    // Drag coordinates are not rendered, so only index changes notify
    let begin = move |x: i32| {
        carousel.maybe_update(|c| {
            c.begin_gesture(f64::from(x));
            false
        });
    };
    let track = move |x: i32| {
        carousel.maybe_update(|c| {
            c.update_gesture(f64::from(x));
            false
        });
    };
    let finish = move || {
        let width = viewport_width();
        carousel.maybe_update(|c| c.end_gesture(width).is_some());
    };

    let previous = Callback::new(move |_: ()| {
        carousel.maybe_update(|c| c.go_to_previous());
    });
    let next = Callback::new(move |_: ()| {
        carousel.maybe_update(|c| c.go_to_next());
    });

    view! {
        <div
            class="service-carousel"
            on:touchstart=move |ev: web_sys::TouchEvent| {
                if let Some(x) = touch_x(&ev) {
                    begin(x);
                }
            }
            on:touchmove=move |ev: web_sys::TouchEvent| {
                if let Some(x) = touch_x(&ev) {
                    track(x);
                }
            }
            on:touchend=move |_| finish()
            on:touchcancel=move |_| finish()
            on:mousedown=move |ev: web_sys::MouseEvent| begin(ev.client_x())
            on:mousemove=move |ev: web_sys::MouseEvent| track(ev.client_x())
            on:mouseup=move |_| finish()
            on:mouseleave=move |_| finish()
        >
            {move || {
                let service = current.get();
                view! {
                    <h3 class="service-title">{service.title}</h3>
                    <p class="service-text">
                        <RichTextView text=service.text />
                    </p>
                    <HighlightBlock highlight=service.highlight />
                }
            }}
            <div class="carousel-controls">
                <GoldChevron direction=Direction::Left disabled=at_start on_press=previous />
                <span class="carousel-position">{position}</span>
                <GoldChevron direction=Direction::Right disabled=at_end on_press=next />
            </div>
        </div>
    }
}

/// Stats row or client quote under a service description.
#[component]
fn HighlightBlock(highlight: Option<Highlight>) -> impl IntoView {
    highlight.map(|highlight| match highlight {
        Highlight::Stats { items } => view! {
            <div class="stats">
                {items
                    .into_iter()
                    .map(|stat| {
                        view! {
                            <div class="stat">
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        Highlight::Testimonial { quote, author, href } => {
            let attribution = match href {
                Some(href) => view! {
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {author}
                    </a>
                }
                .into_any(),
                None => author.into_any(),
            };
            view! {
                <blockquote class="testimonial">
                    {format!("\u{201c}{quote}\u{201d}")}
                    <span class="testimonial-author">"— " {attribution}</span>
                </blockquote>
            }
            .into_any()
        }
    })
}

fn touch_x(ev: &web_sys::TouchEvent) -> Option<i32> {
    ev.changed_touches().get(0).map(|touch| touch.client_x())
}

/// `window.innerWidth`, or 0 when unavailable (any drag then counts as a swipe).
fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}
