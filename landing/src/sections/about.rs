use leptos::prelude::*;
use solae_core::content::About;

use super::RichTextView;

#[component]
pub fn AboutPanel(about: About) -> impl IntoView {
    let About {
        lead,
        paragraphs,
        footnote,
        photo,
    } = about;

    view! {
        <div class="about-grid">
            <div class="about-photo">
                <img src=photo.src alt=photo.alt />
            </div>
            <div class="about-text">
                <p class="about-lead">
                    <RichTextView text=lead />
                </p>
                <div class="about-body">
                    {paragraphs
                        .into_iter()
                        .map(|text| view! { <p class="about-paragraph"><RichTextView text=text /></p> })
                        .collect_view()}
                    <p class="about-footnote">
                        <RichTextView text=footnote />
                    </p>
                </div>
            </div>
        </div>
    }
}
