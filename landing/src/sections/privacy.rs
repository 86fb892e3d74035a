use leptos::prelude::*;
use solae_core::content::PrivacySection;

use super::RichTextView;

#[component]
pub fn PrivacyPanel(sections: Vec<PrivacySection>) -> impl IntoView {
    view! {
        <div class="privacy">
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <div class="privacy-section">
                            <h3 class="privacy-heading">{section.heading}</h3>
                            <p class="privacy-body">
                                <RichTextView text=section.body />
                            </p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
