use leptos::prelude::*;

use super::{Icon, ICON_PHONE};
use crate::types::Route;

/// Closing call-to-action banner
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <h3 class="cta-title">"Ready to Start Your Project?"</h3>
            <div class="actions">
                <a href=Route::Contact.path() class="btn btn-light text-industrial-orange">
                    <Icon path=ICON_PHONE size="16" />
                    "Contact Us"
                </a>
                <a href=Route::Services.path() class="btn btn-outline">
                    "Our Services"
                </a>
            </div>
        </section>
    }
}
