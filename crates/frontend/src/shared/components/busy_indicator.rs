use leptos::prelude::*;
use thaw::*;

pub const BUSY_CAPTION: &str = "Processing your image...";
pub const BUSY_HINT: &str = "This may take a few seconds";

/// Placeholder shown while the upload is in flight
#[component]
pub fn BusyIndicator() -> impl IntoView {
    view! {
        <div role="status" style="text-align: center; margin: 48px 0; padding: 48px 0;">
            <Spinner />
            <h5 style="color: #8889CC; margin: 16px 0 4px;">{BUSY_CAPTION}</h5>
            <p style="color: #6c757d; font-size: 0.875em; margin: 0;">{BUSY_HINT}</p>
        </div>
    }
}
