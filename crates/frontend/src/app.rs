use crate::usecases::u510_image_query::ImageQueryPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main style="max-width: 1140px; margin: 0 auto; padding: 24px 16px;">
            <ImageQueryPage />
        </main>
    }
}
