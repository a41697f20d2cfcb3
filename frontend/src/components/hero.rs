//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Upload Images"</h1>
            <p class="subtitle">
                "Drop PNG, JPEG, GIF or WebP images below, check the list, then press Upload. "
                "Uploaded images show up in the gallery."
            </p>
        </div>
    }
}
