//! Footer component

use leptos::*;

use crate::GALLERY_URL;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"picdrop • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=GALLERY_URL class="footer-link" rel="external">
                    "Browse the gallery"
                </a>
            </div>
        </footer>
    }
}
