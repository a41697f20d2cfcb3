use leptos::*;

use crate::GALLERY_URL;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <a href="/" class="logo">"PICDROP"</a>
            </div>
            <nav class="header-right">
                <a href="/" class="nav-link active">"Upload"</a>
                // served by the gallery server, not by this app
                <a href=GALLERY_URL class="nav-link" rel="external">"Gallery"</a>
            </nav>
        </header>
    }
}
