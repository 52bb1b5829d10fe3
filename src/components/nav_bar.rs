//! Top navigation bar.

use leptos::prelude::*;

/// Site-wide navigation: brand, page links, and a small-screen menu toggle.
#[component]
pub fn NavBar() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">
                <span class="nav-bar__brand-mark" aria-hidden="true">"⛺"</span>
                <span class="nav-bar__brand-text">"GlampEscape"</span>
            </a>
            <button
                class="nav-bar__toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>
            <div class="nav-bar__links" class:nav-bar__links--open=move || menu_open.get()>
                <a class="nav-bar__link" href="/" on:click=move |_| menu_open.set(false)>
                    "Home"
                </a>
                <a class="nav-bar__link" href="/bookings" on:click=move |_| menu_open.set(false)>
                    "My Bookings"
                </a>
            </div>
        </nav>
    }
}
