//! Site footer.

use chrono::Datelike;
use leptos::prelude::*;

use crate::util::dates;

/// Footer with brand text, page links, and the copyright year.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = dates::today().year();

    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__brand-mark" aria-hidden="true">"⛺"</span>
                <span class="footer__brand-text">"GlampEscape"</span>
            </div>
            <p class="footer__tagline">
                "Experience nature in luxury with our unique glamping destinations worldwide."
            </p>
            <div class="footer__links">
                <a class="footer__link" href="/">"Home"</a>
                <a class="footer__link" href="/bookings">"My Bookings"</a>
            </div>
            <p class="footer__copyright">{format!("© {year} GlampEscape. All rights reserved.")}</p>
        </footer>
    }
}
