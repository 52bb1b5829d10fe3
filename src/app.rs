//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::SiteFooter;
use crate::components::nav_bar::NavBar;
use crate::pages::{bookings::BookingsPage, home::HomePage};
use crate::store::repository::BookingStore;

/// Root application component.
///
/// Provides the shared booking store context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(BookingStore::browser());

    view! {
        <Title text="GlampEscape"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("bookings") view=BookingsPage/>
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
