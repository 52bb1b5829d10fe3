//! Gallery card for one catalog destination.

use leptos::prelude::*;

use crate::data::destinations::Destination;

/// A destination card with price badge, feature tags, and a shortcut that
/// pre-selects the destination in the booking form.
#[component]
pub fn DestinationCard(
    destination: &'static Destination,
    on_view_availability: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="destination-card">
            <div class="destination-card__badge">
                {format!("${}/night", destination.price_per_night)}
            </div>
            <img class="destination-card__image" src=destination.image alt=destination.name/>
            <div class="destination-card__content">
                <h4 class="destination-card__name">{destination.name}</h4>
                <p class="destination-card__description">{destination.description}</p>
                <div class="destination-card__features">
                    {destination
                        .features
                        .iter()
                        .map(|feature| view! { <span class="feature-tag">{*feature}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="destination-card__cta"
                    on:click=move |_| on_view_availability.run(destination.name)
                >
                    "View Availability"
                </button>
            </div>
        </div>
    }
}
