//! Card for one saved booking on the bookings page.
//!
//! DESIGN
//! ======
//! Display values (imagery, description, features, nightly price) derive
//! from the booking's location against the shared catalog, so a card stays
//! consistent with the gallery that sold the stay. The delete flow renders
//! in place: the first click arms a confirmation pair, the second confirms.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::data::destinations;
use crate::state::booking_form::guest_label;
use crate::store::types::Booking;
use crate::util::dates;

/// A saved reservation card with modify and two-step delete actions.
#[component]
pub fn BookingCard(
    booking: Booking,
    /// True when this card's delete is armed and awaiting confirmation.
    #[prop(optional)]
    delete_pending: bool,
    on_modify: Callback<String>,
    on_delete: Callback<String>,
    on_cancel_delete: Callback<()>,
) -> impl IntoView {
    let modify_id = booking.id.clone();
    let arm_id = booking.id.clone();
    let confirm_id = booking.id.clone();

    let nights = booking.nights();
    let duration = if nights == 1 { "1 night".to_owned() } else { format!("{nights} nights") };
    let image = destinations::image_for(&booking.location);
    let description = destinations::description_for(&booking.location);
    let features = destinations::features_for(&booking.location);
    let price = destinations::price_for(&booking.location);
    let booked_on = dates::format_long(booking.created_at.date_naive());
    let updated_on = booking.updated_at.map(|at| dates::format_long(at.date_naive()));

    view! {
        <div class="booking-card">
            <div class="booking-card__media">
                <img class="booking-card__image" src=image alt=booking.location.clone()/>
                <div class="booking-card__location-badge">{booking.location.clone()}</div>
                <div class="booking-card__price-badge">{format!("${price}/night")}</div>
            </div>
            <div class="booking-card__body">
                <p class="booking-card__description">{description}</p>

                <div class="booking-card__dates">
                    <div class="booking-card__date">
                        <span class="booking-card__date-label">"Check-in"</span>
                        <strong>{dates::format_long(booking.check_in)}</strong>
                    </div>
                    <div class="booking-card__duration">{duration}</div>
                    <div class="booking-card__date booking-card__date--end">
                        <span class="booking-card__date-label">"Check-out"</span>
                        <strong>{dates::format_long(booking.check_out)}</strong>
                    </div>
                </div>

                <div class="booking-card__guests">{guest_label(booking.guests)}</div>

                <div class="booking-card__features">
                    {features
                        .iter()
                        .map(|feature| view! { <span class="feature-tag">{*feature}</span> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="booking-card__meta">
                    {format!("Booked {booked_on}")}
                    {updated_on.map(|on| format!(" · updated {on}"))}
                </div>

                <div class="booking-card__actions">
                    <button
                        class="booking-card__modify"
                        on:click=move |_| on_modify.run(modify_id.clone())
                    >
                        "Modify"
                    </button>
                    {if delete_pending {
                        view! {
                            <div class="booking-card__confirm">
                                <button
                                    class="booking-card__confirm-decline"
                                    on:click=move |_| on_cancel_delete.run(())
                                >
                                    "Decline"
                                </button>
                                <button
                                    class="booking-card__confirm-accept"
                                    on:click=move |_| on_delete.run(confirm_id.clone())
                                >
                                    "Accept"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="booking-card__delete"
                                on:click=move |_| on_delete.run(arm_id.clone())
                            >
                                "Decline"
                            </button>
                        }
                            .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
