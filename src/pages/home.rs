//! Home page with the booking search form and destination galleries.

use chrono::Utc;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::destination_card::DestinationCard;
use crate::data::destinations;
use crate::state::booking_form::{self, BookingDraft, CUSTOM_LOCATION, GUESTS_MAX, GUESTS_MIN, guest_label};
use crate::store::repository::BookingStore;
use crate::util::dates;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<BookingStore>();
    let navigate = use_navigate();
    let draft = RwSignal::new(BookingDraft::default());
    let location_select = NodeRef::<leptos::html::Select>::new();

    let today = dates::today();
    let today_value = dates::to_iso(today);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match booking_form::submit_booking(&store, &draft.get_untracked(), Utc::now()) {
            Ok(booking) => {
                log::info!("booked {} for {}", booking.location, guest_label(booking.guests));
                draft.set(BookingDraft::default());
                navigate("/bookings", NavigateOptions::default());
            }
            Err(err) => log::warn!("booking rejected: {err}"),
        }
    };

    let on_view_availability = Callback::new(move |name: &'static str| {
        draft.update(|d| {
            d.location = name.to_owned();
            d.custom_location.clear();
        });
        if let Some(select) = location_select.get() {
            select.scroll_into_view();
        }
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <div class="hero__content">
                    <h1>"Discover Unique Glamping Experiences"</h1>
                    <p class="hero__lead">"Luxury camping in stunning natural locations"</p>
                </div>
            </section>

            <section class="search-card">
                <h2 class="search-card__title">"Find Your Perfect Glamping Spot"</h2>
                <form class="booking-form" on:submit=on_submit>
                    <div class="booking-form__field">
                        <select
                            class="booking-form__select"
                            node_ref=location_select
                            prop:value=move || draft.with(|d| d.location.clone())
                            on:change=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                            required
                        >
                            <option value="">"Select a destination"</option>
                            {destinations::DESTINATIONS
                                .iter()
                                .map(|destination| {
                                    view! {
                                        <option value=destination.name>{destination.name}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <option value=CUSTOM_LOCATION>"Other (specify location)"</option>
                        </select>
                        <Show when=move || draft.with(|d| d.location == CUSTOM_LOCATION)>
                            <input
                                class="booking-form__input"
                                type="text"
                                placeholder="Enter your desired location"
                                prop:value=move || draft.with(|d| d.custom_location.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.custom_location = event_target_value(&ev));
                                }
                                required
                            />
                        </Show>
                    </div>

                    <div class="booking-form__row">
                        <div class="booking-form__field">
                            <label class="booking-form__label">"Check-in"</label>
                            <input
                                class="booking-form__input"
                                type="date"
                                min=today_value
                                prop:value=move || {
                                    draft.with(|d| d.check_in.map(dates::to_iso).unwrap_or_default())
                                }
                                on:change=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.set_check_in(dates::parse_iso(&event_target_value(&ev)));
                                        });
                                }
                                required
                            />
                        </div>
                        <div class="booking-form__field">
                            <label class="booking-form__label">"Check-out"</label>
                            <input
                                class="booking-form__input"
                                type="date"
                                min=move || draft.with(|d| dates::to_iso(d.check_out_min(today)))
                                disabled=move || draft.with(|d| d.check_in.is_none())
                                prop:value=move || {
                                    draft.with(|d| d.check_out.map(dates::to_iso).unwrap_or_default())
                                }
                                on:change=move |ev| {
                                    draft
                                        .update(|d| {
                                            d.set_check_out(dates::parse_iso(&event_target_value(&ev)));
                                        });
                                }
                                required
                            />
                        </div>
                    </div>

                    <div class="booking-form__field">
                        <label class="booking-form__label">"Number of Guests"</label>
                        <select
                            class="booking-form__select"
                            prop:value=move || draft.with(|d| d.guests.to_string())
                            on:change=move |ev| {
                                draft
                                    .update(|d| {
                                        d.guests = event_target_value(&ev).parse().unwrap_or(GUESTS_MIN);
                                    });
                            }
                            required
                        >
                            {(GUESTS_MIN..=GUESTS_MAX)
                                .map(|guests| {
                                    view! {
                                        <option value=guests.to_string()>{guest_label(guests)}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>

                    <button class="booking-form__submit" type="submit">
                        "Book Now"
                    </button>
                </form>
            </section>

            <section class="features-strip">
                <h2 class="features-strip__title">"Why Choose Glamping?"</h2>
                <div class="features-strip__grid">
                    <div class="feature-card">
                        <div class="feature-card__icon">"🏕️"</div>
                        <h3>"Unique Stays"</h3>
                        <p>"From treehouses to yurts, find accommodations as unique as your adventure."</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-card__icon">"🌲"</div>
                        <h3>"Natural Locations"</h3>
                        <p>"Experience nature without sacrificing comfort or luxury."</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-card__icon">"✨"</div>
                        <h3>"Memorable Experiences"</h3>
                        <p>"Create memories that will last a lifetime in extraordinary settings."</p>
                    </div>
                </div>
            </section>

            <section class="destinations">
                <h2 class="destinations__title">"Featured Destinations"</h2>
                <div class="destinations__grid">
                    {destinations::featured()
                        .iter()
                        .map(|destination| {
                            view! {
                                <DestinationCard
                                    destination=destination
                                    on_view_availability=on_view_availability
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <h3 class="destinations__subtitle">"More Breathtaking Locations"</h3>
                <div class="destinations__grid">
                    {destinations::additional()
                        .iter()
                        .map(|destination| {
                            view! {
                                <DestinationCard
                                    destination=destination
                                    on_view_availability=on_view_availability
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
