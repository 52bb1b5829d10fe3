//! In-place editor for one saved booking.
//!
//! DESIGN
//! ======
//! The form owns a local draft signal seeded from the page's edit session,
//! so keystrokes re-render only this card. Every change is reported back
//! to the session scratch through `on_change`, so a list re-render reseeds
//! the editor with nothing lost. Saving runs the shared validation gate in
//! the page state before anything persists.

use leptos::prelude::*;

use crate::data::destinations;
use crate::state::booking_form::{BookingDraft, CUSTOM_LOCATION, GUESTS_MAX, GUESTS_MIN, guest_label};
use crate::util::dates;

#[component]
pub fn BookingEditForm(
    /// The session scratch at the moment this editor rendered.
    seed: BookingDraft,
    on_change: Callback<BookingDraft>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let seed_location = seed.location.clone();
    let seed_guests = seed.guests;
    let draft = RwSignal::new(seed);
    let report = move || on_change.run(draft.get_untracked());

    let today = dates::today();
    let today_value = dates::to_iso(today);

    view! {
        <div class="edit-form">
            <h5 class="edit-form__title">"Edit Booking"</h5>

            <label class="edit-form__label">"Location"</label>
            <select
                class="edit-form__select"
                on:change=move |ev| {
                    draft.update(|d| d.location = event_target_value(&ev));
                    report();
                }
                required
            >
                <option value="">"Select a destination"</option>
                {destinations::DESTINATIONS
                    .iter()
                    .map(|destination| {
                        let is_current = destination.name == seed_location;
                        view! {
                            <option value=destination.name selected=is_current>
                                {destination.name}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
                <option value=CUSTOM_LOCATION selected={seed_location == CUSTOM_LOCATION}>
                    "Other (specify location)"
                </option>
            </select>
            <Show when=move || draft.with(|d| d.location == CUSTOM_LOCATION)>
                <input
                    class="edit-form__input"
                    type="text"
                    placeholder="Enter your desired location"
                    prop:value=move || draft.with(|d| d.custom_location.clone())
                    on:input=move |ev| {
                        draft.update(|d| d.custom_location = event_target_value(&ev));
                        report();
                    }
                    required
                />
            </Show>

            <label class="edit-form__label">"Check-in"</label>
            <input
                class="edit-form__input"
                type="date"
                min=today_value
                prop:value=move || draft.with(|d| d.check_in.map(dates::to_iso).unwrap_or_default())
                on:change=move |ev| {
                    draft.update(|d| d.set_check_in(dates::parse_iso(&event_target_value(&ev))));
                    report();
                }
                required
            />

            <label class="edit-form__label">"Check-out"</label>
            <input
                class="edit-form__input"
                type="date"
                min=move || draft.with(|d| dates::to_iso(d.check_out_min(today)))
                disabled=move || draft.with(|d| d.check_in.is_none())
                prop:value=move || draft.with(|d| d.check_out.map(dates::to_iso).unwrap_or_default())
                on:change=move |ev| {
                    draft.update(|d| d.set_check_out(dates::parse_iso(&event_target_value(&ev))));
                    report();
                }
                required
            />

            <label class="edit-form__label">"Guests"</label>
            <select
                class="edit-form__select"
                on:change=move |ev| {
                    draft.update(|d| d.guests = event_target_value(&ev).parse().unwrap_or(GUESTS_MIN));
                    report();
                }
                required
            >
                {(GUESTS_MIN..=GUESTS_MAX)
                    .map(|guests| {
                        view! {
                            <option value=guests.to_string() selected={guests == seed_guests}>
                                {guest_label(guests)}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>

            <div class="edit-form__actions">
                <button class="edit-form__decline" on:click=move |_| on_cancel.run(())>
                    "Decline"
                </button>
                <button class="edit-form__save" on:click=move |_| on_save.run(())>
                    "Save & Continue"
                </button>
            </div>
        </div>
    }
}
