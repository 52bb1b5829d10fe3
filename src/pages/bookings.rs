//! Bookings page listing saved reservations with in-place edit and
//! two-step delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns one [`BookingsPageState`] signal and hands each card plain
//! callbacks into it. Rendering reads equality-gated slices of that signal,
//! so arming a delete or a scratch update re-renders only the cards it
//! touches and never tears down the open editor; when the list itself
//! changes, the editor reseeds from the live session scratch. The initial
//! load is artificially delayed so the loading treatment is visible; the
//! delay task checks an alive flag before touching the signal, so
//! navigating away cancels it.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::booking_card::BookingCard;
use crate::components::booking_edit_form::BookingEditForm;
use crate::state::booking_form::BookingDraft;
use crate::state::bookings::BookingsPageState;
use crate::store::repository::BookingStore;
use crate::store::types::Booking;

/// Artificial delay before the stored collection is read.
const LOAD_DELAY_MS: u64 = 800;

#[component]
pub fn BookingsPage() -> impl IntoView {
    let store = expect_context::<BookingStore>();
    let state = RwSignal::new(BookingsPageState::default());

    let bookings = Memo::new(move |_| state.with(|s| s.bookings.clone()));
    let editing_id = Memo::new(move |_| {
        state.with(|s| s.editing.as_ref().map(|session| session.id.clone()))
    });
    let pending_id = Memo::new(move |_| state.with(|s| s.delete_pending.clone()));
    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let notice = Memo::new(move |_| state.with(|s| s.notice.clone()));

    let load_alive = Arc::new(AtomicBool::new(true));
    let load_alive_task = load_alive.clone();
    let load_store = store.clone();
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(LOAD_DELAY_MS)).await;
        if !load_alive_task.load(Ordering::Relaxed) {
            return;
        }
        state.update(|s| s.finish_load(load_store.load()));
    });
    on_cleanup(move || load_alive.store(false, Ordering::Relaxed));

    let on_modify = Callback::new(move |id: String| state.update(|s| s.begin_edit(&id)));

    let delete_store = store.clone();
    let on_delete = Callback::new(move |id: String| {
        state.update(|s| s.request_delete(&delete_store, &id));
    });
    let on_cancel_delete = Callback::new(move |()| state.update(|s| s.cancel_delete()));

    let on_change = Callback::new(move |draft: BookingDraft| {
        state.update(|s| s.update_edit_draft(draft));
    });
    let save_store = store.clone();
    let on_save = Callback::new(move |()| {
        state.update(|s| {
            if let Err(err) = s.save_edit(&save_store, Utc::now()) {
                log::warn!("edit rejected: {err}");
            }
        });
    });
    let on_cancel_edit = Callback::new(move |()| state.update(|s| s.cancel_edit()));

    view! {
        <div class="bookings-page">
            <header class="bookings-page__header">
                <h1>"My Glamping Adventures"</h1>
                <p class="bookings-page__subtitle">"Manage your upcoming glamping experiences"</p>
            </header>

            <a class="bookings-page__back" href="/">
                "Back to Home"
            </a>

            <Show when=move || notice.with(Option::is_some)>
                <div class="bookings-page__notice">
                    <span>{move || notice.get().unwrap_or_default()}</span>
                    <button
                        class="bookings-page__notice-dismiss"
                        on:click=move |_| state.update(|s| s.dismiss_notice())
                    >
                        "✕"
                    </button>
                </div>
            </Show>

            {move || {
                let loading_now = loading.get();
                if loading_now {
                    view! {
                        <div class="bookings-page__loading">
                            <div class="bookings-page__spinner"></div>
                            <p>"Loading your adventures..."</p>
                        </div>
                    }
                        .into_any()
                } else if bookings.with(|list| show_empty_state(loading_now, list)) {
                    view! {
                        <div class="bookings-page__empty">
                            <h2>"No Bookings Yet"</h2>
                            <p>"You haven't made any glamping bookings yet."</p>
                            <a class="bookings-page__empty-cta" href="/">
                                "Book Your First Adventure"
                            </a>
                        </div>
                    }
                        .into_any()
                } else {
                    let cards = bookings
                        .get()
                        .into_iter()
                        .map(|booking| {
                            let item_id = booking.id.clone();
                            move || {
                                let is_open = editing_id
                                    .with(|editing| editing.as_deref() == Some(item_id.as_str()));
                                if is_open {
                                    let seed = state
                                        .with_untracked(|s| {
                                            s.editing.as_ref().map(|session| session.draft.clone())
                                        })
                                        .unwrap_or_default();
                                    view! {
                                        <BookingEditForm
                                            seed=seed
                                            on_change=on_change
                                            on_save=on_save
                                            on_cancel=on_cancel_edit
                                        />
                                    }
                                        .into_any()
                                } else {
                                    let delete_pending = pending_id
                                        .with(|pending| pending.as_deref() == Some(item_id.as_str()));
                                    view! {
                                        <BookingCard
                                            booking=booking.clone()
                                            delete_pending=delete_pending
                                            on_modify=on_modify
                                            on_delete=on_delete
                                            on_cancel_delete=on_cancel_delete
                                        />
                                    }
                                        .into_any()
                                }
                            }
                        })
                        .collect::<Vec<_>>();
                    view! { <div class="bookings-page__grid">{cards}</div> }.into_any()
                }
            }}
        </div>
    }
}

/// True once loading has finished on an empty collection.
#[must_use]
pub fn show_empty_state(loading: bool, bookings: &[Booking]) -> bool {
    !loading && bookings.is_empty()
}
