use chrono::{FixedOffset, Offset, Utc};
use leptos::prelude::*;

use crate::clock;

/// Local time at a fixed UTC offset, refreshed every second.
///
/// Renders empty on the server, the first value appears once hydrated.
#[component]
pub fn TimeDisplay(utc_offset_minutes: i32) -> impl IntoView {
    let offset: FixedOffset = clock::offset_from_minutes(utc_offset_minutes).unwrap_or_else(|| {
        log::warn!("invalid UTC offset: {} minutes", utc_offset_minutes);
        Utc.fix()
    });
    let (time, set_time) = signal(String::new());

    Effect::new(move |_| {
        set_time.set(clock::now_in(&offset));
        match set_interval_with_handle(move || set_time.set(clock::now_in(&offset)), clock::TICK) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(error) => log::warn!("could not start the clock: {:?}", error),
        }
    });

    view! { <time class="clock">{time}</time> }
}
