use leptos::prelude::*;

use super::Icon;
use crate::theme::Theme;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use crate::theme::{apply_to_root, LocalStorage, ThemePreference};

        /// Loads the stored preference into `theme` once mounted and returns
        /// the toggle handler, which persists every change.
        fn bind_preference(theme: RwSignal<Theme>, default: Theme) -> impl Fn() + Copy + 'static {
            let preference = StoredValue::new_local(None::<ThemePreference<LocalStorage>>);

            Effect::new(move |_| {
                let loaded = ThemePreference::load(LocalStorage, default);
                theme.set(loaded.current());
                preference.set_value(Some(loaded));
            });
            Effect::new(move |_| apply_to_root(theme.get()));

            move || {
                let toggled = preference.try_update_value(|preference| preference.as_mut().map(ThemePreference::toggle));
                if let Some(Some(toggled)) = toggled {
                    theme.set(toggled);
                }
            }
        }
    } else {
        fn bind_preference(_: RwSignal<Theme>, _: Theme) -> impl Fn() + Copy + 'static {
            || ()
        }
    }
}

/// Dark/light switch. Starts on `default` and picks up the visitor's stored
/// preference once hydrated.
#[component]
pub fn ThemeSwitch(#[prop(optional)] default: Theme) -> impl IntoView {
    let theme = RwSignal::new(default);
    let toggle = bind_preference(theme, default);

    view! {
        <span class="theme-switch">
            {move || view! { <Icon name=theme.get().icon()/> }}
            <button
                type="button"
                class="toggle-button"
                class:dark=move || theme.get().is_dark()
                aria-label="Toggle dark mode"
                on:click=move |_| toggle()
            >
                <span class="toggle-knob"></span>
            </button>
        </span>
    }
}
