use leptos::prelude::LeptosOptions;

use crate::config::SiteConfig;
use crate::store;

/// Server state shared by the axum handlers and provided to the leptos
/// routes.
#[derive(Clone, Debug)]
pub struct Context {
    pub leptos_options: LeptosOptions,
    pub store: store::Store,
    pub config: SiteConfig,
}

// `derive(FromRef)` would need axum's macros feature.
impl axum::extract::FromRef<Context> for LeptosOptions {
    fn from_ref(value: &Context) -> Self {
        value.leptos_options.clone()
    }
}
