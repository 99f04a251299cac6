use std::sync::Arc;

use dioxus::{prelude::*, signals::Signal};
use tracing::warn;

use crate::{
    domain::{AppState, Catalog, ComparisonView},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{LocationsPage, TradeGoodsPage, TradePage},
        shell::Shell,
    },
    util::{assets, persistence::save_persisted_state},
};

/// Handed to the renderer by `main` once the catalog is loaded.
#[derive(Clone)]
pub struct LaunchData {
    pub catalog: Arc<Catalog>,
    pub initial_state: AppState,
    /// Set when the initial origin came from the saved UI state.
    pub restored_origin: Option<String>,
}

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/trade")]
    Trade {},
    #[route("/goods")]
    TradeGoods {},
    #[route("/locations")]
    Locations {},
}

#[component]
pub fn App() -> Element {
    let launch = use_context::<LaunchData>();

    let state = use_signal({
        let initial = launch.initial_state.clone();
        move || initial
    });
    use_context_provider(|| state);
    let view: Signal<ComparisonView> =
        use_signal(|| launch.initial_state.comparison(&launch.catalog));
    use_context_provider(|| view);
    use_context_provider(|| launch.catalog.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    use_hook(move || {
        if let Some(origin) = launch.restored_origin.clone() {
            push_toast(
                toasts,
                ToastKind::Info,
                format!("Welcome back, showing trades from {origin}."),
            );
        }
    });

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        warn!("failed to persist user state: {err}");
        push_toast(
            toasts,
            ToastKind::Warning,
            format!("Couldn't remember the selected location: {err}"),
        );
    }
}

#[component]
pub fn Trade() -> Element {
    rsx! { Shell { TradePage {} } }
}

#[component]
pub fn TradeGoods() -> Element {
    rsx! { Shell { TradeGoodsPage {} } }
}

#[component]
pub fn Locations() -> Element {
    rsx! { Shell { LocationsPage {} } }
}
