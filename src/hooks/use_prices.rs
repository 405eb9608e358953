use std::rc::Rc;
use yew::prelude::*;

use crate::models::price::PriceHistory;
use crate::services::api::fetch_price;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum PriceState {
    Loading,
    Loaded(Rc<PriceHistory>),
    Error(String),
}

impl PriceState {
    /// Returns true while the fetch is in flight
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<PriceHistory>> {
        match self {
            Self::Loaded(history) => Some(history),
            _ => None,
        }
    }

    /// Returns the terminal error message, if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Fetches the price history once when the component mounts.
#[hook]
pub fn use_prices() -> UseStateHandle<PriceState> {
    let state = use_state(|| PriceState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_price().await {
                    Ok(history) => state.set(PriceState::Loaded(Rc::new(history))),
                    Err(e) => state.set(PriceState::Error(e.to_string())),
                }
            });

            || () // Cleanup
        });
    }

    state
}
