use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::models::energy::EnergyType;
use crate::models::prod_cons::ProdConsData;
use crate::services::api::fetch_prod_cons;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum ProdConsState {
    Loading,
    Loaded(Rc<ProdConsData>),
    Error(String),
}

impl ProdConsState {
    /// Returns true while the fetch is in flight
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<ProdConsData>> {
        match self {
            Self::Loaded(data) => Some(data),
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

/// Fetches production/consumption data on mount and again whenever the
/// selected energy type changes. A superseded request is flagged aborted by
/// the effect cleanup, so its response can never overwrite a newer one.
#[hook]
pub fn use_prod_cons(energy: EnergyType) -> UseStateHandle<ProdConsState> {
    let state = use_state(|| ProdConsState::Loading);

    {
        let state = state.clone();

        use_effect_with(energy, move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            state.set(ProdConsState::Loading);

            spawn_local(async move {
                match fetch_prod_cons().await {
                    Ok(data) if !aborted_check.get() => {
                        state.set(ProdConsState::Loaded(Rc::new(data)));
                    }
                    Err(e) if !aborted_check.get() => {
                        state.set(ProdConsState::Error(e.to_string()));
                    }
                    _ => {} // Request was superseded, ignore result
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
