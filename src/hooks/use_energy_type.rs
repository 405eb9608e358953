use gloo_storage::Storage;
use yew::prelude::*;

use crate::models::energy::EnergyType;

const STORAGE_KEY: &str = "energy-type";

/// Handle returned by `use_energy_type` hook
#[derive(Clone, PartialEq)]
pub struct EnergyTypeHandle {
    pub energy: EnergyType,
    pub set_energy: Callback<EnergyType>,
}

/// Selection state for the production/consumption panel, persisted to
/// localStorage so a reload restores the last choice. Defaults to Oil.
#[hook]
pub fn use_energy_type() -> EnergyTypeHandle {
    let energy = use_state(|| load_preference().unwrap_or_default());

    // Effect: persist selection on change
    {
        let value = *energy;
        use_effect_with(value, move |energy| {
            save_preference(*energy);
            || ()
        });
    }

    let set_energy = {
        let energy = energy.clone();
        Callback::from(move |selected| energy.set(selected))
    };

    EnergyTypeHandle {
        energy: *energy,
        set_energy,
    }
}

fn load_preference() -> Option<EnergyType> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_preference(energy: EnergyType) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, energy) {
        gloo::console::warn!(format!("Failed to save energy type: {e:?}"));
    }
}
