use yew::prelude::*;

use crate::models::energy::EnergyType;

#[derive(Properties, PartialEq)]
pub struct EnergyToggleProps {
    pub energy: EnergyType,
    pub on_select: Callback<EnergyType>,
}

/// Oil/Gas selector. Exactly one button carries the active indicator,
/// matching the current selection; re-selecting the active type is a no-op
/// re-render. Only typed `EnergyType` values can be emitted.
#[function_component(EnergyToggle)]
pub fn energy_toggle(props: &EnergyToggleProps) -> Html {
    html! {
        <div class="energy-toggle" role="group" aria-label="Select energy type">
            {
                EnergyType::all().iter().map(|energy| {
                    let active = *energy == props.energy;
                    let class = if active { "toggle-button primary" } else { "toggle-button" };
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let energy = *energy;
                        Callback::from(move |_| on_select.emit(energy))
                    };
                    html! {
                        <button {class} {onclick} aria-pressed={active.to_string()}>
                            {energy.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
