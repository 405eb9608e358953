use yew::prelude::*;

use crate::components::{
    EnergyToggle, MapChart, NewsList, PriceChart, ProdConsChart, Status, SubsidyChart, ThemeToggle,
};
use crate::hooks::use_energy_type::use_energy_type;
use crate::hooks::use_prices::use_prices;
use crate::hooks::use_prod_cons::use_prod_cons;
use crate::hooks::use_theme::use_theme;

#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme();
    let selection = use_energy_type();
    let prices = use_prices();
    let prod_cons = use_prod_cons(selection.energy);

    let dark_mode = theme.theme.is_dark();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Energy Markets Dashboard"}</h1>
                <ThemeToggle theme={theme.theme} on_toggle={theme.toggle.clone()} />
            </header>

            <main class="app-main">
                <section class="chart-section">
                    <h2>{"Benchmark Prices"}</h2>
                    if let Some(history) = prices.data() {
                        <PriceChart history={history.clone()} {dark_mode} />
                    } else {
                        <Status loading={prices.is_loading()} error={prices.error().map(str::to_string)} />
                    }
                </section>

                <section class="chart-section">
                    <h2>{"Production vs Consumption"}</h2>
                    <EnergyToggle energy={selection.energy} on_select={selection.set_energy.clone()} />
                    if let Some(data) = prod_cons.data() {
                        <ProdConsChart data={data.clone()} energy={selection.energy} {dark_mode} />
                    } else {
                        <Status loading={prod_cons.is_loading()} error={prod_cons.error().map(str::to_string)} />
                    }
                </section>

                <section class="chart-section">
                    <h2>{"Fossil Fuel Subsidies"}</h2>
                    <SubsidyChart {dark_mode} />
                </section>

                <section class="chart-section">
                    <h2>{"Production by Country"}</h2>
                    <MapChart {dark_mode} />
                </section>

                <section class="news-section">
                    <h2>{"Latest News"}</h2>
                    <NewsList />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
