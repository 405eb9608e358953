use energy_markets_dashboard::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
