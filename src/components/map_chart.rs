use charming::{
    Chart,
    component::{VisualMap, VisualMapPiece},
    datatype::DataPointItem,
    element::{Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Map,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;
use crate::utils::palette::series_colors;

const CHART_ID: &str = "map-chart";

/// Placeholder production by country, million barrels of oil equivalent per day.
const PRODUCTION: [(&str, f64); 6] = [
    ("United States", 18.5),
    ("Saudi Arabia", 12.1),
    ("Russia", 10.8),
    ("China", 4.2),
    ("India", 0.8),
    ("Indonesia", 0.7),
];

#[derive(Properties, PartialEq)]
pub struct MapChartProps {
    pub dark_mode: bool,
}

/// World choropleth of production by country. Fixed placeholder data, no I/O.
#[function_component(MapChart)]
pub fn map_chart(props: &MapChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with((container_ref, dark_mode), |(container_ref, dark_mode)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, *dark_mode);

                let dark_mode = *dark_mode;
                debounced_resize_listener(
                    move || render_chart(&container, dark_mode),
                    Config::RESIZE_DEBOUNCE_MS,
                )
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    if width == 0 {
        return;
    }

    let chart = build_chart(dark_mode);
    if let Err(e) = WasmRenderer::new(width, Config::MAP_CHART_HEIGHT).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Map chart render error: {e:?}"));
    }
}

fn build_chart(dark_mode: bool) -> Chart {
    let colors = series_colors(dark_mode);

    let regions: Vec<DataPointItem> = PRODUCTION
        .iter()
        .map(|(country, output)| DataPointItem::new(*output).name(*country))
        .collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .visual_map(VisualMap::new().pieces(vec![
            VisualMapPiece::new().lt(1.0).color(colors[0]),
            VisualMapPiece::new().gte(1.0).lt(5.0).color(colors[1]),
            VisualMapPiece::new().gte(5.0).lt(12.0).color(colors[2]),
            VisualMapPiece::new().gte(12.0).color(colors[3]),
        ]))
        .series(Map::new().name("Production").map("world").data(regions))
}
