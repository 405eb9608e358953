use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::energy::EnergyType;
use crate::models::prod_cons::ProdConsData;
use crate::models::series::Series;
use crate::utils::debounce::debounced_resize_listener;
use crate::utils::palette::{axis_colors, series_colors};

const CHART_ID: &str = "prod-cons-chart";

#[derive(Properties, PartialEq)]
pub struct ProdConsChartProps {
    pub data: Rc<ProdConsData>,
    pub energy: EnergyType,
    pub dark_mode: bool,
}

/// Production and Consumption line chart for the selected energy type.
/// A response missing the selected partition renders an error placeholder
/// instead of a chart.
#[function_component(ProdConsChart)]
pub fn prod_cons_chart(props: &ProdConsChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = use_memo((props.data.clone(), props.energy), |(data, energy)| {
        data.series(*energy)
    });

    {
        let series = series.clone();
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = match (series.as_ref(), container_ref.cast::<HtmlElement>()) {
                    (Ok(pair), Some(container)) => {
                        render_chart(&container, pair, *dark_mode);

                        let pair = pair.clone();
                        let dark_mode = *dark_mode;
                        Some(debounced_resize_listener(
                            move || render_chart(&container, &pair, dark_mode),
                            Config::RESIZE_DEBOUNCE_MS,
                        ))
                    }
                    _ => None,
                };

                move || drop(listener)
            },
        );
    }

    html! {
        <>
            <p class="energy-label">{format!("Selected energy type: {}", props.energy)}</p>
            {
                match series.as_ref() {
                    Ok(_) => html! {
                        <div class="chart-container" ref={container_ref}>
                            <div id={CHART_ID} />
                        </div>
                    },
                    Err(e) => html! {
                        <div class="status error">
                            <p>{"Failed to load: "}{e.to_string()}</p>
                        </div>
                    },
                }
            }
        </>
    }
}

fn render_chart(container: &HtmlElement, series: &(Series, Series), dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    if width == 0 {
        return;
    }

    let chart = build_chart(series, dark_mode);
    if let Err(e) = WasmRenderer::new(width, Config::PANEL_CHART_HEIGHT).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Prod/cons chart render error: {e:?}"));
    }
}

fn build_chart((production, consumption): &(Series, Series), dark_mode: bool) -> Chart {
    let (axis_color, grid_color) = axis_colors(dark_mode);
    let colors = series_colors(dark_mode);

    let mut chart = Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(production.x.clone())
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    // Production first, Consumption second; the order is part of the contract
    for (i, series) in [production, consumption].into_iter().enumerate() {
        chart = chart.series(
            Line::new()
                .name(series.name.clone())
                .data(series.y.clone())
                .show_symbol(false)
                .line_style(
                    LineStyle::new()
                        .color(colors[i % colors.len()])
                        .opacity(Config::LINE_OPACITY),
                ),
        );
    }

    chart
}
