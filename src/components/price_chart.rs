use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{AxisLabel, AxisType, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Line,
};
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::models::price::PriceHistory;
use crate::models::series::Series;
use crate::utils::debounce::debounced_resize_listener;
use crate::utils::palette::{axis_colors, series_colors};

const CHART_ID: &str = "price-chart";

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub history: Rc<PriceHistory>,
    pub dark_mode: bool,
}

/// Line chart of all price benchmarks, one series per benchmark.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let history = props.history.clone();
        let container_ref = container_ref.clone();
        let dark_mode = props.dark_mode;

        use_effect_with(
            (history, container_ref, dark_mode),
            |(history, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, history, *dark_mode);

                    let history = history.clone();
                    let dark_mode = *dark_mode;
                    debounced_resize_listener(
                        move || render_chart(&container, &history, dark_mode),
                        Config::RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, history: &Rc<PriceHistory>, dark_mode: bool) {
    let width = container.client_width().cast_unsigned();
    if width == 0 {
        return;
    }

    let chart = build_chart(history, dark_mode);
    if let Err(e) = WasmRenderer::new(width, Config::PANEL_CHART_HEIGHT).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Price chart render error: {e:?}"));
    }
}

fn build_chart(history: &PriceHistory, dark_mode: bool) -> Chart {
    let (axis_color, grid_color) = axis_colors(dark_mode);
    let colors = series_colors(dark_mode);
    let periods = history.periods();

    let mut chart = Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(periods.clone())
                .axis_label(AxisLabel::new().rotate(45).color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("USD")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for (i, series) in history.series().into_iter().enumerate() {
        let values = aligned_values(&series, &periods);
        chart = chart.series(
            Line::new()
                .name(series.name)
                .data(values)
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

/// Aligns one benchmark's points to the shared period axis. Periods the
/// benchmark has no observation for become NaN, which serialises to null and
/// is drawn as a gap.
fn aligned_values(series: &Series, periods: &[String]) -> Vec<f64> {
    let by_period: HashMap<&str, f64> = series
        .x
        .iter()
        .map(String::as_str)
        .zip(series.y.iter().copied())
        .collect();

    periods
        .iter()
        .map(|p| by_period.get(p.as_str()).copied().unwrap_or(f64::NAN))
        .collect()
}
