use charming::{
    Chart,
    component::{Axis, Grid},
    datatype::{CompositeValue, DataPointItem},
    element::{AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, Tooltip, Trigger},
    renderer::WasmRenderer,
    series::Scatter,
};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;
use crate::utils::palette::{axis_colors, series_colors};

const CHART_ID: &str = "subsidy-chart";

/// Placeholder subsidy figures: (subsidy $bn, share of GDP %, country).
const SUBSIDIES: [(f64, f64, &str); 5] = [
    (1.4, 2.1, "Indonesia"),
    (3.4, 1.8, "India"),
    (17.7, 0.9, "China"),
    (26.9, 0.4, "US"),
    (1.1, 3.2, "Saudi"),
];

#[derive(Properties, PartialEq)]
pub struct SubsidyChartProps {
    pub dark_mode: bool,
}

/// Fossil-fuel subsidy scatter plot. Fixed placeholder data, no I/O.
#[function_component(SubsidyChart)]
pub fn subsidy_chart(props: &SubsidyChartProps) -> Html {
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
    if let Err(e) = WasmRenderer::new(width, Config::PANEL_CHART_HEIGHT).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Subsidy chart render error: {e:?}"));
    }
}

fn build_chart(dark_mode: bool) -> Chart {
    let (axis_color, grid_color) = axis_colors(dark_mode);

    let points: Vec<DataPointItem> = SUBSIDIES
        .iter()
        .map(|(subsidy, share, country)| {
            DataPointItem::new(CompositeValue::from(vec![*subsidy, *share])).name(*country)
        })
        .collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Subsidy ($bn)")
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("% of GDP")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Scatter::new()
                .symbol_size(12.0)
                .item_style(ItemStyle::new().color(series_colors(dark_mode)[0]))
                .data(points),
        )
}
