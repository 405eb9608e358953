/// Axis label and grid line colours for the current theme.
pub const fn axis_colors(dark_mode: bool) -> (&'static str, &'static str) {
    if dark_mode {
        ("#a1a1aa", "#404040")
    } else {
        ("#6b7280", "#e5e7eb")
    }
}

/// Colours assigned to chart series in order, cycling when exhausted.
/// Slightly brighter variants are used in dark mode.
pub const fn series_colors(dark_mode: bool) -> &'static [&'static str] {
    if dark_mode {
        &[
            "#22d3b3", // brighter teal
            "#7ba3ff", // brighter blue
            "#9b7ef5", // brighter purple
            "#ff4d9f", // brighter magenta
            "#ff8033", // brighter orange
            "#ffc733", // brighter yellow
        ]
    } else {
        &[
            "#00b4a0", // teal
            "#648fff", // blue
            "#785ef0", // purple
            "#dc267f", // magenta
            "#fe6100", // orange
            "#ffb000", // yellow
        ]
    }
}
