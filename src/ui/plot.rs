use std::ops::RangeInclusive;

use chrono::DateTime;
use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{
    BoxElem, BoxPlot, BoxSpread, GridMark, Legend, MarkerShape, Plot, PlotPoint, PlotPoints,
    Points,
};

use crate::data::model::{BoxAndWhiskerDataset, TimeSeriesCollection, TimedValue};
use crate::data::stats::BoxStats;
use crate::state::ChartState;

const BOX_WIDTH: f64 = 0.6;
const AXIS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const HOVER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Box-and-whisker chart
// ---------------------------------------------------------------------------

/// One unfilled box per category, plus mean marker and outliers.
pub fn box_and_whisker_plot(ui: &mut Ui, state: &ChartState<f64>) {
    let dataset: &BoxAndWhiskerDataset = &state.dataset;
    let categories: Vec<String> = dataset.keys().map(str::to_string).collect();

    Plot::new("box_and_whisker_plot")
        .legend(Legend::default())
        .x_axis_label("Type")
        .y_axis_label("Value")
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&categories, mark.value)
        })
        .show(ui, |plot_ui| {
            for (idx, series) in dataset.series().iter().enumerate() {
                let Some(stats) = BoxStats::from_values(&series.values) else {
                    log::debug!("category {} has no finite values", series.key);
                    continue;
                };
                let color = state.colors.color_for(&series.key);
                let x = idx as f64;

                let elem = BoxElem::new(
                    x,
                    BoxSpread::new(
                        stats.min_regular,
                        stats.q1,
                        stats.median,
                        stats.q3,
                        stats.max_regular,
                    ),
                )
                .name(&series.key)
                .box_width(BOX_WIDTH)
                .whisker_width(BOX_WIDTH / 2.0)
                .fill(Color32::TRANSPARENT)
                .stroke(Stroke::new(1.5, color));

                plot_ui.box_plot(BoxPlot::new(vec![elem]).name(&series.key).color(color));

                plot_ui.points(
                    Points::new(vec![[x, stats.mean]])
                        .name(&series.key)
                        .shape(MarkerShape::Circle)
                        .radius(3.0)
                        .color(color),
                );

                if !stats.outliers.is_empty() {
                    let outliers: PlotPoints = stats.outliers.iter().map(|&v| [x, v]).collect();
                    plot_ui.points(
                        Points::new(outliers)
                            .name(&series.key)
                            .shape(MarkerShape::Circle)
                            .filled(false)
                            .radius(3.0)
                            .color(color),
                    );
                }
            }
        });
}

/// Category name for an axis tick that lands on a box, blank elsewhere.
fn category_label(categories: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    categories
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Time-series scatter chart
// ---------------------------------------------------------------------------

/// Points only; x is the middle of each value's minute, in epoch ms.
pub fn scatter_plot(ui: &mut Ui, state: &ChartState<TimedValue>) {
    let collection: &TimeSeriesCollection = &state.dataset;

    Plot::new("fast_scatter_plot")
        .legend(Legend::default())
        .x_axis_label("X")
        .y_axis_label("y")
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            format_millis(mark.value, AXIS_TIME_FORMAT)
        })
        .label_formatter(|name: &str, point: &PlotPoint| {
            let at = format_millis(point.x, HOVER_TIME_FORMAT);
            if name.is_empty() {
                format!("{at}\n{:.3}", point.y)
            } else {
                format!("{name}\n{at}\n{:.3}", point.y)
            }
        })
        .show(ui, |plot_ui| {
            for series in collection.series() {
                let points: PlotPoints = series
                    .values
                    .iter()
                    .map(|v| [v.minute_middle_millis() as f64, v.value])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(&series.key)
                        .shape(MarkerShape::Circle)
                        .radius(2.5)
                        .color(state.colors.color_for(&series.key)),
                );
            }
        });
}

fn format_millis(millis: f64, format: &str) -> String {
    DateTime::from_timestamp_millis(millis.round() as i64)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}
