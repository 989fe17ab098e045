//! Line chart of the three metric series.
//!
//! Data bounds are computed from the visible history and always include
//! zero, since the growth delta swings negative.

use macroquad::prelude::*;

use crate::domain::{Metric, MetricsHistory};

const PLOT_BACKGROUND: Color = Color::new(0.08, 0.08, 0.08, 1.0);
const GRID_LINE: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const AXIS: Color = Color::new(0.6, 0.6, 0.6, 1.0);
const Y_TICKS: usize = 5;

/// Series color, matching the legend
pub fn metric_color(metric: Metric) -> Color {
    match metric {
        Metric::LiveCells => BLUE,
        Metric::Occupancy => ORANGE,
        Metric::Growth => GREEN,
    }
}

/// Data-space extent of the plot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotBounds {
    /// Bounds covering every series, `None` for an empty history.
    /// Degenerate ranges are widened to a span of 1.
    pub fn from_history(history: &MetricsHistory) -> Option<Self> {
        let first = history.samples().next()?;
        let last = history.latest()?;

        let min_x = first.generation as f64;
        let max_x = (last.generation as f64).max(min_x + 1.0);

        let (min_y, mut max_y) = Metric::all()
            .into_iter()
            .flat_map(|metric| history.series(metric))
            .fold((0.0_f64, 0.0_f64), |(lo, hi), (_, v)| (lo.min(v), hi.max(v)));
        if max_y - min_y < 1.0 {
            max_y = min_y + 1.0;
        }

        // 5% headroom so peaks don't touch the frame
        let pad = (max_y - min_y) * 0.05;
        Some(Self {
            min_x,
            max_x,
            min_y: if min_y < 0.0 { min_y - pad } else { min_y },
            max_y: max_y + pad,
        })
    }

    /// Map a data point into `area`, y growing upwards
    pub fn to_screen(&self, x: f64, y: f64, area: Rect) -> (f32, f32) {
        let tx = (x - self.min_x) / (self.max_x - self.min_x);
        let ty = (y - self.min_y) / (self.max_y - self.min_y);
        (
            area.x + tx as f32 * area.w,
            area.y + area.h - ty as f32 * area.h,
        )
    }

    /// Evenly spaced y tick values, bottom to top
    pub fn y_ticks(&self, count: usize) -> Vec<f64> {
        let steps = count.max(2) - 1;
        (0..=steps)
            .map(|i| self.min_y + (self.max_y - self.min_y) * i as f64 / steps as f64)
            .collect()
    }
}

fn draw_frame(area: Rect) {
    draw_rectangle(area.x, area.y, area.w, area.h, PLOT_BACKGROUND);
    draw_text("Live Cell Metrics Over Time", area.x, area.y - 12.0, 20.0, WHITE);
    draw_text("Generation", area.x + area.w / 2.0 - 35.0, area.y + area.h + 32.0, 15.0, AXIS);
    draw_text_ex(
        "Metric Value",
        area.x - 52.0,
        area.y + area.h / 2.0 + 40.0,
        TextParams {
            font_size: 15,
            rotation: -std::f32::consts::FRAC_PI_2,
            color: AXIS,
            ..Default::default()
        },
    );
}

fn draw_axes(bounds: &PlotBounds, area: Rect) {
    for tick in bounds.y_ticks(Y_TICKS) {
        let (_, y) = bounds.to_screen(bounds.min_x, tick, area);
        draw_line(area.x, y, area.x + area.w, y, 1.0, GRID_LINE);
        draw_text(&format!("{tick:.0}"), area.x - 40.0, y + 4.0, 13.0, AXIS);
    }

    // Zero line stands out when the delta goes negative
    if bounds.min_y < 0.0 {
        let (_, zero_y) = bounds.to_screen(bounds.min_x, 0.0, area);
        draw_line(area.x, zero_y, area.x + area.w, zero_y, 1.0, AXIS);
    }

    let x_labels = [
        (bounds.min_x, area.x),
        (bounds.max_x, area.x + area.w - 20.0),
    ];
    for (value, x) in x_labels {
        draw_text(&format!("{value:.0}"), x, area.y + area.h + 15.0, 13.0, AXIS);
    }

    draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, AXIS);
}

fn draw_series(history: &MetricsHistory, bounds: &PlotBounds, area: Rect) {
    for metric in Metric::all() {
        let color = metric_color(metric);
        let points: Vec<(f32, f32)> = history
            .series(metric)
            .map(|(generation, value)| bounds.to_screen(generation as f64, value, area))
            .collect();

        if let [(x, y)] = points.as_slice() {
            draw_circle(*x, *y, 2.5, color);
        }
        for pair in points.windows(2) {
            draw_line(pair[0].0, pair[0].1, pair[1].0, pair[1].1, 2.0, color);
        }
    }
}

fn draw_legend(area: Rect) {
    let x = area.x + 10.0;
    for (i, metric) in Metric::all().into_iter().enumerate() {
        let y = area.y + 10.0 + i as f32 * 18.0;
        draw_rectangle(x, y, 12.0, 12.0, metric_color(metric));
        draw_text(metric.label(), x + 18.0, y + 11.0, 15.0, WHITE);
    }
}

/// Explanation of each series under the plot
fn draw_descriptions(area: Rect) {
    let top = area.y + area.h + 55.0;
    draw_text("Metrics:", area.x, top, 16.0, WHITE);
    for (i, metric) in Metric::all().into_iter().enumerate() {
        let y = top + 18.0 + i as f32 * 17.0;
        draw_rectangle(area.x, y - 10.0, 10.0, 10.0, metric_color(metric));
        let line = format!("{}: {}", metric.label(), metric.description());
        draw_text(&line, area.x + 16.0, y, 14.0, GRAY);
    }
}

/// Draw the metrics chart into `area`
pub fn draw_metrics_plot(history: &MetricsHistory, area: Rect) {
    draw_frame(area);
    draw_descriptions(area);

    let Some(bounds) = PlotBounds::from_history(history) else {
        draw_text("No data yet", area.x + area.w / 2.0 - 40.0, area.y + area.h / 2.0, 16.0, GRAY);
        draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, AXIS);
        return;
    };

    draw_axes(&bounds, area);
    draw_series(history, &bounds, area);
    draw_legend(area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, Grid, Topology};

    fn history_of(live_counts: &[usize]) -> MetricsHistory {
        let mut history = MetricsHistory::new(100);
        for (generation, &live) in live_counts.iter().enumerate() {
            let mut grid = Grid::new(10, 10, Topology::Bounded).unwrap();
            for i in 0..live {
                grid.set(i % 10, i / 10, Cell::Alive);
            }
            history.record(generation as u64, &grid);
        }
        history
    }

    #[test]
    fn test_empty_history_has_no_bounds() {
        assert_eq!(PlotBounds::from_history(&MetricsHistory::new(10)), None);
    }

    #[test]
    fn test_single_sample_widened() {
        let bounds = PlotBounds::from_history(&history_of(&[0])).unwrap();
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 1.0);
        assert_eq!(bounds.min_y, 0.0);
        assert!(bounds.max_y > bounds.min_y);
    }

    #[test]
    fn test_bounds_include_negative_delta() {
        // live 50 -> 20 gives delta -30
        let bounds = PlotBounds::from_history(&history_of(&[50, 20])).unwrap();
        assert!(bounds.min_y < -30.0);
        assert!(bounds.max_y > 50.0);
        assert_eq!(bounds.min_x, 0.0);
        assert_eq!(bounds.max_x, 1.0);
    }

    #[test]
    fn test_to_screen_corners() {
        let bounds = PlotBounds { min_x: 0.0, max_x: 10.0, min_y: 0.0, max_y: 100.0 };
        let area = Rect::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(bounds.to_screen(0.0, 0.0, area), (100.0, 150.0));
        assert_eq!(bounds.to_screen(10.0, 100.0, area), (300.0, 50.0));
        assert_eq!(bounds.to_screen(5.0, 50.0, area), (200.0, 100.0));
    }

    #[test]
    fn test_y_ticks_span_bounds() {
        let bounds = PlotBounds { min_x: 0.0, max_x: 1.0, min_y: -20.0, max_y: 80.0 };
        assert_eq!(bounds.y_ticks(5), vec![-20.0, 5.0, 30.0, 55.0, 80.0]);
        assert_eq!(bounds.y_ticks(0).len(), 2);
    }
}
