//! SVG chart components for the dashboard
//!
//! All coordinate math comes from `safebite_core::chart`; these components
//! only stringify geometry into SVG and wire up the hover tooltip. The
//! tooltip node lives inside the chart's own container, so it disappears
//! with the chart.

use leptos::*;
use safebite_core::chart::{self, ChartScale, PlotArea, HOVER_THRESHOLD_PX};
use safebite_core::types::ActivityBuckets;
use safebite_core::utils::month_labels;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PADDING: f64 = 32.0;

/// Parallel labels and values for one chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartSeries {
    /// Category labels, one per value
    pub labels: Vec<String>,
    /// Data values
    pub values: Vec<f64>,
}

/// Monthly usage series from activity buckets, Jan..Dec labels
#[must_use]
pub fn monthly_series(buckets: &ActivityBuckets) -> ChartSeries {
    let values: Vec<f64> = buckets
        .months
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|v| v as f64)
        .collect();
    let labels = month_labels()
        .iter()
        .take(values.len())
        .map(|&label| label.to_string())
        .collect();

    ChartSeries { labels, values }
}

/// Yearly usage series from activity buckets, labeled back from `end_year`
#[must_use]
pub fn yearly_series(buckets: &ActivityBuckets, end_year: i32) -> ChartSeries {
    let values: Vec<f64> = buckets
        .years
        .clone()
        .unwrap_or_default()
        .into_iter()
        .map(|v| v as f64)
        .collect();
    let labels = chart::year_labels(end_year, values.len());

    ChartSeries { labels, values }
}

/// Hover hit-testing state for one rendered chart
#[derive(Debug, Clone, PartialEq)]
pub struct HoverModel {
    /// Pixel positions of the data points
    pub points: Vec<(f64, f64)>,
    /// Data values, parallel to `points`
    pub values: Vec<f64>,
    /// Category labels, parallel to `points`
    pub labels: Vec<String>,
}

impl HoverModel {
    /// Tooltip anchor and text for a cursor position, if it lands within
    /// the hover threshold of a non-zero data point
    #[must_use]
    pub fn hit(&self, x: f64, y: f64) -> Option<(f64, f64, String)> {
        let idx = chart::nearest_point(&self.points, x, y, HOVER_THRESHOLD_PX)?;
        let value = self.values.get(idx).copied().unwrap_or(0.0);
        if value <= 0.0 {
            return None;
        }

        let label = self.labels.get(idx).cloned().unwrap_or_default();
        let (px, py) = self.points[idx];
        Some((px, py, chart::usage_tooltip(&label, value as u64)))
    }
}

/// Smoothed line chart with a gradient area fill and hover tooltip
#[component]
pub fn UsageLineChart(
    /// Labels and values to plot
    series: ChartSeries,
    /// Vertical scale fitted by the caller
    scale: ChartScale,
    /// Unique gradient id when several charts share a page
    #[prop(default = "usage-line-fill")]
    gradient_id: &'static str,
) -> impl IntoView {
    let area = PlotArea::new(CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
    let count = series.values.len();
    let points = area.points(&series.values, &scale);
    let line = chart::smooth_path(&points);
    let fill = chart::area_path(&points, area.baseline());
    let grid: Vec<(f64, f64)> = scale
        .ticks()
        .into_iter()
        .map(|tick| (tick, area.y(tick, &scale)))
        .collect();

    let hover = HoverModel {
        points: points.clone(),
        values: series.values.clone(),
        labels: series.labels.clone(),
    };
    let (tooltip, set_tooltip) = create_signal(None::<(f64, f64, String)>);
    let on_move = move |ev: web_sys::MouseEvent| {
        set_tooltip.set(hover.hit(f64::from(ev.offset_x()), f64::from(ev.offset_y())));
    };

    view! {
        <div class="chart-container">
            <svg
                class="usage-chart"
                width=CHART_WIDTH
                height=CHART_HEIGHT
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                on:mousemove=on_move
                on:mouseleave=move |_| set_tooltip.set(None)
            >
                <defs>
                    <linearGradient id=gradient_id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="0%" stop-color="#16a34a" stop-opacity="0.35"></stop>
                        <stop offset="100%" stop-color="#16a34a" stop-opacity="0.02"></stop>
                    </linearGradient>
                </defs>
                {grid
                    .into_iter()
                    .map(|(tick, y)| {
                        view! {
                            <line
                                class="grid-line"
                                x1=CHART_PADDING
                                y1=y
                                x2={CHART_WIDTH - CHART_PADDING}
                                y2=y
                            ></line>
                            <text
                                class="axis-label"
                                x={CHART_PADDING - 6.0}
                                y={y + 4.0}
                                text-anchor="end"
                            >
                                {chart::tick_label(tick)}
                            </text>
                        }
                    })
                    .collect_view()}
                <path class="chart-area" d=fill fill=format!("url(#{gradient_id})")></path>
                <path
                    class="chart-line"
                    d=line
                    fill="none"
                    stroke="#16a34a"
                    stroke-width="2"
                ></path>
                {points
                    .iter()
                    .copied()
                    .map(|(x, y)| {
                        view! { <circle class="chart-point" cx=x cy=y r="3" fill="#16a34a"></circle> }
                    })
                    .collect_view()}
                {series
                    .labels
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, label)| {
                        view! {
                            <text
                                class="axis-label"
                                x={area.x(i, count)}
                                y={CHART_HEIGHT - 8.0}
                                text-anchor="middle"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            {move || {
                tooltip
                    .get()
                    .map(|(x, y, text)| {
                        view! {
                            <div
                                class="chart-tooltip"
                                style=format!("left:{}px;top:{}px", x + 12.0, y - 12.0)
                            >
                                {text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Bar chart with hover tooltip over the bar tops
#[component]
pub fn UsageBarChart(
    /// Labels and values to plot
    series: ChartSeries,
    /// Vertical scale fitted by the caller
    scale: ChartScale,
) -> impl IntoView {
    let area = PlotArea::new(CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);
    let rects = chart::bars(&area, &series.values, &scale);
    let centers: Vec<(f64, f64)> = rects
        .iter()
        .map(|r| (r.x + r.width / 2.0, r.y))
        .collect();
    let label_positions = centers.clone();
    let grid: Vec<(f64, f64)> = scale
        .ticks()
        .into_iter()
        .map(|tick| (tick, area.y(tick, &scale)))
        .collect();

    let hover = HoverModel {
        points: centers,
        values: series.values.clone(),
        labels: series.labels.clone(),
    };
    let (tooltip, set_tooltip) = create_signal(None::<(f64, f64, String)>);
    let on_move = move |ev: web_sys::MouseEvent| {
        set_tooltip.set(hover.hit(f64::from(ev.offset_x()), f64::from(ev.offset_y())));
    };

    view! {
        <div class="chart-container">
            <svg
                class="usage-chart"
                width=CHART_WIDTH
                height=CHART_HEIGHT
                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                on:mousemove=on_move
                on:mouseleave=move |_| set_tooltip.set(None)
            >
                {grid
                    .into_iter()
                    .map(|(tick, y)| {
                        view! {
                            <line
                                class="grid-line"
                                x1=CHART_PADDING
                                y1=y
                                x2={CHART_WIDTH - CHART_PADDING}
                                y2=y
                            ></line>
                            <text
                                class="axis-label"
                                x={CHART_PADDING - 6.0}
                                y={y + 4.0}
                                text-anchor="end"
                            >
                                {chart::tick_label(tick)}
                            </text>
                        }
                    })
                    .collect_view()}
                {rects
                    .iter()
                    .copied()
                    .map(|r| {
                        view! {
                            <rect
                                class="chart-bar"
                                x=r.x
                                y=r.y
                                width=r.width
                                height=r.height
                                rx="2"
                                fill="#16a34a"
                            ></rect>
                        }
                    })
                    .collect_view()}
                {series
                    .labels
                    .iter()
                    .cloned()
                    .zip(label_positions)
                    .map(|(label, (x, _))| {
                        view! {
                            <text
                                class="axis-label"
                                x=x
                                y={CHART_HEIGHT - 8.0}
                                text-anchor="middle"
                            >
                                {label}
                            </text>
                        }
                    })
                    .collect_view()}
            </svg>
            {move || {
                tooltip
                    .get()
                    .map(|(x, y, text)| {
                        view! {
                            <div
                                class="chart-tooltip"
                                style=format!("left:{}px;top:{}px", x + 12.0, y - 12.0)
                            >
                                {text}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_monthly_series_takes_month_labels() {
        let buckets = ActivityBuckets {
            months: Some(vec![3, 0, 7]),
            years: None,
        };

        let series = monthly_series(&buckets);
        assert_eq!(series.values, vec![3.0, 0.0, 7.0]);
        assert_eq!(series.labels, vec!["Jan", "Feb", "Mar"]);
    }

    #[test]
    fn test_monthly_series_empty_buckets() {
        let series = monthly_series(&ActivityBuckets::default());
        assert!(series.values.is_empty());
        assert!(series.labels.is_empty());
    }

    #[test]
    fn test_yearly_series_labels_end_at_current_year() {
        let buckets = ActivityBuckets {
            months: None,
            years: Some(vec![14, 22, 31]),
        };

        let series = yearly_series(&buckets, 2025);
        assert_eq!(series.values, vec![14.0, 22.0, 31.0]);
        assert_eq!(series.labels, vec!["2023", "2024", "2025"]);
    }

    #[test]
    fn test_hover_hit_within_threshold() {
        let hover = HoverModel {
            points: vec![(100.0, 100.0), (200.0, 50.0)],
            values: vec![3.0, 1.0],
            labels: vec!["Mar".to_string(), "Apr".to_string()],
        };

        let hit = hover.hit(104.0, 103.0).unwrap();
        assert_eq!(hit.0, 100.0);
        assert_eq!(hit.1, 100.0);
        assert_eq!(hit.2, "Mar: 3 devices used");

        let hit = hover.hit(201.0, 49.0).unwrap();
        assert_eq!(hit.2, "Apr: 1 device used");
    }

    #[test]
    fn test_hover_misses_outside_threshold() {
        let hover = HoverModel {
            points: vec![(100.0, 100.0)],
            values: vec![3.0],
            labels: vec!["Mar".to_string()],
        };

        assert_eq!(hover.hit(150.0, 100.0), None);
    }

    #[test]
    fn test_hover_skips_zero_valued_points() {
        let hover = HoverModel {
            points: vec![(100.0, 100.0)],
            values: vec![0.0],
            labels: vec!["Feb".to_string()],
        };

        assert_eq!(hover.hit(100.0, 100.0), None);
    }
}
