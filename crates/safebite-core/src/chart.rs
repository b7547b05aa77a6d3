//! Chart geometry for the dashboard's SVG line and bar charts
//!
//! All coordinate math lives here as pure functions; the SVG layer only
//! stringifies what this module computes. Malformed or empty input produces
//! degenerate (empty) geometry, never an error.

/// Hover hit-testing radius in pixels
pub const HOVER_THRESHOLD_PX: f64 = 15.0;

/// Substitute range when every value is equal, keeping projection finite
const MIN_RANGE: f64 = 1.0;

/// Number of grid intervals between the axis minimum and maximum
const GRID_STEPS: usize = 5;

/// Vertical axis window for a usage chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    /// Axis minimum, pinned to zero for usage charts
    pub min: f64,
    /// Axis maximum, always above the tallest data point
    pub max: f64,
}

impl ChartScale {
    /// Fit a scale over `values` with headroom above the observed maximum.
    ///
    /// The maximum is the larger of `floor` and `headroom` times the
    /// observed maximum, so the tallest point never touches the chart top.
    /// Non-finite values are ignored.
    #[must_use]
    pub fn fit(values: &[f64], floor: f64, headroom: f64) -> Self {
        let observed = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0_f64, f64::max);

        let mut max = (observed * headroom).max(floor);
        if max <= 0.0 {
            max = MIN_RANGE;
        }

        Self { min: 0.0, max }
    }

    /// Scale for the monthly usage chart (floor 100, 10% headroom)
    #[must_use]
    pub fn monthly_usage(values: &[f64]) -> Self {
        Self::fit(values, 100.0, 1.1)
    }

    /// Scale for the yearly usage chart (floor 40, 20% headroom)
    #[must_use]
    pub fn yearly_usage(values: &[f64]) -> Self {
        Self::fit(values, 40.0, 1.2)
    }

    /// Axis span, never zero
    #[must_use]
    pub fn range(&self) -> f64 {
        (self.max - self.min).max(MIN_RANGE)
    }

    /// Grid-line values at fixed fifths of the range, minimum first
    #[must_use]
    pub fn ticks(&self) -> [f64; GRID_STEPS + 1] {
        let mut ticks = [0.0; GRID_STEPS + 1];
        let step = self.range() / GRID_STEPS as f64;
        for (i, tick) in ticks.iter_mut().enumerate() {
            *tick = self.min + step * i as f64;
        }
        ticks
    }
}

/// Padded pixel rectangle data points project into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Total width in pixels
    pub width: f64,
    /// Total height in pixels
    pub height: f64,
    /// Uniform padding reserved for axis labels
    pub padding: f64,
}

impl PlotArea {
    /// A plot area with the given dimensions
    #[must_use]
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    fn inner_height(&self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }

    /// X pixel for data index `idx` of `count` evenly spaced points.
    ///
    /// A single point is centered rather than divided by zero.
    #[must_use]
    pub fn x(&self, idx: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.padding + self.inner_width() / 2.0;
        }
        self.padding + self.inner_width() * idx as f64 / (count - 1) as f64
    }

    /// Y pixel for a data value under the given scale
    #[must_use]
    pub fn y(&self, value: f64, scale: &ChartScale) -> f64 {
        let clamped = value.clamp(scale.min, scale.max);
        let fraction = (clamped - scale.min) / scale.range();
        self.height - self.padding - self.inner_height() * fraction
    }

    /// Y pixel of the zero baseline
    #[must_use]
    pub fn baseline(&self) -> f64 {
        self.height - self.padding
    }

    /// Project a value series into pixel points
    #[must_use]
    pub fn points(&self, values: &[f64], scale: &ChartScale) -> Vec<(f64, f64)> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| (self.x(i, values.len()), self.y(v, scale)))
            .collect()
    }
}

/// SVG path connecting points with straight segments
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{command}{x:.1},{y:.1} "));
    }
    path.trim_end().to_string()
}

/// SVG path connecting points with cubic Bezier segments.
///
/// Control points sit at the horizontal midpoint of each segment, which
/// keeps the curve monotone between samples.
#[must_use]
pub fn smooth_path(points: &[(f64, f64)]) -> String {
    let Some(((first_x, first_y), rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M{first_x:.1},{first_y:.1}");
    let mut prev = (*first_x, *first_y);
    for &(x, y) in rest {
        let mid = (prev.0 + x) / 2.0;
        path.push_str(&format!(
            " C{mid:.1},{:.1} {mid:.1},{y:.1} {x:.1},{y:.1}",
            prev.1
        ));
        prev = (x, y);
    }
    path
}

/// SVG path for the gradient-filled area under a smoothed line
#[must_use]
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some((first_x, _)), Some((last_x, _))) = (points.first(), points.last()) else {
        return String::new();
    };

    format!(
        "{} L{last_x:.1},{baseline:.1} L{first_x:.1},{baseline:.1} Z",
        smooth_path(points)
    )
}

/// One bar of a bar chart, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Bar width
    pub width: f64,
    /// Bar height down to the baseline
    pub height: f64,
}

/// Bar rectangles for a value series, 60% of each slot with centered gaps
#[must_use]
pub fn bars(area: &PlotArea, values: &[f64], scale: &ChartScale) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }

    let slot = (area.width - 2.0 * area.padding).max(0.0) / values.len() as f64;
    let bar_width = slot * 0.6;

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let y = area.y(v, scale);
            BarRect {
                x: area.padding + slot * i as f64 + (slot - bar_width) / 2.0,
                y,
                width: bar_width,
                height: (area.baseline() - y).max(0.0),
            }
        })
        .collect()
}

/// Index of the data point nearest to the cursor, if any lies within
/// `threshold` pixels
#[must_use]
pub fn nearest_point(
    points: &[(f64, f64)],
    cursor_x: f64,
    cursor_y: f64,
    threshold: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, (x, y)) in points.iter().enumerate() {
        let distance = ((x - cursor_x).powi(2) + (y - cursor_y).powi(2)).sqrt();
        if distance <= threshold && best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }

    best.map(|(i, _)| i)
}

/// Hover tooltip text for a usage data point, pluralized on the value
#[must_use]
pub fn usage_tooltip(label: &str, value: u64) -> String {
    let noun = if value == 1 { "device" } else { "devices" };
    format!("{label}: {value} {noun} used")
}

/// Integer axis label for a tick value
#[must_use]
pub fn tick_label(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Year labels for a yearly series ending at `end_year`, oldest first
#[must_use]
pub fn year_labels(end_year: i32, len: usize) -> Vec<String> {
    (0..len)
        .rev()
        .map(|offset| (end_year - offset as i32).to_string())
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_monthly_scale_holds_headroom_and_floor() {
        // Below the floor, the floor wins.
        let low = ChartScale::monthly_usage(&[10.0, 25.0, 50.0]);
        assert_eq!(low.max, 100.0);

        // Above the floor, 110% of the observed max wins.
        let high = ChartScale::monthly_usage(&[120.0, 200.0]);
        assert!((high.max - 220.0).abs() < 1e-9);
        assert!(high.max >= 1.1 * 200.0);
        assert_eq!(high.min, 0.0);
    }

    #[test]
    fn test_yearly_scale_holds_headroom_and_floor() {
        let low = ChartScale::yearly_usage(&[5.0, 30.0]);
        assert_eq!(low.max, 40.0);

        let high = ChartScale::yearly_usage(&[100.0]);
        assert!((high.max - 120.0).abs() < 1e-9);
        assert!(high.max >= 1.2 * 100.0);
    }

    #[test]
    fn test_scale_ignores_non_finite_values() {
        let scale = ChartScale::monthly_usage(&[f64::NAN, 50.0, f64::INFINITY]);
        assert_eq!(scale.max, 100.0);
    }

    #[test]
    fn test_degenerate_input_keeps_positive_range() {
        let empty = ChartScale::fit(&[], 0.0, 1.1);
        assert!(empty.range() >= 1.0);

        let flat = ChartScale::fit(&[0.0, 0.0, 0.0], 0.0, 1.2);
        assert!(flat.max > 0.0);
    }

    #[test]
    fn test_ticks_sit_at_fifths_of_the_range() {
        let scale = ChartScale { min: 0.0, max: 100.0 };
        assert_eq!(scale.ticks(), [0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn test_projection_spans_the_padded_area() {
        let area = PlotArea::new(600.0, 220.0, 30.0);
        let scale = ChartScale { min: 0.0, max: 100.0 };

        let points = area.points(&[0.0, 50.0, 100.0], &scale);

        assert_eq!(points[0].0, 30.0);
        assert_eq!(points[2].0, 570.0);
        // Value 0 sits on the baseline, the maximum on the top padding.
        assert_eq!(points[0].1, 190.0);
        assert_eq!(points[2].1, 30.0);
        // The midpoint interpolates linearly on both axes.
        assert_eq!(points[1].0, 300.0);
        assert_eq!(points[1].1, 110.0);
    }

    #[test]
    fn test_single_point_is_centered() {
        let area = PlotArea::new(600.0, 220.0, 30.0);
        assert_eq!(area.x(0, 1), 300.0);
    }

    #[test]
    fn test_values_above_scale_clamp_to_top() {
        let area = PlotArea::new(600.0, 220.0, 30.0);
        let scale = ChartScale { min: 0.0, max: 100.0 };

        assert_eq!(area.y(250.0, &scale), 30.0);
    }

    #[test]
    fn test_line_path_shape() {
        let path = line_path(&[(0.0, 10.0), (5.0, 20.0)]);
        assert_eq!(path, "M0.0,10.0 L5.0,20.0");

        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn test_smooth_path_uses_midpoint_controls() {
        let path = smooth_path(&[(0.0, 10.0), (10.0, 20.0)]);
        assert_eq!(path, "M0.0,10.0 C5.0,10.0 5.0,20.0 10.0,20.0");
    }

    #[test]
    fn test_area_path_closes_to_baseline() {
        let path = area_path(&[(0.0, 10.0), (10.0, 20.0)], 200.0);
        assert!(path.starts_with("M0.0,10.0"));
        assert!(path.ends_with("L10.0,200.0 L0.0,200.0 Z"));

        assert_eq!(area_path(&[], 200.0), "");
    }

    #[test]
    fn test_bars_fill_slots_with_gaps() {
        let area = PlotArea::new(140.0, 120.0, 20.0);
        let scale = ChartScale { min: 0.0, max: 100.0 };

        let rects = bars(&area, &[100.0, 50.0], &scale);

        assert_eq!(rects.len(), 2);
        // Two 50px slots, 30px bars centered inside them.
        assert_eq!(rects[0].width, 30.0);
        assert_eq!(rects[0].x, 30.0);
        assert_eq!(rects[1].x, 80.0);
        // Full-scale bar spans the inner height.
        assert_eq!(rects[0].y, 20.0);
        assert_eq!(rects[0].height, 80.0);
        assert_eq!(rects[1].height, 40.0);
    }

    #[test]
    fn test_nearest_point_respects_threshold() {
        let points = vec![(100.0, 100.0), (200.0, 100.0)];

        assert_eq!(nearest_point(&points, 104.0, 103.0, HOVER_THRESHOLD_PX), Some(0));
        assert_eq!(nearest_point(&points, 196.0, 100.0, HOVER_THRESHOLD_PX), Some(1));
        assert_eq!(nearest_point(&points, 150.0, 100.0, HOVER_THRESHOLD_PX), None);
        assert_eq!(nearest_point(&[], 0.0, 0.0, HOVER_THRESHOLD_PX), None);
    }

    #[test]
    fn test_nearest_point_picks_the_closer_of_two() {
        let points = vec![(100.0, 100.0), (110.0, 100.0)];
        assert_eq!(nearest_point(&points, 107.0, 100.0, HOVER_THRESHOLD_PX), Some(1));
    }

    #[test]
    fn test_usage_tooltip_pluralization() {
        assert_eq!(usage_tooltip("Mar", 1), "Mar: 1 device used");
        assert_eq!(usage_tooltip("Mar", 7), "Mar: 7 devices used");
        assert_eq!(usage_tooltip("Jun", 0), "Jun: 0 devices used");
    }

    #[test]
    fn test_tick_label_rounds_to_integer() {
        assert_eq!(tick_label(44.0), "44");
        assert_eq!(tick_label(21.6), "22");
    }

    #[test]
    fn test_year_labels_end_at_current_year() {
        assert_eq!(year_labels(2025, 3), ["2023", "2024", "2025"]);
        assert!(year_labels(2025, 0).is_empty());
    }
}
