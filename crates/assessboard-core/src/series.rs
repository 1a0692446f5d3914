//! Synthetic comparison curve for the percentile chart.
//!
//! The curve is cosmetic: a Gaussian bump centred on the user's percentile,
//! sampled every [`SAMPLE_STEP`] points, plus one highlighted point for the
//! user that always sits above the rest of the curve.

use serde::Serialize;

/// Fixed spread of the synthetic curve.
pub const STD_DEV: f64 = 15.0;

/// Distance between sampled percentiles.
pub const SAMPLE_STEP: u32 = 5;

/// Upper end of the percentile axis.
pub const AXIS_MAX: u32 = 100;

/// Height of the curve at its centre.
const PEAK: f64 = 100.0;

/// How far the user's point is lifted above the tallest sample.
const USER_LIFT: u32 = 10;

/// Headroom added above the tallest point on the y axis.
const Y_HEADROOM: u32 = 10;

/// Number of labelled ticks on each axis.
pub const TICK_COUNT: usize = 6;

/// One point on the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonPoint {
    pub percentile: u32,
    pub count: u32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_user: bool,
}

impl ComparisonPoint {
    /// Tooltip text for this point.
    pub fn tooltip(&self) -> String {
        if self.is_user {
            format!("{} (Your Score)", self.count)
        } else {
            self.count.to_string()
        }
    }
}

/// Curve height at `x` for a curve centred on `mean`.
fn bell_count(x: u32, mean: u32) -> u32 {
    let d = x as f64 - mean as f64;
    let exponent = -(d * d) / (2.0 * STD_DEV * STD_DEV);
    (PEAK * exponent.exp()).round() as u32
}

/// Build the comparison series for a user at `percentile`.
///
/// Samples `0, 5, ..., 100`, then adds the user's point at `percentile`
/// with a count 10 above the tallest sample. The result is sorted by
/// percentile; when the user's percentile is itself a sample position the
/// sample and the user point both appear, sample first.
///
/// Values above 100 are clamped to 100.
pub fn comparison_series(percentile: u32) -> Vec<ComparisonPoint> {
    let mean = percentile.min(AXIS_MAX);

    let mut points: Vec<ComparisonPoint> = (0..=AXIS_MAX)
        .step_by(SAMPLE_STEP as usize)
        .map(|x| ComparisonPoint {
            percentile: x,
            count: bell_count(x, mean),
            is_user: false,
        })
        .collect();

    let tallest = points.iter().map(|p| p.count).max().unwrap_or(0);
    points.push(ComparisonPoint {
        percentile: mean,
        count: tallest + USER_LIFT,
        is_user: true,
    });

    // Stable: the user point stays behind a sample at the same percentile.
    points.sort_by_key(|p| p.percentile);
    points
}

/// The user's highlighted point, if present.
pub fn user_point(series: &[ComparisonPoint]) -> Option<&ComparisonPoint> {
    series.iter().find(|p| p.is_user)
}

/// Y axis range `[0, max count + 10]`.
pub fn y_bounds(series: &[ComparisonPoint]) -> (f64, f64) {
    let data_max = series.iter().map(|p| p.count).max().unwrap_or(0);
    (0.0, (data_max + Y_HEADROOM) as f64)
}

/// X axis range, always the full percentile scale.
pub fn x_bounds() -> (f64, f64) {
    (0.0, AXIS_MAX as f64)
}

/// Evenly spaced tick values covering `[lo, hi]`.
pub fn ticks(lo: f64, hi: f64) -> Vec<f64> {
    let steps = (TICK_COUNT - 1) as f64;
    (0..TICK_COUNT)
        .map(|i| lo + (hi - lo) * i as f64 / steps)
        .collect()
}
