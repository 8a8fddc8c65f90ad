// ---------------------------------------------------------------------------
// Summary statistics and ordinary-least-squares fitting
// ---------------------------------------------------------------------------

/// Decimal places used for all tabulated summary values.
pub const SUMMARY_DECIMALS: i32 = 5;

/// Arithmetic mean; NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard error of the mean: sample standard deviation (n−1 denominator)
/// divided by √n. NaN when fewer than two values.
pub fn standard_error(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    (var / n as f64).sqrt()
}

/// Round to `decimals` places, half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// ---------------------------------------------------------------------------
// SummaryStat – per-column mean / error / band, rounded for display
// ---------------------------------------------------------------------------

/// Rounded per-column summary: mean, standard error, and the ±1-SE band.
/// Upper/lower are computed from the already-rounded mean and error, then
/// rounded again, matching how the values are tabulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStat {
    pub mean: f64,
    pub error: f64,
    pub upper: f64,
    pub lower: f64,
}

impl SummaryStat {
    pub fn from_values(values: &[f64]) -> Self {
        let mean = round_to(mean(values), SUMMARY_DECIMALS);
        let error = round_to(standard_error(values), SUMMARY_DECIMALS);
        SummaryStat {
            mean,
            error,
            upper: round_to(mean + error, SUMMARY_DECIMALS),
            lower: round_to(mean - error, SUMMARY_DECIMALS),
        }
    }
}

// ---------------------------------------------------------------------------
// Ordinary least squares
// ---------------------------------------------------------------------------

/// Slope and intercept of `y ≈ slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    pub slope: f64,
    pub intercept: f64,
}

impl FitResult {
    /// Evaluate the fitted line at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary-least-squares fit of `y` against `x`. Returns `None` when there
/// are fewer than two points, mismatched lengths, or a degenerate x-axis.
pub fn ols_fit(x: &[f64], y: &[f64]) -> Option<FitResult> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let xm = mean(x);
    let ym = mean(y);
    let sxx: f64 = x.iter().map(|&xi| (xi - xm).powi(2)).sum();
    if sxx == 0.0 || !sxx.is_finite() {
        return None;
    }
    let sxy: f64 = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - xm) * (yi - ym))
        .sum();
    let slope = sxy / sxx;
    Some(FitResult {
        slope,
        intercept: ym - slope * xm,
    })
}

/// Einstein relation for 3-D diffusion: MSD = 6·D·t, so D is the fitted
/// mean-squared-displacement slope divided by six.
pub fn diffusion_coefficient(fit: &FitResult) -> f64 {
    fit.slope / 6.0
}
