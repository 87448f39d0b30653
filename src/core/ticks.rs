use serde::{Deserialize, Serialize};

/// Multipliers of `10^n` considered "nice" for a tick step.
const NICE_MULTIPLIERS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Label spacing factor used when decimating manual tick lists.
const MANUAL_LABEL_SPACING_FACTOR: f64 = 1.5;

/// Upper bound on the tick budget accepted by [`generate_ticks`] and
/// returned by [`auto_tick_budget`].
pub const MAX_TICK_COUNT: usize = 4_096;

/// One axis value, either generated or supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickValue {
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl TickValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Output of [`generate_ticks`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedTicks {
    pub values: Vec<f64>,
    /// `0.0` when no ticks were produced.
    pub step: f64,
    /// Fractional digits needed to print `step` exactly.
    pub decimal_digits: usize,
}

impl GeneratedTicks {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Generates ticks at a step from `{1, 2, 5} x 10^n` covering `[start, stop]`.
///
/// The step is the smallest nice value not below `(stop - start) / max_tick_count`,
/// so at most `max_tick_count + 1` ticks come back. Budgets above
/// [`MAX_TICK_COUNT`] are clamped to it. Empty, inverted or non-finite ranges
/// and a zero budget produce no ticks.
#[must_use]
pub fn generate_ticks(start: f64, stop: f64, max_tick_count: usize) -> GeneratedTicks {
    let range = stop - start;
    if max_tick_count == 0 || !range.is_finite() || range <= 0.0 {
        return GeneratedTicks::default();
    }
    let max_tick_count = max_tick_count.min(MAX_TICK_COUNT);

    let raw_step = range / max_tick_count as f64;
    let Some((multiplier, exponent)) = nice_step(raw_step) else {
        return GeneratedTicks::default();
    };
    let step = scaled(1.0, multiplier, exponent);

    let first = (start / step).ceil();
    let last = (stop / step + 1e-9).floor();
    if !first.is_finite() || !last.is_finite() || last < first {
        return GeneratedTicks {
            values: Vec::new(),
            step,
            decimal_digits: decimal_digits(exponent),
        };
    }

    let count = ((last - first) as usize).min(max_tick_count) + 1;
    let mut values = Vec::with_capacity(count);
    for index in 0..count {
        let k = first + index as f64;
        // `+ 0.0` folds a negative zero into positive zero.
        values.push(scaled(k, multiplier, exponent) + 0.0);
    }

    GeneratedTicks {
        values,
        step,
        decimal_digits: decimal_digits(exponent),
    }
}

/// Number of ticks that fit along an axis when each label needs
/// `label_extent_px` plus the same amount of free space.
#[must_use]
pub fn auto_tick_budget(axis_span_px: f64, label_extent_px: f64) -> usize {
    if !axis_span_px.is_finite() || !label_extent_px.is_finite() || label_extent_px <= 0.0 {
        return 0;
    }
    let budget = (axis_span_px.abs() / label_extent_px / 2.0).floor() as usize;
    budget.min(MAX_TICK_COUNT)
}

/// Layout inputs for filtering a caller-supplied tick list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualTickLayout {
    pub axis_span_px: f64,
    pub label_extent_px: f64,
    /// Ratio of the maximum to the visible viewport extent along the axis.
    pub zoom_scale: f64,
    /// Labels drawn inside the plot area are decimated to avoid overlap.
    pub inside: bool,
}

/// Keeps manual ticks that fall inside `visible_range`, dropping every label
/// whose index is not a multiple of the decimation modulus when labels are
/// drawn inside the plot area.
#[must_use]
pub fn select_manual_ticks(
    values: &[TickValue],
    visible_range: (f64, f64),
    layout: ManualTickLayout,
) -> Vec<TickValue> {
    let modulus = if layout.inside {
        manual_tick_modulus(values.len(), layout)
    } else {
        1
    };
    let (min, max) = (
        visible_range.0.min(visible_range.1),
        visible_range.0.max(visible_range.1),
    );

    values
        .iter()
        .filter(|tick| tick.value >= min && tick.value <= max)
        .enumerate()
        .filter(|(index, _)| index % modulus == 0)
        .map(|(_, tick)| tick.clone())
        .collect()
}

/// Formats a tick value with a fixed number of fractional digits.
#[must_use]
pub fn format_tick_label(value: f64, decimal_digits: usize) -> String {
    let text = format!("{value:.decimal_digits$}");
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

fn manual_tick_modulus(count: usize, layout: ManualTickLayout) -> usize {
    let zoom_scale = if layout.zoom_scale == 0.0 || !layout.zoom_scale.is_finite() {
        1.0
    } else {
        layout.zoom_scale
    };
    let available = layout.axis_span_px.abs() * zoom_scale;
    if available <= 0.0 || !available.is_finite() {
        return 1;
    }
    let needed = count as f64 * layout.label_extent_px * MANUAL_LABEL_SPACING_FACTOR;
    (needed / available).ceil().max(1.0) as usize
}

/// Returns `(multiplier, exponent)` such that `multiplier * 10^exponent` is the
/// smallest nice value `>= raw_step`.
fn nice_step(raw_step: f64) -> Option<(f64, i32)> {
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return None;
    }

    let mut exponent = raw_step.log10().floor() as i32;
    let threshold = raw_step * (1.0 - 1e-9);
    let mut multiplier = NICE_MULTIPLIERS
        .into_iter()
        .find(|m| scaled(1.0, *m, exponent) >= threshold)
        .unwrap_or(10.0);
    if multiplier == 10.0 {
        multiplier = 1.0;
        exponent += 1;
    }
    Some((multiplier, exponent))
}

/// `k * multiplier * 10^exponent`, dividing for negative exponents so decimal
/// steps such as `0.1` land on their nearest double.
fn scaled(k: f64, multiplier: f64, exponent: i32) -> f64 {
    if exponent < 0 {
        k * multiplier / 10f64.powi(-exponent)
    } else {
        k * multiplier * 10f64.powi(exponent)
    }
}

fn decimal_digits(exponent: i32) -> usize {
    if exponent < 0 { (-exponent) as usize } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::{format_tick_label, nice_step};

    #[test]
    fn nice_step_rounds_up_into_multiplier_set() {
        assert_eq!(nice_step(20.0), Some((2.0, 1)));
        assert_eq!(nice_step(0.3), Some((5.0, -1)));
        assert_eq!(nice_step(7.0), Some((1.0, 1)));
        assert_eq!(nice_step(100.0), Some((1.0, 2)));
        assert_eq!(nice_step(0.0), None);
    }

    #[test]
    fn labels_drop_negative_zero() {
        assert_eq!(format_tick_label(-0.0, 2), "0.00");
        assert_eq!(format_tick_label(-0.001, 1), "0.0");
        assert_eq!(format_tick_label(-1.75, 1), "-1.8");
        assert_eq!(format_tick_label(40.0, 0), "40");
    }
}
