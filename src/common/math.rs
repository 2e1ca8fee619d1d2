//! Windowed and recursive primitives used by the calculators.
//!
//! Every helper returns one entry per input element; entries before the
//! window is full are `None`. A period of zero yields an all-`None` output,
//! callers reject zero periods before getting here.

/// Trailing arithmetic mean over `period` elements, inclusive of the current one.
pub fn rolling_mean(data: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(data, period, |window| {
        Some(window.iter().sum::<f64>() / window.len() as f64)
    })
}

/// Trailing sample standard deviation (divisor `period - 1`).
pub fn rolling_std(data: &[f64], period: usize) -> Vec<Option<f64>> {
    if period < 2 {
        return vec![None; data.len()];
    }
    rolling(data, period, |window| {
        let n = window.len() as f64;
        let mean = window.iter().sum::<f64>() / n;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
        Some(variance.sqrt())
    })
}

pub fn rolling_min(data: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(data, period, |window| {
        window.iter().copied().reduce(f64::min)
    })
}

pub fn rolling_max(data: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(data, period, |window| {
        window.iter().copied().reduce(f64::max)
    })
}

fn rolling<F>(data: &[f64], period: usize, reduce: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut result = vec![None; data.len()];
    if period == 0 || period > data.len() {
        return result;
    }
    for i in (period - 1)..data.len() {
        result[i] = reduce(&data[i + 1 - period..=i]);
    }
    result
}

/// EMA with `alpha = 2 / (period + 1)`, seeded with the simple mean of the
/// first `period` values. First defined at index `period - 1`.
pub fn ema(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let alpha = 2.0 / (period as f64 + 1.0);
    seeded_recurrence(data, period, alpha)
}

/// Wilder smoothing (`alpha = 1 / period`), seeded like [`ema`].
pub fn wilder(data: &[f64], period: usize) -> Vec<Option<f64>> {
    let alpha = 1.0 / period as f64;
    seeded_recurrence(data, period, alpha)
}

fn seeded_recurrence(data: &[f64], period: usize, alpha: f64) -> Vec<Option<f64>> {
    let n = data.len();
    let mut result = vec![None; n];
    if period == 0 || period > n {
        return result;
    }

    let mut prev = data[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(prev);
    for i in period..n {
        prev = ema_from_previous(data[i], prev, alpha);
        result[i] = Some(prev);
    }
    result
}

/// Applies [`ema`] to a series whose defined values form a contiguous
/// suffix, keeping the output aligned with the input.
pub fn ema_of_defined(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    let Some(start) = values.iter().position(Option::is_some) else {
        return result;
    };
    let tail: Vec<f64> = values[start..].iter().map_while(|v| *v).collect();
    for (offset, value) in ema(&tail, period).into_iter().enumerate() {
        result[start + offset] = value;
    }
    result
}

#[inline]
pub fn ema_from_previous(value: f64, previous: f64, alpha: f64) -> f64 {
    value * alpha + previous * (1.0 - alpha)
}

#[inline]
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}
