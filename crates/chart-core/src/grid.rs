// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers (even spacing and "nice" value ticks).

const MAX_TICKS: usize = 1000;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Round `raw` to 1, 2, 5 or 10 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 { 1.0 } else if frac <= 2.0 { 2.0 } else if frac <= 5.0 { 5.0 } else { 10.0 };
    nice * base
}

/// Smallest multiple of a nice step that is >= `value`, splitting into about `splits` intervals.
pub fn nice_ceil(value: f64, splits: usize) -> f64 {
    if !value.is_finite() || value <= 0.0 { return 1.0; }
    let step = nice_step(value / splits.max(1) as f64);
    (value / step).ceil() * step
}

/// Tick values covering `[min, max]` on nice boundaries, about `target` ticks.
/// A span that does not fit in an f64 yields just the two endpoints.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if max > min { (min, max) } else { (min, min + 1.0) };
    if !(hi - lo).is_finite() {
        return vec![lo, hi];
    }
    let step = nice_step((hi - lo) / target.max(1) as f64);
    let start = (lo / step).floor() * step;
    let end = (hi / step).ceil() * step;
    let n = ((end - start) / step).round();
    if !n.is_finite() || n < 1.0 || n > MAX_TICKS as f64 {
        return vec![lo, hi];
    }
    linspace(start, end, n as usize + 1)
}
