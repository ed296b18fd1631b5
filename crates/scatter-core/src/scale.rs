// File: crates/scatter-core/src/scale.rs
// Summary: Linear data-to-pixel scale and nice-tick generation, decoupled from drawing.

/// Smallest domain span treated as non-degenerate.
const MIN_SPAN: f64 = 1e-12;

/// Linear map from a data domain to a drawing range.
///
/// Ranges may be inverted (e.g. `[h, 0]` for a y axis whose values grow
/// upward while pixels grow downward). A degenerate domain (zero span) maps
/// every input to the range midpoint, so the scale never divides by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value to its range position.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let span = self.domain[1] - self.domain[0];
        if span.abs() < MIN_SPAN {
            return (self.range[0] + self.range[1]) * 0.5;
        }
        self.range[0] + (v - self.domain[0]) / span * (self.range[1] - self.range[0])
    }

    /// Map a range position back to its domain value.
    #[inline]
    pub fn invert(&self, r: f64) -> f64 {
        let span = self.range[1] - self.range[0];
        if span.abs() < MIN_SPAN {
            return self.domain[0];
        }
        self.domain[0] + (r - self.range[0]) / span * (self.domain[1] - self.domain[0])
    }
}

/// Step size for roughly `count` ticks over `domain`, snapped to the
/// 1/2/5 x 10^k ladder.
pub fn tick_step(domain: [f64; 2], count: usize) -> f64 {
    let span = domain[0].max(domain[1]) - domain[0].min(domain[1]);
    if count == 0 || span < MIN_SPAN {
        return 1.0;
    }
    let rough = span / count as f64;
    let mag = 10f64.powf(rough.log10().floor());
    let norm = rough / mag;
    if norm < 1.5 {
        mag
    } else if norm < 3.5 {
        mag * 2.0
    } else if norm < 7.5 {
        mag * 5.0
    } else {
        mag * 10.0
    }
}

/// Tick values covering `domain`: multiples of the nice step that fall
/// inside the domain, in ascending order. A degenerate domain yields the
/// single domain value; `count == 0` yields nothing.
pub fn ticks(domain: [f64; 2], count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let lo = domain[0].min(domain[1]);
    let hi = domain[0].max(domain[1]);
    if hi - lo < MIN_SPAN {
        return vec![lo];
    }
    let step = tick_step(domain, count);
    let first = (lo / step).ceil() as i64;
    let last = (hi / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Format a tick value with just enough decimals for its step.
pub fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };
    format!("{value:.decimals$}")
}
