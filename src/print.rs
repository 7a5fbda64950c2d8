use num::BigInt;
use num::ToPrimitive;

use crate::util::BigRatio;

/// Renders an exact probability with precision adapted to magnitude, so
/// small values stay visibly nonzero: one decimal in `[0.1, 1)`, two in
/// `[0.01, 0.1)`, three in `[0.001, 0.01)`, and a plain integer otherwise
/// (which shows very small nonzero values as `0`). Display-only; the
/// rounded value must never feed back into computation.
#[must_use]
pub fn format_probability(p: &BigRatio) -> String {
    let v = p.to_f64().unwrap_or(0.0);
    if (0.1..1.0).contains(&v) {
        format!("{v:.1}")
    } else if (0.01..0.1).contains(&v) {
        format!("{v:.2}")
    } else if (0.001..0.01).contains(&v) {
        format!("{v:.3}")
    } else {
        format!("{v:.0}")
    }
}

/// Percentage label for a probability in `[0, 1]`, formatted with the same
/// adaptive precision. This is the text painted above each chart bar.
#[must_use]
pub fn format_percent(p: &BigRatio) -> String {
    format!(
        "{}%",
        format_probability(&(p * BigRatio::from_integer(BigInt::from(100))))
    )
}
