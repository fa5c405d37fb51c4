/// Which end of the pixel extent the domain minimum lands on.
///
/// Canvas `y` grows downward, so value axes that should read "up is more"
/// use [`Orientation::Inverted`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Domain minimum maps to the low end of the extent.
    #[default]
    Forward,
    /// Domain minimum maps to the high end of the extent.
    Inverted,
}

/// Affine map from a numeric domain onto a pixel range.
///
/// # Examples
///
/// ```
/// use likeplot_layout::scale::{LinearScale, Orientation};
///
/// let y = LinearScale::new([0.0, 100.0], [400.0, 50.0]);
/// assert_eq!(y.map(0.0), 400.0);
/// assert_eq!(y.map(100.0), 50.0);
/// assert_eq!(y.map(50.0), 225.0);
///
/// // Same scale, with the flip spelled out.
/// let y = LinearScale::oriented([0.0, 100.0], [50.0, 400.0], Orientation::Inverted);
/// assert_eq!(y.range(), [400.0, 50.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Maps `domain[0]` to `range[0]` and `domain[1]` to `range[1]`.
    ///
    /// Either pair may be decreasing.
    #[must_use]
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Maps `domain` onto the pixel extent `[low, high]` in the given orientation.
    #[must_use]
    pub fn oriented(domain: [f64; 2], [low, high]: [f64; 2], orientation: Orientation) -> Self {
        let range = match orientation {
            Orientation::Forward => [low, high],
            Orientation::Inverted => [high, low],
        };
        Self::new(domain, range)
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Values outside the domain are extrapolated. A degenerate domain maps
    /// every value to the middle of the range.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Maps a pixel coordinate back to the domain.
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        LinearScale::new(self.range, self.domain).map(pixel)
    }

    #[must_use]
    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Returns roughly `count` evenly spaced "nice" values within the domain.
    ///
    /// Tick spacing is 1, 2 or 5 times a power of ten. Ticks are listed in
    /// domain order, so a decreasing domain yields decreasing ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use likeplot_layout::scale::LinearScale;
    ///
    /// let y = LinearScale::new([0.0, 1000.0], [350.0, 50.0]);
    /// let ticks = y.ticks(10);
    /// assert_eq!(ticks.first(), Some(&0.0));
    /// assert_eq!(ticks.last(), Some(&1000.0));
    /// assert_eq!(ticks.len(), 11);
    /// ```
    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [d0, d1] = self.domain;
        if count == 0 || !d0.is_finite() || !d1.is_finite() {
            return vec![];
        }
        if d0 == d1 {
            return vec![d0];
        }
        let (start, stop) = (d0.min(d1), d0.max(d1));
        let Some(increment) = TickIncrement::new(start, stop, count) else {
            return vec![];
        };

        let mut ticks = match increment {
            TickIncrement::Step(step) => ((start / step).ceil() as i64..=(stop / step).floor() as i64)
                .map(|i| i as f64 * step)
                .collect::<Vec<_>>(),
            // Dividing by the inverse keeps fractional ticks such as 0.3 exact.
            TickIncrement::Inverse(inverse) => ((start * inverse).ceil() as i64
                ..=(stop * inverse).floor() as i64)
                .map(|i| i as f64 / inverse)
                .collect(),
        };
        if d1 < d0 {
            ticks.reverse();
        }
        ticks
    }

    /// Returns a formatter matching the precision of [`ticks(count)`](Self::ticks).
    #[must_use]
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let [d0, d1] = self.domain;
        let precision = TickIncrement::new(d0.min(d1), d0.max(d1), count)
            .map_or(0, TickIncrement::precision);
        TickFormat { precision }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TickIncrement {
    Step(f64),
    Inverse(f64),
}

impl TickIncrement {
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn new(start: f64, stop: f64, count: usize) -> Option<Self> {
        let step = (stop - start) / count as f64;
        if !(step.is_finite() && step > 0.0) {
            return None;
        }
        let power = step.log10().floor();
        let error = step / 10f64.powf(power);
        let factor = if error >= 50f64.sqrt() {
            10.0
        } else if error >= 10f64.sqrt() {
            5.0
        } else if error >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        let power = power as i32;
        Some(if power < 0 {
            Self::Inverse(10f64.powi(-power) / factor)
        } else {
            Self::Step(factor * 10f64.powi(power))
        })
    }

    #[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn precision(self) -> usize {
        let step = match self {
            Self::Step(step) => step,
            Self::Inverse(inverse) => 1.0 / inverse,
        };
        (-step.log10().floor()).max(0.0) as usize
    }
}

/// Fixed-precision tick label formatter with thousands separators.
///
/// # Examples
///
/// ```
/// use likeplot_layout::scale::TickFormat;
///
/// assert_eq!(TickFormat { precision: 0 }.format(1200.0), "1,200");
/// assert_eq!(TickFormat { precision: 1 }.format(-0.5), "-0.5");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    /// Digits after the decimal point.
    pub precision: usize,
}

impl TickFormat {
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let text = format!("{:.*}", self.precision, value.abs());
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
        let is_zero = text.chars().all(|c| c == '0' || c == '.');
        if value.is_sign_negative() && !is_zero {
            grouped.push('-');
        }
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if let Some(frac_part) = frac_part {
            grouped.push('.');
            grouped.push_str(frac_part);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range() {
        let y = LinearScale::new([0.0, 100.0], [400.0, 50.0]);
        assert_eq!(y.map(0.0), 400.0);
        assert_eq!(y.map(100.0), 50.0);
        assert_eq!(y.map(50.0), 225.0);
        assert_eq!(y.invert(225.0), 50.0);
    }

    #[test]
    fn test_orientation_is_explicit() {
        let forward = LinearScale::oriented([0.0, 10.0], [50.0, 350.0], Orientation::Forward);
        let inverted = LinearScale::oriented([0.0, 10.0], [50.0, 350.0], Orientation::Inverted);
        assert_eq!(forward.map(0.0), 50.0);
        assert_eq!(inverted.map(0.0), 350.0);
        assert_eq!(inverted.map(10.0), 50.0);
        assert!(inverted.map(7.0) < inverted.map(3.0));
    }

    #[test]
    fn test_degenerate_domain_maps_to_midpoint() {
        let y = LinearScale::new([0.0, 0.0], [350.0, 50.0]);
        assert_eq!(y.map(0.0), 200.0);
        assert_eq!(y.ticks(10), [0.0]);
    }

    #[test]
    fn test_ticks_are_nice() {
        let y = LinearScale::new([0.0, 487.0], [350.0, 50.0]);
        assert_eq!(
            y.ticks(10),
            [0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0]
        );
        assert_eq!(y.tick_format(10).precision, 0);
    }

    #[test]
    fn test_fractional_ticks() {
        let y = LinearScale::new([0.0, 1.0], [0.0, 100.0]);
        let ticks = y.ticks(5);
        assert_eq!(ticks, [0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        let format = y.tick_format(5);
        assert_eq!(format.precision, 1);
        assert_eq!(format.format(ticks[3]), "0.6");
    }

    #[test]
    fn test_reversed_domain_ticks() {
        let x = LinearScale::new([10.0, 0.0], [0.0, 100.0]);
        assert_eq!(x.ticks(2), [10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_tick_format_grouping() {
        let format = TickFormat { precision: 0 };
        assert_eq!(format.format(0.0), "0");
        assert_eq!(format.format(999.0), "999");
        assert_eq!(format.format(1000.0), "1,000");
        assert_eq!(format.format(1_234_567.0), "1,234,567");
        assert_eq!(format.format(-25_000.0), "-25,000");
        assert_eq!(format.format(-0.0), "0");
    }
}
