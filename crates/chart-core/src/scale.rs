// File: crates/chart-core/src/scale.rs
// Summary: Data domains and affine data-to-pixel scale transforms.

/// Fraction of the vertical frame actually used by data, leaving headroom
/// above the tallest value.
pub const VERTICAL_MARGIN: f64 = 0.9;

/// Inclusive data-value range a chart must represent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Identity for [`Domain::union`]; any real value extends it.
    pub const EMPTY: Self = Self { min: f64::INFINITY, max: f64::NEG_INFINITY };

    /// Smallest domain covering `values`. NaN values are ignored by the
    /// min/max fold; an empty iterator yields [`Domain::EMPTY`].
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().fold(Self::EMPTY, |d, v| d.include(v))
    }

    pub fn include(self, v: f64) -> Self {
        Self { min: self.min.min(v), max: self.max.max(v) }
    }

    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Width of the domain. A zero span is not guarded: the derived scale
    /// factor becomes infinite and propagates into the geometry, so callers
    /// are expected to supply non-degenerate series.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `v` inside the domain as a 0..1 fraction.
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Horizontal scale: `px = (v - min) * factor`.
#[derive(Clone, Copy, Debug)]
pub struct XScale {
    pub min: f64,
    pub factor: f64,
}

impl XScale {
    pub fn fit(domain: Domain, width: f64) -> Self {
        Self { min: domain.min, factor: width / domain.span() }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        (v - self.min) * self.factor
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.min + px / self.factor
    }
}

/// Vertical scale, flipped so increasing values move upward:
/// `px = h - (v - min) * factor`.
#[derive(Clone, Copy, Debug)]
pub struct YScale {
    pub height: f64,
    pub min: f64,
    pub factor: f64,
}

impl YScale {
    pub fn fit(domain: Domain, height: f64) -> Self {
        Self { height, min: domain.min, factor: VERTICAL_MARGIN * height / domain.span() }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        self.height - (v - self.min) * self.factor
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        self.min + (self.height - px) / self.factor
    }
}
