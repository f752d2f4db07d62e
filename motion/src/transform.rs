//! CSS transform values produced by the engine.
//!
//! The engine never touches strings until the very end: effects return these
//! small value types, tests compare numbers, and only the DOM writer calls
//! [`Transform3d::css`].

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A `translate3d(...) scale(...)` pair. Translations are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3d {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub scale: f64,
}

impl Default for Transform3d {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3d {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, scale: 1.0 };

    #[must_use]
    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, scale: 1.0 }
    }

    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Render as a CSS `transform` value. The scale is omitted when it is 1.
    #[must_use]
    pub fn css(&self) -> String {
        let translate = format!("translate3d({}px, {}px, {}px)", fixed(self.x, 2), fixed(self.y, 2), fixed(self.z, 2));
        if (self.scale - 1.0).abs() < f64::EPSILON {
            translate
        } else {
            format!("{translate} scale({})", fixed(self.scale, 3))
        }
    }
}

/// A one-axis scale used by progress bars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisScale {
    X(f64),
    Y(f64),
}

impl AxisScale {
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Self::X(v) | Self::Y(v) => v,
        }
    }

    #[must_use]
    pub fn css(self) -> String {
        match self {
            Self::X(v) => format!("scaleX({})", fixed(v, 4)),
            Self::Y(v) => format!("scaleY({})", fixed(v, 4)),
        }
    }
}

/// Format with at most `digits` decimals, trimming trailing zeros and
/// normalizing negative zero.
#[must_use]
pub fn fixed(value: f64, digits: usize) -> String {
    let s = format!("{value:.digits$}");
    let s = if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s.as_str() };
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}
