//! Planar coordinate type.
//!
//! Ring coordinates are local metres around the circle centre, not WGS-84.
//! Emitted coordinates are rounded to [`COORD_DECIMALS`] places so that the
//! same parameters always serialize to the same text.

/// Decimal places kept in emitted coordinates.
pub const COORD_DECIMALS: i32 = 2;

/// A point in the scenario's local Cartesian frame (metres).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `angle` radians on a circle of `radius` centred at the
    /// origin.
    #[inline]
    pub fn on_circle(radius: f64, angle: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin())
    }

    /// Round both coordinates to `decimals` places.  Negative zero is
    /// normalized to `0.0`.
    pub fn rounded(self, decimals: i32) -> Self {
        Self::new(round_to(self.x, decimals), round_to(self.y, decimals))
    }

    /// Euclidean distance in metres.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// `true` if both coordinates differ by at most `tolerance`.
    #[inline]
    pub fn approx_eq(self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl std::fmt::Display for Point {
    /// `x,y` with [`COORD_DECIMALS`] places, the form used in edge shapes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.rounded(COORD_DECIMALS);
        write!(f, "{:.2},{:.2}", p.x, p.y)
    }
}

/// Round `v` to `decimals` places, mapping `-0.0` to `0.0`.
///
/// Goes through fixed-point formatting so the result agrees digit for digit
/// with `{:.N}` (and C's `%.Nf`), which round the exact binary value.
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let places = decimals.max(0) as usize;
    let r: f64 = format!("{v:.places$}").parse().unwrap_or(v);
    if r == 0.0 { 0.0 } else { r }
}
