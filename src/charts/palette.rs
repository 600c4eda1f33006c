//! Fixed colour scales for intensity charts

use serde::Serialize;

/// Perceptually uniform scale used by the weekday heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ColorScale {
    Viridis,
}

const VIRIDIS: [(u8, u8, u8); 10] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x49, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6e, 0xce, 0x58),
    (0xb5, 0xde, 0x2b),
    (0xfd, 0xe7, 0x25),
];

/// Categorical colours, cycled by index
const QUALITATIVE: [(u8, u8, u8); 10] = [
    (0x63, 0x6e, 0xfa),
    (0xef, 0x55, 0x3b),
    (0x00, 0xcc, 0x96),
    (0xab, 0x63, 0xfa),
    (0xff, 0xa1, 0x5a),
    (0x19, 0xd3, 0xf3),
    (0xff, 0x66, 0x92),
    (0xb6, 0xe8, 0x80),
    (0xff, 0x97, 0xff),
    (0xfe, 0xcb, 0x52),
];

/// Colour for the `index`-th category. Bar and scatter marks are a single
/// series and always take index 0; only pie slices walk the palette.
pub(crate) fn category_color(index: usize) -> (u8, u8, u8) {
    QUALITATIVE[index % QUALITATIVE.len()]
}

impl ColorScale {
    /// Colour at position `t` in `[0, 1]`; out-of-range and NaN clamp to the ends
    pub(crate) fn color_at(self, t: f64) -> (u8, u8, u8) {
        let stops = match self {
            ColorScale::Viridis => &VIRIDIS,
        };
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = scaled - lo as f64;

        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
        let (a, b) = (stops[lo], stops[hi]);
        (lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
    }
}
