//! Colors - Dashboard Chart Palette
//!
//! Chrome colors come from the gpui-component theme; only the series colors and
//! plot furniture are fixed here.

use gpui::{Rgba, rgb};

/// Dashboard color palette
pub struct DashColors;

impl DashColors {
    // Series
    /// Locational marginal price
    pub fn lmp() -> Rgba { rgb(0x8884d8) }
    /// Marginal congestion component
    pub fn mcc() -> Rgba { rgb(0x82ca9d) }
    /// Marginal loss component
    pub fn mlc() -> Rgba { rgb(0xffc658) }

    // Plot
    pub fn grid() -> Rgba { rgb(0xe5e7eb) }
    pub fn baseline() -> Rgba { rgb(0x9ca3af) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_colors_are_distinct() {
        let colors = [DashColors::lmp(), DashColors::mcc(), DashColors::mlc()];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_eq!(DashColors::lmp(), rgb(0x8884d8));
    }
}
