//! Chart - Bar Chart Input Derived from the Visible Page

use crate::domain::dataset::{NodeRecord, PriceValue};

/// One category on the x axis
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub node_name: String,
    pub lmp: f64,
    pub mcc: f64,
    pub mlc: f64,
}

impl ChartPoint {
    pub fn from_record(record: &NodeRecord) -> Self {
        Self {
            node_name: record.node.clone(),
            lmp: value_or_zero(record.lmp.as_ref()),
            mcc: value_or_zero(record.mcc.as_ref()),
            mlc: value_or_zero(record.mlc.as_ref()),
        }
    }
}

fn value_or_zero(value: Option<&PriceValue>) -> f64 {
    value.and_then(PriceValue::as_f64).unwrap_or(0.0)
}

/// Chart points for exactly the rows shown in the table
pub fn chart_points(page: &[NodeRecord]) -> Vec<ChartPoint> {
    page.iter().map(ChartPoint::from_record).collect()
}

/// Vertical placement of one bar, as fractions of the plot height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarExtent {
    /// Distance of the bar's lower edge from the plot bottom
    pub bottom: f32,
    pub height: f32,
}

/// Linear y scale whose domain always contains zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarScale {
    min: f64,
    max: f64,
}

impl BarScale {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if min == max {
            // All zero (or no data): keep a unit domain above the baseline
            return Self { min: 0.0, max: 1.0 };
        }
        Self { min, max }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Height fraction of the zero line
    pub fn baseline(&self) -> f32 {
        (-self.min / self.span()) as f32
    }

    /// Bar from the zero line to `value`; negative values hang below it
    pub fn extent(&self, value: f64) -> BarExtent {
        let value = if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            0.0
        };
        let height = (value.abs() / self.span()) as f32;
        let bottom = if value >= 0.0 {
            self.baseline()
        } else {
            ((value - self.min) / self.span()) as f32
        };
        BarExtent { bottom, height }
    }
}
