use serde::{Deserialize, Serialize};

/// RGBA color serialized as a CSS `rgba(...)` string.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.css()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    #[serde(rename = "y")]
    Primary,
    #[serde(rename = "y1")]
    Secondary,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub radius: f64,
    /// Whether the segment reaching this point is drawn with the dash pattern.
    pub dashed: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub label: String,
    pub color: Rgba,
    pub fill: Option<Rgba>,
    pub width: u32,
    pub dash: Vec<u32>,
    pub axis: AxisId,
    /// Lower orders are drawn in front.
    pub order: u32,
    pub data: Vec<Option<f64>>,
    pub points: Vec<PointStyle>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    #[default]
    Projection,
    Growth,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub kind: ChartKind,
    pub labels: Vec<u32>,
    pub series: Vec<SeriesDescriptor>,
    pub primary_axis: AxisRange,
    pub secondary_axis: Option<AxisRange>,
    pub boundary: Option<usize>,
}

impl ChartModel {
    pub fn axis_range(&self, axis: AxisId) -> AxisRange {
        match axis {
            AxisId::Primary => self.primary_axis,
            AxisId::Secondary => self.secondary_axis.unwrap_or(self.primary_axis),
        }
    }

    /// Series sorted back to front.
    pub fn draw_sequence(&self) -> Vec<&SeriesDescriptor> {
        let mut series: Vec<&SeriesDescriptor> = self.series.iter().collect();
        series.sort_by(|a, b| b.order.cmp(&a.order));
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_serializes_as_css() {
        let color = Rgba::opaque(30, 136, 229).with_alpha(0.5);
        assert_eq!(
            serde_json::to_string(&color).unwrap(),
            "\"rgba(30, 136, 229, 0.5)\""
        );
    }

    #[test]
    fn axis_ids_use_chart_names() {
        assert_eq!(serde_json::to_string(&AxisId::Primary).unwrap(), "\"y\"");
        assert_eq!(serde_json::to_string(&AxisId::Secondary).unwrap(), "\"y1\"");
    }
}
