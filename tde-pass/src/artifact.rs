//! Display artifacts emitted by a render pass.
//!
//! A pass produces an ordered list of artifacts; the hosting app shows
//! them in exactly that order. Tables carry a frame for the shared
//! table renderer, charts carry a flat point list plus precomputed
//! trend segments that serialize to the JSON payload the D3 renderer
//! consumes.

use anyhow::bail;
use serde::Serialize;
use tde_frame::{linear_fit, DataFrame};

/// One display artifact, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifact {
    /// A block of markdown prose (headings and paragraphs).
    Markdown(String),
    Table(TableArtifact),
    Chart(ChartArtifact),
}

impl Artifact {
    pub fn markdown(text: &str) -> Self {
        Artifact::Markdown(text.to_string())
    }
}

/// A rendered table: an optional caption plus the frame to display.
#[derive(Debug, Clone, PartialEq)]
pub struct TableArtifact {
    pub title: Option<String>,
    pub frame: DataFrame,
}

impl TableArtifact {
    pub fn new(frame: DataFrame) -> Self {
        Self { title: None, frame }
    }

    pub fn titled(title: &str, frame: DataFrame) -> Self {
        Self {
            title: Some(title.to_string()),
            frame,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    Line,
}

/// One plotted observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
}

/// A fitted trend line drawn across one (facet, hue) group's x range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facet: Option<String>,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// Chart channel configuration for [`ChartArtifact::build`].
#[derive(Debug, Clone, Copy)]
pub struct ChartSpec<'a> {
    pub x: &'a str,
    pub y: &'a str,
    /// Categorical column used for point color, if any.
    pub hue: Option<&'a str>,
    /// Categorical column used for small-multiple facets, if any.
    pub facet: Option<&'a str>,
    /// Fit and draw a least-squares line per (facet, hue) group.
    pub trend: bool,
    pub kind: ChartKind,
}

impl<'a> ChartSpec<'a> {
    pub fn scatter(x: &'a str, y: &'a str) -> Self {
        Self {
            x,
            y,
            hue: None,
            facet: None,
            trend: false,
            kind: ChartKind::Scatter,
        }
    }

    pub fn line(x: &'a str, y: &'a str) -> Self {
        Self {
            kind: ChartKind::Line,
            ..Self::scatter(x, y)
        }
    }

    pub fn with_hue(self, hue: &'a str) -> Self {
        Self {
            hue: Some(hue),
            ..self
        }
    }

    pub fn with_facet(self, facet: &'a str) -> Self {
        Self {
            facet: Some(facet),
            ..self
        }
    }

    pub fn with_trend(self) -> Self {
        Self {
            trend: true,
            ..self
        }
    }
}

/// A rendered chart, fully resolved to plottable values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArtifact {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<PlotPoint>,
    pub trends: Vec<TrendSegment>,
    pub colored: bool,
    pub faceted: bool,
}

impl ChartArtifact {
    /// Resolve a chart spec against a frame.
    ///
    /// Rows missing any required channel (x, y, hue, or facet value)
    /// are dropped. Line charts sort points by x so the path is drawn
    /// left to right regardless of row order.
    pub fn build(frame: &DataFrame, title: &str, spec: ChartSpec) -> anyhow::Result<Self> {
        let xs = frame.numeric_values(spec.x)?;
        let ys = frame.numeric_values(spec.y)?;
        let hues = spec
            .hue
            .map(|h| frame.categorical_values(h))
            .transpose()?;
        let facets = spec
            .facet
            .map(|f| frame.categorical_values(f))
            .transpose()?;

        let mut points = Vec::new();
        for row in 0..frame.n_rows() {
            let (Some(x), Some(y)) = (xs[row], ys[row]) else {
                continue;
            };
            let hue = match hues {
                Some(cells) => match &cells[row] {
                    Some(v) => Some(v.clone()),
                    None => continue,
                },
                None => None,
            };
            let facet = match facets {
                Some(cells) => match &cells[row] {
                    Some(v) => Some(v.clone()),
                    None => continue,
                },
                None => None,
            };
            points.push(PlotPoint { x, y, hue, facet });
        }
        if points.is_empty() {
            bail!(
                "chart '{}' has no plottable rows for x='{}', y='{}'",
                title,
                spec.x,
                spec.y
            );
        }

        if spec.kind == ChartKind::Line {
            points.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
        }

        let trends = if spec.trend {
            fit_trends(&points)
        } else {
            Vec::new()
        };

        Ok(Self {
            title: title.to_string(),
            kind: spec.kind,
            x_label: spec.x.to_string(),
            y_label: spec.y.to_string(),
            points,
            trends,
            colored: spec.hue.is_some(),
            faceted: spec.facet.is_some(),
        })
    }

    /// The JSON payload handed to the D3 renderer.
    pub fn payload_json(&self) -> String {
        serde_json::json!({
            "title": &self.title,
            "kind": self.kind,
            "xLabel": &self.x_label,
            "yLabel": &self.y_label,
            "colored": self.colored,
            "faceted": self.faceted,
            "points": &self.points,
            "trends": &self.trends,
        })
        .to_string()
    }
}

/// One least-squares segment per (facet, hue) group, groups in
/// first-appearance order.
fn fit_trends(points: &[PlotPoint]) -> Vec<TrendSegment> {
    let mut groups: Vec<(Option<String>, Option<String>)> = Vec::new();
    for p in points {
        let key = (p.facet.clone(), p.hue.clone());
        if !groups.contains(&key) {
            groups.push(key);
        }
    }

    let mut trends = Vec::new();
    for (facet, hue) in groups {
        let pairs: Vec<(f64, f64)> = points
            .iter()
            .filter(|p| p.facet == facet && p.hue == hue)
            .map(|p| (p.x, p.y))
            .collect();
        let Some((slope, intercept)) = linear_fit(&pairs) else {
            continue;
        };
        let x0 = pairs.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let x1 = pairs.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
        trends.push(TrendSegment {
            hue,
            facet,
            x0,
            y0: slope * x0 + intercept,
            x1,
            y1: slope * x1 + intercept,
        });
    }
    trends
}
