//! Chart Geometry
//!
//! SVG coordinates for the line and donut charts. Both charts draw in a
//! 100x100 view box.

use std::f64::consts::PI;

/// Bottom edge of the view box
pub const BASELINE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub points: Vec<ChartPoint>,
}

/// Spread `samples` evenly over x in [0, 100]; y is inverted against `max`.
/// Samples are clamped to [0, max].
pub fn line_chart(samples: &[f64], max: f64) -> LineChart {
    let last = samples.len().saturating_sub(1);
    let points = samples
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if last == 0 { 0.0 } else { i as f64 / last as f64 * 100.0 };
            let y = if max > 0.0 {
                100.0 - value.clamp(0.0, max) / max * 100.0
            } else {
                BASELINE
            };
            ChartPoint { x, y }
        })
        .collect();
    LineChart { points }
}

impl LineChart {
    /// `points` attribute for `<polyline>`: `"x,y x,y ..."`
    pub fn polyline(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `points` attribute for the filled `<polygon>`: the line closed down to
    /// the baseline at both edges
    pub fn area(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }
        format!("0,{} {} 100,{}", BASELINE, self.polyline(), BASELINE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArc {
    pub share: f64,
    /// `stroke-dashoffset`
    pub dash_offset: f64,
    /// Start angle in degrees; -90 is twelve o'clock
    pub rotation: f64,
}

impl DonutArc {
    /// SVG `transform` rotating around the center of the view box
    pub fn transform(&self) -> String {
        format!("rotate({} 50 50)", self.rotation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Donut {
    pub radius: f64,
    pub circumference: f64,
    pub total: f64,
    pub arcs: Vec<DonutArc>,
}

/// Arcs drawn one after another around the ring: each starts at the
/// cumulative angle of the arcs before it.
pub fn donut_chart(shares: &[f64], radius: f64) -> Donut {
    let circumference = 2.0 * PI * radius;
    let total: f64 = shares.iter().map(|s| s.max(0.0)).sum();
    let mut before = 0.0;
    let arcs = shares
        .iter()
        .map(|&share| {
            let share = share.max(0.0);
            let arc = if total > 0.0 {
                DonutArc {
                    share,
                    dash_offset: circumference * (1.0 - share / total),
                    rotation: before / total * 360.0 - 90.0,
                }
            } else {
                DonutArc { share, dash_offset: circumference, rotation: -90.0 }
            };
            before += share;
            arc
        })
        .collect();
    Donut { radius, circumference, total, arcs }
}

impl Donut {
    /// Whole-number percentage of each arc, for the legend
    pub fn percentages(&self) -> Vec<u32> {
        self.arcs
            .iter()
            .map(|arc| if self.total > 0.0 { (arc.share / self.total * 100.0).round() as u32 } else { 0 })
            .collect()
    }
}
