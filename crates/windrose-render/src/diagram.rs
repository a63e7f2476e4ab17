//! Renderer-independent diagram layout
//!
//! A [`RoseDiagram`] is plain data: one colored arc per histogram bin, the
//! legend strip and an optional overlay square. Renderers draw it without
//! touching the histogram.

use crate::config::DiagramConfig;
use serde::Serialize;
use std::f64::consts::SQRT_2;
use tracing::debug;
use windrose_core::Result;
use windrose_histogram::{DirectionalHistogram, GradientOps};

/// One annular sector of the rose
///
/// Angles are in degrees, measured clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArcSegment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// `#rrggbb`
    pub fill: String,
}

impl ArcSegment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Offset of the point at `angle` and `radius` from the diagram center,
    /// with y growing downwards
    pub fn point(angle: f64, radius: f64) -> (f64, f64) {
        let rad = angle.to_radians();
        (radius * rad.sin(), -radius * rad.cos())
    }
}

/// Image placed in the square inscribed in the inner circle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlay {
    pub href: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Side of the square inscribed in a circle of `radius`
pub fn inscribed_square_side(radius: f64) -> f64 {
    radius * 2.0 / SQRT_2
}

/// Everything a renderer needs to draw a wind rose
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoseDiagram {
    width: f64,
    height: f64,
    arcs: Vec<ArcSegment>,
    legend: Vec<String>,
    overlay: Option<Overlay>,
}

impl RoseDiagram {
    /// Lay out `histogram` with the geometry and gradient of `config`
    ///
    /// Arcs follow the histogram's own bin width; `config.precision` is only
    /// used when the histogram is built from the config.
    pub fn new(histogram: &DirectionalHistogram, config: &DiagramConfig) -> Result<Self> {
        config.validate()?;
        let gradient = config.gradient();

        let colors = histogram.normalize_to_color(&gradient)?;
        let arcs = Self::arcs_from_colors(colors, histogram.precision(), config);
        let legend = gradient.legend_gradient(config.legend_steps)?;

        let overlay = config.overlay_image.as_ref().map(|href| {
            let size = inscribed_square_side(config.inner_radius);
            Overlay {
                href: href.clone(),
                x: config.width / 2.0 - size / 2.0,
                y: config.height / 2.0 - size / 2.0,
                size,
            }
        });

        debug!(
            "Laid out {} arcs and {} legend entries",
            arcs.len(),
            legend.len()
        );

        Ok(Self {
            width: config.width,
            height: config.height,
            arcs,
            legend,
            overlay,
        })
    }

    fn arcs_from_colors(colors: Vec<String>, precision: f64, config: &DiagramConfig) -> Vec<ArcSegment> {
        colors
            .into_iter()
            .enumerate()
            .map(|(i, fill)| ArcSegment {
                start_angle: i as f64 * precision,
                end_angle: (i + 1) as f64 * precision,
                inner_radius: config.inner_radius,
                outer_radius: config.outer_radius,
                fill,
            })
            .collect()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Arcs in angle order starting at 0 degrees
    pub fn arcs(&self) -> &[ArcSegment] {
        &self.arcs
    }

    pub fn legend(&self) -> &[String] {
        &self.legend
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use windrose_histogram::Sample;

    fn histogram(directions: &[f64], precision: f64) -> DirectionalHistogram {
        let samples: Vec<Sample> = directions.iter().map(|&d| Sample::new(d, 0.0)).collect();
        DirectionalHistogram::new(&samples, precision).unwrap()
    }

    #[test]
    fn test_arcs_cover_circle() {
        let hist = histogram(&[10.0, 100.0, 100.0], 90.0);
        let diagram = RoseDiagram::new(&hist, &DiagramConfig::default()).unwrap();

        let arcs = diagram.arcs();
        assert_eq!(arcs.len(), 4);
        assert_eq!(arcs[0].start_angle, 0.0);
        assert_eq!(arcs[3].end_angle, 360.0);
        assert!(arcs.windows(2).all(|w| w[0].end_angle == w[1].start_angle));
        assert!(arcs.iter().all(|a| a.inner_radius == 100.0 && a.outer_radius == 200.0));
        assert_eq!(arcs[1].fill, "#f20c0c"); // Busiest bin gets hue 0
    }

    #[test]
    fn test_legend_and_overlay() {
        let hist = histogram(&[], 5.0);
        let config = DiagramConfig::default().with_overlay_image("./res/head.png");
        let diagram = RoseDiagram::new(&hist, &config).unwrap();

        assert_eq!(diagram.legend().len(), 100);
        assert_eq!(diagram.arcs().len(), 72);

        let overlay = diagram.overlay().unwrap();
        assert_relative_eq!(overlay.size, 100.0 * SQRT_2, epsilon = 1e-9);
        assert_relative_eq!(overlay.x, 350.0 - overlay.size / 2.0, epsilon = 1e-9);
        assert_eq!(overlay.x, overlay.y);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let hist = histogram(&[1.0], 90.0);
        let config = DiagramConfig::default().with_radii(50.0, 10.0);
        assert!(RoseDiagram::new(&hist, &config).is_err());
    }

    #[test]
    fn test_point() {
        let (x, y) = ArcSegment::point(0.0, 10.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(y, -10.0);

        let (x, y) = ArcSegment::point(90.0, 10.0);
        assert_relative_eq!(x, 10.0);
        assert_relative_eq!(y, 0.0, epsilon = 1e-12);
    }
}
