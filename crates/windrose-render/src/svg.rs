//! SVG output
//!
//! Arcs are drawn as annular-sector paths inside a group translated to the
//! canvas center. The legend is a column of 1px rectangles in the top-right
//! corner, one per legend entry.

use crate::diagram::{ArcSegment, Overlay, RoseDiagram};
use crate::renderer::DiagramRenderer;
use std::fmt::Write as _;
use windrose_core::{Error, Result, FULL_TURN};

/// Legend rectangle width in pixels
pub const LEGEND_BAR_WIDTH: f64 = 40.0;

/// Renderer producing a standalone SVG document
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    /// Legend x position as a fraction of the canvas width
    pub legend_x: f64,
    /// Legend top as a fraction of the canvas height
    pub legend_y: f64,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            legend_x: 0.9,
            legend_y: 0.05,
        }
    }
}

impl DiagramRenderer for SvgRenderer {
    type Output = String;

    fn render(&mut self, diagram: &RoseDiagram) -> Result<String> {
        self.write_document(diagram)
            .map_err(|e| Error::Other(anyhow::Error::new(e).context("formatting SVG document")))
    }
}

impl SvgRenderer {
    fn write_document(&self, diagram: &RoseDiagram) -> std::result::Result<String, std::fmt::Error> {
        let mut svg = String::new();
        let (width, height) = (diagram.width(), diagram.height());
        let (cx, cy) = diagram.center();

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;

        writeln!(svg, r#"  <g id="arcs" transform="translate({cx},{cy})">"#)?;
        for arc in diagram.arcs() {
            write_arc(&mut svg, arc)?;
        }
        writeln!(svg, "  </g>")?;

        if let Some(overlay) = diagram.overlay() {
            write_overlay(&mut svg, overlay)?;
        }

        writeln!(svg, r#"  <g id="legend">"#)?;
        let x = width * self.legend_x;
        let top = height * self.legend_y;
        for (i, color) in diagram.legend().iter().enumerate() {
            writeln!(
                svg,
                r#"    <rect x="{x}" y="{y}" width="{LEGEND_BAR_WIDTH}" height="1" fill="{color}"/>"#,
                y = top + i as f64
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

fn write_arc(svg: &mut String, arc: &ArcSegment) -> std::fmt::Result {
    if arc.span() >= FULL_TURN - 1e-9 {
        return writeln!(
            svg,
            r#"    <path d="{}" fill="{}" fill-rule="evenodd"/>"#,
            ring_path(arc.inner_radius, arc.outer_radius),
            arc.fill
        );
    }
    writeln!(svg, r#"    <path d="{}" fill="{}"/>"#, sector_path(arc), arc.fill)
}

fn write_overlay(svg: &mut String, overlay: &Overlay) -> std::fmt::Result {
    writeln!(
        svg,
        r#"  <image xlink:href="{}" x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}"/>"#,
        escape_xml(&overlay.href),
        overlay.x,
        overlay.y,
        overlay.size,
        overlay.size
    )
}

/// Path data of an annular sector, relative to the diagram center
pub fn sector_path(arc: &ArcSegment) -> String {
    let large_arc = u8::from(arc.span() > FULL_TURN / 2.0);
    let (ro, ri) = (arc.outer_radius, arc.inner_radius);
    let (x0, y0) = ArcSegment::point(arc.start_angle, ro);
    let (x1, y1) = ArcSegment::point(arc.end_angle, ro);
    let (x2, y2) = ArcSegment::point(arc.end_angle, ri);
    let (x3, y3) = ArcSegment::point(arc.start_angle, ri);

    format!(
        "M{x0:.3},{y0:.3}A{ro:.3},{ro:.3} 0 {large_arc} 1 {x1:.3},{y1:.3}L{x2:.3},{y2:.3}A{ri:.3},{ri:.3} 0 {large_arc} 0 {x3:.3},{y3:.3}Z"
    )
}

/// Path data of a full ring; needs `fill-rule="evenodd"`
pub fn ring_path(inner_radius: f64, outer_radius: f64) -> String {
    let (ro, ri) = (outer_radius, inner_radius);
    format!(
        "M0,{:.3}A{ro:.3},{ro:.3} 0 1 1 0,{ro:.3}A{ro:.3},{ro:.3} 0 1 1 0,{:.3}Z\
         M0,{:.3}A{ri:.3},{ri:.3} 0 1 0 0,{ri:.3}A{ri:.3},{ri:.3} 0 1 0 0,{:.3}Z",
        -ro, -ro, -ri, -ri
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

impl RoseDiagram {
    /// Render with the default [`SvgRenderer`]
    pub fn to_svg(&self) -> Result<String> {
        SvgRenderer::default().render(self)
    }
}
