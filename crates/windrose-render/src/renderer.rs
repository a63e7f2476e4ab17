//! Drawing interface
//!
//! Renderers receive a finished [`RoseDiagram`] and never see histogram
//! internals, so any drawing backend can be plugged in.

use crate::diagram::RoseDiagram;
use windrose_core::Result;

/// Trait for drawing a laid-out wind rose
pub trait DiagramRenderer {
    /// What the renderer produces (a document, a buffer, nothing)
    type Output;

    /// Draw the arcs, the overlay and the legend of `diagram`
    fn render(&mut self, diagram: &RoseDiagram) -> Result<Self::Output>;
}

/// Renderer that draws nothing
///
/// Used to exercise layout without producing output.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl DiagramRenderer for NullRenderer {
    type Output = ();

    fn render(&mut self, _diagram: &RoseDiagram) -> Result<()> {
        Ok(())
    }
}
