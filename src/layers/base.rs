use crate::{core::viewport::Viewport, render::frame::Frame, tiles::picker::TilePicker, Result};

/// A visual layer of the viewer.
///
/// Layers are painted in ascending `z_index` order, so a higher index means
/// nearer the viewer. Teardown is `Drop`; none of the layers here hold
/// resources beyond memory.
pub trait Layer {
    fn name(&self) -> &str;

    fn z_index(&self) -> i32 {
        0
    }

    /// One-time setup; a failure here is fatal to startup.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Refreshes width/height-dependent state after a window resize.
    fn resize(&mut self, width: f64, height: f64) {
        let _ = (width, height);
    }

    /// Emits this layer's quads for the current frame. The picker has been
    /// recalculated for the viewport state the frame is drawn for.
    fn paint(&mut self, viewport: &Viewport, picker: &TilePicker, frame: &mut Frame);
}
