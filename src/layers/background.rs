use crate::{
    core::{geo::Point, viewport::Viewport},
    layers::base::Layer,
    render::frame::{Frame, Quad, QuadSource},
    tiles::picker::TilePicker,
    Result,
};
use once_cell::sync::Lazy;

/// Edge length of the procedural backdrop pattern in pixels.
const PATTERN_SIZE: u32 = 16;

/// Two-tone gray checkerboard, RGB, shared by the backdrop and the blank
/// tile placeholder. Built once on first use.
static PATTERN: Lazy<Vec<u8>> = Lazy::new(|| {
    let mut rgb = Vec::with_capacity((PATTERN_SIZE * PATTERN_SIZE * 3) as usize);
    for y in 0..PATTERN_SIZE {
        for x in 0..PATTERN_SIZE {
            let shade = if (x / 8 + y / 8) % 2 == 0 { 0x66 } else { 0x77 };
            rgb.extend_from_slice(&[shade, shade, shade]);
        }
    }
    rgb
});

/// The pattern the backend uploads for the backdrop and placeholder quads,
/// tiled with wrap-around addressing.
pub fn backdrop_pattern() -> &'static [u8] {
    &PATTERN
}

pub fn backdrop_pattern_size() -> u32 {
    PATTERN_SIZE
}

/// The screen-filling backdrop. Painted first, infinitely far away; its
/// quad lives in clip space and its texture coordinates scale with the
/// screen so the pattern stays pixel-sized under resize.
pub struct BackgroundLayer {
    texcoords: [Point; 4],
}

impl BackgroundLayer {
    pub fn new() -> Self {
        Self {
            texcoords: Quad::unit_texcoords(),
        }
    }

    fn texcoords_for(width: f64, height: f64) -> [Point; 4] {
        let wd = width / PATTERN_SIZE as f64;
        let ht = height / PATTERN_SIZE as f64;
        [
            Point::new(0.0, 0.0),
            Point::new(wd, 0.0),
            Point::new(wd, ht),
            Point::new(0.0, ht),
        ]
    }
}

impl Layer for BackgroundLayer {
    fn name(&self) -> &str {
        "background"
    }

    fn z_index(&self) -> i32 {
        0
    }

    fn init(&mut self) -> Result<()> {
        // Force the pattern so a construction problem surfaces at startup
        // rather than mid-frame.
        let pattern = backdrop_pattern();
        if pattern.len() != (PATTERN_SIZE * PATTERN_SIZE * 3) as usize {
            return Err(crate::ViewerError::Layer(
                "backdrop pattern has the wrong size".to_string(),
            )
            .into());
        }
        Ok(())
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.texcoords = Self::texcoords_for(width, height);
    }

    fn paint(&mut self, _viewport: &Viewport, _picker: &TilePicker, frame: &mut Frame) {
        // Clip-space quad covering the whole screen.
        frame.push(Quad::flat(
            QuadSource::Background,
            Point::new(-1.0, -1.0),
            Point::new(1.0, 1.0),
            self.texcoords,
        ));
    }
}

impl Default for BackgroundLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ViewerOptions;

    #[test]
    fn test_texcoords_track_screen_size() {
        let mut layer = BackgroundLayer::new();
        layer.resize(800.0, 600.0);
        assert_eq!(layer.texcoords[1].x, 800.0 / 16.0);
        assert_eq!(layer.texcoords[2].y, 600.0 / 16.0);
        assert_eq!(layer.texcoords[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn test_paints_one_clip_space_quad() {
        let options = ViewerOptions::default();
        let viewport = Viewport::new(&options).unwrap();
        let mut picker = TilePicker::new();
        picker.recalc(&viewport);

        let mut layer = BackgroundLayer::new();
        layer.init().unwrap();
        let mut frame = Frame::new();
        layer.paint(&viewport, &picker, &mut frame);

        assert_eq!(frame.len(), 1);
        assert_eq!(frame.quads()[0].source, QuadSource::Background);
    }

    #[test]
    fn test_pattern_dimensions() {
        assert_eq!(
            backdrop_pattern().len(),
            (backdrop_pattern_size() * backdrop_pattern_size() * 3) as usize
        );
    }
}
