use crate::{
    core::{config::ViewerOptions, viewport::Viewport},
    input::{events::InputEvent, handler::InputHandler},
    layers::{
        background::BackgroundLayer, base::Layer, blanktile::BlankTileLayer, cursor::CursorLayer,
        manager::LayerStack, osm::OsmLayer, overview::OverviewLayer,
    },
    render::frame::Frame,
    tiles::picker::TilePicker,
    Result,
};

/// The viewer: one viewport over one world, the layer stack, and the
/// per-frame sequence tying them together.
///
/// The frame contract is causal and single threaded: input events are
/// applied to completion, then the autoscroll tick, then `render` — which
/// recalculates the picker for the final viewport state before any layer
/// iterates it.
pub struct Viewer {
    viewport: Viewport,
    picker: TilePicker,
    layers: LayerStack,
    input: InputHandler,
    frame: Frame,
}

impl Viewer {
    /// Builds a viewer with the standard layer stack. Fails if the options
    /// are invalid or a layer cannot initialize.
    pub fn new(options: &ViewerOptions) -> Result<Self> {
        let viewport = Viewport::new(options)?;

        let mut layers = LayerStack::new();
        layers.add_layer(Box::new(BackgroundLayer::new()))?;
        layers.add_layer(Box::new(BlankTileLayer::new()))?;
        layers.add_layer(Box::new(OsmLayer::new()))?;
        layers.add_layer(Box::new(OverviewLayer::new()))?;
        layers.add_layer(Box::new(CursorLayer::new()))?;
        layers.resize_all(options.screen.x, options.screen.y);

        Ok(Self {
            viewport,
            picker: TilePicker::new(),
            layers,
            input: InputHandler::new(),
            frame: Frame::new(),
        })
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn input(&self) -> &InputHandler {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    /// Adds a custom layer on top of (or between, per its z-index) the
    /// standard stack.
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    /// Applies one input event. Resizes additionally fan out to the layers.
    /// Returns whether viewer state changed.
    pub fn handle_event(&mut self, event: InputEvent, now: i64) -> bool {
        let resize = match &event {
            InputEvent::Resize { size } => Some(*size),
            _ => None,
        };
        let changed = self.input.handle_event(event, &mut self.viewport, now);
        if let Some(size) = resize {
            self.layers.resize_all(size.x, size.y);
        }
        changed
    }

    /// Advances the kinetic scroll; returns whether the viewport moved.
    pub fn tick(&mut self, now: i64) -> bool {
        self.viewport.autoscroll_tick(now)
    }

    /// Draws one frame: recalculates the picker for the current state, then
    /// paints the stack back to front (background → tiles → overlays →
    /// cursor). Returns the finished draw list.
    pub fn render(&mut self) -> &Frame {
        self.picker.recalc(&self.viewport);
        self.frame.clear();
        self.layers
            .paint_all(&self.viewport, &self.picker, &mut self.frame);
        &self.frame
    }
}
