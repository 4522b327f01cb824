use crate::{
    core::viewport::Viewport, layers::base::Layer, prelude::HashMap, render::frame::Frame,
    tiles::picker::TilePicker, Result,
};

/// Holds the layers and paints them back to front.
pub struct LayerStack {
    layers: HashMap<String, Box<dyn Layer>>,
    /// Layer names sorted by ascending z-index; this is the paint order.
    paint_order: Vec<String>,
}

impl LayerStack {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            paint_order: Vec::new(),
        }
    }

    /// Adds a layer, initializing it and slotting it into the paint order
    /// by z-index. Initialization failure is propagated and the layer is
    /// not added.
    pub fn add_layer(&mut self, mut layer: Box<dyn Layer>) -> Result<()> {
        layer.init()?;

        let name = layer.name().to_string();
        let z_index = layer.z_index();

        self.layers.insert(name.clone(), layer);

        let insert_pos = self
            .paint_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.paint_order.len());
        self.paint_order.insert(insert_pos, name);
        Ok(())
    }

    pub fn remove_layer(&mut self, name: &str) -> Option<Box<dyn Layer>> {
        self.paint_order.retain(|id| id != name);
        self.layers.remove(name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names in paint order (back to front).
    pub fn paint_order(&self) -> &[String] {
        &self.paint_order
    }

    /// Propagates a window resize to every layer.
    pub fn resize_all(&mut self, width: f64, height: f64) {
        for layer in self.layers.values_mut() {
            layer.resize(width, height);
        }
    }

    /// Paints all layers into the frame, back to front.
    pub fn paint_all(&mut self, viewport: &Viewport, picker: &TilePicker, frame: &mut Frame) {
        for name in &self.paint_order {
            if let Some(layer) = self.layers.get_mut(name) {
                layer.paint(viewport, picker, frame);
            }
        }
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: &'static str,
        z: i32,
    }

    impl Layer for Probe {
        fn name(&self) -> &str {
            self.name
        }
        fn z_index(&self) -> i32 {
            self.z
        }
        fn paint(&mut self, _: &Viewport, _: &TilePicker, _: &mut Frame) {}
    }

    #[test]
    fn test_paint_order_sorted_by_z_index() {
        let mut stack = LayerStack::new();
        stack.add_layer(Box::new(Probe { name: "cursor", z: 40 })).unwrap();
        stack.add_layer(Box::new(Probe { name: "background", z: 0 })).unwrap();
        stack.add_layer(Box::new(Probe { name: "tiles", z: 20 })).unwrap();

        assert_eq!(stack.paint_order(), ["background", "tiles", "cursor"]);
    }

    #[test]
    fn test_remove_layer() {
        let mut stack = LayerStack::new();
        stack.add_layer(Box::new(Probe { name: "a", z: 1 })).unwrap();
        stack.add_layer(Box::new(Probe { name: "b", z: 2 })).unwrap();

        assert!(stack.remove_layer("a").is_some());
        assert!(stack.remove_layer("a").is_none());
        assert_eq!(stack.paint_order(), ["b"]);
        assert_eq!(stack.len(), 1);
    }
}
