//! The seam between the viewer core and the GPU plumbing.

pub mod frame;

pub use frame::{Frame, Quad, QuadSource};
