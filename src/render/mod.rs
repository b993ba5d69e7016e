//! Terminal presentation: everything between a [`SceneView`](crate::SceneView)
//! and the escape codes on stdout.

pub mod canvas;
pub mod font;
pub mod scene;
pub mod viewport;

pub use canvas::{Canvas, Rgb};
pub use scene::paint;
pub use viewport::Viewport;
