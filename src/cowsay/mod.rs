//! Cowsay-style novelty endpoint backed by an external process.

pub mod handlers;
mod renderer;

pub use renderer::{CowsayRenderer, Renderer};

#[cfg(test)]
pub use renderer::MockRenderer;
