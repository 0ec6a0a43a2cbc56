pub mod color;
pub mod document;
pub mod sampler;
pub mod stroke;
pub mod svg;
pub mod text;
