// twqrp/src/payload/mod.rs
//! Payload builder, field validation and rendering.

pub mod builder;
mod render;
mod validate;

pub use builder::PayloadBuilder;
