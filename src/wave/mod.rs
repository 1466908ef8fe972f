pub(crate) mod attributes;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod shader;
