pub mod app_layers;
pub mod openapi;
pub mod resources;
