// Hypd games backend: application services and the HTTP surface.

pub mod application;
pub mod presentation;
