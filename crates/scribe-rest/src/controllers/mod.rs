//! REST API controllers.

pub mod article_controller;
pub mod health_controller;
pub mod maintenance_controller;
pub mod tag_controller;

pub use health_controller::*;
