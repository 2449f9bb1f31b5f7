// Memory Album Library
// Anniversary countdown, cover colour sampling and album themes

pub mod models;
pub mod services;
pub mod utils;

pub use models::color::ColorSample;
pub use models::countdown::{CountdownError, CountdownStatus, TimeRemaining};
pub use services::color::estimate_dominant_color;
pub use services::countdown::compute_time_remaining;
