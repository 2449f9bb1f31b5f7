// Module exports for models

pub mod color;
pub mod countdown;
pub mod settings;
pub mod theme;
