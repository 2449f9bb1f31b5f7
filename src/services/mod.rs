// Service module exports

pub mod color;
pub mod countdown;
pub mod settings;
