pub mod placeholder;
pub mod tracker;
