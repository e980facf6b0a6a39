pub mod focus;
pub mod time;
