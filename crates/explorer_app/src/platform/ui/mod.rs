pub mod constants;
pub mod page;
pub mod render;
