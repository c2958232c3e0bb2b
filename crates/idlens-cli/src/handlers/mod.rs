pub mod credits;
pub mod key;
pub mod lookup;
pub mod menu;
pub mod render;
