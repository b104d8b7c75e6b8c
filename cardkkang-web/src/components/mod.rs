pub mod button;
pub mod counter_panel;
pub mod header;
pub mod luck_bar;
pub mod pack_grid;
pub mod reel_strip;
