pub mod circular_progress;
pub mod nav_bar;
