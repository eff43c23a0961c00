pub mod analyze;
pub mod audio;
pub mod speak;
