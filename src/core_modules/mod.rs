pub mod annotation;
pub mod background;
pub mod compositor;
pub mod geometry;
pub mod item;
pub mod mask;
pub mod roi;
pub mod roi_sampler;
pub mod utils;
