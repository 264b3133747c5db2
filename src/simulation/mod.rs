pub mod gbm;
pub mod params;
pub mod random;
