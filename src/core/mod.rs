pub mod kernel;
pub mod raster;
