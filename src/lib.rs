#[macro_use]
extern crate lazy_static;

pub mod convolve;
pub mod core;
pub mod io;

pub use crate::convolve::{partition_rows, Convolver, RowRange};
pub use crate::core::kernel::{FilterKind, Kernel};
pub use crate::core::raster::Raster;
