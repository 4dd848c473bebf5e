#![allow(dead_code, non_snake_case, non_upper_case_globals)]

pub mod utils;
pub mod bloch;
pub mod cases;

#[doc(hidden)]
pub use ndarray_npy;
