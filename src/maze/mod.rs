pub mod ascii_utils;
pub mod cell;
pub mod codec;
pub mod direction;
pub mod edges;
pub mod error;
pub mod generator;
pub mod map;
pub mod smoothing;
