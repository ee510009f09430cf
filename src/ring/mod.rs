pub mod buffer;
pub mod read;
pub mod ring_error;
pub mod write;

pub use buffer::{ReadMode, RingBuffer, WriteMode};
pub use ring_error::*;
