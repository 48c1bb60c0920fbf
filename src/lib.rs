//! Decode the two quadrature contacts and the push button of a mechanical
//! rotary encoder into clean rotation and button events.
//!
//! Wiring the pins up (exports, edge detection, interrupt callbacks) is the
//! caller's job; this crate only consumes the sampled levels.

pub mod decoder;
pub mod event;
pub mod model;
pub mod trace;

pub use decoder::QuadratureDecoder;
pub use event::Event;
pub use model::{Model, Settings};
