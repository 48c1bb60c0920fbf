use serde::{Deserialize, Serialize};

/// A single decoded observation: one detent of rotation, or a button edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Clockwise,
    Anticlockwise,
    Pressed,
    Released,
}
