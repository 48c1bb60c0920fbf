//! Quadrature decoding for a mechanical rotary encoder with detents.
//!
//! A full click walks the contacts through 00 10 11 01 00 (clockwise) or
//! 00 01 11 10 00 (anticlockwise). Cheap encoders bounce and drop edges, so
//! the state machine tolerates repeated readings and skipped steps while
//! still reporting exactly one event per completed click.

use crate::event::Event;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Start,
    One,
    Two,
    Three,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Direction {
    Clockwise,
    Anticlockwise,
}

impl Direction {
    fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::Anticlockwise,
            Direction::Anticlockwise => Direction::Clockwise,
        }
    }

    fn event(self) -> Event {
        match self {
            Direction::Clockwise => Event::Clockwise,
            Direction::Anticlockwise => Event::Anticlockwise,
        }
    }
}

/// Tracks one encoder. Feed it every edge on either contact via
/// [`on_sample`](QuadratureDecoder::on_sample); it invokes the callback with
/// at most one [`Event`] per sample.
///
/// There is no locking in here. When samples arrive from multiple interrupt
/// contexts, serialize the calls (a `Mutex` around the decoder, or a single
/// event loop thread that owns it).
pub struct QuadratureDecoder<F: FnMut(Event)> {
    state: State,
    // Set on leaving Start, held until the next return to Start.
    direction: Option<Direction>,
    callback: F,
}

impl<F: FnMut(Event)> QuadratureDecoder<F> {
    pub fn new(callback: F) -> Self {
        Self {
            state: State::Start,
            direction: None,
            callback,
        }
    }

    /// True when the encoder sits at a detent (both contacts open).
    pub fn is_at_rest(&self) -> bool {
        self.state == State::Start
    }

    /// Consume one reading of the A/B contacts.
    ///
    /// Every input pair is handled in every state; unrecognized readings are
    /// indistinguishable from contact bounce and ignored.
    pub fn on_sample(&mut self, a: bool, b: bool) {
        let direction = match self.state {
            State::Start => {
                match (a, b) {
                    (false, true) => {
                        self.state = State::One;
                        self.direction = Some(Direction::Anticlockwise);
                    }
                    (true, false) => {
                        self.state = State::One;
                        self.direction = Some(Direction::Clockwise);
                    }
                    // Repeated rest reading, or both contacts high straight
                    // from rest: no direction can be inferred.
                    _ => {}
                }
                return;
            }
            _ => match self.direction {
                Some(direction) => direction,
                None => return,
            },
        };

        // Mirror the reading for anticlockwise rotation so one transition
        // table serves both senses.
        let symbol = match direction {
            Direction::Clockwise => pack(a, b),
            Direction::Anticlockwise => pack(b, a),
        };

        match (self.state, symbol) {
            // Normal progress: 10 11 01, then 00 closes the click.
            (State::One, 0b11) => self.state = State::Two,
            (State::Two, 0b01) => self.state = State::Three,
            (State::Three, 0b00) => {
                self.state = State::Start;
                self.emit(direction);
            }

            // Bounced straight back to rest before the click committed.
            (State::One, 0b00) => self.state = State::Start,

            // A dropped edge: jump over the missed state, still one event.
            (State::One, 0b01) => self.state = State::Three,
            (State::Two, 0b00) => {
                self.state = State::Start;
                self.emit(direction);
            }
            (State::Three, 0b10) => {
                self.state = State::One;
                self.emit(direction);
            }

            // The contacts stepped backwards: the knob turned the other way.
            (State::Two, 0b10) => {
                self.state = State::One;
                self.emit(direction.reversed());
            }
            (State::Three, 0b11) => {
                self.state = State::Two;
                self.emit(direction.reversed());
            }

            // Repeated reading, i.e. bounce.
            _ => {}
        }

        if self.state == State::Start {
            self.direction = None;
        }
    }

    /// Map a button level to an event. The button shorts the line to ground,
    /// so low means pressed.
    pub fn on_button_level(&mut self, level: bool) {
        let event = if level { Event::Released } else { Event::Pressed };
        (self.callback)(event);
    }

    fn emit(&mut self, direction: Direction) {
        (self.callback)(direction.event());
    }
}

fn pack(a: bool, b: bool) -> u8 {
    (a as u8) << 1 | b as u8
}
