//! The in-process consumer of decoded events: a bounded value adjusted by
//! rotation plus a direction flag toggled by the button. What the value
//! drives (a display, a motor register) is up to the surrounding program.

use crate::event::Event;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Settings {
    pub fn load_from_path(path: &str) -> Result<Settings> {
        let f = File::open(path)?;
        let reader = BufReader::new(f);
        let settings = serde_json::from_reader(reader)?;
        Ok(settings)
    }
}

impl Default for Settings {
    // 0..=126 is the speed range of the motor controller this was built for.
    fn default() -> Settings {
        Settings {
            min: 0,
            max: 126,
            step: 1,
        }
    }
}

#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Model {
    pub value: i32,
    pub forward: bool,
    settings: Settings,
}

impl Model {
    pub fn new(settings: Settings) -> Model {
        Model {
            value: settings.min,
            forward: true,
            settings,
        }
    }

    /// Fold one event into the model. Rotation nudges the value and clamps
    /// at the bounds; pressing the button reverses direction. Release is
    /// deliberately a no-op so holding the button does not flip twice.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Clockwise => {
                self.value = (self.value + self.settings.step).min(self.settings.max)
            }
            Event::Anticlockwise => {
                self.value = (self.value - self.settings.step).max(self.settings.min)
            }
            Event::Pressed => self.forward = !self.forward,
            Event::Released => {}
        }
    }

    pub fn write_to_path(self, path: &str) -> Result<()> {
        let f = File::create(path)?;
        serde_json::to_writer(&f, &self)?;
        Ok(())
    }
}
