use anyhow::{Context, Result};
use knurl::trace::{parse_trace, Step};
use knurl::{Model, QuadratureDecoder, Settings};
use log::{debug, info};
use std::sync::mpsc::channel;
use std::{env, fs};

// Replay a recorded pin trace through the decoder and fold the events into
// the model, as the GPIO event loop would on the real device.
fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = env::args().nth(1).context("usage: knurl <trace-file>")?;
    let settings = match env::var("KNURL_SETTINGS") {
        Ok(settings_path) => Settings::load_from_path(&settings_path)
            .with_context(|| format!("could not read settings from {}", settings_path))?,
        Err(_) => Settings::default(),
    };

    let contents =
        fs::read_to_string(&path).with_context(|| format!("could not read trace {}", path))?;
    let steps = parse_trace(&contents)?;
    info!("replaying {} steps from {}", steps.len(), path);

    let (tx, rx) = channel();
    let mut decoder = QuadratureDecoder::new(move |event| {
        // The sink runs synchronously inside on_sample; hand the event off
        // instead of doing consumer work in it.
        let _ = tx.send(event);
    });

    let mut model = Model::new(settings);
    for step in steps {
        match step {
            Step::Pins(a, b) => decoder.on_sample(a, b),
            Step::Button(level) => decoder.on_button_level(level),
        }
        for event in rx.try_iter() {
            info!("event: {:?}", event);
            model.apply(event);
            debug!("value: {}", model.value);
        }
    }

    if let Ok(status_path) = env::var("KNURL_STATUS") {
        model
            .write_to_path(&status_path)
            .with_context(|| format!("could not write status to {}", status_path))?;
    }
    println!("{}", serde_json::to_string(&model)?);
    Ok(())
}
