use std::io::{BufRead, Write};
use std::sync::mpsc::{self, Receiver};

use log::info;
use serde::Serialize;

use crate::config::InitialState;
use crate::controller::Controller;
use crate::error::Error;
use crate::message::Message;

/// One outbound message tagged with the port it left through.
#[derive(Debug, Serialize)]
struct Outbound<'a> {
    port: &'static str,
    message: &'a Message,
}

/// Drives a controller from JSON-lines events on `input`.
///
/// Each outbound message is written to `output` as one JSON line, display
/// traffic first, then food, then score. Processing stops at the first
/// malformed line or unexpected event.
pub fn run<R: BufRead, W: Write>(
    initial: InitialState,
    input: R,
    mut output: W,
) -> Result<u64, Error> {
    let (display_tx, display_rx) = mpsc::channel();
    let (food_tx, food_rx) = mpsc::channel();
    let (score_tx, score_rx) = mpsc::channel();
    let mut controller = Controller::from_initial_state(display_tx, food_tx, score_tx, initial);

    let mut processed = 0;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: Message = serde_json::from_str(line)?;
        controller.receive(event)?;
        processed += 1;

        forward(&mut output, "display", &display_rx)?;
        forward(&mut output, "food", &food_rx)?;
        forward(&mut output, "score", &score_rx)?;
    }

    output.flush()?;
    info!("replay finished after {processed} events");
    Ok(processed)
}

fn forward<W: Write>(
    output: &mut W,
    port: &'static str,
    receiver: &Receiver<Message>,
) -> Result<(), Error> {
    for message in receiver.try_iter() {
        serde_json::to_writer(&mut *output, &Outbound {
            port,
            message: &message,
        })?;
        output.write_all(b"\n")?;
    }
    Ok(())
}
