use std::sync::mpsc::Sender;

use log::warn;

use crate::message::Message;

/// Outbound channel the controller sends messages through.
///
/// Sends are fire-and-forget; delivery problems are the port's concern.
pub trait Port {
    fn send(&mut self, message: Message);
}

impl Port for Sender<Message> {
    fn send(&mut self, message: Message) {
        if Sender::send(self, message).is_err() {
            warn!("port receiver dropped, discarding {}", message.kind());
        }
    }
}

impl Port for Vec<Message> {
    fn send(&mut self, message: Message) {
        self.push(message);
    }
}

impl<P: Port + ?Sized> Port for &mut P {
    fn send(&mut self, message: Message) {
        (**self).send(message);
    }
}
