//! Hand-off of add-events to the notification sender.

use crossbeam_channel::{unbounded, Receiver, SendError, Sender};

/// Receives the labels confirmed on a frame.
///
/// Called from the frame loop, so implementations must return promptly; the
/// actual delivery (HTTP post, retries) belongs on another thread.
pub trait NotificationSink {
    type Error;

    fn notify(&mut self, added: &[String]) -> Result<(), Self::Error>;
}

/// Forwards each non-empty batch of labels over an unbounded channel.
///
/// Sending never blocks, so a slow consumer cannot stall tracking.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<Vec<String>>,
}

impl ChannelSink {
    /// Create a sink together with the receiving end for the consumer thread.
    pub fn channel() -> (Self, Receiver<Vec<String>>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }
}

impl NotificationSink for ChannelSink {
    type Error = SendError<Vec<String>>;

    fn notify(&mut self, added: &[String]) -> Result<(), Self::Error> {
        self.sender.send(added.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_sink_delivers_batches() {
        let (mut sink, receiver) = ChannelSink::channel();
        sink.notify(&["milk".to_string(), "milk".to_string()]).unwrap();
        sink.notify(&["bread".to_string()]).unwrap();

        assert_eq!(receiver.recv().unwrap(), vec!["milk", "milk"]);
        assert_eq!(receiver.recv().unwrap(), vec!["bread"]);
    }

    #[test]
    fn test_channel_sink_reports_closed_receiver() {
        let (mut sink, receiver) = ChannelSink::channel();
        drop(receiver);
        assert!(sink.notify(&["milk".to_string()]).is_err());
    }
}
