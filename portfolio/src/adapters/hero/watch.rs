use crate::ports::hero::{HeadlineFrame, HeadlinePort};
use tokio::sync::watch;

/// Publishes frames into a `watch` channel; subscribers always see the latest one.
pub struct WatchHeadline {
    tx: watch::Sender<Option<HeadlineFrame>>,
}

impl WatchHeadline {
    pub fn new() -> (Self, watch::Receiver<Option<HeadlineFrame>>) {
        let (tx, rx) = watch::channel(None);
        (Self { tx }, rx)
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<HeadlineFrame>> {
        self.tx.subscribe()
    }
}

impl HeadlinePort for WatchHeadline {
    fn publish(&self, frame: &HeadlineFrame) {
        self.tx.send_replace(Some(frame.clone()));
    }
}
