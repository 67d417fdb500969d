//! Push-based fan-out of collection snapshots.
//!
//! Every subscriber owns its own unbounded channel. Publishing walks the
//! subscribers in registration order and sends synchronously, so a snapshot is
//! queued for all live subscribers before the mutating call returns. Nothing is
//! replayed: a subscriber only sees snapshots published after it subscribed.

use futures::Stream;
use log::debug;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct ChangeFeed<T> {
    next_id: u64,
    subscribers: Vec<(u64, UnboundedSender<T>)>,
}

impl<T: Clone> ChangeFeed<T> {
    pub fn new() -> Self {
        ChangeFeed {
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> ChangeStream<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, tx));
        debug!("Subscriber {} registered", id);
        ChangeStream { id, rx }
    }

    /// Sends `value` to every live subscriber and prunes the ones whose
    /// stream has been dropped.
    pub fn publish(&mut self, value: &T) {
        self.subscribers.retain(|(id, tx)| {
            if tx.send(value.clone()).is_err() {
                debug!("Subscriber {} is gone, removing it", id);
                return false;
            }
            true
        });
    }

    /// Number of subscribers whose stream has not been dropped yet.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.iter().filter(|(_, tx)| !tx.is_closed()).count()
    }
}

impl<T: Clone> Default for ChangeFeed<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumer handle returned by [`ChangeFeed::subscribe`]. Dropping it unsubscribes.
pub struct ChangeStream<T> {
    id: u64,
    rx: UnboundedReceiver<T>,
}

impl<T> ChangeStream<T> {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Takes the next pending snapshot without waiting.
    pub fn try_next(&mut self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Drains every pending snapshot, oldest first.
    pub fn drain(&mut self) -> Vec<T> {
        std::iter::from_fn(|| self.try_next()).collect()
    }

    pub async fn next_snapshot(&mut self) -> Option<T> {
        self.rx.recv().await
    }
}

impl<T> Stream for ChangeStream<T> {
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
