use std::fmt::{self, Debug};

use futures::stream::{Stream, StreamExt};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A locally mirrored D-Bus property that can be watched for changes.
///
/// Monitors write into it as the daemon reports new values; readers either
/// take a snapshot with [`Property::get`] or follow it with [`Property::watch`].
#[derive(Clone)]
pub struct Property<T: Clone + Send + Sync + 'static> {
    tx: watch::Sender<T>,
    rx: watch::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> Property<T> {
    /// Create a new property holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, rx) = watch::channel(initial);
        Self { tx, rx }
    }

    /// Store a new value and wake watchers.
    ///
    /// Watchers are only notified when the value actually differs from the
    /// stored one. Writes are reserved to the crate's monitors.
    pub(crate) fn set(&self, new_value: T)
    where
        T: PartialEq,
    {
        self.tx.send_if_modified(|current| {
            if *current == new_value {
                return false;
            }
            *current = new_value;
            true
        });
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Stream that yields the current value first, then every change.
    pub fn watch(&self) -> impl Stream<Item = T> + Send {
        WatchStream::new(self.rx.clone())
    }

    /// Stream of changes only, without the initial value.
    pub fn changes(&self) -> impl Stream<Item = T> + Send {
        WatchStream::from_changes(self.rx.clone())
    }
}

impl<T: Clone + Send + Sync + Debug + 'static> Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.get()).finish()
    }
}

/// Collects the next `count` values of a stream; used by tests.
#[cfg(test)]
pub(crate) async fn take_values<S, T>(stream: S, count: usize) -> Vec<T>
where
    S: Stream<Item = T>,
{
    stream.take(count).collect().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn watch_yields_current_value_first() {
        let state = Property::new(String::from("inactive"));

        let values = take_values(state.watch(), 1).await;

        assert_eq!(values, vec![String::from("inactive")]);
    }

    #[tokio::test]
    async fn set_with_same_value_does_not_notify() {
        let scanning = Property::new(false);
        let mut changes = Box::pin(scanning.changes());

        scanning.set(false);
        scanning.set(true);

        assert_eq!(changes.next().await, Some(true));
        assert!(scanning.get());
    }

    #[test]
    fn debug_shows_value() {
        let level = Property::new(-60_i16);
        assert_eq!(format!("{level:?}"), "Property(-60)");
    }
}
