use std::time::Duration;

use futures::StreamExt;
use tokio::{sync::oneshot, task::JoinHandle};
use tracing::debug;
use zbus::{
    message::Message,
    zvariant::{OwnedValue, Structure, Value},
};

use super::SupplicantError;

/// Arguments of one signal emission, in declaration order.
pub type SignalArgs = Vec<OwnedValue>;

/// Handle to a callback subscription.
///
/// The callback stops being invoked once the handle is cancelled or dropped.
#[derive(Debug)]
pub struct SignalSubscription {
    signal: String,
    task: JoinHandle<()>,
}

impl SignalSubscription {
    pub(crate) fn spawn<F>(signal: String, mut stream: zbus::proxy::SignalStream<'static>, mut callback: F) -> Self
    where
        F: FnMut(SignalArgs) + Send + 'static,
    {
        let name = signal.clone();
        let task = tokio::spawn(async move {
            while let Some(message) = stream.next().await {
                callback(signal_args(&message));
            }
            debug!("Signal stream for {name} ended");
        });

        Self { signal, task }
    }

    /// Name of the subscribed signal.
    pub fn signal(&self) -> &str {
        &self.signal
    }

    /// Stop delivering emissions to the callback.
    pub fn cancel(self) {
        self.task.abort();
    }
}

impl Drop for SignalSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Single-shot wait for the next emission of a signal.
///
/// The match rule is installed when the queue is created, so an emission that
/// arrives before [`SignalQueue::next`] is called is kept until it is read.
#[derive(Debug)]
pub struct SignalQueue {
    signal: String,
    rx: oneshot::Receiver<SignalArgs>,
    task: JoinHandle<()>,
}

impl SignalQueue {
    pub(crate) fn spawn(signal: String, mut stream: zbus::proxy::SignalStream<'static>) -> Self {
        let (tx, rx) = oneshot::channel();

        let task = tokio::spawn(async move {
            if let Some(message) = stream.next().await {
                let _ = tx.send(signal_args(&message));
            }
        });

        Self { signal, rx, task }
    }

    /// Wait for the emission.
    ///
    /// `None` waits indefinitely.
    ///
    /// # Errors
    /// Returns `SupplicantError::MethodTimeout` when `timeout` elapses first and
    /// `SupplicantError::SignalClosed` when the bus connection goes away.
    pub async fn next(mut self, timeout: Option<Duration>) -> Result<SignalArgs, SupplicantError> {
        let received = match timeout {
            Some(limit) => tokio::time::timeout(limit, &mut self.rx)
                .await
                .map_err(|_| SupplicantError::MethodTimeout {
                    operation: self.signal.clone(),
                    timeout: limit,
                })?,
            None => (&mut self.rx).await,
        };

        received.map_err(|_| SupplicantError::SignalClosed(self.signal.clone()))
    }
}

impl Drop for SignalQueue {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Decode the body of a signal message into owned values.
///
/// Signals without arguments, or whose body cannot be decoded, yield no values.
fn signal_args(message: &Message) -> SignalArgs {
    let body = message.body();
    if body.signature().to_string().is_empty() {
        return Vec::new();
    }

    if let Ok(structure) = body.deserialize::<Structure<'_>>() {
        return structure
            .fields()
            .iter()
            .filter_map(|field| field.try_to_owned().ok())
            .collect();
    }

    // Single-argument bodies such as `ScanDone(b)`.
    match body.deserialize::<Value<'_>>() {
        Ok(value) => value.try_to_owned().ok().into_iter().collect(),
        Err(e) => {
            debug!("Signal carried no decodable arguments: {e}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_done(success: bool) -> Message {
        Message::signal("/fi/w1/wpa_supplicant1/Interfaces/0", "fi.w1.wpa_supplicant1.Interface", "ScanDone")
            .unwrap()
            .build(&(success,))
            .unwrap()
    }

    #[test]
    fn single_argument_signal_decodes() {
        let args = signal_args(&scan_done(true));

        assert_eq!(args.len(), 1);
        assert!(bool::try_from(&args[0]).unwrap());
    }

    #[test]
    fn multi_argument_signal_keeps_order() {
        let message = Message::signal("/fi/w1/wpa_supplicant1/Interfaces/0", "fi.w1.wpa_supplicant1.Interface", "Certification")
            .unwrap()
            .build(&(3u32, "CN=ap.example"))
            .unwrap();

        let args = signal_args(&message);

        assert_eq!(args.len(), 2);
        assert_eq!(u32::try_from(&args[0]).unwrap(), 3);
        assert_eq!(<&str>::try_from(&args[1]).unwrap(), "CN=ap.example");
    }

    #[test]
    fn empty_signal_has_no_arguments() {
        let message = Message::signal("/fi/w1/wpa_supplicant1", "fi.w1.wpa_supplicant1", "NetworkRequest")
            .unwrap()
            .build(&())
            .unwrap();

        assert!(signal_args(&message).is_empty());
    }

    #[tokio::test]
    async fn queue_times_out_without_emission() {
        let (_tx, rx) = oneshot::channel::<SignalArgs>();
        let queue = SignalQueue {
            signal: "ScanDone".to_string(),
            rx,
            task: tokio::spawn(async {}),
        };

        let result = queue.next(Some(Duration::from_millis(20))).await;

        assert!(matches!(
            result,
            Err(SupplicantError::MethodTimeout { ref operation, .. }) if operation == "ScanDone"
        ));
    }

    #[tokio::test]
    async fn queue_keeps_emission_sent_before_next() {
        let (tx, rx) = oneshot::channel::<SignalArgs>();
        let queue = SignalQueue {
            signal: "ScanDone".to_string(),
            rx,
            task: tokio::spawn(async {}),
        };

        let _ = tx.send(vec![OwnedValue::from(true)]);
        let args = queue.next(None).await;

        assert!(matches!(args, Ok(ref values) if values.len() == 1));
    }

    #[tokio::test]
    async fn queue_reports_closed_stream() {
        let (tx, rx) = oneshot::channel::<SignalArgs>();
        let queue = SignalQueue {
            signal: "InterfaceAdded".to_string(),
            rx,
            task: tokio::spawn(async {}),
        };
        drop(tx);

        let result = queue.next(Some(Duration::from_secs(1))).await;

        assert!(matches!(result, Err(SupplicantError::SignalClosed(_))));
    }
}
