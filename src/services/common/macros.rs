/// Creates a watch method that combines multiple property streams into one.
///
/// Every listed field must expose a `watch()` stream. The combined stream
/// emits a fresh clone of the whole struct whenever any field changes.
///
/// # Example
/// ```ignore
/// impl LiveInterface {
///     pub fn watch(&self) -> impl Stream<Item = Self> + Send {
///         watch_all!(self, state, scanning, current_bss)
///     }
/// }
/// ```
#[macro_export]
macro_rules! watch_all {
    ($self:expr, $($source:ident),+ $(,)?) => {
        {
            use ::futures::StreamExt;

            let cloned = $self.clone();
            let streams: Vec<::futures::stream::BoxStream<'_, ()>> = vec![
                $($self.$source.watch().map(|_| ()).boxed(),)+
            ];
            ::futures::stream::select_all(streams).map(move |_| cloned.clone())
        }
    };
}

/// Unwraps a D-Bus property result, logging the failure and falling back to
/// the type's default value.
#[macro_export]
macro_rules! unwrap_or_default {
    ($result:expr, $name:expr, $path:expr) => {
        $result.unwrap_or_else(|err| {
            ::tracing::warn!("Failed to fetch '{}' property for {}: {}", $name, $path, err);
            Default::default()
        })
    };
}
