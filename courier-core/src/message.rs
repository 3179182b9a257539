//! Message traits for event types.

/// A marker trait for values that travel through the dispatch pipeline.
///
/// Messages must be `Send + Sync + 'static` to be safe for async use.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Everything moved between courier tasks must be thread-safe and static."
)]
pub trait Message: Send + Sync + 'static {}

impl Message for () {}
impl Message for String {}
impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}

/// An event carrying a position in the remote event stream.
///
/// The dispatch engine advances its cursor to `sequence_id() + 1` after the
/// event is enqueued, so fetchers must return events in increasing
/// `sequence_id` order.
///
/// # Example
///
/// ```rust
/// use courier_core::{Message, Sequenced};
///
/// #[derive(Debug)]
/// struct Tick(i64);
///
/// impl Message for Tick {}
///
/// impl Sequenced for Tick {
///     fn sequence_id(&self) -> i64 {
///         self.0
///     }
/// }
///
/// assert_eq!(Tick(7).sequence_id(), 7);
/// assert_eq!(Tick(7).kind(), "event");
/// ```
pub trait Sequenced: Message {
    /// Every kind name this event type can report.
    ///
    /// Allow-lists handed to the engine are validated against this set. An
    /// empty set disables validation.
    const KINDS: &'static [&'static str] = &[];

    /// Monotonic identifier of this event in the remote stream.
    fn sequence_id(&self) -> i64;

    /// Short name of the payload this event carries, used for logging and
    /// routing.
    fn kind(&self) -> &str {
        "event"
    }
}
