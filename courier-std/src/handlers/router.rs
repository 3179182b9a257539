//! Routing by event kind.

use courier_core::{BoxError, DynHandler, Handler, RouterError, Sequenced};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A handler that forwards each event to the handler registered for its
/// [`Sequenced::kind`].
///
/// Events with no matching route go to the fallback if one is set and are
/// otherwise dropped with a `debug` log.
///
/// ```rust
/// use courier_core::{Message, Sequenced};
/// use courier_std::handlers::KindRouter;
///
/// #[derive(Debug)]
/// enum Event {
///     Text(i64),
///     Photo(i64),
/// }
///
/// impl Message for Event {}
///
/// impl Sequenced for Event {
///     fn sequence_id(&self) -> i64 {
///         match self {
///             Self::Text(id) | Self::Photo(id) => *id,
///         }
///     }
///
///     fn kind(&self) -> &str {
///         match self {
///             Self::Text(_) => "text",
///             Self::Photo(_) => "photo",
///         }
///     }
/// }
///
/// let mut builder = KindRouter::<Event>::builder();
/// builder.route("text", |_: Event| async {}).unwrap();
/// assert!(builder.route("text", |_: Event| async {}).is_err());
/// let router = builder.build();
/// assert!(router.has_route("text"));
/// assert!(!router.has_route("photo"));
/// ```
pub struct KindRouter<E> {
    routes: HashMap<String, Arc<dyn DynHandler<E>>>,
    fallback: Option<Arc<dyn DynHandler<E>>>,
}

impl<E: Sequenced> KindRouter<E> {
    /// Start building a router.
    pub fn builder() -> KindRouterBuilder<E> {
        KindRouterBuilder::default()
    }

    /// Whether `kind` has a dedicated route.
    pub fn has_route(&self, kind: &str) -> bool {
        self.routes.contains_key(kind)
    }

    /// Number of dedicated routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether there are no dedicated routes.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<E> fmt::Debug for KindRouter<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.routes.keys().collect();
        kinds.sort();
        f.debug_struct("KindRouter")
            .field("routes", &kinds)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl<E: Sequenced> Handler<E> for KindRouter<E> {
    async fn call(&self, event: E) -> Result<(), BoxError> {
        let route = self
            .routes
            .get(event.kind())
            .or(self.fallback.as_ref());

        match route {
            Some(handler) => handler.call_dyn(event).await,
            None => {
                tracing::debug!(
                    update_id = event.sequence_id(),
                    kind = %event.kind(),
                    "no route, ignoring"
                );
                Ok(())
            }
        }
    }
}

/// Builder for [`KindRouter`].
pub struct KindRouterBuilder<E> {
    routes: HashMap<String, Arc<dyn DynHandler<E>>>,
    fallback: Option<Arc<dyn DynHandler<E>>>,
    allow_duplicates: bool,
}

impl<E> std::fmt::Debug for KindRouterBuilder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KindRouterBuilder")
            .field("routes", &self.routes.keys().collect::<Vec<_>>())
            .field("fallback", &self.fallback.is_some())
            .field("allow_duplicates", &self.allow_duplicates)
            .finish()
    }
}

impl<E> Default for KindRouterBuilder<E> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
            fallback: None,
            allow_duplicates: false,
        }
    }
}

impl<E: Sequenced> KindRouterBuilder<E> {
    /// Allow re-registering a kind (later routes replace earlier ones).
    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Route events of `kind` to `handler`.
    pub fn route<H>(&mut self, kind: impl Into<String>, handler: H) -> Result<&mut Self, RouterError>
    where
        H: Handler<E>,
    {
        let kind = kind.into();
        if !self.allow_duplicates && self.routes.contains_key(&kind) {
            return Err(RouterError::AlreadyExists(kind));
        }
        self.routes.insert(kind, Arc::new(handler));
        Ok(self)
    }

    /// Handle every unrouted kind with `handler`.
    pub fn fallback<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler<E>,
    {
        self.fallback = Some(Arc::new(handler));
        self
    }

    /// Finish the router.
    pub fn build(self) -> KindRouter<E> {
        KindRouter {
            routes: self.routes,
            fallback: self.fallback,
        }
    }
}
