//! Carries nested codec failures through serde.
//!
//! A nested envelope is decoded from inside some parent's `Deserialize`
//! impl, where the only way out is a stringly `serde::de::Error`. The
//! structured [`CodecError`] is parked here so the outermost decode call can
//! return it unchanged.

use courier_core::CodecError;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static DEPTH: Cell<usize> = const { Cell::new(0) };
    static NESTED: RefCell<Option<CodecError>> = const { RefCell::new(None) };
}

/// Marks one decode call on this thread's stack.
///
/// The outermost scope starts and ends with an empty slot, so a failure
/// parked by one top-level call never leaks into the next.
pub(crate) struct Scope {
    _not_send: PhantomData<*const ()>,
}

impl Scope {
    pub(crate) fn enter() -> Self {
        let depth = DEPTH.get();
        if depth == 0 {
            NESTED.take();
        }
        DEPTH.set(depth + 1);
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        let depth = DEPTH.get().saturating_sub(1);
        DEPTH.set(depth);
        if depth == 0 {
            NESTED.take();
        }
    }
}

/// Park a nested failure. The first (deepest) one wins.
pub(crate) fn stash(err: CodecError) {
    NESTED.with_borrow_mut(|slot| {
        if slot.is_none() {
            *slot = Some(err);
        }
    });
}

/// Take the parked failure, if any.
pub(crate) fn take() -> Option<CodecError> {
    NESTED.take()
}
