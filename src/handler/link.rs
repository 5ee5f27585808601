//! The chaining base shared by every concrete handler.
//!
//! [`NextLink`] owns the optional reference to the successor and implements
//! the default behavior of the chain: forward when a successor exists,
//! report absence at the end of the path. Concrete handlers embed one and
//! call [`NextLink::forward`] after a failed local match.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use super::{Handler, Outcome};

/// Optional link to the next handler in a chain.
///
/// A fresh link is terminal; [`set`](NextLink::set) attaches a successor
/// and [`clear`](NextLink::clear) restores terminal status. The slot uses
/// interior mutability so linking works through the shared `Rc` handles a
/// chain is built from; the borrow is transient and never held while a
/// successor runs.
#[derive(Default)]
pub struct NextLink {
    next: RefCell<Option<Rc<dyn Handler>>>,
}

impl NextLink {
    /// Create a terminal link.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `next`, replacing any previous successor entirely.
    ///
    /// Returns the attached handler to support fluent linkage.
    pub fn set(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        *self.next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    /// Remove the successor, restoring terminal status.
    pub fn clear(&self) {
        *self.next.borrow_mut() = None;
    }

    /// Whether this link ends the chain.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.next.borrow().is_none()
    }

    /// Default chain behavior: delegate to the successor if present.
    pub fn forward(&self, request: &str) -> Outcome {
        // Clone the handle out so the borrow ends before the successor runs.
        let next = self.next.borrow().as_ref().map(Rc::clone);
        match next {
            Some(next) => {
                trace!(request, "forwarding to next handler");
                next.handle(request)
            }
            None => {
                trace!(request, "terminal handler passed, no match");
                None
            }
        }
    }
}
