//! Predicate/formatter handler.

use std::rc::Rc;

use super::{Handler, NextLink, Outcome};

/// Handler deciding through a match predicate and formatting its reply
/// through a closure.
///
/// This is the general form of [`TokenHandler`](super::TokenHandler): an
/// equality predicate plus a constant formatter reproduces it exactly, and
/// anything richer - prefix matching, inspection of the request in the
/// reply - fits without a new handler type.
///
/// # Example
///
/// ```
/// use handoff::handler::{FnHandler, Handler};
///
/// let oncall = FnHandler::new(
///     |req| req.starts_with("outage"),
///     |req| format!("On-call: paging for '{req}'"),
/// );
///
/// assert_eq!(
///     oncall.handle("outage in eu-west").as_deref(),
///     Some("On-call: paging for 'outage in eu-west'"),
/// );
/// assert_eq!(oncall.handle("refund"), None);
/// ```
pub struct FnHandler<M, F>
where
    M: Fn(&str) -> bool + 'static,
    F: Fn(&str) -> String + 'static,
{
    matches: M,
    respond: F,
    next: NextLink,
}

impl<M, F> FnHandler<M, F>
where
    M: Fn(&str) -> bool + 'static,
    F: Fn(&str) -> String + 'static,
{
    /// Create a handler from a predicate and a formatter.
    pub fn new(matches: M, respond: F) -> Self {
        Self {
            matches,
            respond,
            next: NextLink::new(),
        }
    }
}

impl<M, F> Handler for FnHandler<M, F>
where
    M: Fn(&str) -> bool + 'static,
    F: Fn(&str) -> String + 'static,
{
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(next)
    }

    fn handle(&self, request: &str) -> Outcome {
        if (self.matches)(request) {
            Some((self.respond)(request))
        } else {
            self.next.forward(request)
        }
    }
}
