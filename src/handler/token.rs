//! Exact-token handler.

use std::rc::Rc;

use tracing::debug;

use super::{Handler, NextLink, Outcome};

/// Handler recognizing exactly one request token.
///
/// Matching is plain string equality: case-sensitive, no normalization.
/// Token and reply are fixed at construction and never change afterwards.
/// Unrecognized requests are forwarded down the chain.
///
/// # Example
///
/// ```
/// use handoff::handler::{Handler, TokenHandler};
///
/// let dog = TokenHandler::new("carne", "Cachorro: Eu vou comer a carne");
///
/// assert_eq!(dog.handle("carne").as_deref(), Some("Cachorro: Eu vou comer a carne"));
/// assert_eq!(dog.handle("Carne"), None); // case-sensitive, and no successor to ask
/// ```
pub struct TokenHandler {
    token: String,
    reply: String,
    next: NextLink,
}

impl TokenHandler {
    /// Create a handler that answers `reply` for requests equal to `token`.
    pub fn new(token: impl Into<String>, reply: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            reply: reply.into(),
            next: NextLink::new(),
        }
    }

    /// The token this handler recognizes.
    #[inline]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Handler for TokenHandler {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(next)
    }

    fn handle(&self, request: &str) -> Outcome {
        if request == self.token {
            debug!(token = %self.token, "request matched");
            Some(self.reply.clone())
        } else {
            self.next.forward(request)
        }
    }
}
