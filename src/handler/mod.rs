//! Handler module - the chain capability and its implementations.
//!
//! Provides:
//! - [`Handler`] - the capability every chain node implements
//! - [`NextLink`] - the reusable "next" slot with the default forwarding
//!   behavior
//! - [`TokenHandler`] - recognizes one exact token
//! - [`FnHandler`] - recognizes through a predicate/formatter pair
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use handoff::handler::{Handler, TokenHandler};
//!
//! let monkey: Rc<dyn Handler> =
//!     Rc::new(TokenHandler::new("banana", "Macaco: Eu vou comer a banana"));
//! let squirrel: Rc<dyn Handler> =
//!     Rc::new(TokenHandler::new("noz", "Esquilo: Eu vou comer a noz"));
//!
//! monkey.set_next(Rc::clone(&squirrel));
//!
//! // The head forwards what it does not recognize.
//! assert_eq!(monkey.handle("noz").as_deref(), Some("Esquilo: Eu vou comer a noz"));
//! // The squirrel cannot reach back to the monkey.
//! assert_eq!(squirrel.handle("banana"), None);
//! ```

mod func;
mod link;
mod token;

pub use func::FnHandler;
pub use link::NextLink;
pub use token::TokenHandler;

use std::rc::Rc;

/// Outcome of a handle call: the formatted reply of the handler that
/// recognized the request, or `None` when the reachable chain ran out
/// without a match.
pub type Outcome = Option<String>;

/// Capability implemented by every chain node.
///
/// A handler either resolves a request itself or forwards it unchanged to
/// its successor. Implementations embed a [`NextLink`] for the forwarding
/// half and supply only the matching half.
pub trait Handler {
    /// Attach `next` as this handler's successor, replacing any previous
    /// link entirely.
    ///
    /// Returns the attached handler so chains read left to right:
    /// `a.set_next(b).set_next(c)`.
    ///
    /// Links must keep the chain a simple path. Traversal does not defend
    /// against loops; [`Chain::link`](crate::Chain::link) validates the
    /// node list when that guarantee should be checked rather than assumed.
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler>;

    /// Resolve `request`, or forward it down the chain.
    ///
    /// Returns the reply of the first handler along the path that
    /// recognizes the token, `None` once the terminal handler has passed on
    /// it. Must not mutate the chain or the request.
    fn handle(&self, request: &str) -> Outcome;
}
