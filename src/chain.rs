//! Chain construction and dispatch.
//!
//! [`Chain::link`] turns an ordered list of handlers into a simple path and
//! validates it; [`ChainBuilder`] provides a fluent API for assembling the
//! list. The chain keeps the node order, so clients can enter mid-path via
//! [`Chain::entry`] and address only a suffix of the handlers.
//!
//! # Example
//!
//! ```
//! use handoff::Chain;
//!
//! let chain = Chain::builder()
//!     .token("banana", "Macaco: Eu vou comer a banana")
//!     .token("noz", "Esquilo: Eu vou comer a noz")
//!     .token("carne", "Cachorro: Eu vou comer a carne")
//!     .link()
//!     .unwrap();
//!
//! assert_eq!(chain.handle("noz").as_deref(), Some("Esquilo: Eu vou comer a noz"));
//! assert_eq!(chain.handle("xícara de cafe"), None);
//! ```

use std::rc::Rc;

use tracing::debug;

use crate::error::{ChainError, Result};
use crate::handler::{FnHandler, Handler, Outcome, TokenHandler};

/// A linked, validated chain of handlers.
///
/// Nodes are linked first to last; the final node is terminal. Linking goes
/// through [`set_next`](Handler::set_next), so interior nodes carried over
/// from an earlier chain are re-linked cleanly.
pub struct Chain {
    nodes: Vec<Rc<dyn Handler>>,
}

impl Chain {
    /// Start assembling a chain with the fluent API.
    pub fn builder() -> ChainBuilder {
        ChainBuilder::new()
    }

    /// Link `nodes` into a path, first to last.
    ///
    /// Fails with [`ChainError::EmptyChain`] when `nodes` is empty and with
    /// [`ChainError::WouldCycle`] when the same handler object appears
    /// twice - repeating a node is exactly how the linking pass would close
    /// a loop. A single-node chain is legal and immediately terminal.
    ///
    /// Every node but the last has its successor replaced. The last node is
    /// left untouched, so it must be terminal going in (fresh, cleared, or
    /// the tail of a previous chain); a stale successor there would extend
    /// the path beyond the validated nodes.
    pub fn link(nodes: Vec<Rc<dyn Handler>>) -> Result<Self> {
        if nodes.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        for (position, node) in nodes.iter().enumerate() {
            if nodes[..position].iter().any(|seen| Rc::ptr_eq(seen, node)) {
                return Err(ChainError::WouldCycle(position));
            }
        }
        for pair in nodes.windows(2) {
            pair[0].set_next(Rc::clone(&pair[1]));
        }
        debug!(handlers = nodes.len(), "chain linked");
        Ok(Self { nodes })
    }

    /// Dispatch `request` from the head of the chain.
    pub fn handle(&self, request: &str) -> Outcome {
        self.nodes[0].handle(request)
    }

    /// The head handler.
    pub fn head(&self) -> Rc<dyn Handler> {
        Rc::clone(&self.nodes[0])
    }

    /// The handler at `index`, usable as a mid-chain entry point.
    ///
    /// Requests entered here reach only the handlers at `index` and later.
    pub fn entry(&self, index: usize) -> Option<Rc<dyn Handler>> {
        self.nodes.get(index).map(Rc::clone)
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the chain holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Fluent accumulator for [`Chain`] construction.
///
/// Each method appends one handler; [`link`](ChainBuilder::link) finishes
/// through [`Chain::link`] and inherits its validation.
///
/// # Example
///
/// ```
/// use handoff::Chain;
///
/// let chain = Chain::builder()
///     .token("refund", "Billing: refund queued")
///     .recognize(
///         |req| req.starts_with("outage"),
///         |req| format!("On-call: paging for '{req}'"),
///     )
///     .link()
///     .unwrap();
///
/// assert_eq!(chain.len(), 2);
/// ```
#[derive(Default)]
pub struct ChainBuilder {
    nodes: Vec<Rc<dyn Handler>>,
}

impl ChainBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append any handler to the chain under construction.
    pub fn handler(mut self, handler: Rc<dyn Handler>) -> Self {
        self.nodes.push(handler);
        self
    }

    /// Append a [`TokenHandler`] answering `reply` for `token`.
    pub fn token(self, token: impl Into<String>, reply: impl Into<String>) -> Self {
        self.handler(Rc::new(TokenHandler::new(token, reply)))
    }

    /// Append an [`FnHandler`] built from `matches` and `respond`.
    pub fn recognize<M, F>(self, matches: M, respond: F) -> Self
    where
        M: Fn(&str) -> bool + 'static,
        F: Fn(&str) -> String + 'static,
    {
        self.handler(Rc::new(FnHandler::new(matches, respond)))
    }

    /// Link the accumulated handlers into a [`Chain`].
    pub fn link(self) -> Result<Chain> {
        Chain::link(self.nodes)
    }
}
