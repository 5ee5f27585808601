//! # handoff
//!
//! Chain-of-responsibility request dispatch for synchronous pipelines.
//!
//! A chain is a linear sequence of handlers. Each handler either resolves a
//! request - returning a formatted reply - or forwards it unchanged to its
//! successor; a request that runs past the terminal handler resolves to
//! absence. Any node of a chain can serve as the entry point, so a client
//! may address a sub-chain without knowing the full path.
//!
//! ## Architecture
//!
//! - **Capability** ([`Handler`]): `set_next` plus `handle`, the whole
//!   contract
//! - **Chaining base** ([`handler::NextLink`]): the shared forwarding slot
//!   concrete handlers embed
//! - **Handlers** ([`handler::TokenHandler`], [`handler::FnHandler`]):
//!   exact-token or predicate-driven matching
//! - **Construction** ([`Chain`], [`ChainBuilder`]): validated linking,
//!   head and mid-chain dispatch
//!
//! ## Example
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
//! assert!(chain.handle("xícara de cafe").is_none());
//! ```

pub mod error;
pub mod handler;

mod chain;

pub use chain::{Chain, ChainBuilder};
pub use error::ChainError;
pub use handler::{Handler, Outcome};
