//! End-to-end behavior of handler chains.
//!
//! These tests drive whole chains through the public API and pin down the
//! observable dispatch properties: forwarding, entry-point independence,
//! link replacement, and the absence outcome.

use std::cell::RefCell;
use std::rc::Rc;

use handoff::handler::{FnHandler, NextLink, TokenHandler};
use handoff::{Chain, ChainError, Handler, Outcome};

/// Pass-through handler that records every request it sees, then forwards.
struct Probe {
    seen: RefCell<Vec<String>>,
    next: NextLink,
}

impl Probe {
    fn new() -> Self {
        Self {
            seen: RefCell::new(Vec::new()),
            next: NextLink::new(),
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.borrow().clone()
    }
}

impl Handler for Probe {
    fn set_next(&self, next: Rc<dyn Handler>) -> Rc<dyn Handler> {
        self.next.set(next)
    }

    fn handle(&self, request: &str) -> Outcome {
        self.seen.borrow_mut().push(request.to_string());
        self.next.forward(request)
    }
}

/// Build the monkey > squirrel > dog chain and hand back all three nodes.
fn zoo() -> (Rc<TokenHandler>, Rc<TokenHandler>, Rc<TokenHandler>) {
    let monkey = Rc::new(TokenHandler::new("banana", "Macaco: Eu vou comer a banana"));
    let squirrel = Rc::new(TokenHandler::new("noz", "Esquilo: Eu vou comer a noz"));
    let dog = Rc::new(TokenHandler::new("carne", "Cachorro: Eu vou comer a carne"));

    monkey
        .set_next(Rc::clone(&squirrel) as Rc<dyn Handler>)
        .set_next(Rc::clone(&dog) as Rc<dyn Handler>);
    (monkey, squirrel, dog)
}

/// Requests entered at the head resolve wherever their handler sits.
#[test]
fn test_full_chain_resolves_at_any_depth() {
    let (monkey, _, _) = zoo();

    assert_eq!(
        monkey.handle("banana").as_deref(),
        Some("Macaco: Eu vou comer a banana")
    );
    assert_eq!(
        monkey.handle("noz").as_deref(),
        Some("Esquilo: Eu vou comer a noz")
    );
    assert_eq!(
        monkey.handle("carne").as_deref(),
        Some("Cachorro: Eu vou comer a carne")
    );
}

/// A token no reachable handler recognizes resolves to absence.
#[test]
fn test_unrecognized_request_is_absent() {
    let (monkey, _, _) = zoo();

    assert_eq!(monkey.handle("xícara de cafe"), None);
    assert_eq!(monkey.handle(""), None);
}

/// Entering mid-chain reaches later handlers but never earlier ones.
#[test]
fn test_entry_point_independence() {
    let (_monkey, squirrel, _dog) = zoo();

    assert_eq!(
        squirrel.handle("noz").as_deref(),
        Some("Esquilo: Eu vou comer a noz")
    );
    assert_eq!(
        squirrel.handle("carne").as_deref(),
        Some("Cachorro: Eu vou comer a carne")
    );
    // The monkey sits before the entry point and is out of reach.
    assert_eq!(squirrel.handle("banana"), None);
}

/// The terminal handler itself still matches its own token.
#[test]
fn test_terminal_handler_as_entry_point() {
    let (_monkey, _squirrel, dog) = zoo();

    assert_eq!(
        dog.handle("carne").as_deref(),
        Some("Cachorro: Eu vou comer a carne")
    );
    assert_eq!(dog.handle("banana"), None);
}

/// Every handler along the path observes the identical token.
#[test]
fn test_forwarding_preserves_the_request() {
    let first = Rc::new(Probe::new());
    let second = Rc::new(Probe::new());
    let dog = Rc::new(TokenHandler::new("carne", "Cachorro: Eu vou comer a carne"));

    first
        .set_next(Rc::clone(&second) as Rc<dyn Handler>)
        .set_next(Rc::clone(&dog) as Rc<dyn Handler>);

    assert_eq!(
        first.handle("carne").as_deref(),
        Some("Cachorro: Eu vou comer a carne")
    );
    assert_eq!(first.handle("pipoca"), None);

    assert_eq!(first.seen(), ["carne", "pipoca"]);
    assert_eq!(second.seen(), ["carne", "pipoca"]);
}

/// Re-linking replaces the previous successor entirely - no dual forwarding.
#[test]
fn test_relink_replaces_successor() {
    let monkey = Rc::new(TokenHandler::new("banana", "Macaco: Eu vou comer a banana"));
    let squirrel = Rc::new(TokenHandler::new("noz", "Esquilo: Eu vou comer a noz"));
    let dog = Rc::new(TokenHandler::new("carne", "Cachorro: Eu vou comer a carne"));

    monkey.set_next(Rc::clone(&squirrel) as Rc<dyn Handler>);
    monkey.set_next(Rc::clone(&dog) as Rc<dyn Handler>);

    assert_eq!(
        monkey.handle("carne").as_deref(),
        Some("Cachorro: Eu vou comer a carne")
    );
    // The squirrel was replaced, not chained after the dog.
    assert_eq!(monkey.handle("noz"), None);
}

/// Matching is exact, case-sensitive, and unnormalized.
#[test]
fn test_matching_is_exact() {
    let (monkey, _, _) = zoo();

    assert_eq!(monkey.handle("Banana"), None);
    assert_eq!(monkey.handle("banana "), None);
    assert_eq!(monkey.handle("ban"), None);
}

/// The validated construction path refuses degenerate inputs.
#[test]
fn test_chain_construction_validation() {
    assert_eq!(Chain::link(Vec::new()).err(), Some(ChainError::EmptyChain));

    let monkey: Rc<dyn Handler> =
        Rc::new(TokenHandler::new("banana", "Macaco: Eu vou comer a banana"));
    let result = Chain::link(vec![Rc::clone(&monkey), monkey]);
    assert_eq!(result.err(), Some(ChainError::WouldCycle(1)));
}

/// The builder produces the same observable chain as manual linking.
#[test]
fn test_builder_chain_matches_manual_linking() {
    let chain = Chain::builder()
        .token("banana", "Macaco: Eu vou comer a banana")
        .token("noz", "Esquilo: Eu vou comer a noz")
        .token("carne", "Cachorro: Eu vou comer a carne")
        .link()
        .unwrap();
    let (monkey, _, _) = zoo();

    for request in ["banana", "noz", "carne", "xícara de cafe"] {
        assert_eq!(chain.handle(request), monkey.handle(request));
    }

    let squirrel = chain.entry(1).unwrap();
    assert_eq!(squirrel.handle("banana"), None);
}

/// A predicate handler with equality semantics is indistinguishable from a
/// token handler in a chain.
#[test]
fn test_fn_handler_in_a_chain() {
    let chain = Chain::builder()
        .recognize(
            |req| req == "banana",
            |req| format!("Macaco: Eu vou comer a {req}"),
        )
        .token("noz", "Esquilo: Eu vou comer a noz")
        .link()
        .unwrap();

    assert_eq!(
        chain.handle("banana").as_deref(),
        Some("Macaco: Eu vou comer a banana")
    );
    assert_eq!(
        chain.handle("noz").as_deref(),
        Some("Esquilo: Eu vou comer a noz")
    );
    assert_eq!(chain.handle("carne"), None);
}

/// A custom Handler implementation slots into a built chain like the
/// provided ones.
#[test]
fn test_custom_handler_in_builder_chain() {
    let probe = Rc::new(Probe::new());
    let chain = Chain::builder()
        .handler(Rc::clone(&probe) as Rc<dyn Handler>)
        .token("noz", "Esquilo: Eu vou comer a noz")
        .link()
        .unwrap();

    assert_eq!(
        chain.handle("noz").as_deref(),
        Some("Esquilo: Eu vou comer a noz")
    );
    assert_eq!(chain.handle("banana"), None);
    assert_eq!(probe.seen(), ["noz", "banana"]);
}
