//! Ticket escalation - the builder surface.
//!
//! This demo shows:
//! - Assembling a chain with `ChainBuilder` instead of raw `set_next`
//! - Mixing exact-token and predicate handlers in one chain
//! - Picking a mid-chain entry point with `Chain::entry`

use handoff::error::Result;
use handoff::{Chain, Handler};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const TICKETS: [&str; 4] = [
    "refund",
    "outage in eu-west",
    "password reset",
    "new feature idea",
];

fn triage(entry: &dyn Handler) {
    for ticket in TICKETS {
        println!();
        println!("Ticket: {ticket}");
        match entry.handle(ticket) {
            Some(reply) => println!("  {reply}"),
            None => println!("  {ticket} left unanswered."),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let chain = Chain::builder()
        .token("password reset", "Helpdesk: reset link sent")
        .token("refund", "Billing: refund queued")
        .recognize(
            |req| req.starts_with("outage"),
            |req| format!("On-call: paging for '{req}'"),
        )
        .link()?;

    println!("Chain: helpdesk > billing > on-call");
    triage(&*chain.head());
    println!();
    println!();

    // Helpdesk-only tickets go unanswered from here on.
    let billing = chain.entry(1).expect("chain has three handlers");
    println!("Sub-chain: billing > on-call");
    triage(&*billing);

    Ok(())
}
