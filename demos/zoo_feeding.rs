//! Zoo feeding - the canonical chain walk-through.
//!
//! This demo shows:
//! - Linking handlers fluently with `set_next`
//! - Dispatching requests from the head of the chain
//! - Entering mid-chain, where earlier handlers are out of reach
//!
//! Run with `RUST_LOG=handoff=trace` to watch requests travel the chain.

use std::rc::Rc;

use handoff::handler::TokenHandler;
use handoff::Handler;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Drive the fixed request list through `entry`.
///
/// The client only ever sees a single handler; whether it stands at the
/// head of the full chain or somewhere in the middle makes no difference
/// to this code.
fn client_code(entry: &dyn Handler) {
    for food in ["noz", "banana", "xícara de cafe"] {
        println!();
        println!("Cliente: Quem quer uma {food}?");
        match entry.handle(food) {
            Some(reply) => println!("  {reply}"),
            None => println!("  {food} está intacta."),
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_target(false).without_time())
        .init();

    let monkey = Rc::new(TokenHandler::new("banana", "Macaco: Eu vou comer a banana"));
    let squirrel = Rc::new(TokenHandler::new("noz", "Esquilo: Eu vou comer a noz"));
    let dog = Rc::new(TokenHandler::new("carne", "Cachorro: Eu vou comer a carne"));

    monkey
        .set_next(Rc::clone(&squirrel) as Rc<dyn Handler>)
        .set_next(dog as Rc<dyn Handler>);

    println!("Cadeia: Macaco > Esquilo > Cachorro");
    client_code(&*monkey);
    println!();
    println!();

    println!("Sub-cadeia: Esquilo > Cachorro");
    client_code(&*squirrel);
}
