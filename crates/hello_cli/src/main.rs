/* 📖 # Why is the CLI minimal and hardcoded?

The CLI takes no arguments and reads no configuration. It greets Brendan with
the current local date and exits:

    $ hello
    Hello Brendan, today is Sun Oct 18 2026!

Diagnostics go to stderr and are controlled with RUST_LOG.

Exit codes:
- 0: Success (greeting written)
- 1: Error (tracing could not be initialized or stdout could not be written)
*/

use std::process;

use hello_base::tracing::{debug, init_tracing};
use hello_base::{PalHandle, RealPal};
use hello_greeter::greet_now;

const PERSON: &str = "Brendan";

fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let pal = PalHandle::new(RealPal::new());
    debug!(person = PERSON, "greeting");

    if let Err(e) = greet_now(&pal, PERSON) {
        eprintln!("Error: {}", e);
        debug!(root_cause = %e.root_cause(), "{:?}", e);
        process::exit(1);
    }
}
