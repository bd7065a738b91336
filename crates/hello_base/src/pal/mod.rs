/* 📖 # What is the Platform Abstraction Layer?

The PAL provides a trait-based abstraction over the two things a greeting needs
from the host: the current time and standard output.
- Testability: MockPal pins the clock and captures output for deterministic tests
- Consistency: write failures surface as HelloError like everything else

Code depends on the Pal trait, never on RealPal or MockPal directly.
*/

pub mod mock;
pub mod real_pal;
mod traits;

pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle, Timestamp};
