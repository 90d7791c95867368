//! Thread-scoped shared generator
//!
//! Each thread lazily gets its own self-seeded [`Random`]. No instance is
//! ever shared between threads, so no locking is needed.

use std::cell::RefCell;
use tracing::debug;

use super::lcg::Random;

thread_local! {
    static SYSTEM_RANDOM: RefCell<Random> = RefCell::new(create_system_random());
}

fn create_system_random() -> Random {
    let rng = Random::system();
    debug!(
        thread = ?std::thread::current().id(),
        seed = rng.seed(),
        "created system random generator"
    );
    rng
}

/// Run `f` with the calling thread's shared generator
///
/// The first call on a thread creates and self-seeds that thread's
/// instance; it lives until the thread exits. The borrow cannot outlive
/// the closure, so the generator never escapes to another thread.
///
/// # Panics
/// Panics if called again from inside `f` on the same thread.
///
/// # Example
/// ```
/// use seeded_random::with_system_random;
///
/// let roll = with_system_random(|rng| rng.next_int_in(1..7));
/// assert!((1..7).contains(&roll));
/// ```
pub fn with_system_random<R>(f: impl FnOnce(&mut Random) -> R) -> R {
    SYSTEM_RANDOM.with(|cell| f(&mut cell.borrow_mut()))
}
