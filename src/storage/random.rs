use rand::Rng;

/// Picks a uniformly distributed index in `[0, len)`.
///
/// Returns `None` when `len` is zero. Uses the thread-local generator,
/// which is seeded from OS entropy.
pub fn random_index(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(rand::thread_rng().gen_range(0..len))
}
