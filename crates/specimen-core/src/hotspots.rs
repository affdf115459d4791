//! Supplemental scanner bait: weak randomness, a canned injection payload,
//! and a quadratic hot loop.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// "Random" value derived from a non-cryptographic hasher. Fully
/// deterministic per seed, which is exactly the defect.
pub fn weak_random(seed: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    hasher.finish()
}

/// The canned injection payload run through the same interpolation shape as
/// [`crate::query::user_query`].
pub fn interpolated_query() -> String {
    crate::query::user_query("'; DROP TABLE users; --")
}

/// Nested-loop insert storm. Returns the number of entries created so the
/// work cannot be optimized away.
pub fn quadratic_fill(outer: u64, inner: u64) -> usize {
    let mut data = HashMap::new();
    for i in 0..outer {
        for j in 0..inner {
            if i * j > 50_000 {
                data.insert(format!("key_{i}_{j}"), i + j);
            }
        }
    }
    data.len()
}
