//! Item id allocation.
//!
//! Ids are slugs of the item name. Empty slugs get a random fallback and
//! collisions get a short random suffix. The randomness comes from an
//! [`IdSource`] so tests can swap in [`SequentialIds`].

use indexmap::IndexMap;
use rand::Rng;

use crate::item::{Item, ItemId};
use crate::text::slug;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const FALLBACK_LEN: usize = 10;
const SUFFIX_LEN: usize = 4;

/// Source of the random parts of item ids.
pub trait IdSource {
    /// Id used when the slug of a name is empty.
    fn fallback_id(&mut self) -> String;

    /// Suffix appended to a colliding id (joined with `-`).
    fn suffix(&mut self) -> String;
}

/// Base36 ids from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl RandomIds {
    fn base36(len: usize) -> String {
        let mut rng = rand::rng();
        (0..len)
            .map(|_| char::from(BASE36[rng.random_range(0..BASE36.len())]))
            .collect()
    }
}

impl IdSource for RandomIds {
    fn fallback_id(&mut self) -> String {
        Self::base36(FALLBACK_LEN)
    }

    fn suffix(&mut self) -> String {
        Self::base36(SUFFIX_LEN)
    }
}

/// Deterministic ids for tests: `item1`, `item2`, ... and suffixes `1`, `2`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        self.next += 1;
        self.next
    }
}

impl IdSource for SequentialIds {
    fn fallback_id(&mut self) -> String {
        format!("item{}", self.bump())
    }

    fn suffix(&mut self) -> String {
        self.bump().to_string()
    }
}

/// Allocates an id for `seed` that is not yet a key of `items`.
pub fn allocate_item_id(
    seed: &str,
    items: &IndexMap<ItemId, Item>,
    ids: &mut dyn IdSource,
) -> ItemId {
    let base = match slug(seed) {
        s if s.is_empty() => ids.fallback_id(),
        s => s,
    };
    if !items.contains_key(&base) {
        return base;
    }
    loop {
        let candidate = format!("{}-{}", base, ids.suffix());
        if !items.contains_key(&candidate) {
            return candidate;
        }
    }
}
