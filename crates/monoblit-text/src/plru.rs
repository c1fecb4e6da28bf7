//! A Tree-PLRU (pseudo least-recently-used) set-associative cache.
//!
//! Intended as a small cache for values that are cheap to store and
//! relatively expensive to create. Keys must be unsigned integers; the low
//! bits of a key select its set and the remaining bits form a tag stored in
//! the slot. Within a set, `WAYS - 1` bits arranged as a complete binary
//! tree approximate LRU: `touch` flips the path bits away from the accessed
//! way, and the victim walk follows them back to the pseudo-oldest way.
//!
//! Both `SETS` and `WAYS` must be powers of two; violations are rejected at
//! compile time when the cache is instantiated. Total capacity is
//! `SETS * WAYS` and eviction is the only way an entry leaves the cache
//! short of [`PlruCache::clear`].

use core::fmt;

/// Unsigned integer key for a [`PlruCache`].
///
/// Implemented for keys up to 32 bits wide: the packed tag word spends one
/// bit on the valid flag, so the key plus that flag must fit the 64-bit tag
/// word without loss.
pub trait CacheKey: Copy + Eq {
    /// Widen to the word the cache computes set indices and tags in.
    fn to_word(self) -> u64;
    /// Reconstruct a key from a widened word (used by iteration).
    fn from_word(word: u64) -> Self;
}

macro_rules! impl_cache_key {
    ($($t:ty),*) => {
        $(impl CacheKey for $t {
            #[inline]
            fn to_word(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_word(word: u64) -> Self {
                word as $t
            }
        })*
    };
}

impl_cache_key!(u8, u16, u32);

/// The `WAYS - 1` PLRU bits of one set, packed into a word and addressed as
/// a complete binary tree over `WAYS` leaves.
#[derive(Clone, Copy, Default)]
struct Tree<const WAYS: usize> {
    bits: u32,
}

impl<const WAYS: usize> Tree<WAYS> {
    #[inline]
    fn bit(&self, node: usize) -> bool {
        self.bits & (1 << node) != 0
    }

    #[inline]
    fn set_bit(&mut self, node: usize, value: bool) {
        if value {
            self.bits |= 1 << node;
        } else {
            self.bits &= !(1 << node);
        }
    }

    /// Mark `way` as the most recently used leaf.
    ///
    /// Walks a binary search of `way` over `[0, WAYS)`, recording at each
    /// internal node whether `way` fell in the left half and descending into
    /// the opposite half.
    fn touch(&mut self, way: usize) {
        debug_assert!(way < WAYS, "way index out of range");
        let mut node = 0;
        let mut start = 0;
        let mut end = WAYS;
        while node < WAYS - 1 {
            let mid = usize::midpoint(start, end);
            let is_less = way < mid;
            if is_less {
                end = mid;
            } else {
                start = mid;
            }
            self.set_bit(node, is_less);
            node = 2 * node + 1 + usize::from(!is_less);
        }
    }

    /// Follow the recorded bits from the root to the pseudo-oldest leaf.
    fn oldest(&self) -> usize {
        let mut node = 0;
        while node < WAYS - 1 {
            node = 2 * node + 1 + usize::from(self.bit(node));
        }
        node - (WAYS - 1)
    }

    fn reset(&mut self) {
        self.bits = 0;
    }
}

/// One set: `WAYS` tagged slots plus the PLRU tree.
///
/// A tag word packs the valid flag into bit 0 and the key's tag bits above
/// it, so an all-zero word denotes an unused slot.
struct CacheSet<V, const WAYS: usize> {
    tags: [u64; WAYS],
    values: [Option<V>; WAYS],
    plru: Tree<WAYS>,
}

impl<V, const WAYS: usize> CacheSet<V, WAYS> {
    fn new() -> Self {
        Self {
            tags: [0; WAYS],
            values: core::array::from_fn(|_| None),
            plru: Tree::default(),
        }
    }

    /// The way holding `tag`, if present.
    ///
    /// Tags within a set are unique by construction, so a linear scan with
    /// first-match semantics is exact.
    fn find(&self, tag: u64) -> Option<usize> {
        self.tags.iter().position(|&t| t == tag)
    }

    fn occupied(&self, way: usize) -> bool {
        self.tags[way] & 1 != 0
    }

    fn len(&self) -> usize {
        self.tags.iter().filter(|&&t| t & 1 != 0).count()
    }

    fn clear(&mut self) {
        self.tags = [0; WAYS];
        for value in &mut self.values {
            *value = None;
        }
        self.plru.reset();
    }
}

/// A fixed-capacity set-associative cache with Tree-PLRU eviction.
///
/// `K` is an unsigned integer key type; `V` is any mapped type. `SETS` and
/// `WAYS` are compile-time powers of two. All slot storage lives inline in
/// the cache value; nothing is allocated.
///
/// The cache deliberately does not implement `Clone`: it is meant to be
/// constructed once and live for the lifetime of its owner.
pub struct PlruCache<K: CacheKey, V, const SETS: usize, const WAYS: usize> {
    sets: [CacheSet<V, WAYS>; SETS],
    _key: core::marker::PhantomData<K>,
}

impl<K: CacheKey, V, const SETS: usize, const WAYS: usize> PlruCache<K, V, SETS, WAYS> {
    const GEOMETRY_OK: () = {
        assert!(SETS.is_power_of_two(), "SETS must be a power of two");
        assert!(WAYS.is_power_of_two(), "WAYS must be a power of two");
        assert!(WAYS <= 32, "WAYS larger than 32 are not supported");
    };

    const SET_BITS: u32 = SETS.trailing_zeros();

    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        // Forces the compile-time geometry check for this instantiation.
        let () = Self::GEOMETRY_OK;
        Self {
            sets: core::array::from_fn(|_| CacheSet::new()),
            _key: core::marker::PhantomData,
        }
    }

    /// Maximum number of entries the cache can hold.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        SETS * WAYS
    }

    /// Number of occupied entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.iter().map(CacheSet::len).sum()
    }

    /// True when no entry is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The set index a key maps to.
    #[inline]
    fn set_index(key_word: u64) -> usize {
        (key_word as usize) & (SETS - 1)
    }

    /// The packed tag word for a key: tag bits shifted up, valid flag in
    /// bit 0.
    #[inline]
    fn tag_word(key_word: u64) -> u64 {
        ((key_word >> Self::SET_BITS) << 1) | 1
    }

    /// Look up `key`, constructing the value on a miss.
    ///
    /// On a miss the pseudo-least-recently-used way of the key's set is
    /// evicted and `miss(key, global_index)` supplies the replacement, where
    /// `global_index = set * WAYS + way` identifies the slot so callers can
    /// map it to external per-slot storage. The accessed way becomes the
    /// most recently used either way.
    pub fn access<F>(&mut self, key: K, miss: F) -> &mut V
    where
        F: FnOnce(K, usize) -> V,
    {
        self.access_with(key, miss, |_| true)
    }

    /// [`PlruCache::access`] with a validity predicate.
    ///
    /// On a hit, `valid` inspects the cached value; when it reports `false`
    /// the value is rebuilt in place by `miss` without an eviction. The
    /// rendering pipeline always passes an always-true predicate; the hook
    /// exists for callers whose cached values can go stale.
    pub fn access_with<F, P>(&mut self, key: K, miss: F, valid: P) -> &mut V
    where
        F: FnOnce(K, usize) -> V,
        P: FnOnce(&V) -> bool,
    {
        let word = key.to_word();
        let set_index = Self::set_index(word);
        let tag = Self::tag_word(word);
        let base = set_index * WAYS;

        let way = match self.sets[set_index].find(tag) {
            Some(way) => {
                let stale = self.sets[set_index].values[way]
                    .as_ref()
                    .is_none_or(|value| !valid(value));
                if stale {
                    self.sets[set_index].values[way] = Some(miss(key, base + way));
                }
                way
            }
            None => {
                let victim = self.sets[set_index].plru.oldest();
                let value = miss(key, base + victim);
                let set = &mut self.sets[set_index];
                set.values[victim] = Some(value);
                set.tags[victim] = tag;
                victim
            }
        };

        let set = &mut self.sets[set_index];
        set.plru.touch(way);
        match set.values[way] {
            Some(ref mut value) => value,
            // A found or freshly assigned slot always holds a value.
            None => unreachable!("occupied cache slot without a value"),
        }
    }

    /// True when `key` is cached. Does not update recency.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        let word = key.to_word();
        self.sets[Self::set_index(word)]
            .find(Self::tag_word(word))
            .is_some()
    }

    /// Drop every cached value and reset all tags and PLRU state.
    pub fn clear(&mut self) {
        for set in &mut self.sets {
            set.clear();
        }
    }

    /// Visit all occupied entries in set-major, way-minor order.
    ///
    /// Keys are reconstructed from the stored tag and the set position; the
    /// order is a stable traversal, unrelated to insertion or recency.
    pub fn iter(&self) -> Iter<'_, K, V, SETS, WAYS> {
        Iter {
            cache: self,
            set: 0,
            way: 0,
        }
    }
}

impl<K: CacheKey, V, const SETS: usize, const WAYS: usize> Default
    for PlruCache<K, V, SETS, WAYS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CacheKey + fmt::Debug, V: fmt::Debug, const SETS: usize, const WAYS: usize> fmt::Debug
    for PlruCache<K, V, SETS, WAYS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over `(reconstructed_key, &value)` pairs.
pub struct Iter<'a, K: CacheKey, V, const SETS: usize, const WAYS: usize> {
    cache: &'a PlruCache<K, V, SETS, WAYS>,
    set: usize,
    way: usize,
}

impl<'a, K: CacheKey, V, const SETS: usize, const WAYS: usize> Iterator
    for Iter<'a, K, V, SETS, WAYS>
{
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.set < SETS {
            let set = &self.cache.sets[self.set];
            let way = self.way;
            if way < WAYS {
                self.way += 1;
                if set.occupied(way) {
                    let tag = set.tags[way] >> 1;
                    let key_word =
                        (tag << PlruCache::<K, V, SETS, WAYS>::SET_BITS) | self.set as u64;
                    let value = set.values[way].as_ref()?;
                    return Some((K::from_word(key_word), value));
                }
            } else {
                self.set += 1;
                self.way = 0;
            }
        }
        None
    }
}
