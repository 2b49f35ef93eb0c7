use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{btree_map, BTreeMap, HashMap};
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::arena::{Arena, EntryId};
use crate::traits::Scored;

/// Capacity used when none (or zero) is requested.
pub const DEFAULT_TOP: usize = 1000;

struct Entry<K, V> {
    key: K,
    value: V,
}

/// Where a value sits under the ordering law, ignoring its key.
///
/// `Less` means "ranks higher": greater scores sort first, and among equal
/// scores the smaller tie-breaker does.
#[derive(PartialEq, Eq)]
struct Standing<S, T> {
    score: S,
    tie_breaker: T,
}

impl<S, T> Standing<S, T> {
    fn of<V>(value: &V) -> Self
    where
        V: Scored<Score = S, TieBreaker = T>,
    {
        Self {
            score: value.score(),
            tie_breaker: value.tie_breaker(),
        }
    }
}

impl<S: Ord, T: Ord> Ord for Standing<S, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.tie_breaker.cmp(&other.tie_breaker))
    }
}

impl<S: Ord, T: Ord> PartialOrd for Standing<S, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Key of the order index. The entry key is the last resort so that two
/// distinct entries never compare equal: among identical standings the larger
/// key ranks higher, and the smaller one is evicted first.
#[derive(PartialEq, Eq)]
struct OrderKey<S, T, K> {
    standing: Standing<S, T>,
    key: K,
}

impl<S: Ord, T: Ord, K: Ord> Ord for OrderKey<S, T, K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.standing
            .cmp(&other.standing)
            .then_with(|| other.key.cmp(&self.key))
    }
}

impl<S: Ord, T: Ord, K: Ord> PartialOrd for OrderKey<S, T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

type OrderIndex<K, V> =
    BTreeMap<OrderKey<<V as Scored>::Score, <V as Scored>::TieBreaker, K>, EntryId>;

/// A collection that keeps only the `top` best-ranked entries it has been given,
/// addressable by key.
///
/// Each entry is stored once, in an arena, and reached through two indexes: a
/// hash map from key to entry for O(1) lookups, and a B-tree ordered by score
/// (then tie-breaker, then key, larger first) for O(log N) updates and in-order
/// traversal.
/// When the set is full, a new key is only admitted if it strictly outranks the
/// current lowest entry, which is then evicted.
///
/// # Examples
///
/// ```
/// use leaderboard::RankedSet;
///
/// let mut board = RankedSet::new(Some(2));
///
/// board.insert("ada", (10, 1));
/// board.insert("bob", (20, 2));
/// board.insert("cyd", (15, 3)); // outranks ada, who is evicted
///
/// let order: Vec<_> = board.iter().map(|(name, _)| *name).collect();
/// assert_eq!(order, ["bob", "cyd"]);
/// assert_eq!(board.rank("cyd"), 2);
/// assert!(board.find("ada").is_none());
/// ```
pub struct RankedSet<K, V: Scored> {
    top: usize,
    entries: Arena<Entry<K, V>>,
    by_key: HashMap<K, EntryId>,
    by_rank: OrderIndex<K, V>,
}

impl<K, V> RankedSet<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: Scored,
{
    /// Creates an empty set holding at most `top` entries.
    ///
    /// `None` and `Some(0)` both fall back to [`DEFAULT_TOP`].
    ///
    /// ```
    /// use leaderboard::{RankedSet, DEFAULT_TOP};
    ///
    /// let board: RankedSet<u32, (u32, i64)> = RankedSet::new(Some(0));
    /// assert_eq!(board.top(), DEFAULT_TOP);
    /// ```
    pub fn new(top: Option<usize>) -> Self {
        let top = match top {
            Some(0) => {
                debug!("capacity of 0 requested, using the default of {}", DEFAULT_TOP);
                DEFAULT_TOP
            }
            Some(top) => top,
            None => DEFAULT_TOP,
        };

        Self {
            top,
            entries: Arena::new(),
            by_key: HashMap::new(),
            by_rank: BTreeMap::new(),
        }
    }

    /// Maximum number of entries the set retains.
    pub fn top(&self) -> usize {
        self.top
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_key.contains_key(key)
    }

    /// Inserts or updates the value for `key`.
    ///
    /// * An existing key is removed and reinserted with the new value, which may
    ///   move it up or down. Updates are never refused.
    /// * A new key is added while the set is below capacity.
    /// * Once the set is full, a new key is admitted only if its value strictly
    ///   outranks the lowest entry, which is evicted to make room. A value that
    ///   merely ties with the lowest entry (same score and tie-breaker) is
    ///   discarded: the entry already in place keeps its spot.
    ///
    /// ```
    /// use leaderboard::RankedSet;
    ///
    /// let mut board = RankedSet::new(Some(3));
    /// board.insert(1, (50, 100));
    /// board.insert(2, (70, 101));
    /// board.insert(1, (90, 102)); // update moves player 1 to the top
    ///
    /// assert_eq!(board.len(), 2);
    /// assert_eq!(board.rank(&1), 1);
    /// assert_eq!(board.find(&1), Some(&(90, 102)));
    /// ```
    pub fn insert(&mut self, key: K, value: V) {
        if let Some(&id) = self.by_key.get(&key) {
            self.detach(id);
        } else if self.by_key.len() >= self.top {
            let candidate = Standing::of(&value);
            let lowest = match self.by_rank.last_key_value() {
                Some((lowest, &id)) if candidate < lowest.standing => id,
                _ => {
                    trace!("candidate does not outrank the lowest entry, discarded");
                    return;
                }
            };
            self.detach(lowest);
            trace!("evicted the lowest entry to admit a new key");
        }

        self.attach(key, value);
    }

    /// Removes `key` from the set. Does nothing if it is absent.
    pub fn erase<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Some(&id) = self.by_key.get(key) {
            self.detach(id);
        }
    }

    pub fn clear(&mut self) {
        self.by_rank.clear();
        self.by_key.clear();
        self.entries.clear();
    }

    /// Returns the value stored for `key`, if it is ranked.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_key
            .get(key)
            .and_then(|&id| self.entries.get(id))
            .map(|entry| &entry.value)
    }

    /// Returns the 1-based position of `key`, best first, or 0 when `key` is not
    /// in the set.
    ///
    /// This walks the order index from the top, so it costs O(N). It is meant for
    /// occasional queries against a bounded board.
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&id) = self.by_key.get(key) else {
            return 0;
        };

        self.by_rank
            .values()
            .position(|&ranked| ranked == id)
            .map_or(0, |position| position + 1)
    }

    /// The best-ranked entry.
    pub fn highest(&self) -> Option<(&K, &V)> {
        self.by_rank
            .first_key_value()
            .and_then(|(_, &id)| self.entry(id))
    }

    /// The entry that would be evicted next.
    pub fn lowest(&self) -> Option<(&K, &V)> {
        self.by_rank
            .last_key_value()
            .and_then(|(_, &id)| self.entry(id))
    }

    /// Iterates over the entries from highest to lowest rank.
    ///
    /// ```
    /// use leaderboard::RankedSet;
    ///
    /// let mut board = RankedSet::new(None);
    /// board.insert('a', (5, 2));
    /// board.insert('b', (5, 1)); // same score, reached it earlier
    /// board.insert('c', (9, 3));
    ///
    /// let order: Vec<char> = board.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(order, ['c', 'b', 'a']);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            handles: self.by_rank.values(),
            entries: &self.entries,
        }
    }

    fn entry(&self, id: EntryId) -> Option<(&K, &V)> {
        self.entries.get(id).map(|entry| (&entry.key, &entry.value))
    }

    fn attach(&mut self, key: K, value: V) {
        let order_key = OrderKey {
            standing: Standing::of(&value),
            key: key.clone(),
        };
        let id = self.entries.insert(Entry {
            key: key.clone(),
            value,
        });
        self.by_key.insert(key, id);
        self.by_rank.insert(order_key, id);
    }

    fn detach(&mut self, id: EntryId) -> Option<Entry<K, V>> {
        let entry = self.entries.remove(id)?;
        self.by_key.remove(&entry.key);
        self.by_rank.remove(&OrderKey {
            standing: Standing::of(&entry.value),
            key: entry.key.clone(),
        });
        Some(entry)
    }

    /// Panics unless both indexes describe exactly the entries held in the arena.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.len() <= self.top, "holds more than top entries");
        assert_eq!(self.by_key.len(), self.entries.len());
        assert_eq!(self.by_rank.len(), self.entries.len());

        for (key, &id) in &self.by_key {
            let entry = self.entries.get(id).expect("identity index points at a dead entry");
            assert!(entry.key == *key, "identity index key differs from the stored key");
        }

        for (order_key, &id) in &self.by_rank {
            let entry = self.entries.get(id).expect("order index points at a dead entry");
            assert!(order_key.key == entry.key, "order index key differs from the stored key");
            assert!(
                order_key.standing == Standing::of(&entry.value),
                "order index standing differs from the stored value"
            );
            assert_eq!(self.by_key.get(&entry.key), Some(&id));
        }
    }
}

impl<K, V> Default for RankedSet<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: Scored,
{
    fn default() -> Self {
        Self::new(None)
    }
}

impl<K, V> Extend<(K, V)> for RankedSet<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: Scored,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, K, V> IntoIterator for &'a RankedSet<K, V>
where
    K: Hash + Eq + Ord + Clone,
    V: Scored,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> fmt::Debug for RankedSet<K, V>
where
    K: Hash + Eq + Ord + Clone + fmt::Debug,
    V: Scored + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`RankedSet`], best entry first.
///
/// Created by [`RankedSet::iter`]. Iterate it in reverse to walk the board from
/// the bottom.
pub struct Iter<'a, K, V: Scored> {
    handles: btree_map::Values<'a, OrderKey<V::Score, V::TieBreaker, K>, EntryId>,
    entries: &'a Arena<Entry<K, V>>,
}

impl<K, V: Scored> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            handles: self.handles.clone(),
            entries: self.entries,
        }
    }
}

impl<'a, K, V: Scored> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.handles.next()?;
        self.entries.get(id).map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl<K, V: Scored> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &id = self.handles.next_back()?;
        self.entries.get(id).map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V: Scored> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V: Scored> FusedIterator for Iter<'_, K, V> {}
