//! Faster (but not DoS-resistant) hashmap, and a word counter built on it
use std::collections::HashMap;
use std::hash::{Hash, Hasher, BuildHasherDefault};

/// Act like a streaming farmhash
///
/// farmhash isn't a streaming hash, so each write rehashes its bytes seeded with the state so
/// far. `str` hashes as its bytes followed by a 0xff terminator, which must not wipe the bytes.
pub struct FarmHashLie (u64);

impl Default for FarmHashLie {
    #[inline]
    fn default() -> FarmHashLie { FarmHashLie(0) }
}

impl Hasher for FarmHashLie {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHashLie>;
pub type FarmMap<X, Y> = HashMap<X, Y, Farm>;

pub fn new_farm<X: Hash+Eq, Y>() -> FarmMap<X, Y> {
    Default::default()
}

/// Frequency table that remembers the order words were first seen
///
/// Ranking is a stable sort on the insertion order, so equal counts keep first-encountered order.
#[derive(Default, Debug, Clone)]
pub struct Counter {
    slots: FarmMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl Counter {
    pub fn new() -> Self {
        Counter { slots: new_farm(), entries: vec![] }
    }

    /// Count one more occurrence of `word`
    pub fn add(&mut self, word: &str) {
        match self.slots.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.slots.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    pub fn get(&self, word: &str) -> usize {
        self.slots.get(word).map(|&slot| self.entries[slot].1).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent words, most frequent first
    pub fn most_common(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.entries.clone();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_strings_hash_apart() {
        let mut a = FarmHashLie::default();
        let mut b = FarmHashLie::default();
        "cat".hash(&mut a);
        "dog".hash(&mut b);
        assert_ne!(a.finish(), b.finish());
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let mut counter = Counter::new();
        for word in &["sat", "cat", "ran", "cat", "mat"] {
            counter.add(word);
        }
        assert_eq!(counter.get("cat"), 2);
        assert_eq!(counter.get("dog"), 0);
        let top = counter.most_common(3);
        assert_eq!(top, vec![
            ("cat".to_string(), 2),
            ("sat".to_string(), 1),
            ("ran".to_string(), 1),
        ]);
    }
}
