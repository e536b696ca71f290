//! Hash collections backed by AHash.
//!
//! Used wherever ids are looked up or de-duplicated on hot paths.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_dedupes() {
        let set: HashSet<u64> = [3, 1, 3, 2, 1].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_map_position_lookup() {
        let map: HashMap<&str, usize> = ["a", "b", "c"]
            .into_iter()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();
        assert_eq!(map.get("c"), Some(&2));
        assert_eq!(map.get("z"), None);
    }
}
