use crate::error::{Result, TableError};
use crate::hash::fnv1a_32;
use log::{debug, trace};
use std::fmt;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/// The `BucketTable` maps string keys to values of type `V`.
///
/// Keys are spread over a fixed number of buckets by their FNV-1a hash.
/// Keys that land in the same bucket share a chain, kept in insertion order.
/// The bucket count never changes, so chains simply grow as entries are added.
///
/// Example:
///
/// ```rust
/// # use bucket_table::BucketTable;
/// let mut table = BucketTable::new(10)?;
/// table.put("key".to_owned(), "value".to_owned());
/// assert_eq!(table.get("key"), Some(&"value".to_owned()));
/// assert!(table.remove("key"));
/// assert_eq!(table.get("key"), None);
/// # Ok::<(), bucket_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BucketTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    len: usize,
}

impl<V> BucketTable<V> {
    /// Creates a `BucketTable` with `size` empty buckets.
    ///
    /// Returns `TableError::InvalidBucketCount` if `size` is zero.
    pub fn new(size: usize) -> Result<BucketTable<V>> {
        if size == 0 {
            return Err(TableError::InvalidBucketCount(size));
        }
        debug!("creating table with {} buckets", size);
        let buckets = (0..size).map(|_| Vec::new()).collect();
        Ok(BucketTable { buckets, len: 0 })
    }

    /// Returns the bucket that `key` hashes to.
    pub fn bucket_index(&self, key: &str) -> usize {
        fnv1a_32(key.as_bytes()) as usize % self.buckets.len()
    }

    /// Sets the value of a key.
    ///
    /// If the key already exists its value is replaced in place and the entry
    /// keeps its position in the chain. Otherwise the entry is appended at the
    /// tail of its bucket's chain.
    pub fn put(&mut self, key: String, value: V) {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            trace!("overwriting `{}` in bucket {}", key, index);
            entry.value = value;
            return;
        }

        trace!("inserting `{}` into bucket {}", key, index);
        chain.push(Entry { key, value });
        self.len += 1;
    }

    /// Gets the value of a given key.
    ///
    /// Returns `None` if the given key does not exist.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Removes a given key, returning whether an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];

        match chain.iter().position(|entry| entry.key == key) {
            Some(pos) => {
                // `Vec::remove` shifts the tail down, keeping chain order.
                chain.remove(pos);
                self.len -= 1;
                trace!("removed `{}` from bucket {}", key, index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the table holds an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries chained in bucket `index`, or `None` if out of range.
    pub fn chain_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(Vec::len)
    }

    /// Entries per bucket. Reported only; the table never resizes.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }
}

impl<V: fmt::Display> BucketTable<V> {
    /// Prints every bucket and its chain to standard output.
    pub fn dump(&self) {
        print!("{}", self);
    }
}

impl<V: fmt::Display> fmt::Display for BucketTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {}: ", i)?;
            for entry in chain {
                write!(f, "[Key: {}, Value: {}] -> ", entry.key, entry.value)?;
            }
            writeln!(f, "nil")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BucketTable;

    #[test]
    fn overwrite_keeps_chain_position() {
        let mut table = BucketTable::new(1).unwrap();
        table.put("a".to_owned(), 1);
        table.put("b".to_owned(), 2);
        table.put("a".to_owned(), 3);

        assert_eq!(table.chain_len(0), Some(2));
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.to_string(),
            "Bucket 0: [Key: a, Value: 3] -> [Key: b, Value: 2] -> nil\n"
        );
    }

    #[test]
    fn remove_from_middle_and_tail_of_chain() {
        let mut table = BucketTable::new(1).unwrap();
        for key in &["a", "b", "c"] {
            table.put((*key).to_owned(), key.to_uppercase());
        }

        assert!(table.remove("b"));
        assert!(!table.remove("b"));
        assert_eq!(
            table.to_string(),
            "Bucket 0: [Key: a, Value: A] -> [Key: c, Value: C] -> nil\n"
        );

        assert!(table.remove("c"));
        assert_eq!(table.to_string(), "Bucket 0: [Key: a, Value: A] -> nil\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn chain_len_out_of_range() {
        let table = BucketTable::<u8>::new(3).unwrap();
        assert_eq!(table.chain_len(2), Some(0));
        assert_eq!(table.chain_len(3), None);
    }
}
