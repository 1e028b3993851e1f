//! Record storage and aggregation implementation.
use super::{Record, RecordValue};
use std::collections::HashSet;
use xxhash_rust::xxh3::Xxh3Builder;

/// A storage system for records with aggregation capabilities.
///
/// Scalars stored under the same key more than once are aggregated into
/// `{key}_min`, `{key}_max`, `{key}_mean` and `{key}_median`. For the other
/// value types the most recent value is kept.
#[derive(Default)]
pub struct RecordStorage {
    data: Vec<Record>,
}

fn min(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::INFINITY, f32::min))
}

fn max(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().copied().fold(f32::NEG_INFINITY, f32::max))
}

fn mean(vs: &[f32]) -> RecordValue {
    RecordValue::Scalar(vs.iter().sum::<f32>() / vs.len() as f32)
}

/// Sorts the input in place.
fn median(mut vs: Vec<f32>) -> RecordValue {
    vs.sort_by(|x, y| x.total_cmp(y));
    RecordValue::Scalar(vs[vs.len() / 2])
}

impl RecordStorage {
    fn get_keys(&self) -> HashSet<String, Xxh3Builder> {
        let mut keys = HashSet::<String, Xxh3Builder>::default();
        for record in self.data.iter() {
            for k in record.keys() {
                keys.insert(k.clone());
            }
        }
        keys
    }

    /// Returns the most recent value with the given key.
    fn latest(&self, key: &str) -> Option<&RecordValue> {
        self.data.iter().rev().find_map(|record| record.get(key))
    }

    /// Panics if a value under `key` is not a scalar.
    fn scalar(&self, key: &str) -> Record {
        let vs: Vec<f32> = self
            .data
            .iter()
            .filter_map(|record| match record.get(key) {
                Some(RecordValue::Scalar(v)) => Some(*v),
                Some(_) => panic!("Expect RecordValue::Scalar for {}", key),
                None => None,
            })
            .collect();

        if vs.len() == 1 {
            Record::from_slice(&[(key.to_string(), RecordValue::Scalar(vs[0]))])
        } else {
            Record::from_slice(&[
                (format!("{}_min", key), min(&vs)),
                (format!("{}_max", key), max(&vs)),
                (format!("{}_mean", key), mean(&vs)),
                (format!("{}_median", key), median(vs)),
            ])
        }
    }

    /// Creates a new empty record storage.
    pub fn new() -> Self {
        Self { data: vec![] }
    }

    /// Stores a record in the storage.
    pub fn store(&mut self, record: Record) {
        self.data.push(record);
    }

    /// Aggregates all stored records and clears the storage.
    pub fn aggregate(&mut self) -> Record {
        let mut record = Record::empty();

        for key in self.get_keys().iter() {
            let r = match self.latest(key) {
                Some(RecordValue::Scalar(..)) => self.scalar(key),
                Some(value) => Record::from_slice(&[(key.clone(), value.clone())]),
                None => continue,
            };
            record = record.merge(r);
        }

        self.data = vec![];

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_scalars() {
        let mut storage = RecordStorage::new();
        for v in [3.0, 1.0, 2.0].iter() {
            storage.store(Record::from_scalar("return", *v));
        }
        storage.store(Record::from_scalar("epsilon", 0.5));

        let record = storage.aggregate();
        assert_eq!(record.get_scalar("return_min").unwrap(), 1.0);
        assert_eq!(record.get_scalar("return_max").unwrap(), 3.0);
        assert_eq!(record.get_scalar("return_mean").unwrap(), 2.0);
        assert_eq!(record.get_scalar("return_median").unwrap(), 2.0);
        assert_eq!(record.get_scalar("epsilon").unwrap(), 0.5);

        // Storage is cleared after aggregation
        assert!(storage.aggregate().is_empty());
    }

    #[test]
    fn test_aggregate_keeps_latest_string() {
        let mut storage = RecordStorage::new();
        storage.store(Record::from_slice(&[("agent", RecordValue::String("a".into()))]));
        storage.store(Record::from_slice(&[("agent", RecordValue::String("b".into()))]));

        let record = storage.aggregate();
        assert_eq!(record.get_string("agent").unwrap(), "b");
    }
}
