use super::{Record, RecordStorage, RecordValue, Recorder};
use log::info;

/// Buffered recorder.
///
/// Written records are kept in memory in the order they arrive, e.g. one
/// record per training episode. Stored records are aggregated on
/// [`Recorder::flush`] and the aggregated scalars are logged.
#[derive(Default)]
pub struct BufferedRecorder {
    buf: Vec<Record>,
    storage: RecordStorage,
}

impl BufferedRecorder {
    /// Construct the recorder.
    pub fn new() -> Self {
        Self {
            buf: Vec::default(),
            storage: RecordStorage::new(),
        }
    }

    /// Returns an iterator over the written records.
    pub fn iter(&self) -> std::slice::Iter<Record> {
        self.buf.iter()
    }

    /// Returns the number of written records.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if no record has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Recorder for BufferedRecorder {
    /// Write a [`Record`] to the buffer.
    fn write(&mut self, record: Record) {
        self.buf.push(record);
    }

    fn store(&mut self, record: Record) {
        self.storage.store(record);
    }

    fn flush(&mut self, step: i64) {
        let record = self.storage.aggregate();
        let mut scalars = record
            .iter()
            .filter_map(|(k, v)| match v {
                RecordValue::Scalar(v) => Some((k.clone(), *v)),
                _ => None,
            })
            .collect::<Vec<_>>();
        scalars.sort_by(|a, b| a.0.cmp(&b.0));
        for (k, v) in scalars {
            info!("[{}] {} = {:.4}", step, k, v);
        }
    }
}
