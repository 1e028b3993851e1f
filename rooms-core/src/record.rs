//! Types and traits for recording training metrics.
//!
//! # Core Components
//!
//! * [`Record`] - A container for key-value pairs of various data types
//! * [`RecordValue`] - The types of values that can be stored
//! * [`Recorder`] - The interface for writing and aggregating records
//! * [`RecordStorage`] - Storage with aggregation of scalar values
//! * [`BufferedRecorder`] - A recorder that keeps records in memory
//! * [`NullRecorder`] - A recorder that discards all records
//!
//! # Basic Usage
//!
//! ```rust
//! use rooms_core::record::{Record, RecordValue};
//!
//! let mut record = Record::empty();
//! record.insert("episode", RecordValue::Scalar(3.0));
//! record.insert("discounted_return", RecordValue::Scalar(0.9));
//! record.insert("q_values", RecordValue::Array1(vec![0.0, 0.5, 0.1, 0.0]));
//!
//! assert_eq!(record.get_scalar("episode").unwrap(), 3.0);
//! ```
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
pub use storage::RecordStorage;
