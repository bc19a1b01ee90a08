pub mod data;
pub mod insights;

pub use data::loader::{load_file, load_with_format, SourceFormat};
pub use data::model::{FieldValue, JobDataset, JobRef, Row, ValidatedJob};
