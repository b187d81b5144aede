use chrono::NaiveDate;

use crate::errors::Result;
use crate::securities::SecurityRecord;

/// One file's worth of records, produced incrementally by the extraction layer.
///
/// The batch only pulls records; it never sees the underlying document.
pub trait RecordSource: Send {
    type Records: Iterator<Item = Result<SecurityRecord>>;

    /// Name used in logs (usually the file name).
    fn name(&self) -> &str;

    /// Publication date of the underlying file, if known.
    fn publication_date(&self) -> Option<NaiveDate> {
        None
    }

    fn into_records(self) -> Self::Records;
}

type WrapRecord = fn(SecurityRecord) -> Result<SecurityRecord>;

/// A source backed by records already in memory.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    publication_date: Option<NaiveDate>,
    records: Vec<SecurityRecord>,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, records: Vec<SecurityRecord>) -> Self {
        Self {
            name: name.into(),
            publication_date: None,
            records,
        }
    }

    pub fn published_on(mut self, date: NaiveDate) -> Self {
        self.publication_date = Some(date);
        self
    }
}

impl RecordSource for InMemorySource {
    type Records = std::iter::Map<std::vec::IntoIter<SecurityRecord>, WrapRecord>;

    fn name(&self) -> &str {
        &self.name
    }

    fn publication_date(&self) -> Option<NaiveDate> {
        self.publication_date
    }

    fn into_records(self) -> Self::Records {
        self.records.into_iter().map(Ok as WrapRecord)
    }
}
