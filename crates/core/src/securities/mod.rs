//! Debt security reference records, as handed over by the extraction layer.

mod security_model;

pub use security_model::SecurityRecord;
