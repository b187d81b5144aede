//! Benchmark taxonomy - descriptors, the taxonomy container and the
//! embedded default snapshot.

mod benchmark_taxonomy;
mod descriptor;
mod registry;

pub use benchmark_taxonomy::{BenchmarkTaxonomy, TaxonomySnapshot};
pub use descriptor::{BenchmarkDescriptor, DescriptorKind};
pub use registry::default_taxonomy;
