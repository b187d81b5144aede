//! Default taxonomy snapshot.
//!
//! Loads `benchmarks.json` at compile time via `include_str!` and parses it
//! once via `lazy_static`. Callers receive deep copies they are free to grow.

use lazy_static::lazy_static;

use super::benchmark_taxonomy::BenchmarkTaxonomy;

lazy_static! {
    static ref DEFAULT_TAXONOMY: BenchmarkTaxonomy = load();
}

fn load() -> BenchmarkTaxonomy {
    let json = include_str!("benchmarks.json");
    BenchmarkTaxonomy::from_json(json).expect("benchmarks.json must be a valid taxonomy")
}

/// A fresh copy of the built-in taxonomy.
pub fn default_taxonomy() -> BenchmarkTaxonomy {
    DEFAULT_TAXONOMY.clone()
}
