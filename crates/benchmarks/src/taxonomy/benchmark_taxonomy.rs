//! Taxonomy container: generic-family and specific descriptors in priority order.

use std::collections::{BTreeMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use super::descriptor::{BenchmarkDescriptor, DescriptorKind};
use crate::errors::TaxonomyError;

/// Serialized form of a taxonomy, as stored in JSON snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomySnapshot {
    /// Generic-family descriptors in scan order; catch-alls last.
    #[serde(default)]
    pub generic: Vec<BenchmarkDescriptor>,
    /// Specific descriptors in scan order.
    #[serde(default)]
    pub specific: Vec<BenchmarkDescriptor>,
    /// Successor benchmark for each legacy benchmark label.
    #[serde(default)]
    pub replacements: BTreeMap<String, String>,
}

/// The benchmark taxonomy used to classify floating rates.
///
/// Cloning yields an independent deep copy. Each worker classifies against
/// its own copy so names learned during a run stay local until the copies
/// are reconciled with [`merge_learned_names`](Self::merge_learned_names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaxonomySnapshot", into = "TaxonomySnapshot")]
pub struct BenchmarkTaxonomy {
    generic: Vec<BenchmarkDescriptor>,
    specific: Vec<BenchmarkDescriptor>,
    replacements: BTreeMap<String, String>,
}

impl BenchmarkTaxonomy {
    /// Builds a taxonomy, checking partition placement and label uniqueness.
    pub fn new(
        generic: Vec<BenchmarkDescriptor>,
        specific: Vec<BenchmarkDescriptor>,
        replacements: BTreeMap<String, String>,
    ) -> Result<Self, TaxonomyError> {
        let mut labels = HashSet::new();
        let mut catch_all_families = HashSet::new();

        for descriptor in &generic {
            if !descriptor.kind().is_generic() {
                return Err(TaxonomyError::partition_mismatch(
                    descriptor.label(),
                    descriptor.kind().as_str(),
                    "generic",
                ));
            }
            if let DescriptorKind::FamilyCatchAll { family } = descriptor.kind() {
                if !catch_all_families.insert(family.as_str()) {
                    return Err(TaxonomyError::MultipleCatchAll(family.clone()));
                }
            }
            if !labels.insert(descriptor.label()) {
                return Err(TaxonomyError::DuplicateBenchmark(
                    descriptor.label().to_string(),
                ));
            }
        }

        for descriptor in &specific {
            if descriptor.kind().is_generic() {
                return Err(TaxonomyError::partition_mismatch(
                    descriptor.label(),
                    descriptor.kind().as_str(),
                    "specific",
                ));
            }
            if !labels.insert(descriptor.label()) {
                return Err(TaxonomyError::DuplicateBenchmark(
                    descriptor.label().to_string(),
                ));
            }
        }

        Ok(Self {
            generic,
            specific,
            replacements,
        })
    }

    /// Parses and validates a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, TaxonomyError> {
        let snapshot: TaxonomySnapshot = serde_json::from_str(json)?;
        Self::try_from(snapshot)
    }

    pub fn to_json(&self) -> Result<String, TaxonomyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn generic(&self) -> &[BenchmarkDescriptor] {
        &self.generic
    }

    pub fn specific(&self) -> &[BenchmarkDescriptor] {
        &self.specific
    }

    /// All descriptors, generic first, in scan order.
    pub fn descriptors(&self) -> impl Iterator<Item = &BenchmarkDescriptor> {
        self.generic.iter().chain(self.specific.iter())
    }

    pub fn get(&self, label: &str) -> Option<&BenchmarkDescriptor> {
        self.descriptors().find(|d| d.label() == label)
    }

    pub(crate) fn generic_mut(&mut self) -> &mut [BenchmarkDescriptor] {
        &mut self.generic
    }

    pub(crate) fn specific_mut(&mut self) -> &mut [BenchmarkDescriptor] {
        &mut self.specific
    }

    fn get_mut(&mut self, label: &str) -> Option<&mut BenchmarkDescriptor> {
        self.generic
            .iter_mut()
            .chain(self.specific.iter_mut())
            .find(|d| d.label() == label)
    }

    /// Adds a learned name to the descriptor labelled `label`.
    pub fn learn_name(&mut self, label: &str, name: &str) -> Result<bool, TaxonomyError> {
        self.get_mut(label)
            .map(|d| d.learn_name(name))
            .ok_or_else(|| TaxonomyError::UnknownBenchmark(label.to_string()))
    }

    /// Labels reported for this taxonomy: family members in declared order,
    /// then specific benchmarks alphabetically. Catch-alls have no fixed label.
    pub fn benchmark_labels(&self) -> Vec<String> {
        let mut specific: Vec<String> = self
            .specific
            .iter()
            .map(|d| d.label().to_string())
            .collect();
        specific.sort();

        self.generic
            .iter()
            .filter(|d| matches!(d.kind(), DescriptorKind::FamilyMember { .. }))
            .map(|d| d.label().to_string())
            .chain(specific)
            .collect()
    }

    /// Successor benchmark for a legacy one (e.g. "GBP LIBOR" -> "SONIA").
    pub fn replacement_for(&self, label: &str) -> Option<&str> {
        self.replacements.get(label).map(String::as_str)
    }

    pub fn replacements(&self) -> &BTreeMap<String, String> {
        &self.replacements
    }

    /// Total number of known names across all descriptors.
    pub fn name_count(&self) -> usize {
        self.descriptors().map(|d| d.names().len()).sum()
    }

    /// Unions every descriptor's names with the same descriptor in `other`.
    ///
    /// Both taxonomies are expected to descend from one snapshot; a label
    /// missing here is reported as [`TaxonomyError::UnknownBenchmark`].
    pub fn merge_learned_names(&mut self, other: &BenchmarkTaxonomy) -> Result<(), TaxonomyError> {
        for theirs in other.descriptors() {
            let ours = self
                .get_mut(theirs.label())
                .ok_or_else(|| TaxonomyError::UnknownBenchmark(theirs.label().to_string()))?;
            for name in theirs.names() {
                if ours.learn_name(name.as_str()) {
                    debug!("Merged learned name '{}' into {}", name, theirs.label());
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<TaxonomySnapshot> for BenchmarkTaxonomy {
    type Error = TaxonomyError;

    fn try_from(snapshot: TaxonomySnapshot) -> Result<Self, Self::Error> {
        Self::new(snapshot.generic, snapshot.specific, snapshot.replacements)
    }
}

impl From<BenchmarkTaxonomy> for TaxonomySnapshot {
    fn from(taxonomy: BenchmarkTaxonomy) -> Self {
        Self {
            generic: taxonomy.generic,
            specific: taxonomy.specific,
            replacements: taxonomy.replacements,
        }
    }
}
