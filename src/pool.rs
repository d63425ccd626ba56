//! The candidate name pool.

use anyhow::{Result, bail};

/// The fixed set of candidate names winners are drawn from.
///
/// Built once at startup from configuration and never mutated afterwards.
/// Construction validates the configured list, since a malformed pool is a
/// configuration defect that should surface immediately rather than skew
/// a draw later.
#[derive(Debug, Clone)]
pub struct NamePool {
    names: Vec<String>,
}

impl NamePool {
    /// Build a pool from configured names.
    ///
    /// Fails on an empty list, a blank entry, or a duplicate entry.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            bail!("name pool is empty");
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                bail!("name pool entry {i} is blank");
            }
            if names[..i].contains(name) {
                bail!("duplicate name in pool: {name}");
            }
        }
        Ok(Self { names })
    }

    /// All candidate names, in configured order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of candidates. Always at least 1.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
