//! Search options
//!
//! Options bound an otherwise unbounded breadth-first search. They can be
//! built in code or loaded from TOML:
//!
//! ```toml
//! max_depth = 6
//! max_nodes = 10000
//! max_fanout = 8
//! ```

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bail_invalid;
use crate::error::Result;

/// Bounds and cancellation for a single search call
///
/// The default value imposes no bounds, so a search over an unbounded
/// generator graph may never return unless the target is reachable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Maximum path length in edges; paths of this length are tested but not expanded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Maximum size of the visited set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,

    /// Maximum neighbors considered per node, in resolution order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fanout: Option<usize>,

    /// Cancellation flag, checked once per dequeued path
    #[serde(skip)]
    pub interrupt: Option<Arc<AtomicBool>>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = Some(nodes);
        self
    }

    pub fn with_max_fanout(mut self, fanout: usize) -> Self {
        self.max_fanout = Some(fanout);
        self
    }

    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Parse options from a TOML document and validate them
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let opts: SearchOptions = toml::from_str(content)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Reject bounds that would make every search trivially empty
    pub fn validate(&self) -> Result<()> {
        if self.max_nodes == Some(0) {
            bail_invalid!("max_nodes", 0);
        }
        if self.max_fanout == Some(0) {
            bail_invalid!("max_fanout", 0);
        }
        Ok(())
    }

    pub(crate) fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
