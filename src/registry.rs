//! Static metric tables: category-to-mbean registry and attribute allowlist
//!
//! Both tables are hand-maintained configuration. They are built once at
//! startup from the declarative const slices below and never mutated;
//! extending coverage means adding a row, not touching logic.

use std::collections::HashSet;

use crate::error::CollectorError;

/// Fixed path prefix of the coordinator's mbean REST API.
pub const JMX_API_PREFIX: &str = "/v1/jmx/mbean/";

/// Category identifier -> mbean object name, in dispatch order.
const PRESTO_MBEANS: &[(&str, &str)] = &[
    ("queryManager", "presto.execution:name=QueryManager"),
    ("taskManager", "presto.execution:name=TaskManager"),
    ("taskExecutor", "presto.execution.executor:name=TaskExecutor"),
    ("clusterMemoryManager", "presto.memory:name=ClusterMemoryManager"),
    ("memoryPoolGeneral", "presto.memory:type=ClusterMemoryPool,name=general"),
];

/// Attribute name -> owning category. The owning category is recorded for
/// operators reading this table; forwarding checks the attribute name only,
/// so a name shared by two beans is forwarded under both.
const ALLOWED_ATTRIBUTES: &[(&str, &str)] = &[
    ("RunningQueries", "queryManager"),
    ("QueuedQueries", "queryManager"),
    ("AbandonedQueries", "queryManager"),
    ("CanceledQueries", "queryManager"),
    ("FailedQueries", "queryManager"),
    ("CompletedQueries", "queryManager"),
    ("RunningTasks", "taskManager"),
    ("FailedTasks", "taskManager"),
    ("InputDataSizeInBytes", "taskManager"),
    ("OutputDataSizeInBytes", "taskManager"),
    ("RunningSplits", "taskExecutor"),
    ("QueuedSplits", "taskExecutor"),
    ("BlockedSplits", "taskExecutor"),
    ("ProcessorExecutorThreads", "taskExecutor"),
    ("ClusterMemoryBytes", "clusterMemoryManager"),
    ("ClusterTotalMemoryReservation", "clusterMemoryManager"),
    ("ClusterUserMemoryReservation", "clusterMemoryManager"),
    ("NumberOfLeakedQueries", "clusterMemoryManager"),
    ("BlockedNodes", "memoryPoolGeneral"),
    ("FreeBytes", "memoryPoolGeneral"),
    ("ReservedBytes", "memoryPoolGeneral"),
    ("MaxBytes", "memoryPoolGeneral"),
];

/// Immutable category -> mbean path lookup table.
///
/// Iteration follows declaration order so that consecutive poll cycles
/// produce identically ordered sink calls.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<(String, String)>,
}

impl Registry {
    /// The curated Presto coordinator beans.
    pub fn presto() -> Self {
        Self::from_entries(PRESTO_MBEANS.iter().copied())
    }

    /// Build a registry from (category, mbean path) pairs.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(category, path)| (category.to_string(), path.to_string()))
                .collect(),
        }
    }

    /// Look up the mbean path registered for a category.
    pub fn resolve_path(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, path)| path.as_str())
    }

    /// All registered category identifiers, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(category, _)| category.as_str())
    }

    /// Build the fully qualified mbean URI for a category.
    ///
    /// `base` is an operator-supplied origin (scheme + host[:port]) and is
    /// concatenated as given; registered paths are trusted configuration and
    /// are not escaped.
    pub fn resolve_uri(&self, base: &str, category: &str) -> Result<String, CollectorError> {
        let path = self
            .resolve_path(category)
            .ok_or_else(|| CollectorError::UnknownCategory(category.to_string()))?;
        Ok(format!("{base}{JMX_API_PREFIX}{path}"))
    }
}

/// Immutable set of attribute names eligible for forwarding.
///
/// Absence from the set is expected, not an error: the coordinator's beans
/// expose far more attributes than are curated here.
#[derive(Debug, Clone)]
pub struct Allowlist {
    names: HashSet<String>,
}

impl Allowlist {
    /// The curated Presto attribute names.
    pub fn presto() -> Self {
        Self::from_names(ALLOWED_ATTRIBUTES.iter().map(|&(name, _)| name))
    }

    /// Build an allowlist from attribute names.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            names: names.into_iter().map(str::to_string).collect(),
        }
    }

    /// Whether an attribute name may be forwarded.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
