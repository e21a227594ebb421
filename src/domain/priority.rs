//! Chain display priorities and the sentinel for unrecognized chains.

use crate::domain::ChainId;
use std::collections::HashMap;

/// Priority resolved for chains absent from the table.
///
/// Strictly lower than every configured priority, so `priority >
/// SENTINEL_PRIORITY` is exactly the "recognized chain" predicate.
pub const SENTINEL_PRIORITY: i32 = -99;

/// Fixed mapping from chain identifiers to display priority.
///
/// Higher priority sorts first. Built once at startup and shared; the
/// resolver is a plain hash lookup and is called at least twice per balance
/// per projection (once filtering, once ordering).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    priorities: HashMap<ChainId, i32>,
}

impl PriorityTable {
    /// Create an empty table. Every chain resolves to the sentinel.
    pub fn new() -> Self {
        PriorityTable {
            priorities: HashMap::new(),
        }
    }

    /// Build a table from (chain, priority) pairs.
    ///
    /// Configured priorities must be greater than [`SENTINEL_PRIORITY`];
    /// the configuration layer rejects values at or below it.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ChainId, i32)>) -> Self {
        PriorityTable {
            priorities: pairs.into_iter().collect(),
        }
    }

    /// Add or replace one chain's priority.
    pub fn with_priority(mut self, chain: ChainId, priority: i32) -> Self {
        self.priorities.insert(chain, priority);
        self
    }

    /// Resolve the priority for a chain.
    ///
    /// Total: unrecognized chains resolve to [`SENTINEL_PRIORITY`] rather
    /// than failing.
    pub fn priority_of(&self, chain: &ChainId) -> i32 {
        self.priorities
            .get(chain)
            .copied()
            .unwrap_or(SENTINEL_PRIORITY)
    }

    /// Returns true if the chain has a configured priority.
    pub fn is_ranked(&self, chain: &ChainId) -> bool {
        self.priorities.contains_key(chain)
    }

    /// Number of configured chains.
    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    /// Returns true if no chains are configured.
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

impl Default for PriorityTable {
    /// The built-in chain set, used when no override is configured.
    fn default() -> Self {
        let chain = |name: &str| ChainId::new(name).expect("built-in chain name is non-empty");
        PriorityTable::from_pairs([
            (chain("Osmosis"), 100),
            (chain("Ethereum"), 50),
            (chain("Arbitrum"), 30),
            (chain("Zilliqa"), 20),
            (chain("Neo"), 20),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(name: &str) -> ChainId {
        ChainId::new(name).unwrap()
    }

    #[test]
    fn test_configured_priority() {
        let table = PriorityTable::default();
        assert_eq!(table.priority_of(&chain("Osmosis")), 100);
        assert_eq!(table.priority_of(&chain("Ethereum")), 50);
        assert_eq!(table.priority_of(&chain("Neo")), 20);
    }

    #[test]
    fn test_unknown_chain_resolves_to_sentinel() {
        let table = PriorityTable::default();
        assert_eq!(table.priority_of(&chain("Bitcoin")), SENTINEL_PRIORITY);
        assert!(!table.is_ranked(&chain("Bitcoin")));
    }

    #[test]
    fn test_sentinel_below_all_defaults() {
        let table = PriorityTable::default();
        for name in ["Osmosis", "Ethereum", "Arbitrum", "Zilliqa", "Neo"] {
            assert!(table.priority_of(&chain(name)) > SENTINEL_PRIORITY);
        }
    }

    #[test]
    fn test_empty_table_is_all_sentinel() {
        let table = PriorityTable::new();
        assert!(table.is_empty());
        assert_eq!(table.priority_of(&chain("Ethereum")), SENTINEL_PRIORITY);
    }

    #[test]
    fn test_with_priority_overrides() {
        let table = PriorityTable::default().with_priority(chain("Ethereum"), 200);
        assert_eq!(table.priority_of(&chain("Ethereum")), 200);
    }

    #[test]
    fn test_resolver_is_repeatable() {
        let table = PriorityTable::default();
        let ethereum = chain("Ethereum");
        let first = table.priority_of(&ethereum);
        for _ in 0..10 {
            assert_eq!(table.priority_of(&ethereum), first);
        }
    }
}
