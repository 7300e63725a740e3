//! Output types: per-region stats and the ordered report mapping.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RegionStats {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    #[serde(rename = "breaches")]
    pub breach_count: u64,
}

impl RegionStats {
    /// Reported for regions with no matching records.
    pub const ZERO: RegionStats = RegionStats {
        avg_latency: 0.0,
        p95_latency: 0.0,
        avg_uptime: 0.0,
        breach_count: 0,
    };
}

/// Region (caller's spelling) -> stats, in first-insertion order.
///
/// Inserting an existing key overwrites the value in place (last write wins).
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsReport {
    entries: Vec<(String, RegionStats)>,
    // key -> position in `entries`
    index: HashMap<String, usize>,
}

impl MetricsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
            index: HashMap::with_capacity(n),
        }
    }

    pub fn insert(&mut self, region: String, stats: RegionStats) {
        match self.index.get(&region) {
            Some(&pos) => self.entries[pos].1 = stats,
            None => {
                self.index.insert(region.clone(), self.entries.len());
                self.entries.push((region, stats));
            }
        }
    }

    pub fn get(&self, region: &str) -> Option<&RegionStats> {
        self.index.get(region).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionStats)> {
        self.entries.iter().map(|(k, s)| (k.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(breaches: u64) -> RegionStats {
        RegionStats { breach_count: breaches, ..RegionStats::ZERO }
    }

    #[test]
    fn repeated_key_overwrites_in_place() {
        let mut r = MetricsReport::new();
        r.insert("iad".into(), stats(1));
        r.insert("sfo".into(), stats(2));
        r.insert("iad".into(), stats(3));

        assert_eq!(r.len(), 2);
        assert_eq!(r.get("iad").map(|s| s.breach_count), Some(3));
        let keys: Vec<&str> = r.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["iad", "sfo"]);
    }

    #[test]
    fn lookup_is_exact_case() {
        let mut r = MetricsReport::with_capacity(2);
        r.insert("us-east".into(), stats(1));
        r.insert("US-EAST".into(), stats(1));
        assert_eq!(r.len(), 2);
        assert!(r.get("Us-East").is_none());
    }
}
