//! Bundle id and name matching
//!
//! Resolves a user supplied id or name, possibly abbreviated, against the
//! bundles reported by the server.

use crate::domain::BundleRecord;

/// Select the records designated by `query`, keeping their original order
///
/// A record matches when either its name or its id matches. An empty result
/// is a normal outcome; callers decide whether it is a failure.
pub fn filter_by_id_or_name<'a>(records: &'a [BundleRecord], query: &str) -> Vec<&'a BundleRecord> {
    records
        .iter()
        .filter(|record| has_bundle_name(record, query) || has_bundle_id(record, query))
        .collect()
}

/// Whether the bundle name equals or starts with `name`
pub fn has_bundle_name(record: &BundleRecord, name: &str) -> bool {
    record.name().starts_with(name)
}

/// Whether the bundle id is designated by `query`
pub fn has_bundle_id(record: &BundleRecord, query: &str) -> bool {
    id_matches(&record.bundle_id, query)
}

/// Match an actual id against a full, prefix or composite-prefix query
///
/// Composite matching applies only when both sides contain a `-`; each side
/// is split at its first `-` and both parts are prefix-matched.
pub fn id_matches(actual: &str, query: &str) -> bool {
    if actual == query {
        return true;
    }

    match (actual.split_once('-'), query.split_once('-')) {
        (Some((actual_digest, actual_config)), Some((query_digest, query_config))) => {
            actual_digest.starts_with(query_digest) && actual_config.starts_with(query_config)
        }
        _ => actual.starts_with(query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BundleAttributes;

    fn record(id: &str, name: &str) -> BundleRecord {
        BundleRecord {
            bundle_id: id.to_string(),
            has_error: false,
            attributes: BundleAttributes {
                bundle_name: name.to_string(),
                compatibility_version: "1".to_string(),
                roles: vec![],
            },
            bundle_installations: vec![],
            bundle_executions: vec![],
        }
    }

    fn ids(matched: &[&BundleRecord]) -> Vec<String> {
        matched.iter().map(|r| r.bundle_id.clone()).collect()
    }

    #[test]
    fn test_exact_id_match() {
        let records = vec![record("abcd1234-ef00", "app")];
        assert_eq!(filter_by_id_or_name(&records, "abcd1234-ef00").len(), 1);
    }

    #[test]
    fn test_composite_prefix_match() {
        let records = vec![record("abcd1234-ef00aa", "app")];
        assert_eq!(filter_by_id_or_name(&records, "abcd-ef").len(), 1);
    }

    #[test]
    fn test_composite_config_digest_mismatch() {
        let records = vec![record("abcd1234-ef00aa", "app")];
        assert!(filter_by_id_or_name(&records, "abcd-zz").is_empty());
    }

    #[test]
    fn test_composite_bundle_digest_mismatch() {
        assert!(!id_matches("abcd1234-ef00aa", "zzzz-ef"));
    }

    #[test]
    fn test_simple_query_against_composite_id() {
        assert!(id_matches("abcd1234-ef00", "abcd1234"));
        assert!(id_matches("abcd1234-ef00", "abcd1234-"));
        assert!(!id_matches("abcd1234-ef00", "ef00"));
    }

    #[test]
    fn test_composite_query_against_simple_id() {
        // Only one side is composite, so the whole query must be a prefix
        assert!(!id_matches("abcd1234", "abcd-12"));
        assert!(id_matches("abcd1234", "abcd"));
    }

    #[test]
    fn test_split_at_first_hyphen_only() {
        assert!(id_matches("aa11-bb22-cc33", "aa-bb22-c"));
        assert!(!id_matches("aa11-bb22-cc33", "aa-bb-cc"));
        // Trailing query segments take part in the config digest prefix
        assert!(!id_matches("aa11-bb22", "aa-bb-zz"));
    }

    #[test]
    fn test_name_prefix_independent_of_id() {
        let records = vec![record("xx", "myapp-1.0")];
        assert_eq!(filter_by_id_or_name(&records, "myapp").len(), 1);
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let records = vec![record("xx", "MyApp")];
        assert!(filter_by_id_or_name(&records, "myapp").is_empty());
    }

    #[test]
    fn test_order_preserved_and_deterministic() {
        let records = vec![
            record("aaa1-bbb1", "web"),
            record("ccc1-ddd1", "db"),
            record("aaa2-bbb2", "webapp"),
        ];

        let first = ids(&filter_by_id_or_name(&records, "web"));
        let second = ids(&filter_by_id_or_name(&records, "web"));

        assert_eq!(first, vec!["aaa1-bbb1", "aaa2-bbb2"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_match_is_empty() {
        let records = vec![record("aaa1-bbb1", "web")];
        assert!(filter_by_id_or_name(&records, "zzz").is_empty());
        assert!(filter_by_id_or_name(&[], "web").is_empty());
    }
}
