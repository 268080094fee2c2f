//! Region-scoped key codec tests

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use cirrus_types::{RegionKeyError, RegionScopedKey};

const FIELDS: &[&str] = &[
    "us-east-1",
    "eu-west-1",
    "my-elb",
    "a",
    "db.instance_01",
    "with space",
    "日本",
];

fn hash_of(key: &RegionScopedKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn concrete_scenario() {
    let key = RegionScopedKey::new("us-east-1", "my-elb");
    assert_eq!(key.encode(), "us-east-1/my-elb");
    assert_eq!(RegionScopedKey::decode("us-east-1/my-elb").unwrap(), key);
}

#[test]
fn round_trip_for_every_delimiter_free_pair() {
    for region in FIELDS {
        for name in FIELDS {
            let key = RegionScopedKey::new(*region, *name);
            let decoded = RegionScopedKey::decode(&key.encode()).unwrap();
            assert_eq!(decoded, key, "round trip of {key}");
        }
    }
}

#[test]
fn delimiter_in_region_is_not_preserved() {
    // "a/b" + "c" encodes to the same token as "a" + "b/c"; decode rejects it
    // rather than guess which split was meant.
    let left = RegionScopedKey::new("a/b", "c");
    let right = RegionScopedKey::new("a", "b/c");
    assert_ne!(left, right);
    assert_eq!(left.encode(), right.encode());
    assert!(RegionScopedKey::decode(&left.encode()).is_err());
}

#[test]
fn malformed_tokens_are_rejected() {
    for token in ["", "no-delimiter-here", "a/b/c"] {
        let err = RegionScopedKey::decode(token).unwrap_err();
        assert_eq!(
            err,
            RegionKeyError::Malformed {
                token: token.to_string()
            }
        );
        assert!(err.to_string().contains("regionId/name"));
    }
}

#[test]
fn absent_fields_are_rejected() {
    assert!(RegionScopedKey::from_fields(None, Some("x".into())).is_err());
    assert!(RegionScopedKey::from_fields(Some("x".into()), None).is_err());
    assert!(RegionScopedKey::decode_optional(None).is_err());
}

#[test]
fn equality_matches_field_equality_and_hash_agrees() {
    for r1 in FIELDS {
        for n1 in FIELDS {
            for r2 in FIELDS {
                for n2 in FIELDS {
                    let a = RegionScopedKey::new(*r1, *n1);
                    let b = RegionScopedKey::new(*r2, *n2);
                    assert_eq!(a == b, r1 == r2 && n1 == n2);
                    if a == b {
                        assert_eq!(hash_of(&a), hash_of(&b));
                    }
                }
            }
        }
    }
}

#[test]
fn usable_as_map_key_across_regions() {
    let mut sizes = HashMap::new();
    sizes.insert(RegionScopedKey::new("us-east-1", "db"), 10);
    sizes.insert(RegionScopedKey::new("us-west-2", "db"), 20);

    let lookup: RegionScopedKey = "us-west-2/db".parse().unwrap();
    assert_eq!(sizes.get(&lookup), Some(&20));
}

#[test]
fn display_differs_from_token() {
    let key = RegionScopedKey::new("us-east-1", "my-elb");
    assert_eq!(format!("{key}"), "[region=us-east-1, name=my-elb]");
    assert_ne!(key.to_string(), key.encode());
}

#[test]
fn shared_across_threads() {
    let key = std::sync::Arc::new(RegionScopedKey::new("us-east-1", "my-elb"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let key = std::sync::Arc::clone(&key);
            std::thread::spawn(move || key.encode())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "us-east-1/my-elb");
    }
}
