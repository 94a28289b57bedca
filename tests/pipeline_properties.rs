//! Purity, idempotence and monotonic completeness over randomly thinned records.

use compound_catalog::catalog::Catalog;
use compound_catalog::complete::complete;
use compound_catalog::compound_id::CompoundId;
use compound_catalog::infer::{infer, infer_once};
use compound_catalog::partly_known_compound::PartlyKnownCompound;
use compound_catalog::polymorph::cross_pollinate;
use compound_catalog::reference_data;
use compound_catalog::speculate::speculate;
use more_asserts::assert_le;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

const PHASES: [&str; 2] = ["gas", "liquid"];

fn thin_leaves(fields: &mut Map<String, Value>, keep: f64, rng: &mut StdRng) {
    fields.retain(|_, _| rng.random_bool(keep));
}

/// Drops each known leaf field with probability `1 - keep`.
fn thin(record: &PartlyKnownCompound, keep: f64, rng: &mut StdRng) -> PartlyKnownCompound {
    let Value::Object(mut fields) = serde_json::to_value(record).unwrap() else {
        panic!("a compound serializes to an object");
    };
    let gas = fields.remove("gas");
    let liquid = fields.remove("liquid");
    let solids = fields.remove("solids");
    thin_leaves(&mut fields, keep, rng);

    for (name, phase) in PHASES.iter().zip([gas, liquid]) {
        if let Some(Value::Object(mut phase)) = phase {
            thin_leaves(&mut phase, keep, rng);
            fields.insert(name.to_string(), Value::Object(phase));
        }
    }
    if let Some(Value::Array(solids)) = solids {
        let solids = solids
            .into_iter()
            .map(|solid| match solid {
                Value::Object(mut solid) => {
                    thin_leaves(&mut solid, keep, rng);
                    Value::Object(solid)
                }
                other => other,
            })
            .collect();
        fields.insert("solids".to_string(), Value::Array(solids));
    }
    serde_json::from_value(Value::Object(fields)).unwrap()
}

/// Raw table records and completed catalog records, thinned at random.
fn random_records(count: usize, seed: u64) -> Vec<PartlyKnownCompound> {
    let sources = reference_data::sources().unwrap();
    let catalog = Catalog::build(&sources).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let id = CompoundId::ALL[rng.random_range(0..CompoundId::COUNT)];
            let keep = rng.random_range(0.1..0.9);
            if rng.random_bool(0.5) {
                thin(&sources.compound(id), keep, &mut rng)
            } else {
                thin(&PartlyKnownCompound::from(catalog.get(id)), keep, &mut rng)
            }
        })
        .collect()
}

/// Every field known in `before` holds the same value in `after`.
fn assert_known_fields_kept(before: &PartlyKnownCompound, after: &PartlyKnownCompound) {
    fn walk(before: &Value, after: &Value, path: &str) {
        match (before, after) {
            (Value::Null, _) => {}
            (Value::Object(b), Value::Object(a))
                if path.is_empty() || PHASES.contains(&path) || path.starts_with("solids[") =>
            {
                for (key, value) in b {
                    let child = if path.is_empty() { key.clone() } else { format!("{}.{}", path, key) };
                    walk(value, a.get(key).unwrap_or(&Value::Null), &child);
                }
            }
            (Value::Array(b), Value::Array(a)) if path == "solids" => {
                assert_eq!(b.len(), a.len(), "polymorph count changed");
                for (index, (b, a)) in b.iter().zip(a).enumerate() {
                    walk(b, a, &format!("solids[{}]", index));
                }
            }
            (b, a) => assert_eq!(b, a, "{} was overwritten", path),
        }
    }
    walk(&serde_json::to_value(before).unwrap(), &serde_json::to_value(after).unwrap(), "");
}

#[test]
fn test_infer_is_pure() {
    for record in random_records(40, 11) {
        assert_eq!(infer(&record), infer(&record));
        assert_eq!(speculate(&record), speculate(&record));
    }
}

#[test]
fn test_infer_and_speculate_are_idempotent() {
    for record in random_records(40, 23) {
        let inferred = infer(&record);
        assert_eq!(infer(&inferred), inferred);
        assert_eq!(infer_once(&inferred), inferred);

        let speculated = speculate(&inferred);
        assert_eq!(speculate(&speculated), speculated);
    }
}

#[test]
fn test_known_count_never_decreases() {
    let sources = reference_data::sources().unwrap();
    let catalog = Catalog::build(&sources).unwrap();
    let fallback = catalog.get(CompoundId::Water);

    for record in random_records(40, 37) {
        let inferred = infer(&record);
        let speculated = speculate(&inferred);
        let completed = PartlyKnownCompound::from(&complete(&speculated, fallback));

        assert_le!(record.known_count(), inferred.known_count());
        assert_le!(inferred.known_count(), speculated.known_count());
        assert_le!(speculated.known_count(), completed.known_count());
        assert!(completed.missing_fields().is_empty(), "{:?}", completed.missing_fields());
    }
}

#[test]
fn test_stages_never_overwrite_known_fields() {
    for record in random_records(40, 41) {
        let inferred = infer(&record);
        assert_known_fields_kept(&record, &inferred);
        let speculated = speculate(&inferred);
        assert_known_fields_kept(&inferred, &speculated);
    }
}

#[test]
fn test_sweep_result_is_independent_of_which_polymorph_held_the_value() {
    let sources = reference_data::sources().unwrap();
    let catalog = Catalog::build(&sources).unwrap();
    let ice = PartlyKnownCompound::from(catalog.get(CompoundId::Water)).solids.remove(0);
    let mut rng = StdRng::seed_from_u64(53);

    for _ in 0..20 {
        let count = rng.random_range(2..6);
        let holder = rng.random_range(0..count);
        let mut solids = vec![Default::default(); count];
        solids[holder] = ice.clone();
        for solid in cross_pollinate(&solids) {
            assert_eq!(solid, ice);
        }
    }
}
