//! Property-based tests for weight calculation invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Weights sum to 1 for any fund with holdings
//! - Multi-path contributions are additive
//! - Repeated invocations are independent (no shared traversal state)
//! - Base funds decompose to nothing

use fundlens_core::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

/// Generates a layered DAG with `layers` levels and `width` funds per level.
///
/// Every fund in layer `k` holds a pseudo-random non-empty subset of
/// layer `k+1`, so cross-links create plenty of diamonds while the
/// structure stays acyclic. Layer 0 is a single root.
fn generate_layered_dag(layers: usize, width: usize, seed: u64) -> Vec<HoldingRecord> {
    let mut records = Vec::new();

    let name = |layer: usize, slot: usize| format!("L{layer}N{slot}");

    for layer in 0..layers {
        let parents = if layer == 0 { 1 } else { width };
        for p in 0..parents {
            let mut linked = 0;
            for c in 0..width {
                let hash = simple_hash(seed, (layer * 10_000 + p * 100 + c) as u64);
                // Roughly two thirds of the possible edges exist.
                if hash % 3 != 0 {
                    let value = 100 + (hash % 9_900);
                    records.push(HoldingRecord::new(
                        name(layer, p),
                        name(layer + 1, c),
                        value.to_string(),
                    ));
                    linked += 1;
                }
            }
            if linked == 0 {
                // Keep every non-leaf fund connected.
                records.push(HoldingRecord::new(name(layer, p), name(layer + 1, 0), "100"));
            }
        }
    }

    records
}

fn assert_sums_to_one(result: &FundWeights, context: &str) {
    let tolerance = dec!(0.000000001);
    let sum = result.weight_sum();
    assert!(
        (sum - Decimal::ONE).abs() <= tolerance,
        "weights should sum to 1, got {sum} for {context}"
    );
}

// =============================================================================
// PROPERTY: WEIGHTS SUM TO 1
// =============================================================================

#[test]
fn property_weights_sum_to_one() {
    for seed in 0..10 {
        for (layers, width) in [(1, 4), (2, 5), (3, 6), (4, 8)] {
            let records = generate_layered_dag(layers, width, seed);
            let graph = build_graph(records, BuildOptions::default()).unwrap();

            for root in graph.roots() {
                let result = calculate_weights(&graph, root).unwrap();
                assert_sums_to_one(
                    &result,
                    &format!("seed={seed}, layers={layers}, width={width}, root={root}"),
                );
            }
        }
    }
}

#[test]
fn property_weights_are_assigned_to_base_funds_only() {
    for seed in 0..10 {
        let records = generate_layered_dag(3, 6, seed);
        let graph = build_graph(records, BuildOptions::default()).unwrap();

        for root in graph.roots() {
            let result = calculate_weights(&graph, root).unwrap();
            for base in result.weights.keys() {
                assert!(
                    graph.fund(base).unwrap().is_base(),
                    "weight assigned to non-base fund {base} (seed={seed})"
                );
            }
        }
    }
}

// =============================================================================
// PROPERTY: MULTI-PATH ADDITIVITY
// =============================================================================

#[test]
fn property_diamond_weight_equals_sum_of_paths() {
    for seed in 0..20 {
        // A holds B and C; both hold the shared base fund D.
        let b_value = 100 + simple_hash(seed, 1) % 1_000;
        let c_value = 100 + simple_hash(seed, 2) % 1_000;
        let bd = 10 + simple_hash(seed, 3) % 100;
        let cd = 10 + simple_hash(seed, 4) % 100;

        let records = vec![
            HoldingRecord::new("A", "B", b_value.to_string()),
            HoldingRecord::new("A", "C", c_value.to_string()),
            HoldingRecord::new("B", "D", bd.to_string()),
            HoldingRecord::new("C", "D", cd.to_string()),
        ];
        let graph = build_graph(records, BuildOptions::default()).unwrap();
        let result = calculate_weights(&graph, "A").unwrap();

        let total = Decimal::from(b_value + c_value);
        let via_b = Decimal::from(b_value) / total;
        let via_c = Decimal::from(c_value) / total;

        // D is the only base fund under both B and C, so each path
        // contributes its full branch share.
        assert_eq!(result.weights["D"], via_b + via_c);
        assert_sums_to_one(&result, &format!("diamond seed={seed}"));
    }
}

// =============================================================================
// PROPERTY: INVOCATIONS ARE INDEPENDENT
// =============================================================================

#[test]
fn property_repeat_invocations_agree() {
    for seed in 0..5 {
        let records = generate_layered_dag(3, 5, seed);
        let graph = build_graph(records, BuildOptions::default()).unwrap();
        let root = graph.roots().next().unwrap().to_string();

        let first = calculate_weights(&graph, &root).unwrap();
        for _ in 0..3 {
            let again = calculate_weights(&graph, &root).unwrap();
            assert_eq!(first, again, "repeat invocation diverged (seed={seed})");
        }
    }
}

#[test]
fn property_base_funds_always_decompose_to_nothing() {
    for seed in 0..5 {
        let records = generate_layered_dag(2, 6, seed);
        let graph = build_graph(records, BuildOptions::default()).unwrap();

        let bases: Vec<String> = graph.base_funds().map(str::to_string).collect();
        assert!(!bases.is_empty());
        for base in bases {
            let result = calculate_weights(&graph, &base).unwrap();
            assert_eq!(result.value, Decimal::ZERO);
            assert!(result.weights.is_empty());
        }
    }
}
