//! Property-based tests for target graph construction.
//!
//! These tests use proptest to generate random target sets and verify that
//! the chain invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use std::collections::BTreeSet;

    use crate::catalog::ToolchainCatalog;
    use crate::graph::GraphBuilder;
    use crate::matrix::TestUnit;
    use crate::target::{TargetType, TargetVersion};
    use crate::toolchain::ToolchainSelector;
    use crate::version::JavaVersion;
    use proptest::prelude::*;

    fn finalize(base: u32, releases: &BTreeSet<u32>, kind: TargetType, strict: bool) -> crate::graph::TargetGraph {
        // every version from 8 to 30 is installed so strict mode always resolves
        let catalog = ToolchainCatalog::from_paths(
            (8..=30).map(|major| (JavaVersion::new(major), format!("/opt/jdk{}", major))),
        );
        let selector = ToolchainSelector::new(&catalog, JavaVersion::new(17), strict);

        let mut builder = GraphBuilder::new();
        builder.base_version(TargetVersion::of(JavaVersion::new(base))).unwrap();
        for release in releases {
            builder
                .target_version(TargetVersion::of(JavaVersion::new(*release)), kind)
                .unwrap();
        }
        builder.finalize(&selector).unwrap()
    }

    // ============================================================================
    // chain ordering
    // ============================================================================

    proptest! {
        /// Property: units are strictly ascending and each depends on the previous one
        #[test]
        fn chain_is_sorted_and_linear(
            base in 8u32..12,
            releases in prop::collection::btree_set(12u32..=30, 0..8),
            strict in any::<bool>(),
        ) {
            let graph = finalize(base, &releases, TargetType::Both, strict);

            for units in [graph.main_units(), graph.test_units()] {
                prop_assert_eq!(units.len(), releases.len() + 1);
                prop_assert!(units[0].depends_on.is_none());
                for pair in units.windows(2) {
                    prop_assert!(pair[0].release < pair[1].release);
                    prop_assert_eq!(pair[1].depends_on.as_deref(), Some(pair[0].name.as_str()));
                }
            }
        }

        /// Property: declaration order never changes the plan
        #[test]
        fn declaration_order_is_irrelevant(
            releases in prop::collection::btree_set(9u32..=30, 1..8),
        ) {
            let catalog = ToolchainCatalog::default();
            let selector = ToolchainSelector::new(&catalog, JavaVersion::new(30), false);

            let mut forward = GraphBuilder::new();
            let mut backward = GraphBuilder::new();
            forward.base_version(TargetVersion::of(JavaVersion::new(8))).unwrap();
            backward.base_version(TargetVersion::of(JavaVersion::new(8))).unwrap();
            for release in releases.iter() {
                forward.target_version(TargetVersion::of(JavaVersion::new(*release)), TargetType::Main).unwrap();
            }
            for release in releases.iter().rev() {
                backward.target_version(TargetVersion::of(JavaVersion::new(*release)), TargetType::Main).unwrap();
            }

            let forward = forward.finalize(&selector).unwrap();
            let backward = backward.finalize(&selector).unwrap();
            prop_assert_eq!(forward.main_units(), backward.main_units());
        }

        /// Property: no compilation uses a JDK older than the unit's release or the floor
        #[test]
        fn compile_toolchain_meets_release_and_floor(
            base in 8u32..12,
            releases in prop::collection::btree_set(12u32..=30, 0..8),
            strict in any::<bool>(),
        ) {
            let graph = finalize(base, &releases, TargetType::Both, strict);

            for unit in graph.main_units().iter().chain(graph.test_units()) {
                prop_assert!(unit.toolchain.version >= unit.release);
                prop_assert!(unit.toolchain.version >= graph.floor());
            }
        }
    }

    // ============================================================================
    // test matrix
    // ============================================================================

    proptest! {
        /// Property: each test run sees exactly its own and all lower test layers
        #[test]
        fn test_classes_are_flattened(
            releases in prop::collection::btree_set(9u32..=30, 0..8),
        ) {
            let graph = finalize(8, &releases, TargetType::Test, false);
            let matrix = graph.test_matrix();
            prop_assert_eq!(matrix.len(), releases.len() + 1);

            for (index, unit) in matrix.iter().enumerate() {
                prop_assert_eq!(unit.test_classes.len(), index + 1);
                prop_assert_eq!(unit.primary, index == 0);
                let expected: Vec<_> = graph.test_units()[..=index]
                    .iter()
                    .rev()
                    .map(|compiled| compiled.output_dir.clone())
                    .collect();
                prop_assert_eq!(&unit.test_classes, &expected);
            }
        }

        /// Property: strict mode runs everything; lenient only what the running JDK doesn't cover
        #[test]
        fn skip_predicate_follows_policy(
            releases in prop::collection::btree_set(9u32..=30, 0..8),
            strict in any::<bool>(),
        ) {
            let graph = finalize(8, &releases, TargetType::Test, strict);
            let running = graph.running();

            for unit in graph.test_matrix() {
                let expected = unit.primary || strict || unit.release > running;
                prop_assert_eq!(TestUnit::should_run(unit), expected);
            }
        }
    }
}
