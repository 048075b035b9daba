//! Property tests for run name resolution and entity headers.

use covmin_model::{EntityColumn, RunNameMode, RunNameOptions, RunNameResolver};
use proptest::prelude::*;

fn strict_resolver() -> RunNameResolver {
    RunNameResolver::new(RunNameOptions {
        mode: RunNameMode::Strict,
        ..RunNameOptions::default()
    })
    .expect("default prefix compiles")
}

proptest! {
    #[test]
    fn run_number_round_trips_into_header(suffix in "[A-Za-z0-9]{1,8}") {
        let run = strict_resolver().resolve(&format!("COVMIN_{suffix}")).unwrap();
        prop_assert_eq!(run.number(), suffix.as_str());
        let header = EntityColumn::for_run(&run).header();
        prop_assert_eq!(header, format!("entity:sampleG{suffix}_id"));
    }

    #[test]
    fn override_never_keeps_separator(raw in "[A-Za-z0-9_]{0,12}[A-Za-z0-9][A-Za-z0-9_]{0,12}") {
        let column = EntityColumn::from_override(&raw, "_").unwrap();
        prop_assert!(!column.token().contains('_'));
        prop_assert!(column.header().starts_with("entity:sample"));
        prop_assert!(column.header().ends_with("_id"));
    }
}

#[test]
fn documented_example_header() {
    let run = strict_resolver().resolve("COVMIN_0042").unwrap();
    assert_eq!(EntityColumn::for_run(&run).header(), "entity:sampleG0042_id");
}
