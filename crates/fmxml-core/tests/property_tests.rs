//! Property-based tests for command accumulation
//!
//! Most strategies generate plain field names; `any_field_name` also mixes
//! in names that spell scope and verb directives. Values are arbitrary text.

use std::collections::BTreeMap;

use fmxml_core::{CommandBuilder, DirectiveKey, DirectiveValue, FmErrorKind};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_ ]{0,15}"
}

const RESERVED_NAMES: [&str; 7] = [
    "-new", "-delete", "-find", "-findall", "-edit", "-lay", "-db",
];

fn any_field_name() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => field_name(),
        1 => prop::sample::select(RESERVED_NAMES.to_vec()).prop_map(str::to_string),
    ]
}

fn field_map(min: usize) -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(field_name(), ".{0,20}", min..8)
}

fn people() -> CommandBuilder {
    let mut builder = CommandBuilder::new("contacts");
    builder.set_layout("people").unwrap();
    builder
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_find_by_fields_contains_every_pair(fields in field_map(1)) {
        let mut builder = people();
        builder.find_by_fields(fields.clone()).unwrap();
        let set = builder.command_set();

        prop_assert_eq!(
            set.get(&DirectiveKey::Db).cloned(),
            Some(DirectiveValue::from("contacts"))
        );
        prop_assert_eq!(
            set.get(&DirectiveKey::Lay).cloned(),
            Some(DirectiveValue::from("people"))
        );
        prop_assert_eq!(set.get(&DirectiveKey::Find).cloned(), Some(DirectiveValue::Marker));
        for (name, value) in &fields {
            prop_assert_eq!(
                set.get(&DirectiveKey::Custom(name.clone())).cloned(),
                Some(DirectiveValue::from(value.as_str()))
            );
        }
        prop_assert_eq!(set.len(), fields.len() + 3);
    }

    #[test]
    fn prop_update_record_has_one_marker(
        id in 1_i64..1_000_000,
        fields in prop::collection::btree_map(any_field_name(), ".{0,20}", 0..8),
    ) {
        let mut builder = people();
        if let Err(err) = builder.update_record(id, fields) {
            prop_assert_eq!(err.kind(), FmErrorKind::InvalidArgument);
            prop_assert!(builder.command_set().is_empty());
            return Ok(());
        }

        prop_assert_eq!(
            builder.command_set().get(&DirectiveKey::Lay).cloned(),
            Some(DirectiveValue::from("people"))
        );
        let markers: Vec<_> = builder
            .command_set()
            .keys()
            .filter(|k| k.is_operation())
            .cloned()
            .collect();
        prop_assert_eq!(markers, vec![DirectiveKey::Edit]);
    }

    #[test]
    fn prop_add_command_items_last_write_wins(
        first in field_map(0),
        second in field_map(0),
    ) {
        let mut builder = CommandBuilder::new("contacts");
        builder.add_command_items(first.clone());
        builder.add_command_items(second.clone());

        let mut expected = first;
        expected.extend(second);

        let set = builder.command_set();
        prop_assert_eq!(set.len(), expected.len());
        for (name, value) in &expected {
            prop_assert_eq!(
                set.get(&DirectiveKey::Custom(name.clone())).cloned(),
                Some(DirectiveValue::from(value.as_str()))
            );
        }
    }

    #[test]
    fn prop_sort_rank_bounds(rank in -20_i64..30) {
        let mut builder = CommandBuilder::new("contacts");
        let outcome = builder.sort(&[fmxml_core::SortSpec::new("Name", rank)]);
        prop_assert_eq!(outcome.is_ok(), (1..=9).contains(&rank));
    }
}
