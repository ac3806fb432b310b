//! Property tests for the selection state machines

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;
use crate::catalog::OptionCatalog;
use crate::outside::{Bounds, PointerRouter};

#[derive(Debug, Clone)]
enum Input {
    Type(String),
    Backspace,
    Next,
    Previous,
    Hover(usize),
}

fn input_strategy() -> impl Strategy<Value = Input> {
    prop_oneof![
        "[a-cA-C ]{1,2}".prop_map(Input::Type),
        Just(Input::Backspace),
        Just(Input::Next),
        Just(Input::Previous),
        (0usize..8).prop_map(Input::Hover),
    ]
}

fn catalog_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-cA-C]{1,3}", 0..8)
}

fn drive(picker: &mut Picker, input: &Input) {
    match input {
        Input::Type(text) => picker.type_str(text),
        Input::Backspace => picker.backspace(),
        Input::Next => picker.next(),
        Input::Previous => picker.previous(),
        Input::Hover(row) => picker.hover(*row),
    }
}

fn highlighted(picker: &Picker) -> Option<usize> {
    match picker.kind() {
        PickerKind::Single(select) => select.highlighted(),
        PickerKind::Multi(select) => select.highlighted(),
        PickerKind::Palette(_) => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    #[test]
    fn prop_cancel_never_changes_selection(
        options in catalog_strategy(),
        multi in any::<bool>(),
        outside in any::<bool>(),
        inputs in prop::collection::vec(input_strategy(), 0..20),
    ) {
        let variant = if multi { Variant::AccentedMulti } else { Variant::Default };
        let router = PointerRouter::new();
        let initial: Vec<String> = options.iter().take(1).cloned().collect();
        let mut picker = Picker::new(
            variant,
            OptionCatalog::new(options),
            initial,
            SelectSettings::default(),
            4,
        )
        .with_router(router.clone());
        picker.set_bounds(Bounds::new(0, 0, 20, 5));
        let before = picker.selected();

        picker.open();
        for input in &inputs {
            drive(&mut picker, input);
        }

        if outside {
            let reported = router.pointer_down(100, 100);
            prop_assert!(picker.dismiss(&reported));
        } else {
            picker.cancel();
        }

        prop_assert_eq!(picker.selected(), before);
        prop_assert!(!picker.is_open());
        prop_assert_eq!(picker.query(), "");
        prop_assert_eq!(router.active(), 0);
    }

    #[test]
    fn prop_highlight_stays_within_combined_list(
        options in catalog_strategy(),
        multi in any::<bool>(),
        inputs in prop::collection::vec(input_strategy(), 0..30),
    ) {
        let variant = if multi { Variant::AccentedMulti } else { Variant::Default };
        let mut picker = Picker::new(
            variant,
            OptionCatalog::new(options),
            Vec::new(),
            SelectSettings::default(),
            4,
        );
        picker.open();

        for input in &inputs {
            drive(&mut picker, input);
            let rows = picker.row_count();
            match highlighted(&picker) {
                Some(index) => prop_assert!(index < rows),
                None => prop_assert_eq!(rows, 0),
            }
        }
    }

    #[test]
    fn prop_creation_is_atomic(
        options in catalog_strategy(),
        query in "[a-dA-D]{1,4}",
        multi in any::<bool>(),
    ) {
        let variant = if multi { Variant::AccentedMulti } else { Variant::Default };
        let hook_calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hook_calls);
        let mut picker = Picker::new(
            variant,
            OptionCatalog::new(options),
            Vec::new(),
            SelectSettings::default(),
            4,
        )
        .with_on_create(move |_| counter.set(counter.get() + 1));

        picker.type_str(&query);
        let existed = picker.catalog().contains(&query);
        let before = picker.catalog().len();

        // Jump to the last row, which is the create row when offered
        picker.previous();
        let change = picker.commit();

        if existed {
            prop_assert_eq!(hook_calls.get(), 0);
            prop_assert_eq!(picker.catalog().len(), before);
        } else {
            let change = change.expect("a new value must be creatable");
            prop_assert_eq!(change.created(), Some(query.as_str()));
            prop_assert!(change.values().contains(&query));
            prop_assert!(picker.catalog().contains(&query));
            prop_assert_eq!(picker.catalog().len(), before + 1);
            prop_assert_eq!(hook_calls.get(), 1);
        }
    }

    #[test]
    fn prop_cap_is_never_exceeded(
        options in prop::collection::vec("[a-z]{1,3}", 1..10),
        max in 0usize..4,
        picks in prop::collection::vec(0usize..10, 0..15),
        creates in prop::collection::vec("[A-Z]{4}", 0..4),
    ) {
        let mut select = MultiSelect::new(
            OptionCatalog::new(options),
            Vec::new(),
            SelectSettings {
                max_selected: Some(max),
                ..SelectSettings::default()
            },
        );
        select.open();

        for pick in picks {
            select.hover(pick);
            if let Some(change) = select.commit() {
                select.apply(&change);
            }
            prop_assert!(select.values().len() <= max);
        }

        for name in creates {
            select.set_query(&name);
            if let Some(change) = select.commit() {
                select.apply(&change);
            }
            prop_assert!(select.values().len() <= max);
        }

        if let Some(first) = select.values().first().cloned() {
            let change = select.remove(&first).expect("selected tags are always removable");
            select.apply(&change);
            prop_assert!(!select.is_full());
        }
    }
}
