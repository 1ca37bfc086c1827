#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use countless_api::{CountError, SpecKey, Specialization};

struct Fixed(u64);

impl BuildCounter for Fixed {
    fn count_builds(&self) -> Result<BuildCount, CountError> {
        Ok(BuildCount::from(self.0))
    }
}

struct Failing;

impl BuildCounter for Failing {
    fn count_builds(&self) -> Result<BuildCount, CountError> {
        Err(CountError::Cycle { node: 7 })
    }
}

fn fixed_spec(class: u64, spec: u64, hero: u64) -> Specialization {
    Specialization {
        class_tree: Box::new(Fixed(class)),
        spec_tree: Box::new(Fixed(spec)),
        hero_tree: Box::new(Fixed(hero)),
    }
}

#[test]
fn test_empty_table_gives_empty_mapping() {
    let table = SpecTable::new();
    let result = aggregate(&table, false).unwrap();
    assert!(result.is_empty());
}

#[test]
fn test_single_entry() {
    let mut table = SpecTable::new();
    table.insert(
        SpecKey::new("Shaman", "Enhancement"),
        fixed_spec(10, 20, 30),
    );

    let result = aggregate(&table, false).unwrap();
    assert_eq!(result.len(), 1);

    let counts = result.get("Shaman Enhancement").unwrap();
    assert_eq!(counts.class, BuildCount::from(10u32));
    assert_eq!(counts.spec, BuildCount::from(20u32));
    assert_eq!(counts.hero, BuildCount::from(30u32));
}

#[test]
fn test_entries_keep_table_order() {
    let mut table = SpecTable::new();
    table.insert(SpecKey::new("Warrior", "Fury"), fixed_spec(1, 1, 1));
    table.insert(SpecKey::new("Druid", "Balance"), fixed_spec(1, 1, 1));
    table.insert(SpecKey::new("Mage", "Arcane"), fixed_spec(1, 1, 1));

    let result = aggregate(&table, false).unwrap();
    let keys: Vec<&str> = result.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["Warrior Fury", "Druid Balance", "Mage Arcane"]);
}

#[test]
fn test_composite_key_collision_keeps_later_counts() {
    // Distinct pairs, identical concatenation: "A B" + "C" vs "A" + "B C".
    let mut table = SpecTable::new();
    table.insert(SpecKey::new("Warrior", "Arms"), fixed_spec(1, 1, 1));
    table.insert(SpecKey::new("A B", "C"), fixed_spec(2, 2, 2));
    table.insert(SpecKey::new("A", "B C"), fixed_spec(3, 3, 3));

    let result = aggregate(&table, false).unwrap();
    assert_eq!(result.len(), 2);

    // The colliding key stays at its first position with the later values.
    let keys: Vec<&str> = result.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["Warrior Arms", "A B C"]);
    assert_eq!(
        result.get("A B C").unwrap().class,
        BuildCount::from(3u32)
    );
}

#[test]
fn test_counting_failure_aborts_with_context() {
    let mut table = SpecTable::new();
    table.insert(SpecKey::new("Shaman", "Enhancement"), fixed_spec(1, 1, 1));
    table.insert(
        SpecKey::new("Druid", "Feral"),
        Specialization {
            class_tree: Box::new(Fixed(1)),
            spec_tree: Box::new(Fixed(1)),
            hero_tree: Box::new(Failing),
        },
    );

    let err = aggregate(&table, false).unwrap_err();
    match err {
        HarnessError::Count { key, tree, source } => {
            assert_eq!(key, "Druid Feral");
            assert_eq!(tree, TreeRole::Hero);
            assert_eq!(source, CountError::Cycle { node: 7 });
        }
        other => panic!("expected counting error, got {:?}", other),
    }
}

#[test]
fn test_entries_are_independent() {
    let build = |hero: u64| {
        let mut table = SpecTable::new();
        table.insert(SpecKey::new("Shaman", "Enhancement"), fixed_spec(4, 5, 6));
        table.insert(SpecKey::new("Druid", "Feral"), fixed_spec(7, 8, hero));
        table
    };

    let before = aggregate(&build(9), false).unwrap();
    let after = aggregate(&build(10), false).unwrap();

    assert_eq!(
        before.get("Shaman Enhancement"),
        after.get("Shaman Enhancement")
    );
    assert_eq!(before.get("Druid Feral").unwrap().class, BuildCount::from(7u32));
    assert_eq!(before.get("Druid Feral").unwrap().hero, BuildCount::from(9u32));
    assert_eq!(after.get("Druid Feral").unwrap().hero, BuildCount::from(10u32));
}
