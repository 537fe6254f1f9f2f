// tests/tally.rs
use vk_surnames::profile::PersonRecord;
use vk_surnames::tally::{enrich, rank, SurnameTable};

fn person(last_name: &str, city: &str, country: &str) -> PersonRecord {
    PersonRecord {
        vk_id: 1,
        last_name: last_name.into(),
        first_name: String::new(),
        country: country.into(),
        city: city.into(),
    }
}

fn table_with(totals: &[(&str, u64)]) -> SurnameTable {
    let mut table = SurnameTable::new();
    for (name, n) in totals {
        for _ in 0..*n {
            table.enrich(&person(name, "Омск", "Россия"));
        }
    }
    table
}

#[test]
fn first_enrich_counts_everything_once() {
    let mut table = SurnameTable::new();
    let p = person("Иванов", "Омск", "Россия");
    enrich(&mut table, &p);

    let counts = &table["Иванов"];
    assert_eq!(counts.total, 1);
    assert_eq!(counts.city("Омск"), 1);
    assert_eq!(counts.country("Россия"), 1);
    assert_eq!(counts.place("Омск"), 1);
    assert_eq!(counts.place("Россия"), 1);
}

#[test]
fn enrich_is_additive() {
    let mut table = SurnameTable::new();
    let p = person("Иванов", "Омск", "Россия");
    enrich(&mut table, &p);
    enrich(&mut table, &p);

    assert_eq!(table["Иванов"].total, 2);
    assert_eq!(table["Иванов"].city("Омск"), 2);
    assert_eq!(table.len(), 1);
}

#[test]
fn places_are_counted_per_surname() {
    let mut table = SurnameTable::new();
    enrich(&mut table, &person("Иванов", "Омск", "Россия"));
    enrich(&mut table, &person("Иванов", "Минск", "Беларусь"));
    enrich(&mut table, &person("Петров", "Омск", "Россия"));

    let ivanov = table.get("Иванов").unwrap();
    assert_eq!(ivanov.total, 2);
    assert_eq!(ivanov.city("Минск"), 1);
    assert_eq!(ivanov.country("Россия"), 1);
    assert_eq!(table["Петров"].city("Минск"), 0);
}

#[test]
fn city_and_country_with_the_same_name_do_not_collide() {
    let mut table = SurnameTable::new();
    enrich(&mut table, &person("Ли", "Сингапур", "Сингапур"));
    assert_eq!(table["Ли"].city("Сингапур"), 1);
    assert_eq!(table["Ли"].country("Сингапур"), 1);
}

#[test]
fn empty_city_is_counted_under_empty_key() {
    let mut table = SurnameTable::new();
    enrich(&mut table, &person("Иванов", "", "Россия"));
    assert_eq!(table["Иванов"].city(""), 1);
}

#[test]
fn rank_orders_by_total_descending() {
    let table = table_with(&[("A", 5), ("B", 9), ("C", 1)]);
    assert_eq!(
        rank(&table),
        vec![("B".to_string(), 9), ("A".to_string(), 5), ("C".to_string(), 1)]
    );
}

#[test]
fn rank_breaks_ties_by_surname() {
    let table = table_with(&[("Яковлев", 2), ("Андреев", 2), ("Борисов", 3)]);
    let names: Vec<_> = rank(&table).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, ["Борисов", "Андреев", "Яковлев"]);
}

#[test]
fn rank_of_empty_table_is_empty() {
    assert!(rank(&SurnameTable::new()).is_empty());
}

#[test]
fn table_serializes_as_plain_object() {
    let mut table = SurnameTable::new();
    enrich(&mut table, &person("Иванов", "Омск", "Россия"));
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["Иванов"]["total"], 1);
    assert_eq!(json["Иванов"]["cities"]["Омск"], 1);
    assert_eq!(json["Иванов"]["countries"]["Россия"], 1);
}
