#![allow(dead_code)]

use proptest::prelude::*;
use std::{
    sync::{Arc, Barrier},
    thread,
};
use tabula::{Entity, Metadata, MetadataError, config::MetadataConfig, model::ColumnMap};
use tracing_subscriber::EnvFilter;

#[derive(Entity)]
struct Account {
    id: u64,
    email: String,
    balance: f64,
}

#[derive(Entity)]
struct Customer {
    #[column(extends)]
    account: Account,
    display_name: String,
}

#[derive(Entity)]
struct Ledger {
    entry: String,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn race<T: Send>(threads: usize, f: impl Fn() -> T + Sync) -> Vec<T> {
    let barrier = Barrier::new(threads);

    thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    f()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("join"))
            .collect()
    })
}

#[test]
fn racing_callers_share_one_column_map() {
    init_tracing();
    let metadata = Metadata::default();

    let maps: Vec<Arc<ColumnMap>> = race(16, || {
        metadata.column_map_of::<Customer>().expect("columns")
    });

    assert!(maps.iter().all(|m| Arc::ptr_eq(m, &maps[0])));
    assert_eq!(maps[0].names(), ["balance", "display_name", "email"]);

    let report = metadata.metrics();
    assert_eq!(report.column_resolutions, 1);
    assert_eq!(report.id_resolutions, 1);
    assert_eq!(report.failures, 0);
}

#[test]
fn racing_callers_on_different_entities() {
    init_tracing();
    let metadata = Metadata::default();

    let ids = race(8, || {
        let account = metadata.id_of::<Account>().expect("account id");
        let customer = metadata.id_of::<Customer>().expect("customer id");
        (account, customer)
    });

    for (account, customer) in &ids {
        assert!(Arc::ptr_eq(account, &ids[0].0));
        assert!(Arc::ptr_eq(customer, &ids[0].1));
        assert!(std::ptr::eq(account.field(), customer.field()));
    }

    assert_eq!(metadata.metrics().id_resolutions, 2);
}

#[test]
fn racing_failures_are_all_reported() {
    init_tracing();
    let metadata = Metadata::default();

    let results = race(6, || metadata.column_map_of::<Ledger>());
    assert!(
        results
            .iter()
            .all(|r| matches!(r, Err(MetadataError::MissingPrimaryKey { .. })))
    );

    let report = metadata.metrics();
    assert_eq!(report.column_resolutions, 0);
    assert_eq!(report.failures, report.id_misses);
}

proptest! {
    #[test]
    fn key_names_come_from_config(extra in "[a-z_]{1,12}") {
        let metadata = Metadata::with_config(MetadataConfig {
            id_field_names: vec![extra.clone()],
            ..MetadataConfig::default()
        });

        let result = metadata.id_of::<Account>();
        if extra == "id" {
            prop_assert_eq!(result.expect("id").name(), "id");
        } else {
            let is_missing = matches!(result, Err(MetadataError::MissingPrimaryKey { .. }));
            prop_assert!(is_missing);
        }
    }
}
