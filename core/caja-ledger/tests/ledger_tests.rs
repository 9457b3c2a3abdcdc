use caja_ledger::Ledger;
use caja_storage::{MemoryStorage, StoragePort};
use caja_types::{keys, Client, ClientType, Sale};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;

fn client(id: &str, name: &str) -> Client {
    Client {
        id: id.into(),
        name: name.into(),
        phone: "+56 9 1111 2222".into(),
        email: format!("{id}@example.com"),
        client_type: ClientType::Detalle,
        created_at: "2024-01-01T00:00:00Z".into(),
        updated_at: None,
    }
}

// ── Typed load/save ──────────────────────────────────────────────

#[test]
fn save_then_load_round_trips() {
    let ledger = Ledger::new(MemoryStorage::new());
    let records = vec![client("a", "María"), client("b", "Pedro")];

    assert!(ledger.clients().save(&records));
    assert_eq!(ledger.clients().load(), records);
}

#[test]
fn empty_store_loads_empty_collections() {
    let ledger = Ledger::new(MemoryStorage::new());
    assert!(ledger.clients().load().is_empty());
    assert!(ledger.sales().load().is_empty());
    assert!(ledger.expenses().load().is_empty());
}

#[test]
fn malformed_records_are_dropped_not_trusted() {
    let port = MemoryStorage::new();
    // one valid client, one object missing required fields
    port.set_item(
        "sales_system_clients",
        r#"{"data":[
            {"id":"a","name":"María","phone":"1","email":"m@x.cl","type":"detalle","createdAt":"2024-01-01"},
            {"id":"broken"}
        ],"timestamp":"2024-01-01T00:00:00Z","version":"1.0"}"#,
    )
    .unwrap();
    let ledger = Ledger::new(port);

    let clients = ledger.clients().load();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "María");
}

#[test]
fn legacy_entries_migrate_through_the_typed_facade() {
    let port = MemoryStorage::new();
    port.set_item(
        "sales",
        r#"[{"id":1,"clientId":"a","category":"detalle","amount":5000,
             "paymentMethod":"efectivo","clientName":"María","date":"2024-01-02"}]"#,
    )
    .unwrap();
    let ledger = Ledger::new(port.clone());

    let sales: Vec<Sale> = ledger.sales().load();

    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].client_name, "María");
    assert!(port.get_item("sales").unwrap().is_none());
    assert!(port.get_item("sales_system_sales").unwrap().is_some());
}

// ── Erase all ────────────────────────────────────────────────────

#[test]
fn erase_all_removes_every_canonical_entry() {
    let port = MemoryStorage::new();
    let ledger = Ledger::new(port.clone());
    ledger.clients().save(&[client("a", "María")]);
    ledger.mark_backup_now();

    assert!(ledger.erase_all());

    for key in keys::LOGICAL_KEYS {
        assert!(port
            .get_item(&format!("sales_system_{key}"))
            .unwrap()
            .is_none());
    }
    assert!(ledger.clients().load().is_empty());
}

// ── Backup marker ────────────────────────────────────────────────

#[test]
fn no_marker_means_backup_due() {
    let ledger = Ledger::new(MemoryStorage::new());
    assert!(ledger.last_backup().is_none());
    assert!(ledger.backup_due(Utc::now()));
}

#[test]
fn fresh_marker_means_not_due() {
    let ledger = Ledger::new(MemoryStorage::new());
    assert!(ledger.mark_backup_now());
    assert!(ledger.last_backup().is_some());
    assert!(!ledger.backup_due(Utc::now()));
}

#[test]
fn week_old_marker_means_due() {
    let ledger = Ledger::new(MemoryStorage::new());
    ledger.mark_backup_now();
    let later = Utc::now() + Duration::days(7);
    assert!(ledger.backup_due(later));
}

#[test]
fn marker_is_a_raw_timestamp_not_an_envelope() {
    let port = MemoryStorage::new();
    let ledger = Ledger::new(port.clone());
    ledger.mark_backup_now();

    let raw = port.get_item("sales_system_last_backup").unwrap().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(&raw).is_ok());
}

#[test]
fn unparseable_marker_reads_as_no_backup() {
    let port = MemoryStorage::new();
    port.set_item("sales_system_last_backup", "not a date").unwrap();
    let ledger = Ledger::new(port);

    assert!(ledger.last_backup().is_none());
    assert!(ledger.backup_due(Utc::now()));
}
