//! Item specs applied to a menu read from a records file.

use std::fs;

use cafe_cli::item_spec::ItemSpec;
use cafe_client::build_request;
use cafe_core::{OrderSession, SessionError};
use cafe_ingest::{normalize_batch, read_records_file};
use cafe_model::CustomerInfo;

const RECORDS: &str = r#"[
    {"PK": "ITEM#drink", "SK": "META#", "category": "Drinks", "basePrice": 3.25},
    {"PK": "ITEM#drink", "SK": "GROUP#Size", "type": "single"},
    {"PK": "ITEM#drink", "SK": "OPTION#Size#small"},
    {"PK": "ITEM#drink", "SK": "OPTION#Size#large", "priceDelta": 1},
    {"PK": "ITEM#drink", "SK": "GROUP#Flavors", "type": "multi"},
    {"PK": "ITEM#drink", "SK": "OPTION#Flavors#vanilla"},
    {"PK": "ITEM#drink", "SK": "OPTION#Flavors#lavender"}
]"#;

fn session() -> OrderSession {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("menu.json");
    fs::write(&path, RECORDS).unwrap();
    let (menu, report) = normalize_batch(&read_records_file(&path).unwrap());
    assert_eq!(report.skipped_count(), 0);
    OrderSession::with_menu(menu)
}

fn apply(session: &mut OrderSession, spec: &str) -> Result<(), SessionError> {
    let spec: ItemSpec = spec.parse().unwrap();
    for (group, option) in spec.toggles() {
        session.toggle_option(&spec.category, group, option)?;
    }
    session.add_to_cart(&spec.category)?;
    Ok(())
}

#[test]
fn specs_become_line_items() {
    let mut session = session();
    apply(&mut session, "drink:Size=large;Flavors=vanilla,lavender").unwrap();
    session.reset_selection("drink");
    apply(&mut session, "drink:Size=small").unwrap();
    session.set_customer(CustomerInfo::new("Grace", "555-0199"));

    let request = build_request(session.cart(), session.customer()).unwrap();
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["items"][0]["category"], "Drinks");
    assert_eq!(json["items"][0]["selections"]["Size"], "large");
    assert_eq!(
        json["items"][0]["selections"]["Flavors"],
        serde_json::json!(["lavender", "vanilla"])
    );
    assert_eq!(json["items"][1]["selections"]["Size"], "small");
    assert!(json["items"][1]["selections"].get("Flavors").is_none());
    assert_eq!(json["total"], 0);
}

#[test]
fn unknown_option_in_spec_is_rejected() {
    let mut session = session();
    let err = apply(&mut session, "drink:Size=venti").unwrap_err();
    assert!(matches!(err, SessionError::UnknownOption { .. }));
    assert!(session.cart().is_empty());
}
