//! End-to-end builder flow over a normalized menu.

use cafe_core::{CategoryKind, GroupOptions, OrderSession, layout_menu};
use cafe_ingest::normalize_records;
use cafe_model::{AttributeRecord, Menu, OptionId, Selection};

fn menu() -> Menu {
    let records = vec![
        AttributeRecord::new("ITEM#sweet", "META#")
            .with_attr("category", "Sweets")
            .with_attr("basePrice", 3),
        AttributeRecord::new("ITEM#sweet", "OPTION#Treats#cookie-chip").with_attr("label", "Chocolate Chip"),
        AttributeRecord::new("ITEM#sweet", "OPTION#Treats#brownie"),
        AttributeRecord::new("ITEM#sweet", "OPTION#Treats#cake-carrot"),
        AttributeRecord::new("ITEM#sweet", "GROUP#Toppings").with_attr("type", "multi"),
        AttributeRecord::new("ITEM#sweet", "OPTION#Toppings#sprinkles"),
        AttributeRecord::new("ITEM#sweet", "OPTION#Toppings#fudge"),
        AttributeRecord::new("ITEM#soup", "META#").with_attr("basePrice", 4.5),
        AttributeRecord::new("ITEM#soup", "GROUP#Broth").with_attr("type", "single"),
        AttributeRecord::new("ITEM#soup", "OPTION#Broth#chicken"),
        AttributeRecord::new("ITEM#soup", "OPTION#Broth#miso"),
        AttributeRecord::new("ITEM#soup", "OPTION#Size#bowl"),
    ];
    normalize_records(&records)
}

fn id(value: &str) -> OptionId {
    OptionId::new(value).unwrap()
}

#[test]
fn layout_orders_and_buckets_normalized_menu() {
    let layouts = layout_menu(&menu());

    let kinds: Vec<&CategoryKind> = layouts.iter().map(|l| &l.kind).collect();
    assert_eq!(kinds, vec![&CategoryKind::Soup, &CategoryKind::Sweet]);

    let soup_groups: Vec<&str> = layouts[0].groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(soup_groups, vec!["Size", "Broth"]);

    let sweet = &layouts[1];
    assert_eq!(sweet.label, "Sweets");
    match &sweet.groups[0].options {
        GroupOptions::Bucketed(bucketed) => {
            let names: Vec<&str> = bucketed.buckets.iter().map(|b| b.name).collect();
            assert_eq!(names, vec!["Cookies", "Cakes"]);
            assert_eq!(bucketed.unmatched, vec![id("brownie")]);
        }
        other => panic!("expected bucketed treats, got {other:?}"),
    }
    assert!(matches!(sweet.groups[1].options, GroupOptions::Flat { .. }));
}

#[test]
fn builder_flow_snapshots_into_cart() {
    let mut session = OrderSession::with_menu(menu());

    session.toggle_option("sweet", "Treats", &id("cookie-chip")).unwrap();
    session.toggle_option("sweet", "Toppings", &id("fudge")).unwrap();
    session.toggle_option("sweet", "Toppings", &id("sprinkles")).unwrap();
    let item = session.add_to_cart("sweet").unwrap().clone();

    assert_eq!(item.category, "Sweets");
    assert_eq!(item.base_price, 3.0);
    assert_eq!(
        item.selections.get("Treats"),
        Some(&Selection::Single(id("cookie-chip")))
    );

    // The snapshot survives further toggles on the builder.
    session.toggle_option("sweet", "Toppings", &id("fudge")).unwrap();
    assert_eq!(session.cart().items()[0], item);
    assert_eq!(
        session.selection("sweet").get("Toppings").map(|s| s.option_ids().len()),
        Some(1)
    );
}

#[test]
fn line_item_serializes_selections_by_cardinality() {
    let mut session = OrderSession::with_menu(menu());
    session.toggle_option("sweet", "Treats", &id("cake-carrot")).unwrap();
    session.toggle_option("sweet", "Toppings", &id("sprinkles")).unwrap();
    session.toggle_option("sweet", "Toppings", &id("fudge")).unwrap();
    let item = session.add_to_cart("sweet").unwrap();

    let json = serde_json::to_value(item).unwrap();
    assert_eq!(json["basePrice"], 3.0);
    assert_eq!(json["selections"]["Treats"], "cake-carrot");
    assert_eq!(
        json["selections"]["Toppings"],
        serde_json::json!(["fudge", "sprinkles"])
    );
}
