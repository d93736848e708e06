//! Submission and menu loading against an in-memory transport.

use std::cell::{Cell, RefCell};

use serde_json::{Value, json};

use cafe_client::{
    ClientError, OrderTransport, TransportError, ValidationFailure, load_menu, submit_order,
    submit_session,
};
use cafe_core::OrderSession;
use cafe_model::{Cart, CustomerInfo, OptionId, OrderRequest, UNKNOWN_ORDER_ID};

struct FakeTransport {
    records: Vec<Value>,
    response: Result<Value, TransportError>,
    posts: Cell<usize>,
    last_request: RefCell<Option<OrderRequest>>,
}

impl FakeTransport {
    fn responding(response: Result<Value, TransportError>) -> Self {
        Self {
            records: soup_records(),
            response,
            posts: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }
}

impl OrderTransport for FakeTransport {
    fn fetch_records(&self) -> Result<Vec<Value>, TransportError> {
        Ok(self.records.clone())
    }

    fn post_order(&self, request: &OrderRequest) -> Result<Value, TransportError> {
        self.posts.set(self.posts.get() + 1);
        *self.last_request.borrow_mut() = Some(request.clone());
        self.response.clone()
    }
}

fn soup_records() -> Vec<Value> {
    vec![
        json!({"PK": "ITEM#soup", "SK": "META#", "basePrice": 4.5}),
        json!({"PK": "ITEM#soup", "SK": "GROUP#Broth", "type": "single"}),
        json!({"PK": "ITEM#soup", "SK": "OPTION#Broth#chicken", "label": "Chicken", "priceDelta": 0}),
        json!({"PK": "ITEM#soup", "SK": "GROUP#Toppings", "type": "multi"}),
        json!({"PK": "ITEM#soup", "SK": "OPTION#Toppings#croutons"}),
        json!({"PK": "ITEM#soup", "SK": "OPTION#Toppings#scallion"}),
        json!({"PK": "ITEM#soup", "SK": "BOGUS#1"}),
    ]
}

fn id(value: &str) -> OptionId {
    OptionId::new(value).unwrap()
}

/// Session with the soup menu loaded and one line item in the cart.
fn session_with_item(transport: &FakeTransport) -> OrderSession {
    let (menu, _) = load_menu(transport).expect("load menu");
    let mut session = OrderSession::with_menu(menu);
    session.toggle_option("soup", "Broth", &id("chicken")).unwrap();
    session.toggle_option("soup", "Toppings", &id("scallion")).unwrap();
    session.toggle_option("soup", "Toppings", &id("croutons")).unwrap();
    session.add_to_cart("soup").unwrap();
    session.set_customer(CustomerInfo::new("  Ada ", " 555-0100"));
    session
}

#[test]
fn load_menu_reports_skipped_records() {
    let transport = FakeTransport::responding(Ok(Value::Null));
    let (menu, report) = load_menu(&transport).unwrap();

    assert_eq!(menu.keys().collect::<Vec<_>>(), vec!["soup"]);
    assert_eq!(report.accepted, 6);
    assert_eq!(report.skipped_count(), 1);
}

#[test]
fn validation_failures_make_no_network_call() {
    let transport = FakeTransport::responding(Ok(json!({"orderId": "A1"})));
    let mut cart = Cart::new();
    let mut customer = CustomerInfo::new("", "555-0100");

    let err = submit_order(&mut cart, &mut customer, &transport).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationFailure::EmptyCart)
    ));

    let mut session = session_with_item(&transport);
    session.set_customer(CustomerInfo::new("   ", "555-0100"));
    let err = submit_session(&mut session, &transport).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationFailure::MissingName)
    ));

    session.set_customer(CustomerInfo::new("Ada", ""));
    let err = submit_session(&mut session, &transport).unwrap_err();
    assert!(matches!(
        err,
        ClientError::Validation(ValidationFailure::MissingPhone)
    ));

    assert_eq!(transport.posts.get(), 0);
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn successful_submission_clears_cart_and_customer() {
    let transport = FakeTransport::responding(Ok(json!({"orderId": "A1"})));
    let mut session = session_with_item(&transport);

    let receipt = submit_session(&mut session, &transport).unwrap();

    assert_eq!(receipt.display_id(), "A1");
    assert!(!receipt.placeholder);
    assert_eq!(receipt.item_count, 1);
    assert_eq!(transport.posts.get(), 1);
    assert!(session.cart().is_empty());
    assert_eq!(session.customer(), &CustomerInfo::default());
}

#[test]
fn failed_submission_preserves_state() {
    let transport = FakeTransport::responding(Err(TransportError::Status {
        status: 500,
        body: "kitchen closed".to_string(),
    }));
    let mut session = session_with_item(&transport);
    let cart_before = session.cart().clone();
    let customer_before = session.customer().clone();

    let err = submit_session(&mut session, &transport).unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network(TransportError::Status { status: 500, .. })
    ));
    assert_eq!(transport.posts.get(), 1);
    assert_eq!(session.cart(), &cart_before);
    assert_eq!(session.customer(), &customer_before);
}

#[test]
fn response_without_id_uses_placeholder() {
    let transport = FakeTransport::responding(Ok(json!({"status": "received"})));
    let mut session = session_with_item(&transport);

    let receipt = submit_session(&mut session, &transport).unwrap();

    assert_eq!(receipt.display_id(), UNKNOWN_ORDER_ID);
    assert!(receipt.placeholder);
    assert!(session.cart().is_empty());
}

#[test]
fn order_payload_shape() {
    let transport = FakeTransport::responding(Ok(json!({"id": 17})));
    let mut session = session_with_item(&transport);

    let receipt = submit_session(&mut session, &transport).unwrap();
    assert_eq!(receipt.display_id(), "17");

    let request = transport.last_request.borrow().clone().expect("posted request");
    insta::assert_json_snapshot!(request, @r#"
    {
      "customer": {
        "name": "Ada",
        "phone": "555-0100"
      },
      "items": [
        {
          "category": "soup",
          "basePrice": 4.5,
          "selections": {
            "Broth": "chicken",
            "Toppings": [
              "croutons",
              "scallion"
            ]
          }
        }
      ],
      "subtotal": 0,
      "tax": 0,
      "total": 0
    }
    "#);
}
