//! Order submission.
//!
//! Validation runs before any network call. A submission makes exactly one
//! transport call; on success the cart and customer details are cleared, on
//! failure both are left as they were so the customer can retry.

use serde_json::Value;
use tracing::{debug, info, warn};

use cafe_core::OrderSession;
use cafe_model::{Cart, CustomerInfo, OrderReceipt, OrderRequest};

use crate::error::{ClientError, Result, ValidationFailure};
use crate::transport::OrderTransport;

/// Check the cart and customer and build the request body.
///
/// Customer fields are trimmed; pricing fields are zero.
pub fn build_request(
    cart: &Cart,
    customer: &CustomerInfo,
) -> std::result::Result<OrderRequest, ValidationFailure> {
    if cart.is_empty() {
        return Err(ValidationFailure::EmptyCart);
    }
    let customer = customer.trimmed();
    if customer.name.is_empty() {
        return Err(ValidationFailure::MissingName);
    }
    if customer.phone.is_empty() {
        return Err(ValidationFailure::MissingPhone);
    }
    Ok(OrderRequest::new(customer, cart.items().to_vec()))
}

/// Order id from a response body: `id`, else `orderId`, as a string or number.
pub fn extract_order_id(body: &Value) -> Option<String> {
    ["id", "orderId"].iter().find_map(|key| match body.get(key)? {
        Value::String(id) if !id.trim().is_empty() => Some(id.trim().to_string()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    })
}

pub fn submit_order<T: OrderTransport + ?Sized>(
    cart: &mut Cart,
    customer: &mut CustomerInfo,
    transport: &T,
) -> Result<OrderReceipt> {
    let request = build_request(cart, customer).inspect_err(|failure| {
        debug!(reason = %failure, "order rejected before submission");
    })?;
    let item_count = request.items.len();

    let body = transport.post_order(&request).map_err(|err| {
        warn!(error = %err, items = item_count, "order submission failed");
        ClientError::Network(err)
    })?;

    let receipt = OrderReceipt::new(extract_order_id(&body), item_count);
    if receipt.placeholder {
        warn!("order response carried no id");
    }
    cart.clear();
    customer.clear();
    info!(
        order_id = receipt.display_id(),
        items = item_count,
        "order submitted"
    );
    Ok(receipt)
}

/// [`submit_order`] on a session's cart and customer.
pub fn submit_session<T: OrderTransport + ?Sized>(
    session: &mut OrderSession,
    transport: &T,
) -> Result<OrderReceipt> {
    let (cart, customer) = session.order_parts_mut();
    submit_order(cart, customer, transport)
}
