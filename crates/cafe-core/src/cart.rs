//! Cart line item assembly.

use tracing::debug;

use cafe_model::{Cart, CartLineItem, CategoryMenu, SelectionState};

/// Snapshot the current selections of `menu` into a new line item and append it.
///
/// The selections are copied; later toggles on the builder do not reach the
/// cart. Any selection state, including an empty one, is accepted.
pub fn add_to_cart<'a>(
    cart: &'a mut Cart,
    menu: &CategoryMenu,
    selections: &SelectionState,
) -> &'a CartLineItem {
    let item = CartLineItem {
        category: menu.category.clone(),
        base_price: menu.base_price,
        selections: selections.clone(),
    };
    debug!(
        category = %item.category,
        groups = item.selections.len(),
        "line item added to cart"
    );
    cart.push(item)
}
