//! Session-owned order state.
//!
//! An [`OrderSession`] owns the installed menu, one selection state per
//! category, the cart and the customer details. Every mutation goes through
//! `&mut self`.

use std::collections::BTreeMap;

use tracing::{debug, info};

use cafe_model::{
    Cart, CartLineItem, CategoryMenu, CustomerInfo, Menu, OptionId, Selection, SelectionState,
};

use crate::cart;
use crate::error::{Result, SessionError};
use crate::selection::{Toggle, ToggleAction};

#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    menu: Option<Menu>,
    selections: BTreeMap<String, SelectionState>,
    cart: Cart,
    customer: CustomerInfo,
}

impl OrderSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with `menu` already installed.
    pub fn with_menu(menu: Menu) -> Self {
        let mut session = Self::new();
        session.install_menu(menu);
        session
    }

    /// Install a menu. A later install replaces the earlier one.
    ///
    /// Selections that reference a category, group or option missing from the
    /// new menu are dropped. The cart is left untouched.
    pub fn install_menu(&mut self, menu: Menu) {
        let pruned = prune_selections(&mut self.selections, &menu);
        if pruned > 0 {
            info!(pruned, "stale selections dropped");
        }
        match self.menu.replace(menu) {
            Some(previous) => info!(
                previous_categories = previous.len(),
                categories = self.menu.as_ref().map_or(0, Menu::len),
                "menu replaced"
            ),
            None => info!(
                categories = self.menu.as_ref().map_or(0, Menu::len),
                "menu installed"
            ),
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    /// Toggle one option in a category's builder.
    ///
    /// The group's cardinality comes from the installed menu, so the group
    /// and option must exist there.
    pub fn toggle_option(
        &mut self,
        category: &str,
        group: &str,
        option_id: &OptionId,
    ) -> Result<&SelectionState> {
        let menu = lookup(self.menu.as_ref(), category)?;
        let option_group = menu.group(group).ok_or_else(|| SessionError::UnknownGroup {
            category: category.to_string(),
            group: group.to_string(),
        })?;
        if !option_group.contains(option_id) {
            return Err(SessionError::UnknownOption {
                group: group.to_string(),
                option: option_id.to_string(),
            });
        }
        let action = ToggleAction::new(group, option_id.clone(), option_group.cardinality);

        let state = self.selections.entry(category.to_string()).or_default();
        state.toggle(&action);
        debug!(
            category,
            group,
            option = %option_id,
            cardinality = %action.cardinality,
            selected = state.is_selected(group, option_id),
            "option toggled"
        );
        Ok(state)
    }

    /// Current selections of a category. Empty when nothing was toggled.
    pub fn selection(&self, category: &str) -> SelectionState {
        self.selections.get(category).cloned().unwrap_or_default()
    }

    /// Clear a category's builder. Nothing else resets selections.
    pub fn reset_selection(&mut self, category: &str) {
        if self.selections.remove(category).is_some() {
            debug!(category, "selection reset");
        }
    }

    /// Append the category's current selections to the cart.
    pub fn add_to_cart(&mut self, category: &str) -> Result<&CartLineItem> {
        let menu = lookup(self.menu.as_ref(), category)?;
        let empty = SelectionState::new();
        let selections = self.selections.get(category).unwrap_or(&empty);
        Ok(cart::add_to_cart(&mut self.cart, menu, selections))
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut CustomerInfo {
        &mut self.customer
    }

    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = customer;
    }

    /// Cart and customer borrowed together, for submission.
    pub fn order_parts_mut(&mut self) -> (&mut Cart, &mut CustomerInfo) {
        (&mut self.cart, &mut self.customer)
    }
}

/// Drop selections the menu can no longer satisfy. Returns the number of
/// group selections removed or narrowed.
fn prune_selections(selections: &mut BTreeMap<String, SelectionState>, menu: &Menu) -> usize {
    let mut pruned = 0;
    selections.retain(|category, state| {
        let Some(category_menu) = menu.get(category) else {
            pruned += state.len();
            return false;
        };
        state.retain(|group, selection| {
            let Some(option_group) = category_menu.group(group) else {
                pruned += 1;
                return false;
            };
            if selection.cardinality() != option_group.cardinality {
                pruned += 1;
                return false;
            }
            match selection {
                Selection::Single(id) => {
                    let keep = option_group.contains(id);
                    if !keep {
                        pruned += 1;
                    }
                    keep
                }
                Selection::Multi(ids) => {
                    let before = ids.len();
                    ids.retain(|id| option_group.contains(id));
                    if ids.len() != before {
                        pruned += 1;
                    }
                    !ids.is_empty()
                }
            }
        });
        !state.is_empty()
    });
    pruned
}

fn lookup<'a>(menu: Option<&'a Menu>, category: &str) -> Result<&'a CategoryMenu> {
    menu.ok_or(SessionError::MenuNotLoaded)?
        .get(category)
        .ok_or_else(|| SessionError::UnknownCategory(category.to_string()))
}
