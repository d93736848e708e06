pub mod error;
pub mod ids;
pub mod menu;
pub mod order;
pub mod record;
pub mod selection;

pub use error::{MalformedRecord, ModelError, Result};
pub use ids::OptionId;
pub use menu::{Cardinality, CategoryMenu, Menu, MenuOption, OptionGroup};
pub use order::{
    Cart, CartLineItem, CustomerInfo, OrderReceipt, OrderRequest, UNKNOWN_ORDER_ID,
};
pub use record::{AttributeRecord, RecordRole};
pub use selection::{Selection, SelectionState};
