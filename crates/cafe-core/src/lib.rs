pub mod buckets;
pub mod cart;
pub mod category;
pub mod error;
pub mod layout;
pub mod selection;
pub mod session;

pub use buckets::{BucketedGroup, OptionBucket, bucket_options};
pub use cart::add_to_cart;
pub use category::CategoryKind;
pub use error::SessionError;
pub use layout::{CategoryLayout, GroupOptions, GroupView, layout_category, layout_menu, order_groups};
pub use selection::{Toggle, ToggleAction, transition};
pub use session::OrderSession;
