//! Backend access for the café ordering flow.
//!
//! [`load_menu`] fetches and normalizes the menu; [`submit_order`] and
//! [`submit_session`] validate and post an order. Both go through the
//! [`OrderTransport`] trait, implemented for HTTP by [`HttpTransport`].

pub mod config;
pub mod error;
pub mod menu;
pub mod submit;
pub mod transport;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, config_path};
pub use error::{ClientError, ConfigError, Result, TransportError, ValidationFailure};
pub use menu::load_menu;
pub use submit::{build_request, extract_order_id, submit_order, submit_session};
pub use transport::{HttpTransport, OrderTransport};
