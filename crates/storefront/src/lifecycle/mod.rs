//! # App Lifecycle & Orchestration
//!
//! Wires the catalog, the two screen resources and the navigator into one app.
//!
//! ## Screen Lifecycle
//!
//! - **Start** - the product list is mounted and its one fetch is issued.
//! - **Detail route** - the first detail route mounts the detail resource; later detail
//!   routes re-key it, so a result for a superseded id never reaches the screen.
//! - **Back to the list** - the detail resource is unmounted. A fetch still in flight
//!   completes into a closed channel and is dropped.
//! - **Shutdown** - every mounted resource is unmounted and its task awaited.
//!
//! The two resources share nothing but the catalog handle; each owns its own state.
//!
//! ## Configuration
//!
//! [`StorefrontConfig`] holds the catalog base URL (`STOREFRONT_BASE_URL`, defaulting to
//! the public Fake Store API) and the user agent sent with every request.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging. Resource actors log mounts,
//! issued fetches, discarded stale responses and failures with the resource name and
//! generation attached.
//!
//! ```bash
//! RUST_LOG=info storefront list
//! RUST_LOG=debug storefront show 3
//! ```

pub mod config;
pub mod error;
pub mod storefront;

pub use config::*;
pub use error::*;
pub use resource_framework::tracing::setup_tracing;
pub use storefront::*;
