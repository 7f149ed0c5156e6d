//! # Observability & Tracing
//!
//! [`setup_tracing`] initialises structured logging for a binary built on this framework.
//!
//! ## What Gets Traced
//!
//! - **Mount / Unmount**: one line each per resource instance, with the final generation
//!   and how many stale responses were discarded.
//! - **Fetch lifecycle**: `Fetch issued` (key, generation), then `Ready` or `Fetch failed`
//!   (failure kind and error).
//! - **Stale responses**: `Stale response discarded` at debug level.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run -- list       # lifecycle transitions
//! RUST_LOG=debug cargo run -- show 7    # plus unchanged keys and discarded responses
//! RUST_LOG=resource_framework=debug cargo run -- list
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Resource mounted resource="ProductDetail"
//! INFO Fetch issued resource="ProductDetail" key=ProductId(7) generation=1
//! INFO Ready resource="ProductDetail" generation=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add nothing; `resource` names the instance
        .compact()
        .init();
}
