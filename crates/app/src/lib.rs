//! Presentation-facing facade for the water-bar ordering core.
//!
//! A [`WaterBar`] wires the four engines over one store, holds the
//! transient session and the selected pickup slot, and exposes every
//! operation the (external) view layer dispatches: browsing, cart
//! mutation, order submission, sign-in, and the admin panel's actions.
//! Each operation completes its persistence write before returning, so
//! the caller can simply re-render from the accessors afterwards.

pub mod config;
pub mod error;
pub mod facade;
pub mod telemetry;

pub use config::Config;
pub use error::AppError;
pub use facade::WaterBar;
