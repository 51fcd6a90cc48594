//! Table field value normalization.
//!
//! The pipeline between the three representations of a table field
//! value:
//!
//! - **normalize**: raw stored/posted JSON to a fully defaulted
//!   [`TableValue`](tablemaker_model::TableValue) with its derived
//!   read-only HTML rendering
//! - **serialize**: key stripping before the host persists a payload
//! - **cell / color / datetime**: per-type cell coercion; unparsable
//!   color, date and time cells degrade to null rather than failing
//!
//! Every entry point is a synchronous pure transform over its own
//! input, safe to call from any number of threads.

pub mod cell;
pub mod color;
pub mod datetime;
mod html;
mod normalize;
mod serialize;

pub use cell::normalize_cell_value;
pub use html::render_table;
pub use normalize::{normalize_str, normalize_value, renormalize};
pub use serialize::serialize_value;
