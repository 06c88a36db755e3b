#![deny(
    clippy::mutable_key_type,
    clippy::map_entry,
    clippy::boxed_local,
    clippy::let_unit_value,
    clippy::redundant_allocation,
    clippy::bool_comparison,
    clippy::bind_instead_of_map,
    clippy::vec_box,
    clippy::cmp_owned,
    clippy::op_ref
)]

pub mod catalog;
pub mod error;
pub mod models;
pub mod postgres_tools;
pub mod schema;
