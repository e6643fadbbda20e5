//! Value Object Module

pub mod role;
pub mod route_table;
