//! Domain layer: catalog records, filter selections and the ports the
//! application layer depends on.

pub mod contact;
pub mod filter;
pub mod ports;
pub mod product;
