//! Static postal-code coordinate table

pub mod table;

pub use table::PostalCodeTable;
