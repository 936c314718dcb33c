pub mod csv;
pub mod table;

pub use table::Table;
