pub mod aggregate;
pub mod excel;

pub use aggregate::InventarioItem;
