pub mod invoice;
pub mod list;
pub mod pago_manager;
