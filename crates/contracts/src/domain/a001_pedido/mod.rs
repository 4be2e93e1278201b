pub mod aggregate;
pub mod company;
pub mod filter;
pub mod invoice;
pub mod payment;

pub use aggregate::{EstadoGeneral, EstadoPago, Pedido, PedidoItem, RegistroPago};
