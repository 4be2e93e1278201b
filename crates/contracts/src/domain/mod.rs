pub mod a001_pedido;
pub mod a002_inventario;
