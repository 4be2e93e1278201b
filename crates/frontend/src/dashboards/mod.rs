pub mod d400_resumen_venta;

pub use d400_resumen_venta::ui::ResumenDashboard;
