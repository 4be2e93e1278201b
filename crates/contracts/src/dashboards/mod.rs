pub mod d400_resumen_venta;
