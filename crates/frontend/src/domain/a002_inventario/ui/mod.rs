pub mod carga;
pub mod preview;
