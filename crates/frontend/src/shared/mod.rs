pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod excel_importer;
pub mod export;
pub mod icons;
pub mod page_frame;
pub mod page_standard;
pub mod print;
