//! Page categories for tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a001_pedido--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// Table of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Summary cards and movement tables.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Action page (spreadsheet upload, exports).
pub const PAGE_CAT_USECASE: &str = "usecase";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD, PAGE_CAT_USECASE];

/// `{entity}--{category}` with both parts non-empty and a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_pedido--list"));
        assert!(is_valid_page_id("d400_resumen_venta--dashboard"));
        assert!(!is_valid_page_id("a001_pedido"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_pedido--detail"));
    }
}
