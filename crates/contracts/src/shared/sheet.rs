use std::collections::HashMap;

/// One data row of a spreadsheet, keyed by normalized header.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 1-based row number in the sheet (the header is row 1)
    pub line: usize,
    pub values: HashMap<String, String>,
}

impl SheetRow {
    /// Trimmed cell text; `None` when the column is absent or the cell is blank.
    pub fn text(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
    }

    /// First non-blank cell among `columns`.
    pub fn first_text(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|c| self.text(c))
    }
}

/// First sheet of a workbook: header row plus data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

/// Header normalization used for lookups: trimmed and lowercased.
pub fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

impl SheetTable {
    /// Build from raw rows as returned by the SheetJS bridge (`Vec<Vec<String>>`).
    ///
    /// The first row is the header. Rows with every cell blank are skipped.
    pub fn from_raw(raw_data: Vec<Vec<String>>) -> Result<Self, String> {
        let mut raw_rows = raw_data.into_iter();
        let header_row = raw_rows
            .next()
            .ok_or_else(|| "El archivo está vacío".to_string())?;

        let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err("El archivo no tiene encabezados".to_string());
        }

        let mut rows = Vec::new();
        for (idx, row) in raw_rows.enumerate() {
            let mut values = HashMap::new();
            for (col_idx, header) in headers.iter().enumerate() {
                if header.is_empty() {
                    continue;
                }
                let value = row.get(col_idx).map(|v| v.trim()).unwrap_or_default();
                // Duplicate headers: the first non-blank cell wins
                let entry = values.entry(header.clone()).or_insert_with(String::new);
                if entry.is_empty() {
                    *entry = value.to_string();
                }
            }

            if values.values().any(|v| !v.is_empty()) {
                rows.push(SheetRow {
                    line: idx + 2,
                    values,
                });
            }
        }

        Ok(SheetTable { headers, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_headers_are_normalized() {
        let table = SheetTable::from_raw(raw(&[&[" Codigo ", "NOMBRE"], &["A1", "Puerta"]])).unwrap();
        assert_eq!(table.headers, vec!["codigo", "nombre"]);
        assert_eq!(table.rows[0].text("codigo"), Some("A1"));
        assert_eq!(table.rows[0].text("nombre"), Some("Puerta"));
    }

    #[test]
    fn test_blank_rows_are_skipped_and_lines_kept() {
        let table = SheetTable::from_raw(raw(&[
            &["codigo", "nombre"],
            &["", "  "],
            &["B2"],
        ]))
        .unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].line, 3);
        assert_eq!(table.rows[0].text("nombre"), None);
    }

    #[test]
    fn test_first_text() {
        let table = SheetTable::from_raw(raw(&[&["nombre", "descripcion"], &["", "Marco"]])).unwrap();
        assert_eq!(table.rows[0].first_text(&["nombre", "descripcion"]), Some("Marco"));
    }

    #[test]
    fn test_empty_file_is_error() {
        assert!(SheetTable::from_raw(Vec::new()).is_err());
        assert!(SheetTable::from_raw(raw(&[&["", ""]])).is_err());
    }
}
