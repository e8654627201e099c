use super::record::InventoryRecord;

pub const RESULT_COLUMNS: [&str; 5] = ["Product ID", "Condition", "Quantity", "Restock Level", "Available"];

/// Rows of the last successful search, shown as returned by the API
/// (wire condition, 0/1 availability).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsTable {
    pub records: Vec<InventoryRecord>,
}

impl ResultsTable {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&InventoryRecord> {
        self.records.first()
    }

    pub fn rows(&self) -> impl Iterator<Item = [String; 5]> + '_ {
        self.records.iter().map(|r| {
            [
                r.product_id.to_string(),
                r.condition.as_wire().to_string(),
                r.quantity.to_string(),
                r.restock_level.to_string(),
                r.available.to_string(),
            ]
        })
    }

    /// Plain-text rendering with padded columns, for the terminal.
    pub fn to_text(&self) -> String {
        let rows: Vec<[String; 5]> = self.rows().collect();
        let mut widths = RESULT_COLUMNS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.len());
            }
        }

        let format_row = |cells: &[&str]| {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![format_row(&RESULT_COLUMNS)];
        for row in &rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            lines.push(format_row(&cells));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::record::Condition;

    fn record(pid: i64, condition: Condition, available: i64) -> InventoryRecord {
        InventoryRecord {
            product_id: pid,
            condition,
            quantity: 10,
            restock_level: 2,
            available,
        }
    }

    #[test]
    fn rows_use_wire_values() {
        let table = ResultsTable::new(vec![record(7, Condition::OpenBox, 1)]);
        let rows: Vec<[String; 5]> = table.rows().collect();
        assert_eq!(rows, vec![["7", "open box", "10", "2", "1"].map(String::from)]);
    }

    #[test]
    fn text_rendering_has_header_and_one_line_per_record() {
        let table = ResultsTable::new(vec![record(7, Condition::New, 1), record(12, Condition::Used, 0)]);
        let text = table.to_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Product ID  Condition"));
        assert!(lines[1].starts_with("7 "));
        assert!(lines[2].starts_with("12"));
        assert!(lines[2].contains("used"));
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table = ResultsTable::default();
        assert!(table.is_empty());
        assert!(table.first().is_none());
        assert_eq!(table.to_text().lines().count(), 1);
    }
}
