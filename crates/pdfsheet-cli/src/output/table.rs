use pdfsheet_core::model::Table;

/// Widest a printed column may get before values are cut.
const MAX_WIDTH: usize = 40;

/// Render a table as aligned plain text with a dashed rule under the header.
pub fn format_table(table: &Table) -> String {
    let widths: Vec<usize> = (0..table.width())
        .map(|col| {
            (0..table.rows.len())
                .map(|row| display_len(table.cell(row, col)))
                .fold(display_len(&table.columns[col]), usize::max)
                .min(MAX_WIDTH)
        })
        .collect();

    let mut out = String::new();
    push_row(&mut out, table.columns.iter().map(|c| c.as_str()), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for row in 0..table.rows.len() {
        push_row(&mut out, (0..table.width()).map(|col| table.cell(row, col)), &widths);
    }

    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let cell = flatten(cell, *width);
            format!("{:<width$}", cell, width = width)
        })
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

// Cells may hold multi-line text; show it on one line and cut to width.
fn flatten(cell: &str, width: usize) -> String {
    let single: String = cell.split_whitespace().collect::<Vec<_>>().join(" ");
    if single.chars().count() <= width {
        single
    } else {
        let mut cut: String = single.chars().take(width.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}

fn display_len(s: &str) -> usize {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_columns() {
        let table = Table::new(
            vec!["Test".into(), "Result".into()],
            vec![
                vec!["Hemoglobin".into(), "13.5".into()],
                vec!["ESR".into(), "12".into()],
            ],
        );
        let out = format_table(&table);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Test        Result");
        assert_eq!(lines[1], "------------------");
        assert_eq!(lines[2], "Hemoglobin  13.5");
        assert_eq!(lines[3], "ESR         12");
    }

    #[test]
    fn test_long_cells_are_cut() {
        let table = Table::single_column("Extracted Text", vec!["word ".repeat(20)]);
        let out = format_table(&table);
        let row = out.lines().nth(2).unwrap();
        assert_eq!(row.chars().count(), MAX_WIDTH);
        assert!(row.ends_with("..."));
    }
}
