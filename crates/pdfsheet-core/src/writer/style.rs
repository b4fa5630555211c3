use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern};

use crate::model::Table;

/// Fill color behind header cells.
pub const HEADER_FILL: u32 = 0x366092;

/// Column widths never exceed this many character units.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Bold white text on a solid fill, centered and wrapped, thin borders.
pub fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_font_size(11.0)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
}

/// Left-aligned, vertically centered, wrapped text with thin borders.
pub fn cell_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
        .set_border(FormatBorder::Thin)
}

/// Width per column: longest of header and cell values, plus 2, capped.
pub fn column_widths(table: &Table) -> Vec<usize> {
    table
        .columns
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let longest = table
                .rows
                .iter()
                .filter_map(|row| row.get(col))
                .map(|value| value.chars().count())
                .fold(header.chars().count(), usize::max);
            (longest + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
