use crate::extraction::PageContent;
use crate::model::Table;

/// Reconstruct tables from pdftotext -layout output.
///
/// pdftotext -layout preserves column alignment using spaces, so a table
/// shows up as consecutive lines that split into several segments on
/// 2+ space gaps. The first line of such a run is the header and its
/// segment positions define the column grid.
pub fn find_tables(page: &PageContent) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut run: Vec<Vec<Segment<'_>>> = Vec::new();

    for line in &page.lines {
        let segments = split_segments(line);
        if segments.len() >= 2 {
            run.push(segments);
            continue;
        }
        // End of table: blank line or a single-segment line
        flush_run(&mut run, &mut tables);
    }
    flush_run(&mut run, &mut tables);

    if !tables.is_empty() {
        log::debug!(
            "page {}: found {} table(s)",
            page.page_number,
            tables.len()
        );
    }

    tables
}

fn flush_run(run: &mut Vec<Vec<Segment<'_>>>, tables: &mut Vec<Table>) {
    // A header alone is not a table
    if run.len() >= 2 {
        tables.push(build_table(run));
    }
    run.clear();
}

fn build_table(run: &[Vec<Segment<'_>>]) -> Table {
    let header = &run[0];
    let mut grid: Vec<Vec<String>> = vec![header.iter().map(|s| s.text.to_string()).collect()];

    grid.extend(run[1..].iter().map(|segments| {
        let mut cells = vec![String::new(); header.len()];
        for segment in segments {
            let idx = nearest_column(header, segment);
            if cells[idx].is_empty() {
                cells[idx] = segment.text.to_string();
            } else {
                cells[idx].push(' ');
                cells[idx].push_str(segment.text);
            }
        }
        cells
    }));

    Table::from_grid(grid)
}

/// Pick the header column whose span is closest to the segment's span.
/// Overlapping spans win; among those the larger overlap wins.
fn nearest_column(header: &[Segment<'_>], segment: &Segment<'_>) -> usize {
    let (seg_start, seg_end) = segment.span();
    header
        .iter()
        .enumerate()
        .min_by_key(|(_, h)| {
            let (h_start, h_end) = h.span();
            let overlap = seg_end.min(h_end).saturating_sub(seg_start.max(h_start));
            let gap = if overlap > 0 {
                0
            } else if seg_end <= h_start {
                h_start - seg_end
            } else {
                seg_start - h_end
            };
            (gap, std::cmp::Reverse(overlap))
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// A run of text within a layout line, with its starting character column.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment<'a> {
    column: usize,
    text: &'a str,
}

impl Segment<'_> {
    fn span(&self) -> (usize, usize) {
        (self.column, self.column + self.text.chars().count())
    }
}

/// Split a line by gaps of 2+ whitespace characters.
fn split_segments(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start: Option<(usize, usize)> = None;
    let mut end = 0;
    let mut space_count = 0;

    for (column, (i, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some((byte, col)) = start.take() {
                    segments.push(Segment {
                        column: col,
                        text: &line[byte..end],
                    });
                }
            }
        } else {
            if start.is_none() {
                start = Some((i, column));
            }
            end = i + c.len_utf8();
            space_count = 0;
        }
    }

    if let Some((byte, col)) = start {
        segments.push(Segment {
            column: col,
            text: &line[byte..end],
        });
    }

    segments
}
