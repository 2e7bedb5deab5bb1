use crate::elements::{Paragraph, ParagraphProps, Run, Table, TableCell, TableRow};
use rfpdoc_style::stylesheet::{banded_fill, table_body, table_header};
use rfpdoc_style::TextAlign;
use rfpdoc_types::Color;
use rfpdoc_types::geometry::equal_division;

pub(crate) fn cell(
    text: &str,
    width: u32,
    shading: Option<Color>,
    alignment: TextAlign,
    style: rfpdoc_style::RunStyle,
) -> TableCell {
    TableCell {
        width,
        shading,
        paragraph: Paragraph::new(
            ParagraphProps {
                alignment,
                ..ParagraphProps::default()
            },
            vec![Run::text(text, style)],
        ),
    }
}

/// Header cells: bold white text on the primary fill.
pub(crate) fn header_row(labels: &[&str], widths: &[u32], alignment: TextAlign) -> TableRow {
    let style = table_header();
    TableRow {
        is_header: true,
        cells: labels
            .iter()
            .zip(widths)
            .map(|(label, width)| cell(label, *width, Some(style.fill), alignment, style.run))
            .collect(),
    }
}

/// Pads with empty cells or drops the overflow so every row has
/// `column_count` cells.
fn fitted(row: &[String], column_count: usize) -> Vec<&str> {
    row.iter()
        .map(String::as_str)
        .chain(std::iter::repeat(""))
        .take(column_count)
        .collect()
}

/// A grid table with equal column widths spanning `content_width`.
///
/// Columns follow the first row; later rows are padded or truncated to match.
/// Row 0 is the header. Other rows are banded by absolute index, so even rows
/// get the light fill. No rows at all yields a single empty cell.
pub fn data_table(rows: &[Vec<String>], content_width: u32) -> Table {
    let Some(first) = rows.first() else {
        log::warn!("Table block has no rows; emitting a single empty cell");
        return Table {
            width: content_width,
            column_widths: vec![content_width],
            rows: vec![TableRow {
                is_header: false,
                cells: vec![cell(
                    "",
                    content_width,
                    None,
                    TextAlign::Left,
                    table_body(),
                )],
            }],
        };
    };

    let column_count = first.len().max(1);
    let column_width = equal_division(content_width, column_count);
    if rows.iter().any(|row| row.len() != column_count) {
        log::warn!(
            "Table rows have differing lengths; fitting each row to {} columns",
            column_count
        );
    }

    let table_rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let texts = fitted(row, column_count);
            if index == 0 {
                let widths = vec![column_width; column_count];
                return header_row(&texts, &widths, TextAlign::Center);
            }
            TableRow {
                is_header: false,
                cells: texts
                    .iter()
                    .map(|text| {
                        cell(
                            text,
                            column_width,
                            banded_fill(index),
                            TextAlign::Left,
                            table_body(),
                        )
                    })
                    .collect(),
            }
        })
        .collect();

    Table {
        width: content_width,
        column_widths: vec![column_width; column_count],
        rows: table_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rfpdoc_style::palette;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_empty_rows_yield_one_empty_cell() {
        let table = data_table(&[], 9360);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cells.len(), 1);
        assert_eq!(table.rows[0].cells[0].paragraph.text(), "");
        assert_eq!(table.rows[0].cells[0].width, 9360);
    }

    #[test]
    fn test_equal_widths_and_header() {
        let table = data_table(&grid(&[&["A", "B", "C"], &["1", "2", "3"]]), 9360);
        assert_eq!(table.column_widths, vec![3120, 3120, 3120]);
        let header = &table.rows[0];
        assert!(header.is_header);
        assert_eq!(header.cells[0].shading, Some(palette::PRIMARY));
        assert_eq!(header.cells[0].paragraph.props.alignment, TextAlign::Center);
        let run = &header.cells[0].paragraph.runs[0];
        assert!(run.style.bold);
        assert_eq!(run.style.color, palette::WHITE);
    }

    #[test]
    fn test_banding_by_absolute_row() {
        let table = data_table(
            &grid(&[&["H"], &["r1"], &["r2"], &["r3"], &["r4"]]),
            9360,
        );
        let fills: Vec<_> = table.rows.iter().map(|r| r.cells[0].shading).collect();
        assert_eq!(
            fills,
            vec![
                Some(palette::PRIMARY),
                None,
                Some(palette::LIGHT_GRAY),
                None,
                Some(palette::LIGHT_GRAY)
            ]
        );
    }

    #[test]
    fn test_widths_floor() {
        let table = data_table(&grid(&[&["a", "b", "c", "d", "e", "f", "g"]]), 9360);
        assert_eq!(table.column_widths[0], 1337);
    }

    #[test]
    fn test_ragged_rows_fit_the_grid() {
        let table = data_table(
            &grid(&[&["A", "B"], &["1", "2", "3"], &["only"]]),
            9360,
        );
        assert_eq!(table.column_widths.len(), 2);
        for row in &table.rows {
            assert_eq!(row.cells.len(), 2);
        }
        let texts: Vec<_> = table.rows[1].cells.iter().map(|c| c.paragraph.text()).collect();
        assert_eq!(texts, vec!["1", "2"]);
        assert_eq!(table.rows[2].cells[1].paragraph.text(), "");
    }

    #[test]
    fn test_empty_header_row_keeps_one_column() {
        let table = data_table(&grid(&[&[], &["x"]]), 9360);
        assert_eq!(table.column_widths, vec![9360]);
        assert_eq!(table.rows[0].cells.len(), 1);
        assert_eq!(table.rows[1].cells[0].paragraph.text(), "x");
    }
}
