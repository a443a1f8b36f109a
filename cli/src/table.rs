//! Plain-text table rendering for the `list` command.

use passfort_core::Record;

const MASK: &str = "********";

/// Renders records as an aligned text table.
///
/// The `password` column is replaced with a mask unless `show_passwords`
/// is set.
pub fn render(columns: &[String], rows: &[Record], show_passwords: bool) -> String {
    let headers: Vec<String> = columns.iter().map(|c| title_case(c)).collect();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    if column == "password" && !show_passwords {
                        MASK.to_string()
                    } else {
                        row.get(column).map(ToString::to_string).unwrap_or_default()
                    }
                })
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &headers, &widths);
    let separators: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &separators, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:<width$}", width = widths[i]));
    }
    // Trailing alignment spaces on the last column are noise.
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
