//! Output format selection and table rendering.

use colored::Colorize;

/// Output format options supported by the CLI.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table (default)
    Text,
    /// Single JSON array
    Json,
}

/// Prints `rows` as aligned columns under a dimmed header line.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) {
    let lines = format_lines(headers, rows);
    for (index, line) in lines.iter().enumerate() {
        if index < 2 {
            println!("{}", line.bright_black());
        } else {
            println!("{line}");
        }
    }
}

/// Builds the table lines: header, separator, then one line per row.
fn format_lines(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            if column < widths.len() {
                widths[column] = widths[column].max(cell.len());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(pad_cells(headers.iter().map(|h| (*h).to_string()), &widths));
    lines.push(pad_cells(
        widths.iter().map(|width| "-".repeat(*width)),
        &widths,
    ));
    for row in rows {
        lines.push(pad_cells(row.iter().cloned(), &widths));
    }
    lines
}

fn pad_cells(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .enumerate()
        .map(|(column, cell)| {
            let width = widths.get(column).copied().unwrap_or(0);
            format!("{cell:<width$}")
        })
        .collect();
    padded.join("  ").trim_end().to_string()
}
