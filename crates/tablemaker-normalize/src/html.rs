use std::fmt::Write as _;

use tablemaker_model::{Column, RawHtml, Row};

/// Build the read-only `<table>` rendering of a normalized value.
///
/// Heading and cell text are embedded verbatim: table content comes
/// from trusted site editors, matching the host's settings model.
pub fn render_table(columns: &[Column], rows: &[Row]) -> RawHtml {
    let mut html = String::from("<table><thead><tr>");
    for column in columns {
        let _ = write!(
            html,
            "<th align=\"{}\" width=\"{}\">{}</th>",
            column.align.as_str(),
            column.width,
            column.heading
        );
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for (cell, column) in row.iter().zip(columns) {
            let _ = write!(
                html,
                "<td align=\"{}\">{}</td>",
                column.align.as_str(),
                cell.display_text()
            );
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    RawHtml::new(html)
}
