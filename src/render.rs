//! HTML output for the roster page.
//!
//! The page is a single static document: a styled three-column table with one
//! row per employee and a generated-at footer.

use chrono::{SecondsFormat, Utc};

use crate::api::Employee;

// =============================================================================
// Constants
// =============================================================================

const APP_NAME: &str = "Staffboard";
const PAGE_TITLE: &str = "Employee Roster";

// =============================================================================
// CSS Styles
// =============================================================================

fn styles() -> &'static str {
    r"
        * {
            box-sizing: border-box;
            margin: 0;
            padding: 0;
        }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            background: linear-gradient(135deg, #1a1a2e 0%, #16213e 50%, #0f3460 100%);
            min-height: 100vh;
            display: flex;
            justify-content: center;
            align-items: center;
            padding: 20px;
            color: #e0e0e0;
        }

        .container {
            background: rgba(255, 255, 255, 0.05);
            backdrop-filter: blur(10px);
            border-radius: 16px;
            padding: 40px;
            max-width: 720px;
            width: 100%;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
            border: 1px solid rgba(255, 255, 255, 0.1);
        }

        h1 {
            text-align: center;
            margin-bottom: 8px;
        }

        .tagline {
            text-align: center;
            color: #888;
            font-size: 0.9rem;
            margin-bottom: 24px;
        }

        table {
            width: 100%;
            border-collapse: collapse;
        }

        th {
            text-align: left;
            padding: 12px 16px;
            border-bottom: 2px solid rgba(255, 255, 255, 0.2);
            color: #e0e0e0;
            font-weight: 600;
        }

        td {
            padding: 12px 16px;
            border-bottom: 1px solid rgba(255, 255, 255, 0.08);
        }

        tbody tr:hover {
            background: rgba(255, 255, 255, 0.04);
        }

        .footer {
            text-align: center;
            margin-top: 24px;
            font-size: 0.8rem;
            color: #666;
        }
    "
}

// =============================================================================
// Table body
// =============================================================================

/// Escape a value for use as HTML text content.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// The roster table body.
///
/// Rows are only ever appended; appending the same records twice leaves
/// duplicate rows, matching the page this replaces.
#[derive(Default)]
pub struct RosterTable {
    rows: Vec<String>,
}

impl RosterTable {
    pub fn new() -> RosterTable {
        RosterTable::default()
    }

    /// Appends one three-cell row per record, in order.
    pub fn append_employees(&mut self, employees: &[Employee]) {
        for employee in employees {
            self.rows.push(format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&employee.name),
                escape(&employee.organization),
                escape(&employee.role),
            ));
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `<tbody>` contents, one `<tr>` per appended record.
    pub fn body_html(&self) -> String {
        self.rows.join("\n                ")
    }
}

// =============================================================================
// HTML Components
// =============================================================================

fn header() -> String {
    format!(
        r#"
        <h1>{PAGE_TITLE}</h1>
        <p class="tagline">{APP_NAME}</p>
        "#
    )
}

fn table(roster: &RosterTable) -> String {
    let rows = roster.body_html();
    format!(
        r#"
        <table>
            <thead>
                <tr><th>Name</th><th>Organization</th><th>Role</th></tr>
            </thead>
            <tbody id="tableBody">
                {rows}
            </tbody>
        </table>
        "#
    )
}

fn footer() -> String {
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    format!(
        r#"
        <div class="footer">
            <p>Generated by {APP_NAME} at {generated_at}</p>
        </div>
        "#
    )
}

// =============================================================================
// Public API
// =============================================================================

/// Returns the full roster page HTML for the given table.
///
/// An empty table still renders a complete page, just with no rows.
pub fn roster_page(roster: &RosterTable) -> String {
    let styles = styles();
    let header = header();
    let table = table(roster);
    let footer = footer();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{PAGE_TITLE} - {APP_NAME}</title>
    <style>{styles}</style>
</head>
<body>
    <div class="container">
        {header}
        {table}
        {footer}
    </div>
</body>
</html>"#
    )
}
