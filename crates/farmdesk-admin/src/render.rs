//! Page rendering.
//!
//! Text modes print a column-aligned table followed by a
//! "Showing X to Y of Z users" footer, or the list's empty-state message
//! when nothing matched. Structured modes serialize the whole [`Page`],
//! metadata included, and skip the table entirely. CSV is an export: it
//! writes bare records with no pagination metadata.

use console::{measure_text_width, pad_str, Alignment, Style};
use farmdesk_query::{Page, Timestamp};
use serde::Serialize;

use crate::records::{FarmRecord, Notification, UserRecord};
use crate::views::ListKind;

/// Controls how a page is printed.
///
/// This is the value of the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputMode {
    /// Terminal gets `Term`, pipes get `Text`
    #[default]
    Auto,
    /// Table with bold headers
    Term,
    /// Plain table
    Text,
    /// Serialize the page as JSON
    Json,
    /// Serialize the page as YAML
    Yaml,
    /// Export records as CSV
    Csv,
}

impl OutputMode {
    /// Returns true for JSON, YAML and CSV.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml | OutputMode::Csv)
    }

    /// Resolves `Auto` to `Term` or `Text` based on whether stdout is a terminal.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if console::Term::stdout().is_term() {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}

/// Errors that can occur while serializing a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// A record that can be shown as one table row.
pub trait TableRow {
    /// Column headings, in display order.
    fn headers() -> &'static [&'static str];

    /// Cell text for each column. `now` anchors relative times.
    fn cells(&self, now: Timestamp) -> Vec<String>;
}

impl TableRow for UserRecord {
    fn headers() -> &'static [&'static str] {
        &["Name", "Email", "Role", "Farm", "Joined", "Status"]
    }

    fn cells(&self, _now: Timestamp) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.farm.clone(),
            self.joined.clone(),
            self.status.to_string(),
        ]
    }
}

impl TableRow for FarmRecord {
    fn headers() -> &'static [&'static str] {
        &[
            "Farm", "Owner", "Location", "Fields", "Tasks", "Workers", "Status", "Created",
        ]
    }

    fn cells(&self, _now: Timestamp) -> Vec<String> {
        vec![
            self.name.clone(),
            self.owner.clone(),
            self.location.clone(),
            self.fields.to_string(),
            self.tasks.to_string(),
            self.workers.to_string(),
            self.status.to_string(),
            self.created.clone(),
        ]
    }
}

impl TableRow for Notification {
    fn headers() -> &'static [&'static str] {
        &["", "Type", "Title", "Message", "When"]
    }

    fn cells(&self, now: Timestamp) -> Vec<String> {
        vec![
            if self.is_read { "" } else { "*" }.to_string(),
            self.kind.to_string(),
            self.title.clone(),
            self.message.clone(),
            time_ago(now, self.timestamp),
        ]
    }
}

/// Short relative time such as `"5m ago"`.
pub fn time_ago(now: Timestamp, then: Timestamp) -> String {
    let seconds = now.as_millis().saturating_sub(then.as_millis()).max(0) / 1000;
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Footer line, e.g. `"Showing 1 to 8 of 10 users"`.
///
/// Returns `None` when the page holds no items.
pub fn footer<T>(page: &Page<T>, noun: &str) -> Option<String> {
    let first = page.first_item_number()?;
    let last = page.last_item_number()?;
    Some(format!(
        "Showing {first} to {last} of {} {noun}",
        page.total_matched
    ))
}

/// Writes records as CSV, one row each, with a header row from the field
/// names. No records gives an empty string.
pub fn render_csv<T: Serialize>(records: &[T]) -> Result<String, RenderError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)
            .map_err(|e| RenderError::Csv(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| RenderError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| RenderError::Csv(e.to_string()))
}

/// Renders a page in the requested mode.
///
/// `Auto` is resolved against stdout before rendering. CSV covers only the
/// items on this page; exports of every match go through [`render_csv`].
pub fn render_page<T>(
    page: &Page<T>,
    kind: ListKind,
    mode: OutputMode,
    now: Timestamp,
) -> Result<String, RenderError>
where
    T: TableRow + Serialize,
{
    match mode.resolve_auto() {
        OutputMode::Json => Ok(serde_json::to_string_pretty(page)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(page)?),
        OutputMode::Csv => render_csv(&page.items),
        OutputMode::Term => Ok(render_table(page, kind, now, true)),
        _ => Ok(render_table(page, kind, now, false)),
    }
}

/// Renders a page as an aligned text table with a footer.
pub fn render_table<T: TableRow>(
    page: &Page<T>,
    kind: ListKind,
    now: Timestamp,
    styled: bool,
) -> String {
    if page.is_empty() {
        return format!("{}\n", kind.empty_message());
    }

    let headers = T::headers();
    let rows: Vec<Vec<String>> = page.items.iter().map(|item| item.cells(now)).collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| measure_text_width(cell))
                .chain(std::iter::once(measure_text_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header_style = Style::new().bold().force_styling(true);
    let mut out = String::new();

    let heading: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| {
            let padded = pad_str(header, *width, Alignment::Left, None);
            if styled {
                header_style.apply_to(padded).to_string()
            } else {
                padded.into_owned()
            }
        })
        .collect();
    push_line(&mut out, &heading);

    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad_str(cell, *width, Alignment::Left, None).into_owned())
            .collect();
        push_line(&mut out, &cells);
    }

    out.push('\n');
    match footer(page, kind.noun()) {
        Some(line) => out.push_str(&line),
        None => out.push_str(&format!(
            "Page {} of {}: no {} on this page",
            page.page,
            page.total_pages,
            kind.noun()
        )),
    }
    out.push('\n');
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join("  ").trim_end());
    out.push('\n');
}
