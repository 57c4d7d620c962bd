use std::collections::HashSet;
use std::fmt::Write as _;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use mentor_core::model::{Progress, Session, SessionList};

use crate::error::ImportError;

//
// ─── FORMATS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
    Ics,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            "ics" | "ical" => Ok(Self::Ics),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// Everything a Markdown report shows.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext<'a> {
    pub title: &'a str,
    pub notes: Option<&'a str>,
    pub progress: Progress,
    pub sessions: &'a SessionList,
}

//
// ─── EXPORT ────────────────────────────────────────────────────────────────────
//

/// Pretty-printed JSON in the same shape as the persisted sessions value.
///
/// # Errors
///
/// Returns `serde_json::Error` if encoding fails.
pub fn export_json(sessions: &SessionList) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(sessions)
}

#[must_use]
pub fn export_markdown(ctx: &ExportContext<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", ctx.title);
    let _ = writeln!(out);
    let _ = writeln!(out, "**Progress:** {}", ctx.progress);
    let _ = writeln!(out);

    if let Some(notes) = ctx.notes.map(str::trim).filter(|n| !n.is_empty()) {
        let _ = writeln!(out, "{notes}");
        let _ = writeln!(out);
    }

    if ctx.sessions.is_empty() {
        let _ = writeln!(out, "_No sessions scheduled._");
        return out;
    }

    let _ = writeln!(out, "| # | Title | Date |");
    let _ = writeln!(out, "|---:|-------|:----:|");
    for (idx, session) in ctx.sessions.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            idx + 1,
            escape_cell(session.title()),
            session.date().map_or_else(|| "-".to_string(), escape_cell),
        );
    }
    out
}

/// `#,Title,Date` rows in list order. Undated sessions leave the date empty.
#[must_use]
pub fn export_csv(sessions: &SessionList) -> String {
    let mut out = String::from("#,Title,Date\r\n");
    for (idx, session) in sessions.iter().enumerate() {
        let _ = write!(
            out,
            "{},{},{}\r\n",
            idx + 1,
            csv_field(session.title()),
            csv_field(session.date().unwrap_or_default()),
        );
    }
    out
}

/// An iCalendar feed with one all-day event per dated session.
///
/// Sessions without a `YYYY-MM-DD` date are left out.
#[must_use]
pub fn export_ics(sessions: &SessionList, calendar_name: &str, stamp: DateTime<Utc>) -> String {
    let dtstamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Mentor//Sessions//EN".to_string(),
        format!("X-WR-CALNAME:{}", escape_ics(calendar_name)),
    ];

    for session in sessions {
        let Some(day) = session.date().and_then(parse_iso_date) else {
            continue;
        };
        let Some(next_day) = day.succ_opt() else {
            continue;
        };
        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@mentor", session.id()));
        lines.push(format!("DTSTAMP:{dtstamp}"));
        lines.push(format!("DTSTART;VALUE=DATE:{}", day.format("%Y%m%d")));
        lines.push(format!("DTEND;VALUE=DATE:{}", next_day.format("%Y%m%d")));
        lines.push(format!("SUMMARY:{}", escape_ics(session.title())));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    let mut out = String::new();
    for line in &lines {
        fold_ics_line(&mut out, line);
    }
    out
}

const ICS_LINE_OCTETS: usize = 75;

/// Append `line` with CRLF, folding after 75 octets onto continuation lines
/// that start with a space. Never splits a UTF-8 sequence.
fn fold_ics_line(out: &mut String, line: &str) {
    let mut budget = ICS_LINE_OCTETS;
    let mut used = 0;
    for ch in line.chars() {
        if used + ch.len_utf8() > budget {
            out.push_str("\r\n ");
            // The leading space counts toward the continuation line.
            budget = ICS_LINE_OCTETS - 1;
            used = 0;
        }
        out.push(ch);
        used += ch.len_utf8();
    }
    out.push_str("\r\n");
}

//
// ─── IMPORT ────────────────────────────────────────────────────────────────────
//

/// Parse a JSON session array, keeping its order.
///
/// # Errors
///
/// Returns `ImportError` if the text is not a JSON array of sessions, if any
/// title is blank, or if an id repeats.
pub fn import_json(text: &str) -> Result<SessionList, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    if !value.is_array() {
        return Err(ImportError::NotAnArray);
    }
    let sessions: Vec<Session> = serde_json::from_value(value)?;

    let mut seen = HashSet::with_capacity(sessions.len());
    for (index, session) in sessions.iter().enumerate() {
        if session.title().trim().is_empty() {
            return Err(ImportError::BlankTitle { index });
        }
        if !seen.insert(session.id()) {
            return Err(ImportError::DuplicateId {
                id: session.id().value(),
            });
        }
    }

    Ok(SessionList::from_vec(sessions))
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn escape_cell(raw: &str) -> String {
    raw.replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

fn escape_ics(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace("\r\n", "\\n")
        .replace(['\r', '\n'], "\\n")
}

fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
