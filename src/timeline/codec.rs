//! Comma-delimited timing interchange: one `word,pause_ms,instructions` row per event.
//!
//! Quoting follows RFC 4180: a field containing a comma, quote, CR or LF is wrapped in quotes and
//! inner quotes are doubled. Rows may end in LF or CRLF.

use crate::{
    foundation::error::{ReelError, ReelResult},
    timeline::event::{LINEBREAK, ScriptEvent},
};

/// Serialize events into a complete interchange document.
pub fn encode_events(events: &[ScriptEvent]) -> String {
    let mut out = String::with_capacity(events.len() * 16);
    for ev in events {
        push_field(&mut out, &ev.word);
        out.push(',');
        out.push_str(&ev.pause_ms.to_string());
        out.push(',');
        push_field(&mut out, ev.instructions());
        out.push_str("\r\n");
    }
    out
}

/// Parse an interchange document. Blank rows are skipped.
pub fn decode_events(text: &str) -> ReelResult<Vec<ScriptEvent>> {
    let rows = split_rows(text)?;
    let mut out = Vec::with_capacity(rows.len());
    for (line_no, fields) in rows {
        if fields.len() == 1 && fields[0].is_empty() {
            continue;
        }
        let [word, pause, instructions] = <[String; 3]>::try_from(fields).map_err(|f| {
            ReelError::serde(format!(
                "timing row {line_no}: expected 3 fields, found {}",
                f.len()
            ))
        })?;
        let pause_ms = pause.trim().parse::<u64>().map_err(|e| {
            ReelError::serde(format!(
                "timing row {line_no}: invalid pause '{pause}': {e}"
            ))
        })?;
        let is_line_break = instructions.split_whitespace().any(|t| t == LINEBREAK);
        out.push(ScriptEvent {
            word,
            pause_ms,
            is_line_break,
        });
    }
    Ok(out)
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

fn split_rows(text: &str) -> ReelResult<Vec<(usize, Vec<String>)>> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line_no = 1usize;
    let mut row_start = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line_no += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push((row_start, std::mem::take(&mut fields)));
                line_no += 1;
                row_start = line_no;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(ReelError::serde(format!(
            "timing row {row_start}: unterminated quoted field"
        )));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push((row_start, fields));
    }
    Ok(rows)
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/codec.rs"]
mod tests;
