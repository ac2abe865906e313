use crate::models::{ClassifiedWay, WayRecord};
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::{debug, warn};
use wayclass::{Diagnostic, DiagnosticSink, EdgeProperties};

#[derive(Copy, Clone, Debug, Default)]
pub struct ClassifyOptions {
    /// Write ways that no mode can use.
    pub keep_inaccessible: bool,
    /// Write bike and foot access as codes instead of names.
    pub numeric_codes: bool,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub read: usize,
    pub written: usize,
    pub diagnostics: usize,
}

/// Logs diagnostics with the input line they came from.
struct LineSink<'a> {
    line: usize,
    count: &'a mut usize,
}

impl DiagnosticSink for LineSink<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        *self.count += 1;
        warn!(line = self.line, %diagnostic, "Ignoring tag");
    }
}

/// Reads one way per line from `reader` and writes one classified way per line to `writer`.
///
/// # Errors
///
/// Fails on I/O errors and on lines which are not a valid way record.
/// Tags that can't be interpreted are only logged.
pub fn classify_lines<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    options: ClassifyOptions,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: WayRecord = serde_json::from_str(&line)
            .with_context(|| format!("Invalid way record on line {line_number}"))?;
        summary.read += 1;

        let sink = LineSink {
            line: line_number,
            count: &mut summary.diagnostics,
        };
        let attributes = EdgeProperties::from_tags(record.tags.iter(), sink).normalize();

        if !options.keep_inaccessible && !attributes.is_accessible() {
            debug!(line = line_number, "Skipping inaccessible way");
            continue;
        }

        serde_json::to_writer(
            &mut writer,
            &ClassifiedWay::new(&record.id, attributes, options.numeric_codes),
        )?;
        writeln!(writer)?;
        summary.written += 1;
    }

    writer.flush()?;
    Ok(summary)
}
