#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Advisory reports about tags that could not be interpreted.
///
/// None of these stop processing.
/// The record keeps whatever state it had before the offending tag.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    #[error("I don't know what to do with: {key}={value}")]
    UnrecognizedValue { key: String, value: String },
    #[error("Max speed value couldn't be parsed: {value}")]
    UnparsableMaxSpeed { value: String },
    #[error("Unknown road class code: {code}")]
    UnknownRoadClass { code: i32 },
}

/// Receives [`Diagnostic`]s as tags are processed.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics as data.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Emits every diagnostic as a `warn` level tracing event.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "Ignoring tag");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let diagnostic = Diagnostic::UnrecognizedValue {
            key: "bicycle".to_string(),
            value: "maybe".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "I don't know what to do with: bicycle=maybe"
        );

        let diagnostic = Diagnostic::UnparsableMaxSpeed {
            value: "fast".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "Max speed value couldn't be parsed: fast"
        );
    }

    #[test]
    fn test_forwarding_sink() {
        fn report_to(mut sink: impl DiagnosticSink) {
            sink.report(Diagnostic::UnknownRoadClass { code: 42 });
        }

        let mut collected = Vec::new();
        report_to(&mut collected);
        report_to(&mut collected);
        assert_eq!(
            collected,
            vec![
                Diagnostic::UnknownRoadClass { code: 42 },
                Diagnostic::UnknownRoadClass { code: 42 }
            ]
        );
    }
}
