//! Reporting malformed descriptors.

use std::error;
use std::fmt;

use parser::descriptor::{DescriptorError, Error};

/// A malformed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The complete descriptor that was being decoded.
    pub descriptor: String,
    /// The byte offset in `descriptor` at which decoding failed.
    pub offset: usize,
    pub error: Error,
}

impl Diagnostic {
    pub fn new(descriptor: &str, error: DescriptorError) -> Self {
        Diagnostic {
            descriptor: String::from(descriptor),
            offset: error.offset(descriptor),
            error: error.error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "malformed descriptor `{}` at offset {}: {}", self.descriptor, self.offset,
               self.error)
    }
}

impl error::Error for Diagnostic {
    fn description(&self) -> &str {
        "malformed descriptor"
    }

    fn cause(&self) -> Option<&error::Error> {
        Some(&self.error)
    }
}

/// Receives a diagnostic for every descriptor that fails to decode.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects the diagnostics.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Reports diagnostics as warnings through the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink {
    reported: usize,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink { reported: 0 }
    }

    /// The number of diagnostics reported so far.
    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        warn!("{}", diagnostic);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use parser::descriptor::{DescriptorError, Error};

    #[test]
    fn test_display() {
        let descriptor = "[Q";
        let diagnostic = Diagnostic::new(descriptor,
                                         DescriptorError::new(&descriptor[1..],
                                                              Error::UnknownTypeCode { code: 'Q' }));
        assert_eq!(diagnostic.offset, 1);
        assert_eq!(diagnostic.to_string(),
                   "malformed descriptor `[Q` at offset 1: unknown type code 'Q'");
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogSink::new();
        sink.report(Diagnostic::new("", DescriptorError::new("", Error::UnexpectedEnd)));
        assert_eq!(sink.reported(), 1);
    }
}
