//! Reporting for recovered pairing failures.
//!
//! When `pair` rejects its argument it does not fail; it hands one line of
//! text to a [`Reporter`] and returns. Backends:
//!
//! | Backend   | Description |
//! |-----------|-------------|
//! | `stdout`  | Prints each line to standard output (default) |
//! | `buffer`  | Keeps lines in memory for inspection |
//! | `discard` | Drops everything |
//!
//! The [`create_reporter`] factory builds a boxed backend from
//! [`ReportConfig`].

/// Sink for the one-line messages produced by recovered failures.
pub trait Reporter {
    /// Emit one line of text.
    fn report(&mut self, line: &str);

    /// Human-readable backend name (e.g. "stdout", "buffer").
    fn name(&self) -> &str;
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, line: &str) {
        (**self).report(line);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: &str) {
        (**self).report(line);
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Prints each reported line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn report(&mut self, line: &str) {
        println!("{}", line);
    }

    fn name(&self) -> &str {
        "stdout"
    }
}

/// Collects reported lines in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferReporter {
    lines: Vec<String>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines reported so far, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove and return everything reported so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn name(&self) -> &str {
        "buffer"
    }
}

/// Drops every reported line.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardReporter;

impl Reporter for DiscardReporter {
    #[inline(always)]
    fn report(&mut self, _line: &str) {}

    fn name(&self) -> &str {
        "discard"
    }
}

/// Where recovered failures are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportSink {
    #[default]
    Stdout,
    Buffer,
    Discard,
}

/// Configuration for the reporting backend.
#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub sink: ReportSink,
}

/// Create a reporter from configuration.
pub fn create_reporter(config: &ReportConfig) -> Box<dyn Reporter> {
    match config.sink {
        ReportSink::Stdout => Box::new(StdoutReporter),
        ReportSink::Buffer => Box::new(BufferReporter::new()),
        ReportSink::Discard => Box::new(DiscardReporter),
    }
}
