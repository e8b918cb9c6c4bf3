//! Console progress for a rewrite run.
//!
//! The text is for humans only and is not a stable machine format.

use std::io::{self, Write};

use super::summary::RunSummary;
use super::RunMode;
use crate::formatting::{create_formatter, FormattingConfig, OutputFormatter, PlainFormatter};

/// Receives progress events from [`super::run`].
pub trait Reporter {
    fn banner(&mut self, mode: RunMode) -> io::Result<()>;
    fn directory_started(&mut self, relative_path: &str, target_package: &str) -> io::Result<()>;
    fn file_updated(&mut self, relative_path: &str, file_name: &str, mode: RunMode)
        -> io::Result<()>;
    fn finished(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Discards every event.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn banner(&mut self, _mode: RunMode) -> io::Result<()> {
        Ok(())
    }

    fn directory_started(&mut self, _relative_path: &str, _target_package: &str) -> io::Result<()> {
        Ok(())
    }

    fn file_updated(
        &mut self,
        _relative_path: &str,
        _file_name: &str,
        _mode: RunMode,
    ) -> io::Result<()> {
        Ok(())
    }

    fn finished(&mut self, _summary: &RunSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Writes banner, progress, per-file and total lines to `out`.
pub struct ConsoleReporter<W: Write> {
    out: W,
    formatter: Box<dyn OutputFormatter>,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout(config: FormattingConfig) -> Self {
        Self::new(io::stdout(), create_formatter(config))
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { out, formatter }
    }

    /// ASCII-only reporter, mostly for tests.
    pub fn plain(out: W) -> Self {
        Self::new(out, Box::new(PlainFormatter))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn banner(&mut self, mode: RunMode) -> io::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.out,
            "{} {}",
            f.glyph("🔄"),
            f.header("Updating package declarations...")
        )?;
        if mode == RunMode::DryRun {
            writeln!(
                self.out,
                "{} {}",
                f.glyph("🔍"),
                f.dim("Dry run: no files will be written")
            )?;
        }
        writeln!(self.out)
    }

    fn directory_started(&mut self, relative_path: &str, target_package: &str) -> io::Result<()> {
        let f = &self.formatter;
        writeln!(
            self.out,
            "{} {} {} {}",
            f.glyph("📦"),
            f.info(relative_path),
            f.glyph("→"),
            target_package
        )
    }

    fn file_updated(
        &mut self,
        relative_path: &str,
        file_name: &str,
        mode: RunMode,
    ) -> io::Result<()> {
        let f = &self.formatter;
        let line = format!("{}/{}", relative_path, file_name);
        match mode {
            RunMode::Apply => writeln!(self.out, "  {} {}", f.glyph("✅"), f.success(&line)),
            RunMode::DryRun => writeln!(
                self.out,
                "  {} {} {}",
                f.glyph("✅"),
                f.success(&line),
                f.dim("(would update)")
            ),
        }
    }

    fn finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        let f = &self.formatter;
        let label = match summary.mode {
            RunMode::Apply => "Total files updated:",
            RunMode::DryRun => "Total files that would be updated:",
        };
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} {} {}",
            f.glyph("✨"),
            label,
            f.bold(&summary.total_updated().to_string())
        )?;
        self.out.flush()
    }
}
