//! Line-by-line driver around the scanner.
//!
//! Reads source lines in order, scans each one independently and writes the
//! token listing in the fixed text format:
//!
//! ```text
//! Line: x := 5#
//! x : IDENTIFIER
//! := : SYMBOL
//! 5 : NUMBER
//! ERROR READING "#"
//! ```

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    config::{DriverOptions, ScanMode},
    errors::errors::{DriverError, Error, ErrorImpl},
    lexer::{
        lexer::{scan_line, tokenize_line},
        tokens::{ErrorUnit, ScanItem, Token},
    },
    Position,
};

pub fn format_token(token: &Token) -> String {
    format!("{} : {}", token.value, token.kind)
}

pub fn format_error(error: &ErrorUnit) -> String {
    format!("ERROR READING \"{}\"", error.character)
}

#[derive(Debug, Clone, Default)]
pub struct LineReport {
    pub tokens: usize,
    pub errors: usize,
    pub first_error: Option<Error>,
}

/// A line whose scan hit at least one rejected character.
#[derive(Debug, Clone)]
pub struct LineFailure {
    pub line_number: usize,
    pub line: String,
    pub error: Error,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub lines: usize,
    pub tokens: usize,
    pub errors: usize,
    pub failures: Vec<LineFailure>,
}

pub struct Driver {
    options: DriverOptions,
}

impl Driver {
    pub fn new(options: DriverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    pub fn render_line(&self, line: &str, out: &mut impl Write) -> Result<LineReport, DriverError> {
        if self.options.header {
            writeln!(out, "Line: {}", line)?;
        }

        let report = match self.options.mode {
            ScanMode::Resume => self.render_resumed(line, out)?,
            ScanMode::FirstError => self.render_first_error(line, out)?,
        };

        if self.options.separator {
            writeln!(out)?;
        }

        Ok(report)
    }

    fn render_resumed(&self, line: &str, out: &mut impl Write) -> Result<LineReport, DriverError> {
        let mut report = LineReport::default();
        let mut before_error = Vec::new();

        for item in scan_line(line) {
            match item {
                ScanItem::Token(token) => {
                    writeln!(out, "{}", format_token(&token))?;
                    report.tokens += 1;

                    if report.first_error.is_none() {
                        before_error.push(token);
                    }
                }
                ScanItem::Error(unit) => {
                    writeln!(out, "{}", format_error(&unit))?;
                    report.errors += 1;

                    if report.first_error.is_none() {
                        let error = Error::new(
                            ErrorImpl::UnrecognisedCharacter { character: unit.character },
                            Position(unit.span.start),
                        );
                        report.first_error = Some(error.with_scanned(std::mem::take(&mut before_error)));
                    }
                }
            }
        }

        Ok(report)
    }

    fn render_first_error(&self, line: &str, out: &mut impl Write) -> Result<LineReport, DriverError> {
        match tokenize_line(line) {
            Ok(tokens) => {
                for token in &tokens {
                    writeln!(out, "{}", format_token(token))?;
                }

                Ok(LineReport {
                    tokens: tokens.len(),
                    ..Default::default()
                })
            }
            Err(error) => {
                for token in error.get_scanned() {
                    writeln!(out, "{}", format_token(token))?;
                }

                let ErrorImpl::UnrecognisedCharacter { character } = error.get_kind();
                writeln!(out, "ERROR READING \"{}\"", character)?;

                Ok(LineReport {
                    tokens: error.get_scanned().len(),
                    errors: 1,
                    first_error: Some(error),
                })
            }
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<RunSummary, DriverError> {
        let mut summary = RunSummary::default();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let report = self.render_line(&line, &mut output)?;

            summary.lines += 1;
            summary.tokens += report.tokens;
            summary.errors += report.errors;

            if let Some(error) = report.first_error {
                log::warn!("line {}: {} character(s) not recognised", index + 1, report.errors);
                summary.failures.push(LineFailure {
                    line_number: index + 1,
                    line,
                    error,
                });
            }
        }

        output.flush()?;

        log::info!(
            "scanned {} line(s): {} token(s), {} error(s)",
            summary.lines,
            summary.tokens,
            summary.errors
        );

        Ok(summary)
    }

    pub fn run_files(&self, input: &Path, output: Option<&Path>) -> Result<RunSummary, DriverError> {
        let file = File::open(input).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => DriverError::InputNotFound {
                path: input.to_path_buf(),
            },
            _ => DriverError::Io(error),
        })?;
        log::info!("reading {}", input.display());

        let reader = BufReader::new(file);

        match output {
            Some(path) => {
                log::info!("writing {}", path.display());
                self.run(reader, BufWriter::new(File::create(path)?))
            }
            None => self.run(reader, io::stdout().lock()),
        }
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DriverOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(options: DriverOptions, source: &str) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = Driver::new(options).run(source.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_render_default_format() {
        let (out, summary) = render(DriverOptions::default(), "x := 5\nwhile y do skip endwhile\n");

        assert_eq!(
            out,
            "Line: x := 5\nx : IDENTIFIER\n:= : SYMBOL\n5 : NUMBER\n\n\
             Line: while y do skip endwhile\nwhile : KEYWORD\ny : IDENTIFIER\ndo : KEYWORD\nskip : KEYWORD\nendwhile : KEYWORD\n\n"
        );
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.tokens, 8);
        assert_eq!(summary.errors, 0);
        assert!(summary.failures.is_empty());
    }

    #[test]
    fn test_render_resumes_after_errors() {
        let (out, summary) = render(DriverOptions::default(), "x=5#y@\n");

        assert_eq!(
            out,
            "Line: x=5#y@\nx : IDENTIFIER\n= : SYMBOL\n5 : NUMBER\nERROR READING \"#\"\ny : IDENTIFIER\nERROR READING \"@\"\n\n"
        );
        assert_eq!(summary.tokens, 4);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].line_number, 1);
        assert_eq!(summary.failures[0].error.get_position().0, 3);
        assert_eq!(summary.failures[0].error.get_scanned().len(), 3);
    }

    #[test]
    fn test_render_first_error_mode() {
        let options = DriverOptions::default().with_mode(ScanMode::FirstError);
        let (out, summary) = render(options, "a : b\nc\n");

        assert_eq!(
            out,
            "Line: a : b\na : IDENTIFIER\nERROR READING \":\"\n\nLine: c\nc : IDENTIFIER\n\n"
        );
        assert_eq!(summary.tokens, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.failures[0].line, "a : b");
    }

    #[test]
    fn test_render_without_header_and_separator() {
        let options = DriverOptions::default().with_header(false).with_separator(false);
        let (out, _) = render(options, "if x\n\n");

        assert_eq!(out, "if : KEYWORD\nx : IDENTIFIER\n");
    }

    #[test]
    fn test_render_empty_line() {
        let (out, summary) = render(DriverOptions::default(), "\n");

        assert_eq!(out, "Line: \n\n");
        assert_eq!(summary.lines, 1);
        assert_eq!(summary.tokens, 0);
    }

    #[test]
    fn test_render_strips_carriage_return() {
        let (out, summary) = render(DriverOptions::default(), "skip\r\n");

        assert_eq!(out, "Line: skip\nskip : KEYWORD\n\n");
        assert_eq!(summary.errors, 0);
    }

    #[test]
    fn test_missing_input_file() {
        let result = Driver::default().run_files(Path::new("does/not/exist.limp"), None);

        assert!(matches!(result, Err(DriverError::InputNotFound { .. })));
        assert_eq!(result.unwrap_err().exit_code(), 2);
    }
}
