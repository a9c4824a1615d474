/// How the driver treats a line once a character fails to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Report every rejected character in place and keep going.
    #[default]
    Resume,
    /// Report the tokens before the first rejected character, then the
    /// character itself, and drop the rest of the line.
    FirstError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    pub mode: ScanMode,
    /// Blank line after each input line's listing.
    pub separator: bool,
    /// `Line: ...` echo before each listing.
    pub header: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            separator: true,
            header: true,
        }
    }
}

impl DriverOptions {
    #[must_use]
    pub fn with_mode(self, mode: ScanMode) -> Self {
        Self { mode, ..self }
    }

    #[must_use]
    pub fn with_separator(self, separator: bool) -> Self {
        Self { separator, ..self }
    }

    #[must_use]
    pub fn with_header(self, header: bool) -> Self {
        Self { header, ..self }
    }
}
