use std::{path::PathBuf, process::exit};

use limp::{
    config::{DriverOptions, ScanMode},
    driver::Driver,
    render_diagnostic,
};

#[derive(clap::Parser, Debug)]
#[command(version, about = "Scans Limp source line by line and lists its tokens", long_about = None)]
struct Args {
    /// Source file to scan.
    input: PathBuf,

    /// Where to write the token listing. Defaults to stdout.
    output: Option<PathBuf>,

    /// Stop each line at its first unrecognised character.
    #[arg(long)]
    first_error: bool,

    /// Do not print a blank line after each source line.
    #[arg(long)]
    no_separator: bool,

    /// Do not echo each source line before its tokens.
    #[arg(long)]
    no_header: bool,

    /// Print a diagnostic to stderr for each line with errors.
    #[arg(long)]
    diagnostics: bool,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }

    fn driver_options(&self) -> DriverOptions {
        let mode = if self.first_error {
            ScanMode::FirstError
        } else {
            ScanMode::Resume
        };

        DriverOptions::default()
            .with_mode(mode)
            .with_separator(!self.no_separator)
            .with_header(!self.no_header)
    }
}

fn main() {
    let args = Args::parse_args();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let driver = Driver::new(args.driver_options());
    let summary = match driver.run_files(&args.input, args.output.as_deref()) {
        Ok(summary) => summary,
        Err(error) => {
            eprintln!("{}", error);
            exit(error.exit_code());
        }
    };

    if args.diagnostics {
        let file = args.input.to_string_lossy();
        for failure in &summary.failures {
            eprintln!("{}\n", render_diagnostic(&failure.error, &file, failure.line_number, &failure.line));
        }
    }
}
