use std::io::{self, Write};
use std::process;

use clap::Parser;
use pandoc_html_core::{convert, Config, ConvertError, DocumentName, ExitCode};

#[derive(Parser, Debug)]
#[command(
    name = "pandoc-html",
    version,
    about = "Render a markdown source to standalone HTML with pandoc",
    long_about = None
)]
struct Cli {
    /// Document name without extension; directory components are ignored
    #[arg(value_name = "NAME")]
    name: String,

    /// Fail the run when the converter fails, instead of only reporting it
    #[arg(long)]
    strict: bool,
}

fn main() -> process::ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(exit) | Err(exit) => process::ExitCode::from(exit as u8),
    }
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let config = Config::from_env().map_err(report_error)?;
    let name = DocumentName::parse(&cli.name).map_err(report_error)?;

    let report = convert(&config, &name).map_err(report_error)?;
    if report.success() {
        return Ok(ExitCode::Success);
    }

    // A failed conversion is reported on stdout and, unless --strict was
    // given, still counts as a successful run of the wrapper.
    print!("{}", report.diagnostic());
    io::stdout().flush().ok();

    if cli.strict {
        Err(ExitCode::Conversion)
    } else {
        Ok(ExitCode::Success)
    }
}

fn report_error(err: ConvertError) -> ExitCode {
    eprintln!("{err}");
    err.exit_code()
}
