use clap::Parser;
use giab_samplesheet::{SamplesheetError, WriteOutcome, convert};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "giab_samplesheet",
    about = "Convert Genome In a Bottle samplesheet to nf-core/fetchdata format.",
    after_help = "Example usage: giab_samplesheet <FILE_IN> <FILE_OUT>"
)]
struct Cli {
    /// Input samplesheet file.
    #[arg(value_name = "FILE_IN")]
    file_in: PathBuf,

    /// Output file.
    #[arg(value_name = "FILE_OUT")]
    file_out: PathBuf,
}

/// Validation failures are reported on stdout with exit status 1.
/// I/O faults are returned as-is and reported by the runtime.
fn main() -> Result<ExitCode, SamplesheetError> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    match convert(&cli.file_in, &cli.file_out) {
        Ok(WriteOutcome::Written { samples, runs }) => {
            log::info!(
                "converted {} -> {}: {samples} sample(s), {runs} run(s)",
                cli.file_in.display(),
                cli.file_out.display()
            );
            Ok(ExitCode::SUCCESS)
        }
        Ok(WriteOutcome::Skipped) => Ok(ExitCode::SUCCESS),
        Err(err) if err.is_validation() => {
            if let SamplesheetError::Format { ctx, .. } = &err {
                log::debug!("validation failed at line {}", ctx.line_num);
            }
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err),
    }
}
