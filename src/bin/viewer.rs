use std::process::ExitCode;

use clap::Parser;
use mandelbrot_viewer::logging::{LoggingConfig, init_logging};
use mandelbrot_viewer::{EXIT_USAGE, PixelsPresenterFactory, RunViewerCommand, ViewerCli};

fn main() -> ExitCode {
    let cli = match ViewerCli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    init_logging(LoggingConfig::default().verbose(cli.viewer.verbose));

    let command = RunViewerCommand::new(PixelsPresenterFactory::new(), cli.viewer.into_config());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
