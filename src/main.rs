use anyhow::Context;
use clap::Parser;
use mandelbrot_viewer::logging::{LoggingConfig, init_logging};
use mandelbrot_viewer::{PpmFilePresenter, SnapshotCli, SnapshotController};

fn main() -> anyhow::Result<()> {
    let cli = SnapshotCli::parse();
    init_logging(LoggingConfig::default().verbose(cli.viewer.verbose));

    let viewport = cli.viewport().context("invalid view")?;
    let config = cli.viewer.clone().into_config();
    let mut controller = SnapshotController::new(PpmFilePresenter::new(), config);

    controller.generate(&viewport).context("rendering snapshot")?;
    controller
        .write(&cli.output)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    Ok(())
}
