use clap::Parser;

use sentir::cli::Cli;
use sentir::pipeline::SentimentPipeline;
use sentir::Result;

fn main() {
    sentir::logging::init();

    if let Err(error) = run() {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing::info!(
        training = %cli.training_file.display(),
        test = %cli.test_file.display(),
        ground_truth = %cli.ground_truth_file.display(),
        predictions = %cli.predictions_file.display(),
        accuracy = %cli.accuracy_file.display(),
        "starting sentiment analysis"
    );

    let mut pipeline = SentimentPipeline::new();

    // Each stage is fatal on I/O failure; later stages are not attempted.
    pipeline.train(&cli.training_file)?;
    pipeline.predict(&cli.test_file, &cli.predictions_file)?;
    let report = pipeline.evaluate(&cli.ground_truth_file, &cli.accuracy_file)?;

    tracing::info!(
        accuracy = %format!("{:.3}", report.accuracy()),
        "sentiment analysis complete"
    );
    Ok(())
}
