//! Command-line interface for the `sentir` binary.

use std::path::PathBuf;

use clap::Parser;

/// Train a word-frequency sentiment classifier, predict labels for a test
/// set, and evaluate the predictions against ground truth.
///
/// Wrong arity, `--help`, and `--version` are handled by clap: missing or
/// extra arguments exit non-zero with a usage message before any file is
/// touched.
#[derive(Debug, Parser)]
#[command(name = "sentir", version, about)]
pub struct Cli {
    /// CSV file with labeled training data (label,id,date,query,user,text)
    pub training_file: PathBuf,

    /// CSV file with unlabeled test data (id,date,query,user,text)
    pub test_file: PathBuf,

    /// CSV file with actual sentiments for the test data (label,id)
    pub ground_truth_file: PathBuf,

    /// Output file for prediction results
    pub predictions_file: PathBuf,

    /// Output file for accuracy metrics
    pub accuracy_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_positional_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sentir",
            "train.csv",
            "test.csv",
            "truth.csv",
            "results.csv",
            "accuracy.txt",
        ])
        .expect("five arguments are valid");
        assert_eq!(cli.training_file, PathBuf::from("train.csv"));
        assert_eq!(cli.accuracy_file, PathBuf::from("accuracy.txt"));
    }

    #[test]
    fn test_wrong_arity_is_rejected() {
        assert!(Cli::try_parse_from(["sentir", "only-one.csv"]).is_err());
        assert!(Cli::try_parse_from([
            "sentir", "a.csv", "b.csv", "c.csv", "d.csv", "e.csv", "extra.csv"
        ])
        .is_err());
    }
}
