//! Input and output path resolution.
//!
//! Resolved once at startup; the processing pipeline itself never inspects
//! the operating system.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// The fixed statement filename expected under the data directory.
pub const INPUT_FILENAME: &str = "gxbank-statement.pdf";

/// The input PDF and timestamped output CSV for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunPaths {
    /// Resolves both paths for a run starting at `now`.
    pub fn resolve(now: NaiveDateTime) -> Self {
        #[cfg(windows)]
        let (data_dir, output_dir) = (Path::new(".\\data"), Path::new(".\\output"));
        #[cfg(not(windows))]
        let (data_dir, output_dir) = (Path::new("./data"), Path::new("./output"));

        let stamp = now.format("%Y%m%d_%H%M%S");
        RunPaths {
            input: data_dir.join(INPUT_FILENAME),
            output: output_dir.join(format!("gxbank_statement_{}.csv", stamp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn run_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn test_output_filename_embeds_run_start() {
        let paths = RunPaths::resolve(run_start());
        assert_eq!(
            paths.output.file_name().unwrap(),
            "gxbank_statement_20260806_140509.csv"
        );
    }

    #[test]
    fn test_input_is_the_fixed_statement_path() {
        let paths = RunPaths::resolve(run_start());
        assert_eq!(paths.input.file_name().unwrap(), INPUT_FILENAME);
        assert!(paths.input.ends_with(Path::new("data").join(INPUT_FILENAME)));
    }
}
