//! Multi-file driver
//!
//! Every input gets its own conversion session on the blocking pool. Outcomes
//! come back in input order regardless of completion order.

use crate::config::ConvertConfig;
use crate::error::ConvertError;
use crate::storage::{convert_file, destination_for};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{error, warn};

/// How a single input ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written { source: PathBuf, destination: PathBuf },
    Unrecognized { source: PathBuf },
    Failed { source: PathBuf, message: String },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Written { source, .. }
            | FileOutcome::Unrecognized { source }
            | FileOutcome::Failed { source, .. } => source,
        }
    }

    /// Line shown to the user for anything other than success
    pub fn report(&self) -> Option<String> {
        let name = display_name(self.source());
        match self {
            FileOutcome::Written { .. } => None,
            FileOutcome::Unrecognized { .. } => Some(format!("{}: Unrecognized file.", name)),
            FileOutcome::Failed { message, .. } => Some(format!(
                "{}: An error was encountered while parsing file. {}",
                name, message
            )),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Convert one file synchronously and classify the result
pub fn convert_one(source: &Path, config: &ConvertConfig) -> FileOutcome {
    match convert_file(source, config) {
        Ok(destination) => FileOutcome::Written {
            source: source.to_path_buf(),
            destination,
        },
        Err(e) => {
            let unrecognized = e
                .downcast_ref::<ConvertError>()
                .is_some_and(ConvertError::is_unrecognized);
            if unrecognized {
                warn!(source = %source.display(), "unrecognized file");
                FileOutcome::Unrecognized {
                    source: source.to_path_buf(),
                }
            } else {
                error!(source = %source.display(), error = %format!("{:#}", e), "conversion failed");
                FileOutcome::Failed {
                    source: source.to_path_buf(),
                    message: format!("{:#}", e),
                }
            }
        }
    }
}

/// Fail every input whose destination an earlier input already claimed
///
/// Inputs run concurrently, so two of them writing one destination would leave
/// whichever finished last. Only the first input of each destination runs.
fn claim_destinations(sources: &[PathBuf], config: &ConvertConfig) -> Vec<Option<FileOutcome>> {
    let mut claimed: HashMap<PathBuf, &Path> = HashMap::new();
    sources
        .iter()
        .map(|source| {
            // Unnameable sources fail later with their own error
            let destination = destination_for(source, config).ok()?;
            match claimed.get(&destination) {
                Some(first) => {
                    let message = format!(
                        "Destination {} is already written by {}",
                        destination.display(),
                        first.display()
                    );
                    error!(source = %source.display(), "{}", message);
                    Some(FileOutcome::Failed {
                        source: source.clone(),
                        message,
                    })
                }
                None => {
                    claimed.insert(destination, source);
                    None
                }
            }
        })
        .collect()
}

/// Convert every input concurrently, one session per file
pub async fn convert_all(sources: Vec<PathBuf>, config: ConvertConfig) -> Vec<FileOutcome> {
    let mut outcomes = claim_destinations(&sources, &config);

    let config = Arc::new(config);
    let mut tasks = JoinSet::new();
    for (index, source) in sources.iter().cloned().enumerate() {
        if outcomes[index].is_some() {
            continue;
        }
        let config = Arc::clone(&config);
        tasks.spawn_blocking(move || (index, convert_one(&source, &config)));
    }

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, outcome)) => outcomes[index] = Some(outcome),
            Err(e) => error!("conversion task panicked: {}", e),
        }
    }

    outcomes
        .into_iter()
        .zip(sources)
        .map(|(outcome, source)| {
            outcome.unwrap_or_else(|| FileOutcome::Failed {
                source,
                message: "conversion task did not complete".to_string(),
            })
        })
        .collect()
}

/// Process exit code for a finished batch
pub fn exit_code(outcomes: &[FileOutcome], config: &ConvertConfig) -> i32 {
    if outcomes
        .iter()
        .any(|o| matches!(o, FileOutcome::Failed { .. }))
    {
        1
    } else if outcomes
        .iter()
        .any(|o| matches!(o, FileOutcome::Unrecognized { .. }))
    {
        config.unrecognized_exit_code
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written() -> FileOutcome {
        FileOutcome::Written {
            source: PathBuf::from("a.txt"),
            destination: PathBuf::from("(N)a.txt"),
        }
    }

    fn unrecognized() -> FileOutcome {
        FileOutcome::Unrecognized {
            source: PathBuf::from("dir/g.txt"),
        }
    }

    #[test]
    fn test_exit_code_policy() {
        let mut config = ConvertConfig::default();
        assert_eq!(exit_code(&[written()], &config), 0);
        assert_eq!(exit_code(&[written(), unrecognized()], &config), 0);

        config.unrecognized_exit_code = 1;
        assert_eq!(exit_code(&[unrecognized()], &config), 1);

        let failed = FileOutcome::Failed {
            source: PathBuf::from("b.txt"),
            message: "boom".to_string(),
        };
        config.unrecognized_exit_code = 0;
        assert_eq!(exit_code(&[unrecognized(), failed], &config), 1);
    }

    #[test]
    fn test_claim_destinations_fails_later_duplicates() {
        let config = ConvertConfig::default();
        let sources = vec![
            PathBuf::from("a/x.txt"),
            PathBuf::from("y.txt"),
            PathBuf::from("b/x.txt"),
        ];
        let claims = claim_destinations(&sources, &config);
        assert_eq!(claims[0], None);
        assert_eq!(claims[1], None);
        assert!(matches!(
            &claims[2],
            Some(FileOutcome::Failed { source, .. }) if *source == PathBuf::from("b/x.txt")
        ));
    }

    #[test]
    fn test_report_uses_file_name() {
        assert_eq!(written().report(), None);
        assert_eq!(
            unrecognized().report().as_deref(),
            Some("g.txt: Unrecognized file.")
        );
    }
}
