//! Tests for file conversion and the multi-file driver

mod common;

use common::{config_in, file_names, write_source};
use rivet_convert::{FileOutcome, convert_all, convert_file, exit_code};
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_convert_all_mixed_inputs() {
    let dir = TempDir::new().unwrap();
    let points = write_source(&dir, "cloud.txt", "points\n2\n3\nno function\n0 0\n");
    let graph = write_source(&dir, "graph.txt", "graph\n1 2\n");
    let broken = write_source(&dir, "broken.txt", "metric\nno function\n");
    let firep = write_source(&dir, "pres.txt", "firep\nx\ny\n1 2\n");

    let config = config_in(&dir);
    let outcomes = convert_all(
        vec![points.clone(), graph.clone(), broken.clone(), firep.clone()],
        config.clone(),
    )
    .await;

    assert_eq!(outcomes.len(), 4);
    assert_eq!(
        outcomes[0],
        FileOutcome::Written {
            source: points,
            destination: dir.path().join("(N)cloud.txt"),
        }
    );
    assert_eq!(outcomes[1], FileOutcome::Unrecognized { source: graph });
    assert!(matches!(&outcomes[2], FileOutcome::Failed { source, .. } if *source == broken));
    assert!(matches!(outcomes[3], FileOutcome::Written { .. }));

    assert_eq!(
        file_names(dir.path()),
        vec!["(N)cloud.txt", "(N)pres.txt", "broken.txt", "cloud.txt", "graph.txt", "pres.txt"]
    );
    assert_eq!(exit_code(&outcomes, &config), 1);
}

#[tokio::test]
async fn test_unrecognized_only_uses_configured_exit_code() {
    let dir = TempDir::new().unwrap();
    let graph = write_source(&dir, "graph.txt", "graph\n");

    let mut config = config_in(&dir);
    let outcomes = convert_all(vec![graph], config.clone()).await;
    assert_eq!(exit_code(&outcomes, &config), 0);

    config.unrecognized_exit_code = 1;
    assert_eq!(exit_code(&outcomes, &config), 1);
    assert_eq!(
        outcomes[0].report().as_deref(),
        Some("graph.txt: Unrecognized file.")
    );
}

#[tokio::test]
async fn test_same_file_name_in_two_directories() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("a")).unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    let first = write_source(&dir, "a/x.txt", "firep\nx\ny\n1 2\n");
    let second = write_source(&dir, "b/x.txt", "bifiltration\nx\ny\n3 4\n");

    let config = config_in(&dir);
    let outcomes = convert_all(vec![first.clone(), second.clone()], config.clone()).await;

    let destination = dir.path().join("(N)x.txt");
    assert_eq!(
        outcomes[0],
        FileOutcome::Written {
            source: first,
            destination: destination.clone(),
        }
    );
    assert!(matches!(
        &outcomes[1],
        FileOutcome::Failed { source, message }
            if *source == second && message.contains("already written")
    ));
    assert!(
        fs::read_to_string(&destination)
            .unwrap()
            .starts_with("--type firep\n")
    );
    assert_eq!(exit_code(&outcomes, &config), 1);
}

#[test]
fn test_truncated_source_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let source = write_source(&dir, "m.txt", "metric\ndensity\n");

    let err = convert_file(&source, &config_in(&dir)).unwrap_err();
    assert!(format!("{:#}", err).contains("function values"));
    assert!(!dir.path().join("(N)m.txt").exists());
}

#[test]
fn test_points_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let source = write_source(
        &dir,
        "p.txt",
        "# cloud\npoints\n3\n2.0\n[-] time\n0 0 0 9\n1 1 1 8\n",
    );
    let destination = convert_file(&source, &config_in(&dir)).unwrap();
    assert_eq!(
        fs::read_to_string(destination).unwrap(),
        "# cloud\n--datatype points_fn\n--maxdist 2.0\n--xreverse\n--xlabel time\n\n# function values\n9 8\n\n# data starts here\n0 0 0\n1 1 1\n"
    );
}
