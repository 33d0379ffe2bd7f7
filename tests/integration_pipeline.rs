// tests/integration_pipeline.rs
//! End-to-end runs: compressed input on disk to both report files.

use flate2::write::GzEncoder;
use flate2::Compression;
use linkrank_core::config::Config;
use linkrank_core::error::RankError;
use linkrank_core::input;
use linkrank_core::pipeline;
use linkrank_core::rank::{StopReason, Termination};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// --- Helpers ---

fn write_gz(path: &Path, content: &str) {
    let file = fs::File::create(path).unwrap();
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(content.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn config_in(dir: &Path, input: PathBuf) -> Config {
    let mut config = Config::new();
    config.input = input;
    config.inlinks_output = dir.join("inlinks.txt");
    config.pagerank_output = dir.join("pagerank.txt");
    config
}

fn rows(path: &Path) -> Vec<Vec<String>> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.split('\t').map(str::to_string).collect())
        .collect()
}

const WEB: &str = "home\tabout\nhome\tblog\nblog\thome\nabout\thome\npost1\tblog\npost2\tblog\nblog\tpost1\nhome\tabout\n";

// --- Tests ---

#[test]
fn test_gzip_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, WEB);

    let config = config_in(dir.path(), input);
    let summary = pipeline::run(&config).unwrap();

    assert_eq!(summary.pages, 5);
    assert_eq!(summary.edges, 8);
    assert_eq!(summary.stop, StopReason::Converged);

    let inlinks = rows(&config.inlinks_output);
    assert_eq!(inlinks[0], vec!["blog", "1", "3"]);
    assert_eq!(inlinks[1], vec!["about", "2", "2"]);
    assert_eq!(inlinks[2], vec!["home", "3", "2"]);
    assert_eq!(inlinks[4], vec!["post2", "5", "0"]);

    let pagerank = rows(&config.pagerank_output);
    assert_eq!(pagerank.len(), 5);
    for (i, row) in pagerank.iter().enumerate() {
        assert_eq!(row[1], (i + 1).to_string());
        let decimals = row[2].split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 12);
    }
    let total: f64 = pagerank.iter().map(|r| r[2].parse::<f64>().unwrap()).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_plain_text_input_accepted() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.tsv");
    fs::write(&input, WEB).unwrap();

    let gz = dir.path().join("links.gz");
    write_gz(&gz, WEB);

    let plain = input::load_graph(&input).unwrap();
    let packed = input::load_graph(&gz).unwrap();
    assert_eq!(plain.num_pages(), packed.num_pages());
    assert_eq!(plain.edges(), packed.edges());
}

#[test]
fn test_fixed_iterations_mode() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, WEB);

    let mut config = config_in(dir.path(), input);
    config.termination = Termination::Exactly(3);
    let summary = pipeline::run(&config).unwrap();
    assert_eq!(summary.iterations, 3);
    assert_eq!(summary.stop, StopReason::IterationCount);
}

#[test]
fn test_top_k_limits_both_reports() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, WEB);

    let mut config = config_in(dir.path(), input);
    config.top_k = 2;
    let summary = pipeline::run(&config).unwrap();
    assert_eq!(summary.inlinks_rows, 2);
    assert_eq!(summary.pagerank_rows, 2);
    assert_eq!(rows(&config.inlinks_output).len(), 2);
    assert_eq!(rows(&config.pagerank_output).len(), 2);
}

#[test]
fn test_parse_error_aborts_without_reports() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, "a\tb\nnot-a-pair\n");

    let config = config_in(dir.path(), input);
    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, RankError::Parse { line: 2, .. }));
    assert!(!config.inlinks_output.exists());
    assert!(!config.pagerank_output.exists());
}

#[test]
fn test_non_utf8_input_is_invalid() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.txt");
    fs::write(&input, b"a\tb\n\xff\xfe\tc\n").unwrap();

    let config = config_in(dir.path(), input);
    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, RankError::InvalidInput(_)));
    assert!(err.is_invalid_input());
    assert!(!config.inlinks_output.exists());
}

#[test]
fn test_empty_input_is_invalid() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, "");

    let err = pipeline::run(&config_in(dir.path(), input)).unwrap_err();
    assert!(matches!(err, RankError::InvalidInput(_)));
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.gz");
    let err = pipeline::run(&config_in(dir.path(), input)).unwrap_err();
    match err {
        RankError::Io { path, .. } => assert!(path.ends_with("nope.gz")),
        other => panic!("expected I/O error, got {other}"),
    }
}

#[test]
fn test_single_self_loop_page() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, "A\tA\n");

    let config = config_in(dir.path(), input);
    pipeline::run(&config).unwrap();
    assert_eq!(rows(&config.pagerank_output), vec![vec!["A", "1", "1.000000000000"]]);
    assert_eq!(rows(&config.inlinks_output), vec![vec!["A", "1", "1"]]);
}

#[test]
fn test_repeated_runs_identical() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("links.srt.gz");
    write_gz(&input, WEB);

    let config = config_in(dir.path(), input);
    pipeline::run(&config).unwrap();
    let first = fs::read_to_string(&config.pagerank_output).unwrap();
    pipeline::run(&config).unwrap();
    let second = fs::read_to_string(&config.pagerank_output).unwrap();
    assert_eq!(first, second);
}
