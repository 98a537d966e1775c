//! End-to-end runs over real files

use ladder_book::cli::process_files;
use ladder_book::config::{Config, ErrorPolicy};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

struct Run {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn prepare(commands: &str) -> Run {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, commands).unwrap();
    Run {
        _dir: dir,
        input,
        output,
    }
}

fn output_of(run: &Run) -> String {
    fs::read_to_string(&run.output).unwrap()
}

#[test]
fn test_best_bid_after_update() {
    let run = prepare("u,100,10,bid\nq,best_bid\n");
    process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "100,10\n");
}

#[test]
fn test_market_buy_partially_consumes_second_level() {
    let run = prepare("u,101,5,ask\nu,102,5,ask\no,buy,7\nq,best_ask\n");
    process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "102,3\n");
}

#[test]
fn test_size_query_bid_precedence() {
    let run = prepare("u,50,4,bid\nu,50,9,ask\nq,size,50\n");
    process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "4\n");
}

#[test]
fn test_best_bid_on_swept_book_aborts_run() {
    let run = prepare("u,10,3,bid\nq,size,10\no,sell,100\nq,best_bid\nq,size,10\n");
    let err = process_files(&run.input, &run.output, &Config::default()).unwrap_err();

    assert!(format!("{err:#}").contains("bid ladder is empty"));
    assert_eq!(output_of(&run), "3\n");
}

#[test]
fn test_zero_size_level_is_still_best() {
    let run = prepare("u,20,5,bid\nu,20,0,bid\nq,best_bid\n");
    process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "20,0\n");
}

#[test]
fn test_mixed_session() {
    let commands = "\
u,9,1,bid
u,11,1,ask
u,10,2,bid
u,10,5,ask
u,12,3,ask
q,best_bid
q,best_ask
q,size,10
q,size,12
q,size,13
o,buy,6
q,best_ask
o,sell,2
q,best_bid
";
    let run = prepare(commands);
    let summary = process_files(&run.input, &run.output, &Config::default()).unwrap();

    assert_eq!(output_of(&run), "10,2\n10,5\n2\n3\n0\n12,3\n9,1\n");
    assert_eq!(summary.lines_read, 14);
    assert_eq!(summary.results_written, 7);
    assert_eq!(summary.bid_levels, 1);
    assert_eq!(summary.ask_levels, 1);
}

#[test]
fn test_malformed_line_aborts_by_default() {
    let run = prepare("u,1,1,ask\nq,best_ask\nu,1\nq,best_ask\n");
    let err = process_files(&run.input, &run.output, &Config::default()).unwrap_err();

    assert!(format!("{err:#}").contains("line 3: missing size field"));
    assert_eq!(output_of(&run), "1,1\n");
}

#[test]
fn test_skip_policy_from_config() {
    let config: Config = toml::from_str(
        r#"
        [engine]
        on_error = "skip"
        "#,
    )
    .unwrap();
    assert_eq!(config.engine.on_error, ErrorPolicy::Skip);

    let run = prepare("q,best_bid\nu,x,1,bid\nu,7,1,bid\nq,best_bid\n");
    let summary = process_files(&run.input, &run.output, &config).unwrap();

    assert_eq!(output_of(&run), "7,1\n");
    assert_eq!(summary.skipped_errors, 2);
}

#[test]
fn test_windows_line_endings() {
    let run = prepare("u,5,5,ask\r\nq,best_ask\r\n");
    process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "5,5\n");
}

#[test]
fn test_empty_input_creates_empty_output() {
    let run = prepare("");
    let summary = process_files(&run.input, &run.output, &Config::default()).unwrap();
    assert_eq!(output_of(&run), "");
    assert_eq!(summary.lines_read, 0);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = process_files(
        &dir.path().join("absent.txt"),
        &dir.path().join("out.txt"),
        &Config::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_zero_buffer_capacity_rejected_by_config() {
    let result = toml::from_str::<Config>("[io]\nbuffer_capacity = 0\n");
    assert!(result.is_err());
}

#[test]
fn test_one_byte_buffer_reads_whole_input() {
    let config: Config = toml::from_str("[io]\nbuffer_capacity = 1\n").unwrap();
    let run = prepare("u,100,10,bid\nq,best_bid\n");
    let summary = process_files(&run.input, &run.output, &config).unwrap();

    assert_eq!(output_of(&run), "100,10\n");
    assert_eq!(summary.lines_read, 2);
}

#[test]
fn test_invalid_utf8_line_does_not_stop_run() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("output.txt");
    fs::write(&input, b"u,100,10,bid\nq,best_bid\nx,\xff\nq,best_bid\n").unwrap();

    let summary = process_files(&input, &output, &Config::default()).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "100,10\n100,10\n");
    assert_eq!(summary.commands.ignored, 1);
}
