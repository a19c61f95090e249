use std::fs;
use std::path::{Path, PathBuf};

use f1_lap_analytics::modules::pipeline;
use f1_lap_analytics::{Error, Schema};
use tempfile::TempDir;

const RACE: &str = "driver,time
Zaid Khalid,1:00.001
Zaid Khalid,2:00.002
Zaid Khalid,3:00.003
Mick Schumacher,1:15.001
Mick Schumacher,2:15.002
Mick Schumacher,3:15.003
Lewis Hamilton,1:30.001
Lewis Hamilton,2:30.002
Lewis Hamilton,3:30.003
Lando Norris,1:45.001
Lando Norris,2:45.002
Lando Norris,3:45.003
";

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("f1_drivers_input.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn output_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn run(input: &Path, output: &Path) -> Result<Vec<f1_lap_analytics::TopDriverRow>, Error> {
    pipeline::run(input, output, Schema::DriverInput)
}

#[test]
fn top_3_drivers_of_a_race() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, RACE);
    let output = output_path(&dir, "top_3_drivers.csv");

    let rows = run(&input, &output).unwrap();

    let drivers: Vec<&str> = rows.iter().map(|r| r.driver.as_str()).collect();
    let averages: Vec<&str> = rows.iter().map(|r| r.average_lap_time.as_str()).collect();
    let fastest: Vec<&str> = rows.iter().map(|r| r.fastest_lap_time.as_str()).collect();
    assert_eq!(drivers, vec!["Zaid Khalid", "Mick Schumacher", "Lewis Hamilton"]);
    assert_eq!(averages, vec!["02:00.002", "02:15.002", "02:30.002"]);
    assert_eq!(fastest, vec!["01:00.001", "01:15.001", "01:30.001"]);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "driver,average_lap_time,fastest_lap_time\n\
         Zaid Khalid,02:00.002,01:00.001\n\
         Mick Schumacher,02:15.002,01:15.001\n\
         Lewis Hamilton,02:30.002,01:30.001\n"
    );
}

#[test]
fn reruns_produce_identical_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, RACE);
    let first = output_path(&dir, "first.csv");
    let second = output_path(&dir, "second.csv");

    run(&input, &first).unwrap();
    run(&input, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn missing_driver_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "driver,time\nZaid Khalid,1:00.001\nZaid Khalid,2:00.002\n,3:00.003\n");
    let output = output_path(&dir, "top_3_drivers.csv");

    match run(&input, &output) {
        Err(Error::DQFailure { message }) => assert!(message.contains("{driver: None}")),
        other => panic!("expected DQFailure, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn missing_time_fails_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "driver,time\nZaid Khalid,1:00.001\nZaid Khalid,\n");
    let output = output_path(&dir, "top_3_drivers.csv");

    match run(&input, &output) {
        Err(Error::DQFailure { message }) => {
            assert!(message.contains("\"Zaid Khalid\""));
            assert!(message.contains("time: Missing data for required field."));
        }
        other => panic!("expected DQFailure, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn short_row_fails_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "driver,time\nZaid Khalid,1:00.001\nZaid Khalid\n");
    let output = output_path(&dir, "top_3_drivers.csv");

    match run(&input, &output) {
        Err(Error::DQFailure { message }) => {
            assert!(message.contains("\"Zaid Khalid\""));
            assert!(message.contains("row 2"));
            assert!(message.contains("time: Missing data for required field."));
        }
        other => panic!("expected DQFailure, got {other:?}"),
    }
    assert!(!output.exists());
}

#[test]
fn invalid_time_fails_to_parse() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "driver,time\nZaid Khalid,1:00.001\nZaid Khalid,Zaid Khalid\n");
    let output = output_path(&dir, "top_3_drivers.csv");

    assert!(matches!(run(&input, &output), Err(Error::ParseError { .. })));
    assert!(!output.exists());
}

#[test]
fn fewer_than_three_drivers() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "driver,time\nLando Norris,1:45.001\nLando Norris,1:44.000\n");
    let output = output_path(&dir, "top_3_drivers.csv");

    let rows = run(&input, &output).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].average_lap_time, "01:44.500");
    assert_eq!(rows[0].fastest_lap_time, "01:44.000");
}

#[test]
fn unreadable_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("does_not_exist.csv");
    let output = output_path(&dir, "top_3_drivers.csv");

    assert!(matches!(run(&input, &output), Err(Error::ReadInput { .. })));
}
