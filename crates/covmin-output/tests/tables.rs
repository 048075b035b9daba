//! Writing per-run and concatenated data tables to disk.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use covmin_ingest::SampleSheet;
use covmin_model::{EntityColumn, RunNameOptions, RunNameResolver, SampleRecord};
use covmin_output::{concatenate_tables, write_concatenated, write_run_table};
use covmin_transform::{RunContext, RunTable, TransformOptions, transform_sheet};
use tempfile::TempDir;

const HEADER_TAIL: &str = "barcode\tseq_run\tdownload_date\ttech_platform\tread_type\t\
primer_set\tplate_name\tplate_sample_well\tout_dir\tfastq_dir";

fn run_table(run_name: &str, samples: &[(&str, &str)]) -> RunTable {
    let run = RunNameResolver::new(RunNameOptions::default())
        .unwrap()
        .resolve(run_name)
        .unwrap();
    let date = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();
    let context = RunContext::new(run, "covid_terra", date);
    let sheet = SampleSheet {
        path: PathBuf::from(format!("{run_name}.xlsx")),
        header_row: 0,
        columns: vec!["Alias".to_string(), "barcode".to_string()],
        records: samples
            .iter()
            .map(|(alias, barcode)| SampleRecord::new(*alias, *barcode))
            .collect(),
        dropped_rows: 0,
    };
    transform_sheet(sheet, &context, &TransformOptions::default())
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read output")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn writes_run_table_tsv() {
    let dir = TempDir::new().unwrap();
    let table = run_table("COVMIN_0042", &[("S1", "NB01"), ("POS", "NB02")]);

    let path = write_run_table(&table, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("COVMIN_0042_terra_data_table.tsv"));
    let lines = read_lines(&path);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("entity:sampleG0042_id\t{HEADER_TAIL}"));
    assert_eq!(
        lines[1],
        "S1\tNB01\tCOVMIN_0042\t2021-06-01\tOxford Nanopore\tsingle\tnot specified\t\t\t\
         gs://covid_terra/COVMIN_0042/terra_outputs/\tgs://covid_terra/COVMIN_0042/fastq_pass/NB01"
    );
    assert!(lines[2].starts_with("POS_COVMIN_0042\tNB02\t"));
}

#[test]
fn creates_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("tables").join("minion");
    let table = run_table("COVMIN_0042", &[("S1", "NB01")]);
    let path = write_run_table(&table, &nested).unwrap();
    assert!(path.is_file());
}

#[test]
fn concatenates_runs_in_order() {
    let dir = TempDir::new().unwrap();
    let tables = vec![
        run_table("COVMIN_0042", &[("S1", "NB01"), ("S2", "NB02")]),
        run_table("COVMIN_0043", &[("S3", "NB01")]),
        run_table("COVMIN_0044", &[("NC", "NB09"), ("S5", "NB10")]),
    ];
    let shared = EntityColumn::from_override("G0042_0044", "_").unwrap();

    let mut combined = concatenate_tables(&tables, &shared).unwrap();
    assert_eq!(combined.len(), 5);
    let path = write_concatenated(&mut combined, dir.path()).unwrap();

    assert_eq!(
        path,
        dir.path().join("terra_data_table_concatenated_G00420044.tsv")
    );
    let lines = read_lines(&path);
    assert_eq!(lines[0], format!("entity:sampleG00420044_id\t{HEADER_TAIL}"));
    let entities: Vec<&str> = lines[1..]
        .iter()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(entities, vec!["S1", "S2", "S3", "NC_COVMIN_0044", "S5"]);
    assert_eq!(lines[0].matches("entity:").count(), 1);
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();
    let table = run_table("COVMIN_0042", &[("S1", "NB01")]);
    assert!(write_run_table(&table, &blocker.join("out")).is_err());
}
