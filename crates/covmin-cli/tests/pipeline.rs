//! End-to-end conversion through a mirrored bucket.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use covmin_cli::cli::ConvertArgs;
use covmin_cli::commands::run_convert;
use covmin_cli::summary::summary_table;
use tempfile::TempDir;

const SHEET_0042: &str = "Project,Surveillance\n\
,\n\
Sample_ID,Barcode,Primer_Set\n\
0042001,NB01,ARTIC V3\n\
POS,NB02,ARTIC V3\n\
,NB03,\n";

const SHEET_0043: &str = "Alias,barcode,Plate_Name,Well_Location\n\
0043001,NB05,PLATE9,A1\n\
NC,NB06,PLATE9,B1\n";

struct Workspace {
    _root: TempDir,
    input: PathBuf,
    output: PathBuf,
    mirror: PathBuf,
}

fn workspace(sheets: &[(&str, &str)]) -> Workspace {
    let root = TempDir::new().unwrap();
    let input = root.path().join("sheets");
    fs::create_dir_all(&input).unwrap();
    for (name, contents) in sheets {
        fs::write(input.join(name), contents).unwrap();
    }
    let output = root.path().join("out");
    let mirror = root.path().join("bucket");
    Workspace {
        input,
        output,
        mirror,
        _root: root,
    }
}

fn args(workspace: &Workspace, input: &Path) -> ConvertArgs {
    ConvertArgs {
        input: input.to_path_buf(),
        output: Some(workspace.output.clone()),
        seq_run: None,
        bucket_path: "gs://covid_terra".to_string(),
        terra_output_dir: None,
        entity_col_name: None,
        strict_run_name: false,
        download_date: NaiveDate::from_ymd_opt(2021, 3, 9),
        no_upload: false,
        mirror_dir: Some(workspace.mirror.clone()),
        gsutil: "gsutil".to_string(),
        no_concat: false,
        config: None,
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("read table")
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn converts_single_sheet_and_publishes_table_and_sheet() {
    let ws = workspace(&[("COVMIN_0042.csv", SHEET_0042)]);
    let sheet = ws.input.join("COVMIN_0042.csv");

    let result = run_convert(&args(&ws, &sheet)).expect("convert");

    assert_eq!(result.publisher, "mirror");
    assert_eq!(result.runs.len(), 1);
    assert!(result.concatenated.is_none());
    let run = &result.runs[0];
    assert_eq!(run.run_name, "COVMIN_0042");
    assert_eq!(run.entity_header, "entity:sampleG0042_id");
    assert_eq!(run.samples, 2);
    assert_eq!(run.dropped_rows, 1);
    assert_eq!(run.controls_renamed, 1);
    assert_eq!(
        run.published,
        vec![
            "gs://covid_terra/COVMIN_0042/COVMIN_0042_terra_data_table.tsv".to_string(),
            "gs://covid_terra/COVMIN_0042/COVMIN_0042.csv".to_string(),
        ]
    );

    let lines = read_lines(&ws.output.join("COVMIN_0042_terra_data_table.tsv"));
    assert_eq!(
        lines[0],
        "entity:sampleG0042_id\tbarcode\tseq_run\tdownload_date\ttech_platform\tread_type\t\
         primer_set\tplate_name\tplate_sample_well\tout_dir\tfastq_dir"
    );
    assert_eq!(
        lines[1],
        "0042001\tNB01\tCOVMIN_0042\t2021-03-09\tOxford Nanopore\tsingle\tARTIC V3\t\t\t\
         gs://covid_terra/COVMIN_0042/terra_outputs/\tgs://covid_terra/COVMIN_0042/fastq_pass/NB01"
    );
    assert!(lines[2].starts_with("POS_COVMIN_0042\tNB02\t"));

    let mirrored = ws.mirror.join("covid_terra/COVMIN_0042");
    assert!(mirrored.join("COVMIN_0042_terra_data_table.tsv").is_file());
    assert_eq!(
        fs::read_to_string(mirrored.join("COVMIN_0042.csv")).unwrap(),
        SHEET_0042
    );
}

#[test]
fn directory_input_concatenates_runs_in_name_order() {
    let ws = workspace(&[
        ("COVMIN_0043.csv", SHEET_0043),
        ("COVMIN_0042.csv", SHEET_0042),
        ("notes.txt", "ignored"),
    ]);

    let result = run_convert(&args(&ws, &ws.input)).expect("convert");

    let names: Vec<&str> = result.runs.iter().map(|r| r.run_name.as_str()).collect();
    assert_eq!(names, vec!["COVMIN_0042", "COVMIN_0043"]);
    let concatenated = result.concatenated.expect("concatenated table");
    assert_eq!(concatenated.entity_header, "entity:sampleG0042G0043_id");
    assert_eq!(concatenated.rows, 4);
    assert_eq!(
        concatenated.published.as_deref(),
        Some("gs://covid_terra/terra_data_table_concatenated_G0042G0043.tsv")
    );

    let lines = read_lines(&concatenated.path);
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("entity:sampleG0042G0043_id\tbarcode\t"));
    assert!(lines[1].starts_with("0042001\t"));
    assert!(lines[4].starts_with("NC_COVMIN_0043\tNB06\tCOVMIN_0043\t"));
    assert!(
        ws.mirror
            .join("covid_terra/terra_data_table_concatenated_G0042G0043.tsv")
            .is_file()
    );
}

#[test]
fn entity_override_and_output_prefix() {
    let ws = workspace(&[
        ("COVMIN_0042.csv", SHEET_0042),
        ("COVMIN_0043.csv", SHEET_0043),
    ]);
    let mut convert = args(&ws, &ws.input);
    convert.entity_col_name = Some("G0042_0043".to_string());
    convert.terra_output_dir = Some("gs://results/".to_string());

    let result = run_convert(&convert).expect("convert");

    let concatenated = result.concatenated.expect("concatenated table");
    assert_eq!(concatenated.entity_header, "entity:sampleG00420043_id");
    let lines = read_lines(&ws.output.join("COVMIN_0043_terra_data_table.tsv"));
    assert!(lines[1].contains("\tgs://results/COVMIN_0043/terra_outputs/\t"));
}

#[test]
fn no_concat_skips_combined_table() {
    let ws = workspace(&[
        ("COVMIN_0042.csv", SHEET_0042),
        ("COVMIN_0043.csv", SHEET_0043),
    ]);
    let mut convert = args(&ws, &ws.input);
    convert.no_concat = true;

    let result = run_convert(&convert).expect("convert");

    assert_eq!(result.runs.len(), 2);
    assert!(result.concatenated.is_none());
}

#[test]
fn explicit_run_name_overrides_file_name() {
    let ws = workspace(&[("sheet.csv", SHEET_0043)]);
    let mut convert = args(&ws, &ws.input.join("sheet.csv"));
    convert.seq_run = Some("COVMIN_0099".to_string());
    convert.no_upload = true;
    convert.mirror_dir = None;

    let result = run_convert(&convert).expect("convert");

    assert_eq!(result.publisher, "dry-run");
    assert_eq!(result.runs[0].run_name, "COVMIN_0099");
    assert!(result.runs[0].published.is_empty());
    assert!(ws.output.join("COVMIN_0099_terra_data_table.tsv").is_file());
    assert!(!ws.mirror.exists());
}

#[test]
fn dry_run_reports_nothing_published() {
    let ws = workspace(&[
        ("COVMIN_0042.csv", SHEET_0042),
        ("COVMIN_0043.csv", SHEET_0043),
    ]);
    let mut convert = args(&ws, &ws.input);
    convert.no_upload = true;
    convert.mirror_dir = None;

    let result = run_convert(&convert).expect("convert");

    assert!(result.runs.iter().all(|run| run.published.is_empty()));
    let concatenated = result.concatenated.as_ref().expect("concatenated table");
    assert!(concatenated.path.is_file());
    assert_eq!(concatenated.published, None);
    let rendered = summary_table(&result).to_string();
    assert!(!rendered.contains('✓'));
}

#[test]
fn sheet_without_header_marker_fails() {
    let ws = workspace(&[(
        "COVMIN_0042.csv",
        "Barcode,Sample\nNB01,0042001\n",
    )]);

    let error = run_convert(&args(&ws, &ws.input)).unwrap_err();

    assert!(format!("{error:#}").contains("COVMIN_0042.csv"));
    assert!(!ws.output.join("COVMIN_0042_terra_data_table.tsv").exists());
    assert!(!ws.mirror.exists());
}

#[test]
fn explicit_run_name_rejected_for_several_sheets() {
    let ws = workspace(&[
        ("COVMIN_0042.csv", SHEET_0042),
        ("COVMIN_0043.csv", SHEET_0043),
    ]);
    let mut convert = args(&ws, &ws.input);
    convert.seq_run = Some("COVMIN_0099".to_string());

    assert!(run_convert(&convert).is_err());
}

#[test]
fn strict_mode_rejects_malformed_file_name() {
    let ws = workspace(&[("run42.csv", SHEET_0043)]);
    let mut convert = args(&ws, &ws.input);
    convert.strict_run_name = true;

    let error = run_convert(&convert).unwrap_err();
    assert!(format!("{error:#}").contains("run42"));
    assert!(!ws.output.exists());
}

#[test]
fn missing_input_fails() {
    let ws = workspace(&[]);
    let missing = ws.input.join("COVMIN_0001.xlsx");
    assert!(run_convert(&args(&ws, &missing)).is_err());
}
