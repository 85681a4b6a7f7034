use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

const HEADER: &str = "FASTQ\tFASTQ_MD5\tPAIRED_FASTQ\tPAIRED_FASTQ_MD5\tNIST_SAMPLE_NAME\n";

fn run(input: &Path, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_giab_samplesheet"))
        .arg(input)
        .arg(output)
        .output()
        .expect("run giab_samplesheet")
}

#[test]
fn converts_hg001_example() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("sequence.index");
    let output = tmp.path().join("samplesheet.csv");
    let data = format!(
        "{HEADER}\
ftp://giab/L001_R1_001.fastq.gz\t630c611d62d995c5aeb60211add2f26e\tftp://giab/L001_R2_001.fastq.gz\t0b9c9976707eebe9a4a2d196afdbe1bd\tHG001\n\
ftp://giab/L002_R1_001.fastq.gz\td971c4e5311189026e54860b0671ca91\tftp://giab/L002_R2_001.fastq.gz\t11a02bee0645988109ca65ea817d53b4\tHG001\n"
    );
    fs::write(&input, data).expect("write input");

    let out = run(&input, &output);
    assert!(out.status.success(), "CLI exited with status {:?}", out.status);
    assert!(out.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "sample,fastq_1,fastq_2,md5_1,md5_2\n\
         HG001_RUN1,ftp://giab/L001_R1_001.fastq.gz,ftp://giab/L001_R2_001.fastq.gz,630c611d62d995c5aeb60211add2f26e,0b9c9976707eebe9a4a2d196afdbe1bd\n\
         HG001_RUN2,ftp://giab/L002_R1_001.fastq.gz,ftp://giab/L002_R2_001.fastq.gz,d971c4e5311189026e54860b0671ca91,11a02bee0645988109ca65ea817d53b4\n"
    );
}

#[test]
fn header_mismatch_exits_one_without_output() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("bad_header.tsv");
    let output = tmp.path().join("samplesheet.csv");
    fs::write(&input, "FASTQ,FASTQ_MD5\nr1\tm1\tr2\tm2\tHG001\n").expect("write input");

    let out = run(&input, &output);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FASTQ,FASTQ_MD5 != "), "stdout: {stdout}");
    assert!(
        stdout.contains("FASTQ,FASTQ_MD5,PAIRED_FASTQ,PAIRED_FASTQ_MD5,NIST_SAMPLE_NAME"),
        "stdout: {stdout}"
    );
    assert!(!output.exists());
}

#[test]
fn bad_row_exits_one_and_prints_line() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("short_row.tsv");
    let output = tmp.path().join("samplesheet.csv");
    fs::write(&input, format!("{HEADER}r1\tm1\tr2\tHG001\n")).expect("write input");

    let out = run(&input, &output);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(
        stdout,
        "ERROR: Please check samplesheet -> Invalid number of columns (minimum = 5)!\n\
         Line: 'r1\tm1\tr2\tHG001'\n"
    );
    assert!(!output.exists());
}

#[test]
fn header_only_writes_nothing() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("empty.tsv");
    let output = tmp.path().join("samplesheet.csv");
    fs::write(&input, HEADER).expect("write input");

    let out = run(&input, &output);
    assert!(out.status.success(), "CLI exited with status {:?}", out.status);
    assert!(!output.exists(), "no output file expected");
}

#[test]
fn existing_output_is_truncated() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("sequence.index");
    let output = tmp.path().join("samplesheet.csv");
    fs::write(&input, format!("{HEADER}r1\tm1\tr2\tm2\tB\nr3\tm3\tr4\tm4\tA\n"))
        .expect("write input");
    fs::write(&output, "stale contents that are longer than the new file ".repeat(20))
        .expect("write stale output");

    let out = run(&input, &output);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&output).expect("read output"),
        "sample,fastq_1,fastq_2,md5_1,md5_2\nA_RUN1,r3,r4,m3,m4\nB_RUN1,r1,r2,m1,m2\n"
    );
}

#[test]
fn missing_input_is_an_io_fault_naming_the_path() {
    let tmp = tempdir().expect("temporary directory");
    let out = run(
        &tmp.path().join("does_not_exist.tsv"),
        &tmp.path().join("samplesheet.csv"),
    );
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does_not_exist.tsv"), "stderr: {stderr}");
    assert!(!stderr.contains("samplesheet.csv"), "stderr: {stderr}");
}

#[test]
fn unwritable_output_is_an_io_fault_naming_the_path() {
    let tmp = tempdir().expect("temporary directory");
    let input = tmp.path().join("sequence.index");
    let output = tmp.path().join("no_such_dir").join("out.csv");
    fs::write(&input, format!("{HEADER}r1\tm1\tr2\tm2\tHG001\n")).expect("write input");

    let out = run(&input, &output);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no_such_dir"), "stderr: {stderr}");
    assert!(stderr.contains("out.csv"), "stderr: {stderr}");
    assert!(!stderr.contains("sequence.index"), "stderr: {stderr}");
}

#[test]
fn requires_two_positionals() {
    let out = Command::new(env!("CARGO_BIN_EXE_giab_samplesheet"))
        .arg("only_one.tsv")
        .output()
        .expect("run giab_samplesheet");
    assert!(!out.status.success());

    let help = Command::new(env!("CARGO_BIN_EXE_giab_samplesheet"))
        .arg("--help")
        .output()
        .expect("run giab_samplesheet");
    assert!(help.status.success());
    let text = String::from_utf8_lossy(&help.stdout);
    assert!(text.contains("Convert Genome In a Bottle samplesheet to nf-core/fetchdata format."));
    assert!(text.contains("FILE_IN"));
    assert!(text.contains("Example usage"));
}
