use file_exporter::export::{ExportReport, Exporter};
use file_exporter::model::{Manifest, ManifestEntry};
use file_exporter::validation::validate_export;
use file_exporter::{export_files, export_manifest, ExportConfig};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `content` to `name` inside `dir` and return the path as a string
fn write_input(dir: &Path, name: &str, content: &[u8]) -> String {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_blocks_follow_input_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path();

    let a = write_input(dir, "a.txt", b"alpha\n");
    let b = write_input(dir, "nested/b.ts", "export const b = \"β\";".as_bytes());
    let missing = dir.join("missing.txt").to_str().unwrap().to_string();
    let output = dir.join("output.txt");

    let paths = vec![b.clone(), missing.clone(), a.clone()];
    let report = export_files(&paths, &output).expect("export failed");

    let bundle = fs::read_to_string(&output).unwrap();
    let expected = format!(
        "文件名：{b}\nexport const b = \"β\";\n\n\
         文件名：{missing}\n文件不存在: {missing}\n\n\
         文件名：{a}\nalpha\n\n\n"
    );
    assert_eq!(bundle, expected);
    assert_eq!(
        report,
        ExportReport {
            exported: 2,
            not_found: 1,
            failed: 0,
        }
    );

    validate_export(&output, &paths).expect("bundle should validate");
}

#[test]
fn test_content_is_copied_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let raw = "\u{feff}line one\r\nline two\n\n\ttabbed 文件名：fake label\n";
    let input = write_input(dir, "raw.txt", raw.as_bytes());
    let output = dir.join("out.txt");

    export_files(&[input.as_str()], &output).unwrap();

    let bundle = fs::read(&output).unwrap();
    let mut expected = format!("文件名：{}\n", input).into_bytes();
    expected.extend_from_slice(raw.as_bytes());
    expected.extend_from_slice(b"\n\n");
    assert_eq!(bundle, expected);
}

#[test]
fn test_invalid_utf8_substitutes_error_message() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let input = write_input(dir, "image.png", &[0x89, b'P', b'N', b'G', 0xff, 0xfe]);
    let output = dir.join("out.txt");

    let details = fs::read_to_string(&input).unwrap_err().to_string();
    let report = export_files(&[input.as_str()], &output).unwrap();

    let bundle = fs::read_to_string(&output).unwrap();
    assert_eq!(
        bundle,
        format!("文件名：{input}\n读取文件时出错: {input}\n错误: {details}\n\n")
    );
    assert_eq!(report.failed, 1);
}

#[test]
fn test_output_is_truncated_not_appended() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let input = write_input(dir, "a.txt", b"short");
    let output = dir.join("out.txt");
    fs::write(&output, "x".repeat(4096)).unwrap();

    export_files(&[input.as_str()], &output).unwrap();

    let bundle = fs::read_to_string(&output).unwrap();
    assert_eq!(bundle, format!("文件名：{}\nshort\n\n", input));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let a = write_input(dir, "a.txt", b"one");
    let b = write_input(dir, "b.txt", b"two");
    let missing = dir.join("gone.txt").to_str().unwrap().to_string();
    let paths = [a, missing, b];

    let first = dir.join("first.txt");
    let second = dir.join("second.txt");
    export_files(&paths, &first).unwrap();
    export_files(&paths, &second).unwrap();
    let first_bytes = fs::read(&first).unwrap();
    export_files(&paths, &first).unwrap();

    assert_eq!(first_bytes, fs::read(&second).unwrap());
    assert_eq!(first_bytes, fs::read(&first).unwrap());
}

#[test]
fn test_disabled_manifest_entries_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let kept = write_input(dir, "kept.txt", b"kept");
    let skipped = write_input(dir, "skipped.txt", b"skipped");
    let output = dir.join("out.txt");

    let manifest = Manifest::new()
        .with(ManifestEntry::disabled(skipped.clone()))
        .with(ManifestEntry::new(kept.clone()));

    let report = export_manifest(&manifest, &output).unwrap();

    let bundle = fs::read_to_string(&output).unwrap();
    assert_eq!(bundle, format!("文件名：{}\nkept\n\n", kept));
    assert!(!bundle.contains(&skipped));
    assert_eq!(report.total(), 1);
}

#[test]
fn test_duplicate_paths_are_exported_twice() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    let a = write_input(dir, "a.txt", b"again");
    let output = dir.join("out.txt");

    let report = export_files(&[a.as_str(), a.as_str()], &output).unwrap();

    let block = format!("文件名：{}\nagain\n\n", a);
    assert_eq!(fs::read_to_string(&output).unwrap(), block.repeat(2));
    assert_eq!(report.exported, 2);
}

#[test]
fn test_empty_list_creates_empty_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let report = export_files::<&str>(&[], &output).unwrap();

    assert_eq!(fs::read(&output).unwrap(), Vec::<u8>::new());
    assert_eq!(report.total(), 0);
    validate_export::<&str>(&output, &[]).unwrap();
}

#[test]
fn test_unwritable_output_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("no/such/dir/out.txt");

    let exporter = Exporter::new(ExportConfig::new(&output));
    let result = exporter.export(&["whatever.txt"]);

    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn test_write_bundle_to_memory() {
    let exporter = Exporter::new(ExportConfig::default());
    let mut buf = Vec::new();

    exporter
        .write_bundle(&["/nonexistent/x.txt", "/nonexistent/y.txt"], &mut buf)
        .unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "文件名：/nonexistent/x.txt\n文件不存在: /nonexistent/x.txt\n\n\
         文件名：/nonexistent/y.txt\n文件不存在: /nonexistent/y.txt\n\n"
    );
}
