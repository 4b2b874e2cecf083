use drilllog_pro::upload::FileProcessor;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn scratch_dir() -> tempfile::TempDir {
    tempfile::Builder::new().prefix("drilllog").tempdir().unwrap()
}

#[test]
fn folder_scan_keeps_supported_files_only() {
    let dir = scratch_dir();
    fs::write(dir.path().join("wells.xlsx"), vec![0u8; 2048]).unwrap();
    fs::write(dir.path().join("LEGACY.CSV"), b"a,b\n1,2\n").unwrap();
    fs::write(dir.path().join("notes.txt"), b"skip me").unwrap();
    fs::create_dir(dir.path().join("archive")).unwrap();
    fs::write(dir.path().join("archive").join("old.xls"), b"xls").unwrap();

    let files = FileProcessor::default().collect_folder(dir.path());
    let mut names: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["LEGACY.CSV", "old.xls", "wells.xlsx"]);

    let wells = files.iter().find(|f| f.name == "wells.xlsx").unwrap();
    assert_eq!(wells.size_bytes, 2048);
}

#[test]
fn extensions_are_normalised() {
    let processor = FileProcessor::new([".XLSX", " csv ", ""]);
    assert_eq!(processor.extensions(), ["xlsx", "csv"]);
    assert_eq!(processor.accept_hint(), ".xlsx, .csv");
    assert!(processor.is_supported_file(Path::new("/tmp/Report.Xlsx")));
    assert!(!processor.is_supported_file(Path::new("/tmp/report.xls")));
}
