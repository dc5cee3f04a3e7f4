use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_piggy-icon-gen");

const GRADIENT_FILES: [&str; 8] = [
    "app_icon.png",
    "app_icon_512.png",
    "app_icon_256.png",
    "app_icon_128.png",
    "app_icon_96.png",
    "app_icon_72.png",
    "app_icon_48.png",
    "app_icon_36.png",
];

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output directory")
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn default_run_writes_the_full_icon_set() {
    let temp = TempDir::new().expect("create temp directory");
    let out_dir = temp.path().join("icons");

    let output = Command::new(BIN)
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("run piggy-icon-gen");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let mut expected: Vec<String> = GRADIENT_FILES.iter().map(|name| name.to_string()).collect();
    expected.sort();
    assert_eq!(dir_entries(&out_dir), expected);

    // Each resized file decodes at exactly the requested edge length
    for size in [512u32, 256, 128, 96, 72, 48, 36] {
        let img = image::open(out_dir.join(format!("app_icon_{size}.png"))).unwrap();
        assert_eq!((img.width(), img.height()), (size, size));
    }

    let master = image::open(out_dir.join("app_icon.png")).unwrap();
    assert_eq!((master.width(), master.height()), (512, 512));
}

#[test]
fn reruns_overwrite_with_identical_bytes() {
    let temp = TempDir::new().expect("create temp directory");
    let out_dir = temp.path().join("icons");

    let run = || {
        let output = Command::new(BIN)
            .arg("-o")
            .arg(&out_dir)
            .output()
            .expect("run piggy-icon-gen");
        assert!(output.status.success());
    };

    run();
    let master_first = fs::read(out_dir.join("app_icon.png")).unwrap();
    let small_first = fs::read(out_dir.join("app_icon_96.png")).unwrap();

    run();
    assert_eq!(master_first, fs::read(out_dir.join("app_icon.png")).unwrap());
    assert_eq!(small_first, fs::read(out_dir.join("app_icon_96.png")).unwrap());
}

#[test]
fn custom_png_sizes_replace_the_default_list() {
    let temp = TempDir::new().expect("create temp directory");
    let out_dir = temp.path().join("icons");

    let output = Command::new(BIN)
        .arg("-o")
        .arg(&out_dir)
        .arg("-p")
        .arg("64,20")
        .output()
        .expect("run piggy-icon-gen");
    assert!(output.status.success());

    assert_eq!(
        dir_entries(&out_dir),
        vec!["app_icon.png", "app_icon_20.png", "app_icon_64.png"]
    );

    let resized = image::open(out_dir.join("app_icon_20.png")).unwrap();
    assert_eq!((resized.width(), resized.height()), (20, 20));
}

#[test]
fn simple_run_writes_a_single_file() {
    let temp = TempDir::new().expect("create temp directory");
    let out_dir = temp.path().join("icons");

    let output = Command::new(BIN)
        .arg("--simple")
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("run piggy-icon-gen");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Icon created successfully"), "stdout: {stdout}");

    assert_eq!(dir_entries(&out_dir), vec!["app_icon.png"]);

    let icon = image::open(out_dir.join("app_icon.png")).unwrap();
    assert_eq!((icon.width(), icon.height()), (512, 512));
}

#[test]
fn simple_run_reports_write_failures_and_exits_clean() {
    let temp = TempDir::new().expect("create temp directory");

    // A regular file in the way makes directory creation fail
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let out_dir = blocker.join("icons");

    let output = Command::new(BIN)
        .arg("--simple")
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("run piggy-icon-gen");

    assert!(output.status.success(), "failure must be caught, not propagated");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error:"), "stdout: {stdout}");
    assert!(stdout.contains("output directory"), "stdout: {stdout}");
}

#[test]
fn gradient_run_propagates_write_failures() {
    let temp = TempDir::new().expect("create temp directory");

    let blocker = temp.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let out_dir = blocker.join("icons");

    let output = Command::new(BIN)
        .arg("-o")
        .arg(&out_dir)
        .output()
        .expect("run piggy-icon-gen");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("output directory"), "stderr: {stderr}");
}
