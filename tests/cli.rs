//! Integration tests for the rooflini binary

use std::process::Command;

/// Helper to run the rooflini binary
fn run_rooflini(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rooflini"))
        .args(args)
        .output()
        .expect("Failed to run rooflini")
}

#[test]
fn help_shows_output_argument() {
    let output = run_rooflini(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Help should succeed");
    assert!(stdout.contains("[OUTPUT]"), "Should show optional OUTPUT: {stdout}");
    assert!(stdout.contains("roofline.svg"), "Should show default file name");
}

#[test]
fn unsupported_extension_fails_without_output() {
    let path = std::env::temp_dir().join("rooflini_cli_test.pdf");
    let output = run_rooflini(&[path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success(), "PDF output should be rejected");
    assert!(stderr.contains("Unsupported output format"), "stderr: {stderr}");
    assert!(output.stdout.is_empty(), "Nothing printed before the failure");
    assert!(!path.exists());
}

#[test]
fn extra_positional_argument_rejected() {
    let output = run_rooflini(&["a.svg", "b.svg"]);
    assert!(!output.status.success());
}

#[test]
fn renders_svg_document() {
    let path = std::env::temp_dir().join("rooflini_cli_test.svg");
    let _ = std::fs::remove_file(&path);

    let output = run_rooflini(&[path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("L1 Bandwidth"));

    let svg = std::fs::read_to_string(&path).expect("svg written");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Rooflini example"));
    assert!(svg.contains("This is unbelievable"));
    let _ = std::fs::remove_file(&path);
}
