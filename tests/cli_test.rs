use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const PROJECT: &str = r#"{ "name": "Petstore", "version": "2.0.0" }"#;

const DATA: &str = r#"[
    { "version": "1.0.0", "filename": "a.js", "title": "Foo" },
    { "version": "2.0.0", "filename": "a.js", "title": "Bar", "type": "get", "url": "/bar" },
    { "version": "2.0.0", "filename": "b.js" }
]"#;

/// Default run: reads the apidoc directory given with `-p` and writes `-o`.
#[test]
fn test_writes_output_and_confirms() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("api_data.json"), DATA).unwrap();
    fs::write(temp_dir.path().join("api_project.json"), PROJECT).unwrap();
    let output_file = temp_dir.path().join("API.md");

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .arg("-p")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote apidoc-markdown to:"));

    let output = fs::read_to_string(&output_file).unwrap();
    assert!(output.contains("# Petstore v2.0.0"));
    assert!(output.contains("## Bar"));
    assert!(output.contains("GET /bar"));
    assert!(!output.contains("## Foo"));
}

/// Without `--path` the `doc` directory of the working directory is used.
#[test]
fn test_defaults_to_doc_directory() {
    let temp_dir = tempdir().unwrap();
    let doc_dir = temp_dir.path().join("doc");
    fs::create_dir(&doc_dir).unwrap();
    fs::write(doc_dir.join("api_data.json"), DATA).unwrap();
    fs::write(doc_dir.join("api_project.json"), PROJECT).unwrap();

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .current_dir(temp_dir.path())
        .arg("-o")
        .arg("API.md")
        .assert()
        .success();

    let output = fs::read_to_string(temp_dir.path().join("API.md")).unwrap();
    assert!(output.contains("## Bar"));
}

/// Custom template and prepend file are both honoured.
#[test]
fn test_custom_template_and_prepend() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("api_data.json"), DATA).unwrap();
    fs::write(temp_dir.path().join("api_project.json"), PROJECT).unwrap();
    let template = temp_dir.path().join("custom.md");
    fs::write(
        &template,
        "{{ prepend }}\n{% for file in files %}* {{ file }}\n{% endfor %}",
    )
    .unwrap();
    let prepend = temp_dir.path().join("intro.md");
    fs::write(&prepend, "Intro text").unwrap();
    let output_file = temp_dir.path().join("API.md");

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .arg("--path")
        .arg(temp_dir.path())
        .arg("--output")
        .arg(&output_file)
        .arg("--template")
        .arg(&template)
        .arg("--prepend")
        .arg(&prepend)
        .assert()
        .success();

    let output = fs::read_to_string(&output_file).unwrap();
    assert_eq!(output, "Intro text\n* a.js\n* b.js\n");
}

/// A missing data file names the path, fails, and writes nothing.
#[test]
fn test_missing_data_file() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("api_project.json"), PROJECT).unwrap();
    let output_file = temp_dir.path().join("API.md");
    let data_path = temp_dir.path().join("api_data.json");

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .arg("-p")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "error reading file \"{}\"",
            data_path.display()
        )));

    assert!(!output_file.exists());
}

/// Malformed JSON is reported as a parse error; `-v` adds the cause.
#[test]
fn test_malformed_project_file() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join("api_data.json"), DATA).unwrap();
    fs::write(temp_dir.path().join("api_project.json"), "{ nope").unwrap();
    let output_file = temp_dir.path().join("API.md");

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .arg("-p")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("error parsing file").and(
            predicate::str::contains("Caused by").not(),
        ));

    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .arg("-p")
        .arg(temp_dir.path())
        .arg("-o")
        .arg(&output_file)
        .arg("-v")
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_project.json").and(
            predicate::str::contains("Caused by"),
        ));

    assert!(!output_file.exists());
}

/// `--output` is mandatory.
#[test]
fn test_output_required() {
    Command::cargo_bin("apidoc-markdown")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output"));
}
