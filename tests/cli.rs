use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const TABLE: &str = r#"{
  "title": "Ratings",
  "columns": [{"title": "low", "key": "low"}, {"title": "mid", "key": "mid"},
              {"title": "high", "key": "high"}],
  "rows": [{"label": "Battery", "anchor": "battery", "counts": [0, 50, 100]}]
}"#;

fn heatmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_heatmap"))
}

/// Run `cmd` with `input` on its standard input.
fn run_with_stdin(cmd: &mut Command, input: &str) -> Output {
    let mut child = cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn heatmap");
    child.stdin.take().expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run heatmap")
}

fn lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(String::from).collect()
}

#[test]
fn values_print_one_color_per_line() {
    let out = heatmap().args(["--values", "0,50,100,x"]).output()
        .expect("run heatmap");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(lines(&out), ["rgb(255,255,255)", "rgb(255,255,126)",
                             "rgb(255,255,-3)", "rgb(NaN,NaN,NaN)"]);
}

#[test]
fn values_accept_negative_numbers() {
    let out = heatmap().args(["--values", "0,50,100,x,-5"]).output()
        .expect("run heatmap");
    assert!(out.status.success());
    assert_eq!(lines(&out).last().map(String::as_str),
               Some("rgb(255,255,268)"));
}

#[test]
fn custom_stops() {
    let out = heatmap()
        .args(["--start", "black", "--end", "#ffffff", "--values", "0,100"])
        .output().expect("run heatmap");
    assert!(out.status.success());
    assert_eq!(lines(&out), ["rgb(0,0,0)", "rgb(258,258,258)"]);

    let out = heatmap()
        .args(["--steps", "101", "--start", "rgb(0,0,0)",
               "--end", "rgb(100,200,0)", "--values", "50,100"])
        .output().expect("run heatmap");
    assert!(out.status.success());
    assert_eq!(lines(&out), ["rgb(50,100,0)", "rgb(100,200,0)"]);
}

#[test]
fn page_from_piped_json() {
    for args in [&["-"][..], &[]] {
        let out = run_with_stdin(heatmap().args(args), TABLE);
        assert!(out.status.success(),
                "{}", String::from_utf8_lossy(&out.stderr));
        let page = String::from_utf8_lossy(&out.stdout);
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<td style=\"background-color: rgb(255,255,126)\">\
                               <a href=\"#battery-mid\">50</a></td>"));
        assert!(page.contains("class=\"legend\""));
    }
}

#[test]
fn page_to_output_file() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("table.json");
    let output = temp.path().join("heatmap.html");
    fs::write(&input, TABLE).expect("write table");

    let out = heatmap().arg(&input).arg("-o").arg(&output).output()
        .expect("run heatmap");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
    let page = fs::read_to_string(&output).expect("read page");
    assert!(page.contains("rgb(255,255,-3)"));
    assert!(page.trim_end().ends_with("</html>"));
}

#[test]
fn empty_table_has_no_legend() {
    let out = run_with_stdin(&mut heatmap(), r#"{"columns": [], "rows": []}"#);
    assert!(out.status.success());
    let page = String::from_utf8_lossy(&out.stdout);
    assert!(!page.contains("class=\"legend\""));
    assert!(!page.contains("NaN"));
}

#[test]
fn too_few_steps_fail() {
    let out = heatmap().args(["--steps", "1", "--values", "1"]).output()
        .expect("run heatmap");
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr)
            .contains("at least 2 interpolation steps"));
}

#[test]
fn invalid_stop_fails() {
    let status = heatmap().args(["--start", "plaid", "--values", "1"])
        .stderr(Stdio::null())
        .status().expect("run heatmap");
    assert!(!status.success());
}

#[test]
fn malformed_json_fails() {
    let out = run_with_stdin(heatmap().arg("-"), "{\"columns\": [");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr)
            .contains("invalid table on standard input"));

    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("broken.json");
    fs::write(&input, "{\"rows\": []}").expect("write table");
    let out = heatmap().arg(&input).output().expect("run heatmap");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}

#[test]
fn missing_input_fails() {
    let temp = TempDir::new().expect("tempdir");
    let out = heatmap().arg(temp.path().join("nope.json")).output()
        .expect("run heatmap");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot open"));
}
