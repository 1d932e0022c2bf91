use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "girder-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_girder<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_girder");
    Command::new(bin)
        .args(args)
        .output()
        .expect("girder command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn new_layered_project_lists_modules_in_json() {
    let tmp = TempDirGuard::new("new-layered");
    let target = tmp.path().join("shop");

    let output = run_girder([
        "new",
        "shop",
        "--group",
        "com.example",
        "--version",
        "1.0.0",
        "--architecture",
        "mvc",
        "--output",
        target.to_str().expect("utf-8 path"),
        "--json",
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["architecture"], "mvc");
    let modules: Vec<&str> = payload["modules"]
        .as_array()
        .expect("modules array")
        .iter()
        .map(|m| m.as_str().expect("module name"))
        .collect();
    assert_eq!(modules, ["shop-api", "shop-common", "shop-core", "shop-web"]);

    assert!(target.join("pom.xml").is_file());
    assert!(target.join("shop-web/pom.xml").is_file());
}

#[test]
fn new_flat_project_with_properties() {
    let tmp = TempDirGuard::new("new-flat");
    let target = tmp.path().join("tool");

    let output = run_girder([
        "new",
        "tool",
        "--architecture",
        "none",
        "--output",
        target.to_str().expect("utf-8 path"),
        "--property",
        "server.port=8080",
        "--property",
        "app.title=Tool",
    ]);
    assert_success(&output);

    let properties =
        fs::read_to_string(target.join("src/main/resources/application.properties"))
            .expect("properties file should exist");
    assert_eq!(properties, "app.title=Tool\nserver.port=8080\n");
}

#[test]
fn unknown_architecture_fails_with_its_name() {
    let tmp = TempDirGuard::new("unknown-arch");
    let target = tmp.path().join("shop");

    let output = run_girder([
        "new",
        "shop",
        "--architecture",
        "hexagonal",
        "--output",
        target.to_str().expect("utf-8 path"),
    ]);
    assert_failure(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hexagonal"), "{stderr}");
    assert!(!target.exists());
}

#[test]
fn architectures_lists_builtins_and_catalog_default() {
    let tmp = TempDirGuard::new("architectures");
    let catalog_path = tmp.path().join("catalog.toml");
    fs::write(
        &catalog_path,
        r#"
        default = "none"

        [[architecture]]
        id = "none"
        name = "Single module"
        "#,
    )
    .expect("catalog should be written");

    let output = run_girder([
        "architectures",
        "--catalog",
        catalog_path.to_str().expect("utf-8 path"),
        "--json",
    ]);
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["default"], "none");
    let ids: Vec<&str> = payload["architectures"]
        .as_array()
        .expect("architectures array")
        .iter()
        .map(|a| a["id"].as_str().expect("id"))
        .collect();
    assert!(ids.contains(&"none") && ids.contains(&"mvc"), "{ids:?}");
}
