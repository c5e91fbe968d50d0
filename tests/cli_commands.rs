mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

const RUBY_CONFIG: &str = r#"[output]
prefix = "lib"
append_package = true
formatter = "lower_underscore"

[product]
package_name = "Google::Cloud::SecretManager::V1"
"#;

#[test]
fn element_without_config_prints_empty_path() {
    let ctx = TestContext::new();

    ctx.cli().args(["element", "com.example.foo"]).assert().success().stdout("\n");
}

#[test]
fn element_with_flags_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["element", "com.example.foo", "--append-package", "true"])
        .assert()
        .success()
        .stdout("com/example/foo\n");

    ctx.cli()
        .args(["e", "Foo::Bar", "--append-package", "true"])
        .assert()
        .success()
        .stdout("foo/bar\n");
}

#[test]
fn element_reads_project_config() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    ctx.cli().arg("element").assert().success().stdout("lib/google/cloud/secret_manager/v1\n");
}

#[test]
fn sample_inserts_samples_directory() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["sample", "pkg.sub", "--method", "listFoos"])
        .args(["--prefix", "gen", "--append-package", "true"])
        .assert()
        .success()
        .stdout("gen/samples/pkg/sub/listfoos\n");
}

#[test]
fn sample_with_configured_formatter() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    ctx.cli()
        .args(["s", "-m", "accessSecretVersion"])
        .assert()
        .success()
        .stdout("lib/samples/google/cloud/secret_manager/v1/access_secret_version\n");
}

#[test]
fn flags_override_project_config() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    ctx.cli()
        .args(["element", "--prefix", "out", "--formatter", "none"])
        .assert()
        .success()
        .stdout("out/google/cloud/secretmanager/v1\n");

    ctx.cli()
        .args(["element", "--formatter", "upper-camel"])
        .assert()
        .success()
        .stdout("lib/Google/Cloud/SecretManager/V1\n");
}

#[test]
fn explicit_yaml_config() {
    let ctx = TestContext::new();
    ctx.write_project_config("[output]\nprefix = \"ignored\"\n");
    ctx.write_config(
        "configs/python.yaml",
        "output:\n  prefix: google-cloud\n  append_package: true\n",
    );

    ctx.cli()
        .args(["--config", "configs/python.yaml", "element", "google.cloud.tasks"])
        .assert()
        .success()
        .stdout("google-cloud/google/cloud/tasks\n");
}

#[test]
fn env_config_is_used_when_no_flag() {
    let ctx = TestContext::new();
    let env_config = ctx.outside_dir().join("env.toml");
    fs::write(&env_config, "[output]\nprefix = \"from-env\"\n").unwrap();

    ctx.cli()
        .env("CODEPATH_CONFIG", &env_config)
        .args(["element", "a.b"])
        .assert()
        .success()
        .stdout("from-env\n");
}

#[test]
fn json_output() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    let output = ctx.cli().args(["sample", "--method", "getSecret", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "sample");
    assert_eq!(json["package"], "Google::Cloud::SecretManager::V1");
    assert_eq!(json["method"], "getSecret");
    assert_eq!(json["path"], "lib/samples/google/cloud/secret_manager/v1/get_secret");
}

#[test]
fn config_prints_resolved_toml() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    ctx.cli()
        .args(["config", "--prefix", "src"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prefix = \"src\""))
        .stdout(predicate::str::contains("formatter = \"lower_underscore\""))
        .stdout(predicate::str::contains("package_name = \"Google::Cloud::SecretManager::V1\""));
}

#[test]
fn missing_explicit_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--config", "missing.toml", "element", "a.b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found: missing.toml"));
}

#[test]
fn missing_package_warns_and_prints_prefix_only_path() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["element", "--prefix", "gen", "--append-package", "true"])
        .assert()
        .success()
        .stdout("gen\n")
        .stderr(predicate::str::contains("no package name given"));
}

#[test]
fn sample_rejects_empty_method() {
    let ctx = TestContext::new();

    ctx.cli().args(["sample", "a.b", "--method", ""]).assert().failure().code(2);
}

#[test]
fn invalid_config_reports_parse_error() {
    let ctx = TestContext::new();
    ctx.write_project_config("[output]\nformatter = \"shouty\"\n");

    ctx.cli()
        .args(["element", "a.b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style 'shouty'"));
}

#[test]
fn unknown_formatter_flag_is_a_usage_error() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["element", "a.b", "--formatter", "shouty"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case style"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let ctx = TestContext::new();
    ctx.write_project_config(RUBY_CONFIG);

    ctx.cli()
        .args(["-v", "element"])
        .assert()
        .success()
        .stdout("lib/google/cloud/secret_manager/v1\n")
        .stderr(predicate::str::contains("loaded config"));
}
