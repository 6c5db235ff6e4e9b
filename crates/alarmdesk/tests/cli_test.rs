//! Integration tests for the `alarmdesk` binary.
//!
//! Every invocation starts from the seeded desk, so expected ids and counts
//! come straight from the mock data.
#![allow(clippy::unwrap_used)]

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command with env isolation: no `ALARMDESK_*` overrides and a
/// config directory that does not exist.
fn alarmdesk_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("alarmdesk");
    cmd.env("HOME", "/tmp/alarmdesk-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/alarmdesk-cli-test-nonexistent")
        .env_remove("ALARMDESK_CONFIG")
        .env_remove("ALARMDESK_OUTPUT")
        .env_remove("ALARMDESK_DEFAULTS__OUTPUT")
        .env_remove("ALARMDESK_DEFAULTS__COLOR")
        .env_remove("ALARMDESK_DESK__OPERATOR_NAME")
        .env_remove("ALARMDESK_DESK__RECENT_LIMIT")
        .env_remove("ALARMDESK_ADVISOR__DELAY")
        .env_remove("RUST_LOG");
    cmd
}

fn script_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_usage() {
    let output = alarmdesk_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in:\n{stderr}");
}

#[test]
fn test_help_flag() {
    alarmdesk_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("alarms")
            .and(predicate::str::contains("operators"))
            .and(predicate::str::contains("replay")),
    );
}

#[test]
fn test_version_flag() {
    alarmdesk_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("alarmdesk"));
}

#[test]
fn test_completions() {
    for shell in ["bash", "zsh", "fish"] {
        alarmdesk_cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }
}

// ── Alarms ──────────────────────────────────────────────────────────

#[test]
fn test_alarms_list_plain() {
    alarmdesk_cmd()
        .args(["alarms", "list", "-o", "plain"])
        .assert()
        .success()
        .stdout("alarm-001\nalarm-002\nalarm-003\n");
}

#[test]
fn test_alarms_list_critical_filter() {
    alarmdesk_cmd()
        .args(["alarms", "list", "--filter", "critical", "-o", "plain"])
        .assert()
        .success()
        .stdout("alarm-001\nalarm-003\n");
}

#[test]
fn test_alarms_list_table_has_headers() {
    alarmdesk_cmd()
        .args(["alarms", "list", "--color", "never"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority").and(predicate::str::contains("alarm-002")));
}

#[test]
fn test_alarm_get_unknown_exits_4() {
    alarmdesk_cmd()
        .args(["alarms", "get", "alarm-404"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("alarm-404").and(predicate::str::contains("alarms list")));
}

#[test]
fn test_assign_to_unknown_operator_exits_4() {
    alarmdesk_cmd()
        .args(["alarms", "assign", "alarm-001", "cso-404"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("operators list"));
}

#[test]
fn test_alarm_status_update() {
    alarmdesk_cmd()
        .args(["alarms", "status", "alarm-001", "resolved", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "resolved""#));
}

#[test]
fn test_blank_note_is_rejected() {
    alarmdesk_cmd()
        .args(["alarms", "note", "alarm-001", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blank"));
}

#[test]
fn test_note_uses_configured_author() {
    alarmdesk_cmd()
        .env("ALARMDESK_DESK__OPERATOR_NAME", "Night Shift")
        .args(["alarms", "note", "alarm-001", "Called keyholder", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Night Shift")
                .and(predicate::str::contains("Called keyholder")),
        );
}

#[test]
fn test_recommend_returns_triage_verdict() {
    alarmdesk_cmd()
        .env("ALARMDESK_ADVISOR__DELAY", "0ms")
        .args(["alarms", "recommend", "alarm-002", "-o", "json"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""alarm_id": "alarm-002""#)
                .and(predicate::str::contains(r#""agent_type": "triage""#)),
        );
}

// ── Operators, stats, audit ─────────────────────────────────────────

#[test]
fn test_operators_available() {
    alarmdesk_cmd()
        .args(["operators", "list", "--available", "-o", "plain"])
        .assert()
        .success()
        .stdout("cso-003\n");
}

#[test]
fn test_stats_json() {
    alarmdesk_cmd()
        .args(["stats", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("47"));
}

#[test]
fn test_seeded_audit_is_clean() {
    alarmdesk_cmd()
        .args(["audit", "-o", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_dashboard_shows_breakdown_and_recent_alarms() {
    alarmdesk_cmd()
        .args(["dashboard", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(
                "Alarms: 3 total | 1 new | 2 in progress | 0 resolved | 2 critical",
            )
            .and(predicate::str::contains("Alarms today:       47"))
            .and(predicate::str::contains("alarm-003")),
        );
}

#[test]
fn test_notifications_list() {
    alarmdesk_cmd()
        .args(["notifications", "list", "--color", "never"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("notif-001")
                .and(predicate::str::contains("AI Agent Update"))
                .and(predicate::str::contains("info")),
        );

    alarmdesk_cmd()
        .args(["notifications", "list", "--unread", "-o", "plain"])
        .assert()
        .success()
        .stdout("notif-001\n");
}

// ── Replay ──────────────────────────────────────────────────────────

#[test]
fn test_replay_reports_stale_roster_entry() {
    let script = script_file(
        r#"[
            {"command": "assign_alarm", "alarm_id": "alarm-002", "cso_id": "cso-003"},
            {"command": "update_alarm_status", "alarm_id": "alarm-404", "status": "resolved"}
        ]"#,
    );
    alarmdesk_cmd()
        .args(["replay", "-o", "json"])
        .arg(script.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("stale_roster_entry")
                .and(predicate::str::contains(r#""result": "ignored""#)),
        );
}

#[test]
fn test_replay_rejects_unknown_command() {
    let script = script_file(r#"[{"command": "delete_everything"}]"#);
    alarmdesk_cmd()
        .arg("replay")
        .arg(script.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid command script"));
}

#[test]
fn test_replay_reads_stdin() {
    alarmdesk_cmd()
        .args(["replay", "-", "-o", "plain"])
        .write_stdin(r#"[{"command": "recompute_stats"}]"#)
        .assert()
        .success()
        .stdout("recompute_stats applied\n");
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    alarmdesk_cmd()
        .args(["--config", "/tmp/alarmdesk-elsewhere.toml", "config", "path"])
        .assert()
        .success()
        .stdout("/tmp/alarmdesk-elsewhere.toml\n");
}

#[test]
fn test_config_show_defaults() {
    alarmdesk_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("operator_name = \"Current CSO\""));
}

#[test]
fn test_config_show_escapes_quoted_operator_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[desk]\noperator_name = 'Night \"Owl\"'\n").unwrap();

    let output = alarmdesk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // What `config show` prints must load back as the same setting.
    let shown = dir.path().join("shown.toml");
    std::fs::write(&shown, &output.stdout).unwrap();
    alarmdesk_cmd()
        .arg("--config")
        .arg(&shown)
        .args(["alarms", "note", "alarm-001", "Checked", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"Night \"Owl\""#));
}

#[test]
fn test_bad_config_value_exits_6() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\noutput = \"xml\"\n").unwrap();
    alarmdesk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["alarms", "list"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("defaults.output"));
}

#[test]
fn test_bad_advisor_delay_exits_6() {
    alarmdesk_cmd()
        .env("ALARMDESK_ADVISOR__DELAY", "soon")
        .args(["stats"])
        .assert()
        .code(6);
}

#[test]
fn test_config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    alarmdesk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--yes"])
        .assert()
        .success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[desk]"));

    // A second init without --yes cannot prompt without a terminal.
    alarmdesk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_output_default_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\noutput = \"plain\"\n").unwrap();
    alarmdesk_cmd()
        .arg("--config")
        .arg(&path)
        .args(["operators", "list"])
        .assert()
        .success()
        .stdout("cso-001\ncso-002\ncso-003\n");
}
