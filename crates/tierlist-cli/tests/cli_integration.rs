use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn tierlist(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("tierlist").unwrap();
    cmd.env_remove("TIERLIST_DEBUG_LOG")
        .args(["--store", store.to_str().unwrap()]);
    cmd
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

fn run_ok(store: &Path, args: &[&str]) -> Value {
    let output = tierlist(store)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&String::from_utf8_lossy(&output));
    assert!(json["success"].as_bool().unwrap());
    json
}

fn run_err(store: &Path, args: &[&str]) -> Value {
    let output = tierlist(store)
        .args(args)
        .assert()
        .failure()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    let json = parse_json_output(stderr.lines().last().unwrap());
    assert!(!json["success"].as_bool().unwrap());
    json
}

fn pool(store: &Path) -> Vec<String> {
    let json = run_ok(store, &["show"]);
    json["data"]["pool"]
        .as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_str().unwrap().to_string())
        .collect()
}

fn cell(json: &Value, key: &str) -> Vec<String> {
    json["data"]["cells"]
        .as_array()
        .unwrap()
        .iter()
        .find(|cell| cell["key"] == key)
        .map(|cell| {
            cell["items"]
                .as_array()
                .unwrap()
                .iter()
                .map(|id| id.as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

mod board_tests {
    use super::*;

    #[test]
    fn test_show_default_board() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["show"]);

        assert_eq!(json["data"]["source"], "default");
        assert_eq!(json["data"]["tile_size"], 96);
        assert_eq!(json["data"]["rows"].as_array().unwrap().len(), 4);
        assert_eq!(json["data"]["cols"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["cells"].as_array().unwrap().len(), 12);
        assert_eq!(json["data"]["rows"][0]["label"], "Bas");
        assert_eq!(json["data"]["cols"][2]["width"], 220);
        assert_eq!(json["data"]["pool_id"], "__pool__");
    }

    #[test]
    fn test_show_reports_contrast_colors() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["row", "recolor", "0", "#000000"]);
        let json = run_ok(dir.path(), &["show"]);

        assert_eq!(json["data"]["rows"][0]["text_color"], "#FFFFFF");
        assert_eq!(json["data"]["rows"][1]["text_color"], "#111827");
    }

    #[test]
    fn test_contrast_command() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["contrast", "#ffffff"]);
        assert_eq!(json["data"]["text_color"], "#111827");

        let json = run_ok(dir.path(), &["contrast", "not-a-color"]);
        assert_eq!(json["data"]["text_color"], "#FFFFFF");
    }

    #[test]
    fn test_state_persists_between_runs() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake,PNL"]);

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["source"], "storage");
        assert!(dir.path().join("tierlist2d-state").exists());
    }

    #[test]
    fn test_tile_size_clamped() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["tile-size", "500"]);
        assert_eq!(json["data"]["tile_size"], 200);
        assert_eq!(json["data"]["change"], "committed");
    }

    #[test]
    fn test_completions() {
        let dir = tempdir().unwrap();
        tierlist(dir.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("tierlist"));
    }
}

mod import_tests {
    use super::*;

    #[test]
    fn test_import_names_appends() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["import", "names", "Drake;PNL\tNekfeu"]);
        assert_eq!(json["data"]["imported"], 3);

        run_ok(dir.path(), &["import", "names", "Orelsan"]);
        assert_eq!(pool(dir.path()), ["drake", "pnl", "nekfeu", "orelsan"]);
    }

    #[test]
    fn test_import_names_replace() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake"]);
        run_ok(dir.path(), &["import", "names", "--replace", "PNL"]);
        assert_eq!(pool(dir.path()), ["pnl"]);
    }

    #[test]
    fn test_import_pairs() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &[
                "import",
                "pairs",
                "Alpha\thttp://x/a.jpg\nBeta | https://x/b.webp\nGamma",
            ],
        );
        assert_eq!(json["data"]["imported"], 3);

        let json = run_ok(dir.path(), &["show"]);
        let items = json["data"]["items"].as_array().unwrap();
        assert_eq!(items[0]["image"], "http://x/a.jpg");
        assert_eq!(items[1]["name"], "Beta");
        assert!(items[2].get("image").is_none());
    }

    #[test]
    fn test_import_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("artists.json");
        fs::write(&file, r#"["Drake","PNL"]"#).unwrap();
        let store = dir.path().join("store");

        run_ok(&store, &["import", "names", "Old"]);
        let json = run_ok(&store, &["import", "file", file.to_str().unwrap()]);
        assert_eq!(json["data"]["items"], 2);
        assert_eq!(json["data"]["rows"], 4);
        assert_eq!(json["data"]["cols"], 3);
        assert_eq!(pool(&store), ["drake", "pnl"]);
    }

    #[test]
    fn test_import_invalid_file_keeps_board() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("broken.json");
        fs::write(&file, "{ nope").unwrap();
        let store = dir.path().join("store");

        run_ok(&store, &["import", "names", "Drake"]);
        let json = run_err(&store, &["import", "file", file.to_str().unwrap()]);
        assert!(json["error"].as_str().unwrap().contains("Invalid file"));
        assert_eq!(pool(&store), ["drake"]);
    }

    #[test]
    fn test_export_round_trip() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("store");
        let export = dir.path().join("board.json");

        run_ok(&store, &["import", "names", "Drake,PNL"]);
        run_ok(&store, &["place", "pnl", "r1-c2"]);
        run_ok(&store, &["export", "--output", export.to_str().unwrap()]);

        let other = dir.path().join("other");
        run_ok(&other, &["import", "file", export.to_str().unwrap()]);
        let json = run_ok(&other, &["show"]);
        assert_eq!(cell(&json, "r1-c2"), ["pnl"]);
        assert_eq!(json["data"]["pool"], serde_json::json!(["drake"]));
    }

    #[test]
    fn test_export_to_stdout() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake"]);
        tierlist(dir.path())
            .arg("export")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"poolId\": \"__pool__\""));
    }
}

mod placement_tests {
    use super::*;

    fn seeded() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake,PNL,Nekfeu,Rihanna"]);
        dir
    }

    #[test]
    fn test_place_and_back_to_pool() {
        let dir = seeded();
        let json = run_ok(dir.path(), &["place", "drake", "r3-c0"]);
        assert_eq!(json["data"]["item"]["container"], "r3-c0");
        assert_eq!(json["data"]["change"], "committed");

        let json = run_ok(dir.path(), &["place", "drake", "pool"]);
        assert_eq!(json["data"]["item"]["container"], "__pool__");
        assert_eq!(pool(dir.path()), ["pnl", "nekfeu", "rihanna", "drake"]);
    }

    #[test]
    fn test_place_in_same_container_is_unchanged() {
        let dir = seeded();
        let json = run_ok(dir.path(), &["place", "pnl", "pool"]);
        assert_eq!(json["data"]["change"], "unchanged");
        assert_eq!(pool(dir.path()), ["drake", "pnl", "nekfeu", "rihanna"]);
    }

    #[test]
    fn test_place_errors() {
        let dir = seeded();
        let json = run_err(dir.path(), &["place", "ghost", "r0-c0"]);
        assert_eq!(json["error"], "Item not found: ghost");

        let json = run_err(dir.path(), &["place", "drake", "r9-c9"]);
        assert_eq!(json["error"], "Container not found: r9-c9");
    }

    #[test]
    fn test_drag_reorders_within_pool() {
        let dir = seeded();
        let json = run_ok(dir.path(), &["drag", "rihanna", "--drop", "drake"]);
        assert_eq!(json["data"]["position"], 0);
        assert_eq!(pool(dir.path()), ["rihanna", "drake", "pnl", "nekfeu"]);
    }

    #[test]
    fn test_drag_onto_item_in_cell() {
        let dir = seeded();
        run_ok(dir.path(), &["place", "rihanna", "r0-c0"]);

        let json = run_ok(
            dir.path(),
            &["drag", "pnl", "--over", "r1-c1", "--over", "rihanna", "--drop", "rihanna"],
        );
        assert_eq!(json["data"]["item"]["container"], "r0-c0");
        assert_eq!(json["data"]["position"], 0);

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(cell(&json, "r0-c0"), ["pnl", "rihanna"]);
        assert!(cell(&json, "r1-c1").is_empty());
    }

    #[test]
    fn test_drag_cancel_restores() {
        let dir = seeded();
        let json = run_ok(dir.path(), &["drag", "drake", "--over", "r2-c2", "--cancel"]);
        assert_eq!(json["data"]["item"]["container"], "__pool__");
        assert_eq!(pool(dir.path()), ["drake", "pnl", "nekfeu", "rihanna"]);
    }

    #[test]
    fn test_delete_and_clear() {
        let dir = seeded();
        run_ok(dir.path(), &["place", "drake", "r0-c0"]);

        run_ok(dir.path(), &["delete", "pnl"]);
        assert_eq!(pool(dir.path()), ["nekfeu", "rihanna"]);

        let json = run_ok(dir.path(), &["clear-pool"]);
        assert_eq!(json["data"]["deleted"], 2);
        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);

        let json = run_ok(dir.path(), &["clear-grid"]);
        assert_eq!(json["data"]["pool"], serde_json::json!(["drake"]));
    }

    #[test]
    fn test_delete_unknown_item() {
        let dir = seeded();
        run_err(dir.path(), &["delete", "ghost"]);
    }

    #[test]
    fn test_search() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Beyoncé,Bénabar,Booba"]);
        run_ok(dir.path(), &["place", "booba", "r0-c0"]);

        let json = run_ok(dir.path(), &["search", "BE"]);
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][0]["name"], "Beyoncé");

        let json = run_ok(dir.path(), &["search", "--pool", "b"]);
        assert_eq!(json["data"]["count"], 2);

        let json = run_ok(dir.path(), &["search", ""]);
        assert_eq!(json["data"]["count"], 0);
    }

    #[test]
    fn test_reset() {
        let dir = seeded();
        run_ok(dir.path(), &["reset"]);
        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 0);
    }
}

mod axis_tests {
    use super::*;

    #[test]
    fn test_add_row_and_col() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["row", "add"]);
        assert_eq!(json["data"]["entries"][4]["label"], "Ligne 5");
        assert_eq!(json["data"]["entries"][4]["color"], "#94a3b8");

        run_ok(dir.path(), &["col", "width", "2", "300"]);
        let json = run_ok(dir.path(), &["col", "add"]);
        assert_eq!(json["data"]["entries"][3]["label"], "Colonne 4");
        assert_eq!(json["data"]["entries"][3]["width"], 300);

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["cells"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn test_remove_row_returns_items_to_pool() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake,PNL,SCH"]);
        run_ok(dir.path(), &["place", "drake", "r1-c0"]);
        run_ok(dir.path(), &["place", "sch", "r2-c1"]);

        let json = run_ok(dir.path(), &["row", "remove", "1"]);
        assert_eq!(json["data"]["entries"].as_array().unwrap().len(), 3);
        assert_eq!(json["data"]["pool"], serde_json::json!(["pnl", "drake"]));

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(cell(&json, "r1-c1"), ["sch"]);
    }

    #[test]
    fn test_rename_recolor_and_widths() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["col", "rename", "0", "Froid"]);
        assert_eq!(json["data"]["entries"][0]["label"], "Froid");

        let json = run_ok(dir.path(), &["col", "recolor", "1", "#ffffff"]);
        assert_eq!(json["data"]["entries"][1]["text_color"], "#111827");

        let json = run_ok(dir.path(), &["col", "width-all", "1000"]);
        let widths: Vec<u64> = json["data"]["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["width"].as_u64().unwrap())
            .collect();
        assert_eq!(widths, [560, 560, 560]);
    }

    #[test]
    fn test_out_of_range_index() {
        let dir = tempdir().unwrap();
        let json = run_err(dir.path(), &["row", "remove", "9"]);
        assert_eq!(json["error"], "Not found: Row 9");

        let json = run_err(dir.path(), &["col", "width", "5", "200"]);
        assert_eq!(json["error"], "Not found: Column 5");
    }
}

mod share_tests {
    use super::*;

    fn share_url(store: &Path, extra: &[&str]) -> String {
        let mut args = vec!["share", "--no-copy"];
        args.extend_from_slice(extra);
        let json = run_ok(store, &args);
        assert_eq!(json["data"]["copied"], false);
        json["data"]["url"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_share_link_loads_elsewhere() {
        let dir = tempdir().unwrap();
        let store = dir.path().join("a");
        run_ok(&store, &["import", "names", "Drake,PNL"]);
        run_ok(&store, &["place", "drake", "r3-c2"]);
        let url = share_url(&store, &[]);
        assert!(url.contains('#'));

        let other = dir.path().join("b");
        let output = tierlist(&other)
            .args(["--url", &url, "show"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["source"], "shared_link");
        assert_eq!(cell(&json, "r3-c2"), ["drake"]);
    }

    #[test]
    fn test_bad_link_falls_back() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake"]);

        let output = tierlist(dir.path())
            .args(["--url", "https://tierlist.local/#%%%", "show"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["source"], "storage");
    }

    #[test]
    fn test_written_fragment_until_next_change() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake"]);
        share_url(dir.path(), &["--write"]);
        assert!(dir.path().join("tierlist2d-fragment").exists());

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["source"], "shared_link");

        run_ok(dir.path(), &["place", "drake", "r0-c0"]);
        assert!(!dir.path().join("tierlist2d-fragment").exists());
        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["source"], "storage");
    }

    #[test]
    fn test_auto_sync_keeps_fragment_current() {
        let dir = tempdir().unwrap();
        tierlist(dir.path())
            .args(["--auto-sync", "import", "names", "Drake"])
            .assert()
            .success();
        assert!(dir.path().join("tierlist2d-fragment").exists());

        let json = run_ok(dir.path(), &["show"]);
        assert_eq!(json["data"]["source"], "shared_link");
        assert_eq!(json["data"]["pool"], serde_json::json!(["drake"]));
    }

    #[test]
    fn test_reset_clears_fragment() {
        let dir = tempdir().unwrap();
        run_ok(dir.path(), &["import", "names", "Drake"]);
        share_url(dir.path(), &["--write"]);

        run_ok(dir.path(), &["reset"]);
        assert!(!dir.path().join("tierlist2d-fragment").exists());
    }
}
