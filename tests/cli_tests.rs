use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn mcrename_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mcrename"))
}

#[test]
fn test_to_fabric_from_stdin() {
    let output = mcrename_cmd()
        .arg("--to_fabric")
        .write_stdin("import net.minecraft.client.Minecraft;\nMinecraft.getInstance();\n")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "import net.minecraft.client.MinecraftClient;\nMinecraftClient.getInstance();\n"
    );
}

#[test]
fn test_to_forge_from_stdin() {
    let output = mcrename_cmd()
        .arg("--to_forge")
        .write_stdin("  // Forge only: player.getPitch();\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "  player.getXRot(); // Forge only\n"
    );
}

#[test]
fn test_missing_direction_is_usage_error() {
    let output = mcrename_cmd().write_stdin("x\n").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[test]
fn test_both_directions_is_usage_error() {
    let output = mcrename_cmd()
        .args(["--to_fabric", "--to_forge"])
        .write_stdin("x\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_direction_is_usage_error() {
    let output = mcrename_cmd()
        .arg("--to_quilt")
        .write_stdin("x\n")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_input_and_output_files() {
    let temp_dir = TempDir::new().unwrap();
    let input_file = temp_dir.path().join("Example.java");
    let output_file = temp_dir.path().join("Example.fabric.java");
    fs::write(&input_file, "Level level = minecraft.level;\r\n").unwrap();

    let output = mcrename_cmd()
        .args([
            "--to_fabric",
            "-i",
            input_file.to_str().unwrap(),
            "-o",
            output_file.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert_eq!(
        fs::read_to_string(&output_file).unwrap(),
        "World level = minecraft.world;\r\n"
    );
}

#[test]
fn test_custom_member_table() {
    let temp_dir = TempDir::new().unwrap();
    let members = temp_dir.path().join("members.csv");
    fs::write(&members, "# forge,fabric\nscreen.onClose,screen.close\nfoo.bar,foo.baz\n").unwrap();

    let output = mcrename_cmd()
        .args(["--to_fabric", "--members", members.to_str().unwrap()])
        .write_stdin("foo.bar(); minecraft.screen;\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    // The built-in member table is replaced, so minecraft.screen stays.
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "foo.baz(); minecraft.screen;\n"
    );
}

#[test]
fn test_custom_class_table_rejects_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let classes = temp_dir.path().join("classes.json");
    fs::write(
        &classes,
        r#"[{"forge": "a.Foo", "fabric": "b.Foo"}, {"forge": "a.Bar", "fabric": "b.Foo"}]"#,
    )
    .unwrap();

    let output = mcrename_cmd()
        .args(["--to_fabric", "--classes", classes.to_str().unwrap()])
        .write_stdin("x\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: validation error: duplicate fabric name `b.Foo`"));
}

#[test]
fn test_unsupported_table_extension() {
    let output = mcrename_cmd()
        .args(["--to_forge", "--classes", "classes.toml"])
        .write_stdin("x\n")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported format"));
}

#[test]
fn test_dump_tables() {
    let output = mcrename_cmd().arg("--dump-tables").output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["classes"][2]["forge"],
        "net.minecraft.client.Minecraft"
    );
    assert_eq!(
        value["classes"][2]["fabric"],
        "net.minecraft.client.MinecraftClient"
    );
    assert!(value["members"].as_array().unwrap().len() > 50);
}

#[test]
fn test_no_eof_flush_drops_trailing_imports() {
    let input = "import a.A;\nimport b.B; // Forge only\n";

    let flushed = mcrename_cmd()
        .arg("--to_fabric")
        .write_stdin(input)
        .output()
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&flushed.stdout),
        "import a.A;\n// Forge only: import b.B;\n"
    );

    let dropped = mcrename_cmd()
        .args(["--to_fabric", "--no-eof-flush"])
        .write_stdin(input)
        .output()
        .unwrap();
    assert!(dropped.status.success());
    assert_eq!(String::from_utf8_lossy(&dropped.stdout), "import a.A;\n");
}
