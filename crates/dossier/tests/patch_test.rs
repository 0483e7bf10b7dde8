//! Integration tests for `dossier patch` and `dossier init`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use dossier_core::knowledge::BUILTIN_KNOWLEDGE_TEMPLATE;
use dossier_testkit::{sample_knowledge_doc, temp_dir_in_workspace, write_fixture};
use predicates::prelude::*;
use std::fs;
use std::process::Command;

fn dossier() -> Command {
    Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
}

#[test]
fn test_patch_inserts_before_next_section() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_fixture(root, "cloudy.md", sample_knowledge_doc());

    dossier()
        .current_dir(root)
        .args(["patch", "--section", "项目规范", "--content", "- 新规则"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated section '项目规范'"));

    let text = fs::read_to_string(root.join("cloudy.md")).unwrap();
    assert_eq!(
        text,
        "# 项目知识库\n\n## 1. 项目规范\n- 提交前运行测试\n\n- 新规则\n## 2. 下一节\n内容\n"
    );
}

#[test]
fn test_patch_last_section_appends_at_eof() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    let path = write_fixture(root, "notes.md", sample_knowledge_doc());

    dossier()
        .current_dir(root)
        .args(["patch", "-s", "下一节", "-c", "追加\n", "--file", "notes.md"])
        .assert()
        .success();

    let text = fs::read_to_string(path).unwrap();
    assert!(text.ends_with("## 2. 下一节\n内容\n\n追加\n"), "{}", text);
}

#[test]
fn test_patch_twice_duplicates_content() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_fixture(root, "cloudy.md", "## A\nx\n## B\n");

    for _ in 0..2 {
        dossier()
            .current_dir(root)
            .args(["patch", "-s", "A", "-c", "y"])
            .assert()
            .success();
    }

    let text = fs::read_to_string(root.join("cloudy.md")).unwrap();
    assert_eq!(text, "## A\nx\n\ny\n\ny\n## B\n");
}

#[test]
fn test_patch_missing_section_fails_without_writing() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_fixture(root, "cloudy.md", sample_knowledge_doc());

    dossier()
        .current_dir(root)
        .args(["patch", "-s", "不存在", "-c", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SECTION_NOT_FOUND"))
        .stderr(predicate::str::contains("不存在"));

    let text = fs::read_to_string(root.join("cloudy.md")).unwrap();
    assert_eq!(text, sample_knowledge_doc());
}

#[test]
fn test_patch_missing_file() {
    let temp = temp_dir_in_workspace();

    dossier()
        .current_dir(temp.path())
        .args(["patch", "-s", "项目规范", "-c", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MISSING_INPUT"));
}

#[test]
fn test_patch_preserves_crlf() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    write_fixture(root, "cloudy.md", "## A\r\nx\r\n## B\r\n");

    dossier()
        .current_dir(root)
        .args(["patch", "-s", "A", "-c", "y"])
        .assert()
        .success();

    let text = fs::read_to_string(root.join("cloudy.md")).unwrap();
    assert_eq!(text, "## A\r\nx\r\n\r\ny\r\n## B\r\n");
}

#[test]
fn test_init_then_init_again() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();

    dossier()
        .current_dir(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let path = root.join("cloudy.md");
    assert_eq!(fs::read_to_string(&path).unwrap(), BUILTIN_KNOWLEDGE_TEMPLATE);

    fs::write(&path, "## edited\n").unwrap();

    dossier()
        .current_dir(root)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "## edited\n");
}

#[test]
fn test_init_into_directory_then_patch() {
    let temp = temp_dir_in_workspace();
    let root = temp.path();
    fs::create_dir_all(root.join("kb")).unwrap();

    dossier()
        .current_dir(root)
        .args(["init", "kb"])
        .assert()
        .success();

    dossier()
        .current_dir(root)
        .args(["patch", "-s", "技术决策", "-c", "- 使用 Rust", "-f", "kb/cloudy.md"])
        .assert()
        .success();

    let text = fs::read_to_string(root.join("kb/cloudy.md")).unwrap();
    assert!(text.contains("## 2. 技术决策\n\n- 使用 Rust\n## 3. 常见问题"), "{}", text);
}

#[test]
fn test_init_missing_directory() {
    let temp = temp_dir_in_workspace();

    dossier()
        .current_dir(temp.path())
        .args(["init", "nowhere"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("MISSING_INPUT"));
}
