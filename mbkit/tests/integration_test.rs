use mbkit::prelude::*;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn mbch_files(root: &Path) -> Vec<std::path::PathBuf> {
    find_files(root, &FileFilter::extensions(&[MBCH_EXTENSION])).unwrap()
}

#[test]
fn test_rename_tree_fixes_references_and_is_idempotent() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(&root.join("chars/knight.mbch"), "ClassInfo\n{\n\tname\tknight\n}\n");
    write(&root.join("chars/test_archer.mbch"), "ClassInfo\n{\n\tname\ttest_archer\n}\n");
    write(
        &root.join("teams/red.mbtc"),
        "Team red\n{\n\tslot\tknight\n\tslot\tarcher\n\tslot\tknight_old\n}\n",
    );

    let first = rename_tree(root, "test_", |_| {}).unwrap();
    assert_eq!(first.mbch.found, 2);
    assert_eq!(first.mbch.renamed, 1);
    assert_eq!(first.mbtc.renamed, 1);
    assert_eq!(first.map.get("knight").map(String::as_str), Some("test_knight"));
    assert_eq!(first.map.get("archer").map(String::as_str), Some("test_archer"));

    assert!(!root.join("chars/knight.mbch").exists());
    assert_eq!(
        read(&root.join("chars/test_knight.mbch")),
        "ClassInfo\n{\n\tname\ttest_knight\n}\n"
    );
    assert_eq!(
        read(&root.join("teams/test_red.mbtc")),
        "Team test_red\n{\n\tslot\ttest_knight\n\tslot\ttest_archer\n\tslot\tknight_old\n}\n"
    );

    let snapshot: Vec<_> = find_files(root, &FileFilter::any_extension())
        .unwrap()
        .into_iter()
        .map(|p| (p.clone(), read(&p)))
        .collect();

    let second = rename_tree(root, "test_", |_| {}).unwrap();
    assert_eq!(second.mbch.renamed + second.mbtc.renamed, 0);
    let after: Vec<_> = find_files(root, &FileFilter::any_extension())
        .unwrap()
        .into_iter()
        .map(|p| (p.clone(), read(&p)))
        .collect();
    assert_eq!(snapshot, after);
}

#[test]
fn test_rename_missing_root_is_an_error() {
    let dir = tempdir().unwrap();
    let err = rename_tree(&dir.path().join("nope"), "test_", |_| {}).unwrap_err();
    assert!(matches!(err, Error::PathNotFound { .. }));
}

#[test]
fn test_inject_build_batch_twice() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("knight.mbch");
    write(&file, "ClassInfo\n{\n\tname\t\"Knight\"\n}\n");

    let files = mbch_files(dir.path());
    let first = run_batch(&files, |_| {}, |_, content| inject_custom_build(content));
    let second = run_batch(&files, |_| {}, |_, content| inject_custom_build(content));

    assert_eq!(first.changed_count, 1);
    assert_eq!(second.changed_count, 0);
    assert_eq!(read(&file).matches("isCustomBuild").count(), 1);
}

#[test]
fn test_renumber_with_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.ini");
    write(&config, "[SETTINGS]\nblock_size_before_jump = 2\ngap_size = 5\n");
    let file = dir.path().join("knight.mbch");
    let triplet = |n: usize| format!("c_att_skill_{n}\tA\nc_att_names_{n}\t\"a\"\nc_att_ranks_{n}\t1\n");
    write(&file, &format!("{}{}{}", triplet(9), triplet(9), triplet(9)));

    let settings = RenumberSettings::from(Settings::load_or_create(&config));
    let result = run_batch(&mbch_files(dir.path()), |_| {}, |_, content| {
        renumber_triplets(content, settings)
    });

    assert_eq!(result.changed_count, 1);
    assert_eq!(
        read(&file),
        format!("{}{}{}", triplet(0), triplet(1), triplet(7))
    );
}

#[test]
fn test_cleanup_pipeline_on_one_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("knight.mbch");
    write(
        &file,
        "ClassInfo\n{\n    name\t\"Knight\"   \n\n\n    description \"old\ntext\"\n    c_att_skill_3\tMB_ATT_INVALID\n    c_att_names_3\t\"\"\n    c_att_ranks_3\t-1\n}\n",
    );
    let files = mbch_files(dir.path());

    run_batch(&files, |_| {}, |_, content| {
        normalize_whitespace(content, WhitespaceOptions::default())
    });
    run_batch(&files, |_| {}, |_, content| remove_invalid_triplets(content));
    run_batch(&files, |_| {}, |_, content| reset_descriptions(content));
    run_batch(&files, |_| {}, |_, content| {
        upsert_class_property(content, "respawnCustomTime", "10000")
    });

    assert_eq!(
        read(&file),
        "ClassInfo\n{\n\tname\t\"Knight\"\n\n\tdescription \"\"\nrespawnCustomTime\t10000\n}\n"
    );
}

#[test]
fn test_walker_honours_ignore_list() {
    let dir = tempdir().unwrap();
    write(&dir.path().join("a.mbch"), "a");
    write(&dir.path().join("sub/skip.mbch"), "b");
    let ignore_path = dir.path().join("ignore.json");
    write(&ignore_path, r#"["skip.mbch"]"#);

    let ignore = IgnoreList::load_or_create(&ignore_path).unwrap();
    let files = find_files(
        dir.path(),
        &FileFilter::extensions(&[MBCH_EXTENSION]).with_ignore_list(&ignore),
    )
    .unwrap();
    assert_eq!(files, vec![dir.path().join("a.mbch")]);
}
