use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use smv::fs_ops::{resolve, resolve_from};
use smv::{OverwriteDecision, PreExisting, SmvError, decide};

fn touch(path: &Path, contents: &str) {
    fs::write(path, contents).expect("write file");
}

#[test]
fn absent_target_is_used_verbatim() {
    let td = tempdir().unwrap();
    let src = td.path().join("foo.txt");
    touch(&src, "x");
    let target = td.path().join("bar.txt");

    let r = resolve(&src, &target).unwrap();
    assert_eq!(r.destination, target);
    assert_eq!(r.existing, PreExisting::Absent);
    assert!(!r.into_directory);
    assert_eq!(decide(r.existing), OverwriteDecision::None);
}

#[test]
fn relative_target_is_made_absolute() {
    let td = tempdir().unwrap();
    let src = td.path().join("foo.txt");
    touch(&src, "x");

    let r = resolve_from(td.path(), Path::new("foo.txt"), Path::new("./renamed.txt")).unwrap();
    assert_eq!(r.source, src);
    assert_eq!(r.destination, td.path().join("renamed.txt"));
    assert!(r.destination.is_absolute());
}

#[test]
fn directory_target_gets_basename_with_one_separator() {
    let td = tempdir().unwrap();
    let src = td.path().join("foo.txt");
    touch(&src, "x");
    let sub = td.path().join("subdir");
    fs::create_dir(&sub).unwrap();

    let plain = resolve(&src, &sub).unwrap();
    let trailing = resolve(&src, &PathBuf::from(format!("{}/", sub.display()))).unwrap();

    for r in [&plain, &trailing] {
        assert_eq!(r.destination, sub.join("foo.txt"));
        assert!(r.into_directory);
        assert_eq!(r.existing, PreExisting::Absent);
        assert!(!r.destination.to_string_lossy().contains("//"));
    }
}

#[test]
fn parent_directory_target() {
    let td = tempdir().unwrap();
    let sub = td.path().join("sub");
    fs::create_dir(&sub).unwrap();
    touch(&sub.join("foo.txt"), "x");

    let r = resolve_from(&sub, Path::new("foo.txt"), Path::new("..")).unwrap();
    assert_eq!(r.destination, td.path().join("foo.txt"));
}

#[test]
fn existing_file_target_requires_confirmation() {
    let td = tempdir().unwrap();
    let src = td.path().join("foo.txt");
    let target = td.path().join("bar.txt");
    touch(&src, "new");
    touch(&target, "old");

    let r = resolve(&src, &target).unwrap();
    assert_eq!(r.destination, target);
    assert_eq!(r.existing, PreExisting::ExistingFile);
    assert_eq!(decide(r.existing), OverwriteDecision::ConfirmRequired);
    // resolution never mutates
    assert_eq!(fs::read_to_string(&target).unwrap(), "old");
    assert!(src.exists());
}

#[test]
fn collision_inside_directory_requires_confirmation() {
    let td = tempdir().unwrap();
    let src = td.path().join("foo.txt");
    touch(&src, "new");
    let sub = td.path().join("subdir");
    fs::create_dir(&sub).unwrap();
    touch(&sub.join("foo.txt"), "old");

    let r = resolve(&src, &sub).unwrap();
    assert_eq!(r.existing, PreExisting::ExistingFile);
    assert_eq!(decide(r.existing), OverwriteDecision::ConfirmRequired);
}

#[test]
fn same_named_subdirectory_is_blocked() {
    let td = tempdir().unwrap();
    let src = td.path().join("data");
    touch(&src, "x");
    let sub = td.path().join("dest");
    fs::create_dir_all(sub.join("data")).unwrap();

    let r = resolve(&src, &sub).unwrap();
    assert_eq!(r.existing, PreExisting::ExistingDirectory);
    assert_eq!(decide(r.existing), OverwriteDecision::Blocked);
}

#[test]
fn directory_source_is_a_precondition_error() {
    let td = tempdir().unwrap();
    let d = td.path().join("folder");
    fs::create_dir(&d).unwrap();

    let err = resolve(&d, &td.path().join("elsewhere")).unwrap_err();
    assert!(matches!(err, SmvError::SourceIsDirectory(_)), "got {err:?}");
    assert!(err.is_precondition());
}

#[test]
fn missing_source_is_a_precondition_error() {
    let td = tempdir().unwrap();
    let err = resolve(&td.path().join("ghost"), &td.path().join("x")).unwrap_err();
    assert!(matches!(err, SmvError::SourceNotFound(_)), "got {err:?}");
    assert_eq!(err.code(), 3);
}
