use std::fs;
use tempfile::tempdir;

use smv::fs_ops::{DryRunMutator, MoveSession, Outcome, RenameMutator};
use smv::{ScriptedAsker, SmvError};

#[test]
fn rename_to_new_name() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("foo.txt");
    let dst = td.path().join("bar.txt");
    fs::write(&src, "content")?;

    let mut asker = ScriptedAsker::default();
    let mut mutator = RenameMutator;
    let outcome = MoveSession::new(&mut asker, &mut mutator).move_one(&src, &dst)?;

    assert!(matches!(outcome, Outcome::Moved));
    assert!(!src.exists(), "source should be gone");
    assert_eq!(fs::read_to_string(&dst)?, "content");
    assert!(asker.questions.is_empty(), "no prompt without a collision");
    Ok(())
}

#[test]
fn move_into_directory_and_rename_inside_it() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let sub = td.path().join("subdir");
    fs::create_dir(&sub)?;
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, "a")?;
    fs::write(&b, "b")?;

    let mut asker = ScriptedAsker::default();
    let mut mutator = RenameMutator;
    let mut session = MoveSession::new(&mut asker, &mut mutator);
    session.move_one(&a, &sub)?;
    session.move_one(&b, &sub.join("renamed.txt"))?;

    assert_eq!(fs::read_to_string(sub.join("a.txt"))?, "a");
    assert_eq!(fs::read_to_string(sub.join("renamed.txt"))?, "b");
    Ok(())
}

#[test]
fn declined_overwrite_leaves_both_files() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("new.txt");
    let dst = td.path().join("old.txt");
    fs::write(&src, "new")?;
    fs::write(&dst, "old")?;

    let mut asker = ScriptedAsker::new([false]);
    let mut mutator = RenameMutator;
    let outcome = MoveSession::new(&mut asker, &mut mutator).move_one(&src, &dst)?;

    assert!(matches!(outcome, Outcome::Aborted));
    assert_eq!(asker.questions.len(), 1);
    assert_eq!(fs::read_to_string(&src)?, "new");
    assert_eq!(fs::read_to_string(&dst)?, "old");
    Ok(())
}

#[test]
fn confirmed_overwrite_replaces_destination() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("new.txt");
    let sub = td.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(&src, "new")?;
    fs::write(sub.join("new.txt"), "old")?;

    let mut asker = ScriptedAsker::new([true]);
    let mut mutator = RenameMutator;
    let outcome = MoveSession::new(&mut asker, &mut mutator).move_one(&src, &sub)?;

    assert!(matches!(outcome, Outcome::Moved));
    assert!(!src.exists());
    assert_eq!(fs::read_to_string(sub.join("new.txt"))?, "new");
    Ok(())
}

#[test]
fn directory_source_never_prompts() {
    let td = tempdir().unwrap();
    let d = td.path().join("folder");
    fs::create_dir(&d).unwrap();
    fs::write(td.path().join("existing"), "x").unwrap();

    let mut asker = ScriptedAsker::new([true]);
    let mut mutator = DryRunMutator::default();
    let err = MoveSession::new(&mut asker, &mut mutator)
        .move_one(&d, &td.path().join("existing"))
        .unwrap_err();

    assert!(matches!(err, SmvError::SourceIsDirectory(_)));
    assert!(asker.questions.is_empty());
    assert!(mutator.planned.is_empty());
}

#[test]
fn dry_run_reports_but_keeps_files() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("foo.txt");
    fs::write(&src, "x")?;

    let mut asker = ScriptedAsker::default();
    let mut mutator = DryRunMutator::default();
    let outcome = MoveSession::new(&mut asker, &mut mutator)
        .dry_run(true)
        .move_one(&src, &td.path().join("bar.txt"))?;

    assert!(matches!(outcome, Outcome::Moved));
    assert!(src.exists());
    assert!(!td.path().join("bar.txt").exists());
    assert_eq!(mutator.planned, vec![(src.clone(), td.path().join("bar.txt"))]);
    Ok(())
}

#[test]
fn moving_into_its_own_directory_is_a_no_op() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("a.txt");
    fs::write(&src, "a")?;

    let mut asker = ScriptedAsker::new([true]);
    let mut mutator = DryRunMutator::default();
    let outcome = MoveSession::new(&mut asker, &mut mutator).move_one(&src, td.path())?;

    assert!(matches!(outcome, Outcome::Unchanged));
    assert!(asker.questions.is_empty(), "no prompt to overwrite a file with itself");
    assert!(mutator.planned.is_empty());
    assert_eq!(fs::read_to_string(&src)?, "a");
    Ok(())
}
