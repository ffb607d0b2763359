use std::path::PathBuf;

use super::source::{LoadError, SourceInput};

#[test]
fn inline_text_wins() {
    let input = SourceInput::new(None, Some("hi: x".to_string()));
    assert_eq!(input.load().unwrap(), "hi: x");
    assert_eq!(input.label(), "<inline>");
    assert!(input.file_path().is_none());
}

#[test]
fn missing_source() {
    let input = SourceInput::new(None, None);
    let err = input.load().unwrap_err();
    assert!(matches!(err, LoadError::Missing));
}

#[test]
fn stdin_is_not_a_file() {
    let input = SourceInput::new(Some(PathBuf::from("-")), None);
    assert_eq!(input.label(), "<stdin>");
    assert!(input.file_path().is_none());
}

#[test]
fn unreadable_file() {
    let input = SourceInput::new(Some(PathBuf::from("does/not/exist.talon")), None);
    assert_eq!(input.label(), "does/not/exist.talon");
    let err = input.load().unwrap_err();
    insta::assert_snapshot!(
        err.to_string().split(':').next().unwrap_or_default(),
        @"failed to read 'does/not/exist.talon'"
    );
}
