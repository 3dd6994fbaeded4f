use olm_images_core::{Error, read_go_version};
use proptest::prelude::*;
use tempfile::TempDir;

#[test]
fn reads_version_and_strips_trailing_newline() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".go-version");
    std::fs::write(&path, "1.22.0\n").unwrap();

    assert_eq!(read_go_version(&path).unwrap(), "1.22.0");
}

#[test]
fn strips_surrounding_whitespace() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".go-version");
    std::fs::write(&path, "  \t1.23.4\r\n\n").unwrap();

    assert_eq!(read_go_version(&path).unwrap(), "1.23.4");
}

#[test]
fn missing_file_is_version_read_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".go-version");

    let err = read_go_version(&path).unwrap_err();
    assert!(matches!(err, Error::VersionRead { .. }));
    assert!(err.to_string().contains(".go-version"));
}

#[test]
fn whitespace_only_file_is_empty_version_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(".go-version");
    std::fs::write(&path, " \n\n").unwrap();

    assert!(matches!(
        read_go_version(&path),
        Err(Error::EmptyVersion { .. })
    ));
}

proptest! {
    #[test]
    fn padding_never_reaches_the_version(
        version in "[0-9]{1,2}\\.[0-9]{1,2}(\\.[0-9]{1,2})?",
        leading in "[ \t\n]{0,4}",
        trailing in "[ \t\r\n]{0,4}",
    ) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".go-version");
        std::fs::write(&path, format!("{leading}{version}{trailing}")).unwrap();

        prop_assert_eq!(read_go_version(&path).unwrap(), version);
    }
}
