use super::common::*;
use crate::workflows::appointments::InvalidZipCode;

#[test]
fn drives_are_listed_closest_first() {
    let drives = catalog().search("70112").expect("valid zip");

    let names: Vec<&str> = drives.iter().map(|drive| drive.name.as_str()).collect();
    assert_eq!(names, vec!["Town Hall", "Stadium", "Library"]);
}

#[test]
fn zip_plus_four_is_accepted() {
    assert_eq!(catalog().search(" 70112-1234 ").map(|drives| drives.len()), Ok(3));
}

#[test]
fn malformed_zip_codes_are_rejected() {
    for zip in ["", "   ", "7011", "ABCDE", "70112 1234"] {
        assert_eq!(
            catalog().search(zip),
            Err(InvalidZipCode(zip.to_string())),
            "zip {zip:?}"
        );
    }
}
