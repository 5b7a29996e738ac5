//! Tests for the fixed member directory adapter and its configuration.

use crate::roster::adapters::{DirectoryConfigError, StaticDirectory};
use crate::roster::domain::{Member, MemberName, RosterDomainError};
use crate::roster::ports::MemberDirectory;
use rstest::{fixture, rstest};

fn member(name: &str, email: &str) -> Member {
    Member::from_parts(name, email).expect("valid member")
}

#[fixture]
fn directory() -> StaticDirectory {
    let supervisor = MemberName::new("Howaidi Alsunqur").expect("valid name");
    StaticDirectory::new([
        member("Adel Alharby", "adel@example.com"),
        member("Buraida Almutairi", "buraida@example.com"),
        member("Howaidi Alsunqur", "howaidi@example.com"),
    ])
    .with_supervisor(supervisor)
}

#[rstest]
fn lookup_resolves_known_member(directory: StaticDirectory) {
    let name = MemberName::new("Buraida Almutairi").expect("valid name");
    let found = directory.lookup(&name);
    assert_eq!(found, Some(member("Buraida Almutairi", "buraida@example.com")));
}

#[rstest]
fn lookup_misses_unknown_member(directory: StaticDirectory) {
    let name = MemberName::new("Nobody").expect("valid name");
    assert_eq!(directory.lookup(&name), None);
}

#[rstest]
fn find_by_email_matches_case_insensitively(directory: StaticDirectory) {
    let found = directory.find_by_email("  ADEL@Example.Com ");
    assert_eq!(found, Some(member("Adel Alharby", "adel@example.com")));
}

#[rstest]
fn find_by_email_misses_unregistered_address(directory: StaticDirectory) {
    assert_eq!(directory.find_by_email("stranger@example.com"), None);
}

#[rstest]
fn supervisor_resolves_to_roster_member(directory: StaticDirectory) {
    let supervisor = directory.supervisor();
    assert_eq!(
        supervisor,
        Some(member("Howaidi Alsunqur", "howaidi@example.com"))
    );
}

#[rstest]
fn supervisor_absent_when_not_designated() {
    let directory = StaticDirectory::new([member("Adel Alharby", "adel@example.com")]);
    assert_eq!(directory.supervisor(), None);
}

#[rstest]
fn members_preserves_roster_order(directory: StaticDirectory) {
    let names: Vec<String> = directory
        .members()
        .iter()
        .map(|entry| entry.name().as_str().to_owned())
        .collect();
    assert_eq!(
        names,
        vec!["Adel Alharby", "Buraida Almutairi", "Howaidi Alsunqur"]
    );
}

#[rstest]
fn from_json_str_loads_members_and_supervisor() {
    let document = r#"{
        "members": [
            { "name": "Adel Alharby", "email": "Adel@Example.com" },
            { "name": "Muna Al Otaibi", "email": "muna@example.com" }
        ],
        "supervisor": "Muna Al Otaibi"
    }"#;

    let directory = StaticDirectory::from_json_str(document).expect("valid document");

    assert_eq!(directory.members().len(), 2);
    assert_eq!(
        directory.supervisor(),
        Some(member("Muna Al Otaibi", "muna@example.com"))
    );
    // Addresses are normalised on load.
    assert_eq!(
        directory.find_by_email("adel@example.com"),
        Some(member("Adel Alharby", "adel@example.com"))
    );
}

#[rstest]
fn from_json_str_rejects_invalid_member_entry() {
    let document = r#"{
        "members": [ { "name": "Adel Alharby", "email": "not-an-address" } ]
    }"#;

    let result = StaticDirectory::from_json_str(document);

    assert!(matches!(
        result,
        Err(DirectoryConfigError::Domain(
            RosterDomainError::InvalidEmailAddress(_)
        ))
    ));
}

#[rstest]
fn from_json_str_rejects_unknown_supervisor() {
    let document = r#"{
        "members": [ { "name": "Adel Alharby", "email": "adel@example.com" } ],
        "supervisor": "Nobody"
    }"#;

    let result = StaticDirectory::from_json_str(document);

    assert!(matches!(
        result,
        Err(DirectoryConfigError::UnknownSupervisor(name)) if name == "Nobody"
    ));
}

#[rstest]
fn from_json_str_rejects_malformed_document() {
    let result = StaticDirectory::from_json_str("{ not json");
    assert!(matches!(result, Err(DirectoryConfigError::Malformed(_))));
}
