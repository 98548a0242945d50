//! Unit tests for the packages context.

use rstest::rstest;

use crate::packages::domain::PackageAccess;

#[rstest]
fn fresh_access_record_is_unassigned() {
    let access = PackageAccess::new("orphaned");

    assert_eq!(access.package(), "orphaned");
    assert!(access.is_unassigned());
}

#[rstest]
#[case(PackageAccess::new("p").with_owners(["a"]))]
#[case(PackageAccess::new("p").with_admins(["a"]))]
#[case(PackageAccess::new("p").with_committers(["a"]))]
fn any_listed_user_assigns_the_package(#[case] access: PackageAccess) {
    assert!(!access.is_unassigned());
}
