#![cfg(unix)]

mod common;

use haplogrep_wrapper::haplogrep::Haplogrep3;
use haplogrep_wrapper::Error;

#[test]
fn lists_trees_without_header() {
    let _serial = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let tool = common::fake_tool(
        dir.path(),
        "[ \"$1\" = \"trees\" ] || exit 9\n\
         echo 'Available trees:'\n\
         echo ''\n\
         echo 'phylotree-fu-rcrs@1.2'\n\
         echo 'phylotree-rcrs@17.2'",
    );
    let wrapper = Haplogrep3::with_default_tree(&tool).unwrap();

    assert_eq!(
        wrapper.available_trees().unwrap(),
        vec!["phylotree-fu-rcrs@1.2", "phylotree-rcrs@17.2"]
    );
}

#[test]
fn failed_listing_carries_stderr() {
    let _serial = common::serial();
    let dir = tempfile::tempdir().unwrap();
    let tool = common::fake_tool(dir.path(), "echo 'no trees installed' >&2\nexit 1");
    let wrapper = Haplogrep3::with_default_tree(&tool).unwrap();

    match wrapper.available_trees() {
        Err(Error::TreeListing(stderr)) => assert_eq!(stderr, "no trees installed\n"),
        other => panic!("expected a tree listing error, got {:?}", other),
    }
}
