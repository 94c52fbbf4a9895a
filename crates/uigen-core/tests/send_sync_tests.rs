//! Tests to verify that all public types are Send + Sync as required.

use uigen_core::*;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_schema_types_are_send_sync() {
    assert_send_sync::<Model>();
    assert_send_sync::<Attr>();
    assert_send_sync::<AttrType>();
    assert_send_sync::<Constraint>();
    assert_send_sync::<ModelForm>();
}

#[test]
fn test_section_types_are_send_sync() {
    assert_send_sync::<Section>();
    assert_send_sync::<ModelSection>();
    assert_send_sync::<SectionItem>();
    assert_send_sync::<View>();
}

#[test]
fn test_config_and_error_are_send_sync() {
    assert_send_sync::<GeneratorConfig>();
    assert_send_sync::<Error>();
}
