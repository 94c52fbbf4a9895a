//! Integration tests for sections and the interchange format.

use uigen_core::{Attr, AttrType, Model, ModelSection, Section, SectionItem, View};

fn message_model() -> Model {
    let mut model = Model::new("Message");
    model.push_attr(Attr::new("phone", AttrType::String));
    model.push_attr(Attr::new("text", AttrType::String));
    model.push_attr(Attr::new("planed_at", AttrType::DateTime));
    model.push_attr(Attr::new("user", AttrType::String).optional(true));
    model.push_attr(Attr::new("external_id", AttrType::String).optional(true));
    model
}

#[test]
fn test_section_title_is_title_cased_name() {
    let section = Section::new("invoice_list", None);
    assert_eq!(section.title, "Invoice_List");
}

#[test]
fn test_model_json_preserves_order_and_flags() {
    let model = message_model();
    let json = serde_json::to_string(&model).unwrap();
    let back: Model = serde_json::from_str(&json).unwrap();

    assert_eq!(back, model);
    let names: Vec<_> = back.attr_names().collect();
    assert_eq!(names, vec!["phone", "text", "planed_at", "user", "external_id"]);
    assert!(back.attr("user").unwrap().optional);
    assert!(!back.attr("phone").unwrap().optional);
}

#[test]
fn test_section_items_roundtrip_untagged() {
    let items: Vec<SectionItem> = vec![
        Section::new("dashboard", Some("Overview")).into(),
        ModelSection::new(message_model(), Some("outbox"), None)
            .with_views(View::crud())
            .into(),
    ];

    let json = serde_json::to_string(&items).unwrap();
    let back: Vec<SectionItem> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, items);
    assert!(back[0].model().is_none());
    assert_eq!(back[1].section().views.len(), 5);
}

#[test]
fn test_model_section_deref() {
    let section = ModelSection::new(message_model(), None, Some("Messages"));
    assert_eq!(section.name, "Message");
    assert_eq!(section.title, "Messages");
    assert!(!section.has_view(View::ListModels));
}
