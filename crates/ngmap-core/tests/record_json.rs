//! JSON shape of the emitted records.
//!
//! Field names and nesting are part of the output contract, so these tests pin
//! the serialized form rather than round-tripping every type.

use ngmap_core::{ComponentInfo, FlattenNode, RouteInfo, TemplateSpec};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn component_info_uses_camel_case() {
    let info = ComponentInfo {
        name: "import".to_string(),
        child_elements: vec![FlattenNode::new("div", None)],
    };
    let value = serde_json::to_value(&info).expect("serialize");
    assert_eq!(
        value,
        json!({
            "name": "import",
            "childElements": [{ "tagName": "div", "className": "undefined" }]
        })
    );
}

#[test]
fn route_info_carries_url() {
    let info = RouteInfo {
        name: "home".to_string(),
        url: "/home".to_string(),
        child_elements: vec![FlattenNode::new("main", Some("page"))],
    };
    let value = serde_json::to_value(&info).expect("serialize");
    assert_eq!(value["url"], "/home");
    assert_eq!(value["childElements"][0]["className"], "\"page\"");
}

#[test]
fn template_spec_is_adjacently_tagged() {
    let value = serde_json::to_value(TemplateSpec::FileRef("./a.html".to_string()))
        .expect("serialize");
    assert_eq!(value, json!({ "kind": "FileRef", "content": "./a.html" }));

    let parsed: TemplateSpec =
        serde_json::from_value(json!({ "kind": "InlineString", "content": "<p></p>" }))
            .expect("deserialize");
    assert_eq!(parsed, TemplateSpec::InlineString("<p></p>".to_string()));
}
