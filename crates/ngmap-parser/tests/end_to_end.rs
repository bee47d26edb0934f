//! Disk-backed extraction through `FsLoader`.

use std::fs;
use std::path::Path;

use ngmap_core::{ComponentInfo, DiagnosticKind, FlattenNode};
use ngmap_parser::{ExtractOptions, FsLoader, SourceTree, extract_components, extract_routes};
use pretty_assertions::assert_eq;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
    fs::write(path, contents).expect("write fixture");
}

#[test]
fn imported_template_is_read_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "src/import.js",
        include_str!("fixtures/components/import.js"),
    );
    write(dir.path(), "src/import.html", "<div>X</div>");

    let tree = SourceTree::read(dir.path().join("src/import.js")).expect("source readable");
    let extraction = extract_components(&tree, &FsLoader, &ExtractOptions::default());

    assert_eq!(
        extraction.records,
        vec![ComponentInfo {
            name: "import".to_string(),
            child_elements: vec![FlattenNode::new("div", None)],
        }]
    );
    assert!(extraction.diagnostics.is_empty());
}

#[test]
fn templates_resolve_against_the_declaring_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "app/feature/widget.js",
        "import tpl from '../shared/widget.html';\n\
         angular.module('app').component('widget', { template: tpl });",
    );
    write(
        dir.path(),
        "app/shared/widget.html",
        "<article class=\"widget\"><header></header></article>",
    );

    let tree = SourceTree::read(dir.path().join("app/feature/widget.js")).expect("readable");
    let extraction = extract_components(&tree, &FsLoader, &ExtractOptions::default());

    assert_eq!(
        extraction.records[0].child_elements,
        vec![
            FlattenNode::new("article", Some("widget")),
            FlattenNode::new("header", None),
        ]
    );
}

#[test]
fn missing_template_on_disk_is_a_diagnostic() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(
        dir.path(),
        "routes.js",
        "import gone from './gone.html';\n\
         function routes($stateProvider) {\n\
           $stateProvider.state('home', { url: '/', template: gone });\n\
           $stateProvider.state('about', { url: '/about', template: '<p></p>' });\n\
         }",
    );

    let tree = SourceTree::read(dir.path().join("routes.js")).expect("readable");
    let extraction = extract_routes(&tree, &FsLoader, &ExtractOptions::default());

    assert_eq!(extraction.records.len(), 2);
    assert!(extraction.records[0].child_elements.is_empty());
    assert_eq!(
        extraction.records[1].child_elements,
        vec![FlattenNode::new("p", None)]
    );
    assert_eq!(extraction.count(DiagnosticKind::MissingTemplate), 1);
}
