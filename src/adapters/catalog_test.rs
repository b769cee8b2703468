use super::catalog::ComponentCatalog;
use crate::domain::{LookupError, TypeKind};
use std::fs;
use tempfile::TempDir;

const CART_JSON: &str = r#"
{
    "componentId": "cart-1",
    "componentName": "shopping-cart",
    "version": 2,
    "exports": [
        {
            "name": "golem:cart/api",
            "functions": [
                {
                    "name": "add-item",
                    "parameters": [
                        { "name": "sku", "typ": { "type": "Str" } },
                        { "name": "qty", "typ": { "type": "U32" } }
                    ],
                    "results": []
                }
            ]
        }
    ]
}
"#;

const COUNTERS_YAML: &str = r#"
- componentId: counter-1
  exports:
    - name: counters/api
      functions:
        - name: increment
          parameters:
            - name: by
              typ:
                type: U64
          results:
            - name: value
              typ:
                type: U64
- componentId: counter-2
  exports: []
"#;

#[test]
fn test_load_json_single_component() {
    let mut catalog = ComponentCatalog::new();
    assert_eq!(catalog.load_json(CART_JSON).unwrap(), 1);

    let function = catalog
        .find_function("cart-1", "golem:cart/api", "add-item")
        .unwrap();
    assert_eq!(function.export_name.as_deref(), Some("golem:cart/api"));
    assert_eq!(function.parameters[0].typ.kind, TypeKind::Str);
}

#[test]
fn test_load_yaml_component_list() {
    let mut catalog = ComponentCatalog::new();
    assert_eq!(catalog.load_yaml(COUNTERS_YAML).unwrap(), 2);
    assert_eq!(catalog.len(), 2);

    let function = catalog
        .find_function("counter-1", "counters/api", "increment")
        .unwrap();
    assert_eq!(function.results[0].typ.kind, TypeKind::U64);
}

#[test]
fn test_component_not_found() {
    let catalog = ComponentCatalog::new();
    assert_eq!(
        catalog.find_function("nope", "api", "f"),
        Err(LookupError::ComponentNotFound("nope".to_string()))
    );
}

#[test]
fn test_insert_replaces_same_id() {
    let mut catalog = ComponentCatalog::new();
    catalog.load_json(CART_JSON).unwrap();
    catalog.load_json(CART_JSON).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_load_dir_skips_bad_files() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    fs::write(root.join("cart.json"), CART_JSON)?;
    fs::write(root.join("counters.yml"), COUNTERS_YAML)?;
    fs::write(root.join("broken.json"), "{ not json")?;
    fs::write(root.join("notes.txt"), "ignored")?;

    let mut catalog = ComponentCatalog::new();
    let loaded = catalog.load_dir(root.to_str().unwrap())?;

    assert_eq!(loaded, 3);
    let ids: Vec<&str> = catalog
        .components()
        .iter()
        .map(|c| c.component_id.as_str())
        .collect();
    assert_eq!(ids, vec!["cart-1", "counter-1", "counter-2"]);
    Ok(())
}

const BAD_DESCRIPTOR_JSON: &str = r#"
{
    "componentId": "bad-1",
    "exports": [
        {
            "name": "api",
            "functions": [
                {
                    "name": "f",
                    "parameters": [
                        { "name": "x", "typ": { "type": "Str", "fields": [] } }
                    ],
                    "results": []
                }
            ]
        }
    ]
}
"#;

#[test]
fn test_load_json_reports_descriptor_error() {
    let mut catalog = ComponentCatalog::new();
    let err = catalog.load_json(BAD_DESCRIPTOR_JSON).unwrap_err();
    assert!(
        err.to_string()
            .contains("'fields' is not allowed on a Str descriptor"),
        "{err}"
    );

    let list = format!("[{}]", BAD_DESCRIPTOR_JSON);
    let err = catalog.load_json(&list).unwrap_err();
    assert!(
        err.to_string()
            .contains("'fields' is not allowed on a Str descriptor"),
        "{err}"
    );
    assert!(catalog.is_empty());
}

#[test]
fn test_load_yaml_reports_missing_field() {
    let mut catalog = ComponentCatalog::new();
    let err = catalog
        .load_yaml("- componentId: c-1\n  exports:\n    - functions: []\n")
        .unwrap_err();
    assert!(err.to_string().contains("missing field `name`"), "{err}");
}
