use qljson::{get, has, lookup, parse, Document, ParseContext, Value};

const CONFIG: &str = r#"{
    // service settings
    name: "api",
    server: {
        host: "localhost",
        port: 8080,
        tls: null,
        limits: { rps: 100, burst: 0 }
    },
    enabled: false,
    hosts: ["a.example", "b.example"],
    matrix: [[1, 2], [3, 4]],
    pool: [{ id: 1 }, { id: 2 }]
}"#;

fn doc() -> Document {
    Document::parse(CONFIG).expect("fixture must parse")
}

// ============================================================================
// get
// ============================================================================

#[test]
fn get_single_segment() {
    assert_eq!(doc().get("name"), &Value::from("api"));
}

#[test]
fn get_nested_path() {
    let doc = doc();
    assert_eq!(doc.get("server.port"), &Value::Integer(8080));
    assert_eq!(doc.get("server.limits.rps"), &Value::Integer(100));
}

#[test]
fn get_returns_container_values() {
    let doc = doc();
    let limits = doc.get("server.limits").as_object().unwrap();
    assert_eq!(limits.len(), 2);
}

#[test]
fn get_missing_key_is_null() {
    let doc = doc();
    assert_eq!(doc.get("missing"), &Value::Null);
    assert_eq!(doc.get("server.missing"), &Value::Null);
}

#[test]
fn get_through_missing_intermediate_is_null() {
    assert_eq!(doc().get("client.port"), &Value::Null);
    assert_eq!(doc().get("a.b.c.d"), &Value::Null);
}

#[test]
fn get_through_scalar_is_null() {
    let doc = doc();
    assert_eq!(doc.get("name.length"), &Value::Null);
    assert_eq!(doc.get("enabled.x"), &Value::Null);
}

#[test]
fn get_through_null_is_null() {
    assert_eq!(doc().get("server.tls.cert"), &Value::Null);
}

#[test]
fn get_falsy_leaf_values() {
    let doc = doc();
    assert_eq!(doc.get("enabled"), &Value::Bool(false));
    assert_eq!(doc.get("server.limits.burst"), &Value::Integer(0));
}

#[test]
fn get_array_index_segments() {
    let doc = doc();
    assert_eq!(doc.get("hosts.1"), &Value::from("b.example"));
    assert_eq!(doc.get("matrix.1.0"), &Value::Integer(3));
    assert_eq!(doc.get("pool.0.id"), &Value::Integer(1));
    assert_eq!(doc.get("hosts.2"), &Value::Null);
    assert_eq!(doc.get("hosts.first"), &Value::Null);
}

// ============================================================================
// has
// ============================================================================

#[test]
fn has_present_keys() {
    let doc = doc();
    assert!(doc.has("name"));
    assert!(doc.has("server.limits.rps"));
    assert!(doc.has("hosts.0"));
}

#[test]
fn has_absent_keys() {
    let doc = doc();
    assert!(!doc.has("missing"));
    assert!(!doc.has("server.missing"));
    assert!(!doc.has("client.port"));
    assert!(!doc.has("hosts.5"));
}

#[test]
fn has_distinguishes_null_from_absent() {
    let doc = doc();
    assert!(doc.has("server.tls"));
    assert_eq!(doc.get("server.tls"), &Value::Null);
    assert!(!doc.has("server.cert"));
    assert_eq!(doc.get("server.cert"), &Value::Null);
}

#[test]
fn has_top_level_null() {
    let doc = Document::parse("{a:null}").unwrap();
    assert!(doc.has("a"));
    assert_eq!(doc.get("a"), &Value::Null);
}

#[test]
fn has_does_not_descend_through_null() {
    assert!(!doc().has("server.tls.cert"));
}

#[test]
fn has_agrees_with_lookup() {
    let doc = doc();
    for path in [
        "name",
        "server.tls",
        "server.port",
        "server.limits.burst",
        "enabled",
        "missing",
        "server.tls.x",
        "matrix.0.1",
    ] {
        assert_eq!(doc.has(path), doc.lookup(path).is_some(), "path {path}");
    }
}

// ============================================================================
// Free functions and non-object roots
// ============================================================================

#[test]
fn free_functions_match_document() {
    let root = parse(CONFIG, &ParseContext::default()).unwrap();
    assert_eq!(get(&root, "server.host"), &Value::from("localhost"));
    assert!(has(&root, "server.host"));
    assert_eq!(lookup(&root, "nope"), None);
}

#[test]
fn scalar_root_resolves_nothing() {
    let root = Value::Integer(5);
    assert_eq!(get(&root, "a"), &Value::Null);
    assert!(!has(&root, "a"));
}

#[test]
fn degraded_root_resolves_nothing() {
    let doc = Document::parse("{a}").unwrap();
    assert_eq!(doc.root(), &Value::Null);
    assert!(!doc.has("a"));
}

#[test]
fn empty_path_looks_up_empty_key() {
    let doc = Document::parse(r#"{:"blank"}"#).unwrap();
    assert_eq!(doc.get(""), &Value::from("blank"));
}
