//! Integration tests for goreflect-go extractor

use goreflect_api::{export, DeclKind, DiagnosticKind, DuplicatePolicy, SourceExtractor};
use goreflect_go::{Extraction, ExtractorConfig, GoExtractor, ParserError};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn extract(source: &str) -> Extraction {
    GoExtractor::new()
        .extract_source(source, Path::new("main.go"))
        .unwrap()
}

fn extract_with(source: &str, config: ExtractorConfig) -> Extraction {
    GoExtractor::with_config(config)
        .extract_source(source, Path::new("main.go"))
        .unwrap()
}

#[test]
fn test_parse_package() {
    let extraction = GoExtractor::new()
        .extract_file(&fixture("parse_me.go"))
        .unwrap();

    assert_eq!(extraction.document.package_name, "parseme");
    assert_eq!(extraction.document.package_docs, "parseme package\ndouble line\n");
    assert!(extraction.is_clean());
}

#[test]
fn test_package_without_docs() {
    let extraction = extract("package demo\n");

    assert_eq!(extraction.document.package_name, "demo");
    assert_eq!(extraction.document.package_docs, "");
}

#[test]
fn test_two_line_package_docs() {
    let extraction = extract("// line1\n// line2\npackage demo\n");

    assert_eq!(extraction.document.package_docs, "line1\nline2\n");
}

#[test]
fn test_parse_types() {
    let doc = GoExtractor::new()
        .extract_file(&fixture("parse_me.go"))
        .unwrap()
        .document;

    assert_eq!(doc.types.len(), 2);

    let fuz = doc.type_decl("Fuz").unwrap();
    assert_eq!(fuz.name, "Fuz");
    assert_eq!(fuz.body, "type Fuz int");
    assert_eq!(fuz.docs, "Fuz is a plain integer type.\n");

    let buz = doc.type_decl("Buz").unwrap();
    assert_eq!(buz.body, "type Buz struct {\n\tmer string\n}");
    assert_eq!(buz.docs, "Buz carries a message.\n");
}

#[test]
fn test_parse_top_level_funcs() {
    let doc = GoExtractor::new()
        .extract_file(&fixture("parse_me.go"))
        .unwrap()
        .document;

    assert_eq!(doc.top_level_funcs.len(), 3);

    let expected = [
        ("foo", "testing some\ncomments\n", "func foo() {\n\tprintln(\"bar\")\n}"),
        ("bar", "calls foo\n", "func bar() {\n\tfoo()\n}"),
        ("baz", "prints what is passed in.\n", "func baz(str string) {\n\tprintln(str)\n}"),
    ];

    for (name, docs, body) in expected {
        let func = doc.function(name).unwrap();
        assert_eq!(func.doc, docs, "doc of {}", name);
        assert_eq!(func.body, body, "body of {}", name);
    }
}

#[test]
fn test_parsing_recv_funcs() {
    let doc = GoExtractor::new()
        .extract_file(&fixture("parse_me.go"))
        .unwrap()
        .document;

    let meth = doc.method("Buz", "meth").unwrap();
    assert_eq!(meth.doc, "recv comments\n");
    assert_eq!(meth.body, "func (b *Buz) meth() {\n\tprintln(b.mer)\n}");

    // Value receivers associate the same way as pointer receivers
    let upper = doc.method("Buz", "Upper").unwrap();
    assert_eq!(upper.doc, "Upper shouts the message.\n");
    assert!(upper.body.starts_with("func (b Buz) Upper() string {"));

    assert!(doc.method("Fuz", "Double").is_some());
    assert_eq!(doc.method_count(), 3);

    // Methods never leak into the top-level functions
    assert!(doc.function("meth").is_none());
}

#[test]
fn test_method_declared_before_its_type() {
    let extraction = GoExtractor::new()
        .extract_file(&fixture("late_receiver.go"))
        .unwrap();

    assert!(extraction.is_clean());
    let meth = extraction.document.method("Buz", "meth").unwrap();
    assert_eq!(meth.doc, "recv comments\n");
    assert_eq!(meth.body, "func (b *Buz) meth() {\n\tprintln(b.mer)\n}");
    assert_eq!(
        extraction.document.type_decl("Buz").unwrap().docs,
        "Buz is declared after its method.\n"
    );
}

#[test]
fn test_unresolved_receiver_is_reported_not_fatal() {
    let source = r#"package demo

func (g *Ghost) Haunt() {}

func keep() {}
"#;

    let extraction = extract(source);

    assert_eq!(extraction.diagnostics.len(), 1);
    let diag = &extraction.diagnostics[0];
    assert_eq!(diag.name, "Ghost.Haunt");
    assert_eq!(diag.decl_kind, DeclKind::Method);
    assert_eq!(diag.line, 3);
    assert_eq!(
        diag.kind,
        DiagnosticKind::UnresolvedReceiver {
            receiver: "Ghost".to_string()
        }
    );

    assert!(extraction.document.types.is_empty());
    assert!(extraction.document.function("keep").is_some());
}

#[test]
fn test_generic_receiver_associates_with_base_type() {
    let source = r#"package demo

type List[T any] struct {
    items []T
}

func (l *List[T]) Push(v T) {
    l.items = append(l.items, v)
}
"#;

    let extraction = extract(source);

    assert!(extraction.is_clean());
    let list = extraction.document.type_decl("List").unwrap();
    assert_eq!(list.body, "type List[T any] struct {\n    items []T\n}");
    assert!(list.method("Push").is_some());
}

#[test]
fn test_type_alias() {
    let extraction = extract("package demo\n\ntype Name = string\n");

    assert_eq!(
        extraction.document.type_decl("Name").unwrap().body,
        "type Name = string"
    );
}

#[test]
fn test_grouped_type_docs() {
    let source = r#"package demo

// Shared docs for the group.
type (
    // A has its own docs.
    A int
    B string
)
"#;

    let doc = extract(source).document;

    assert_eq!(doc.type_decl("A").unwrap().docs, "A has its own docs.\n");
    assert_eq!(doc.type_decl("A").unwrap().body, "type A int");
    assert_eq!(doc.type_decl("B").unwrap().docs, "Shared docs for the group.\n");
    assert_eq!(doc.type_decl("B").unwrap().body, "type B string");
}

#[test]
fn test_detached_comment_is_not_a_doc() {
    let source = r#"package demo

// Just a note.

func lonely() {}
"#;

    let doc = extract(source).document;
    assert_eq!(doc.function("lonely").unwrap().doc, "");
}

#[test]
fn test_function_without_body() {
    let source = "package demo\n\n// implemented in assembly\nfunc add(x, y int) int\n";

    let func = extract(source).document.function("add").cloned().unwrap();
    assert_eq!(func.body, "func add(x, y int) int");
    assert_eq!(func.doc, "implemented in assembly\n");
}

#[test]
fn test_blank_identifier_declarations_are_skipped() {
    let source = "package demo\n\ntype _ int\n\nfunc _() {}\n";

    let extraction = extract(source);
    assert!(extraction.is_clean());
    assert_eq!(extraction.document.declaration_count(), 0);
}

#[test]
fn test_nested_types_ignored_by_default() {
    let source = r#"package demo

func one() {
    type local int
    _ = local(1)
}
"#;

    let extraction = extract(source);
    assert!(extraction.document.types.is_empty());
    assert_eq!(extraction.document.top_level_funcs.len(), 1);
}

const NESTED_COLLISION: &str = r#"package demo

func one() {
    type local int
    _ = local(1)
}

func two() {
    type local string
    _ = local("x")
}
"#;

#[test]
fn test_nested_capture_rejects_collisions() {
    let extraction = extract_with(NESTED_COLLISION, ExtractorConfig::default().with_nested(true));

    assert_eq!(
        extraction.document.type_decl("local").unwrap().body,
        "type local int"
    );
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(
        extraction.diagnostics[0].kind,
        DiagnosticKind::DuplicateDeclaration { first_line: 4 }
    );
    assert_eq!(extraction.diagnostics[0].line, 9);
}

#[test]
fn test_nested_capture_last_wins() {
    let config = ExtractorConfig::default()
        .with_nested(true)
        .with_duplicate_policy(DuplicatePolicy::LastWins);
    let extraction = extract_with(NESTED_COLLISION, config);

    assert_eq!(
        extraction.document.type_decl("local").unwrap().body,
        "type local string"
    );
    assert_eq!(extraction.diagnostics.len(), 1);
}

#[test]
fn test_duplicate_functions_rejected() {
    let source = r#"package demo

// first
func dup() {}

// second
func dup() { println() }
"#;

    let extraction = extract(source);

    let func = extraction.document.function("dup").unwrap();
    assert_eq!(func.doc, "first\n");
    assert_eq!(extraction.diagnostics.len(), 1);
    assert!(extraction.diagnostics[0].is_duplicate());
    assert_eq!(extraction.diagnostics[0].decl_kind, DeclKind::Function);
}

#[test]
fn test_duplicate_type_last_wins_keeps_methods() {
    let source = r#"package demo

func (b Buz) Hello() {}

type Buz int

type Buz string
"#;

    let config = ExtractorConfig::default().with_duplicate_policy(DuplicatePolicy::LastWins);
    let extraction = extract_with(source, config);

    let buz = extraction.document.type_decl("Buz").unwrap();
    assert_eq!(buz.body, "type Buz string");
    assert!(buz.method("Hello").is_some());
    assert_eq!(extraction.diagnostics.len(), 1);
}

#[test]
fn test_duplicate_methods_rejected() {
    let source = r#"package demo

type Buz int

func (b Buz) Same() int { return 1 }

func (b *Buz) Same() int { return 2 }
"#;

    let extraction = extract(source);

    let same = extraction.document.method("Buz", "Same").unwrap();
    assert!(same.body.contains("return 1"));
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].name, "Buz.Same");
    assert_eq!(extraction.diagnostics[0].decl_kind, DeclKind::Method);
}

#[test]
fn test_docs_can_be_disabled() {
    let config = ExtractorConfig::default().with_docs(false);
    let doc = GoExtractor::with_config(config)
        .extract_file(&fixture("parse_me.go"))
        .unwrap()
        .document;

    assert_eq!(doc.package_docs, "");
    assert_eq!(doc.type_decl("Buz").unwrap().docs, "");
    assert_eq!(doc.function("foo").unwrap().doc, "");
    assert_eq!(doc.method("Buz", "meth").unwrap().doc, "");
}

#[test]
fn test_bodies_are_verbatim_source_regions() {
    let source = std::fs::read_to_string(fixture("parse_me.go")).unwrap();
    let doc = extract(&source).document;

    for func in doc.top_level_funcs.values() {
        assert!(source.contains(&func.body));
    }
    for decl in doc.types.values() {
        assert!(source.contains(&decl.body));
        for method in decl.methods.values() {
            assert!(source.contains(&method.body));
        }
    }
}

#[test]
fn test_bodies_reparse_in_isolation() {
    let source = std::fs::read_to_string(fixture("parse_me.go")).unwrap();
    let doc = extract(&source).document;

    for (name, func) in &doc.top_level_funcs {
        let isolated = extract(&format!("package iso\n\n{}\n", func.body));
        assert_eq!(isolated.document.function(name), Some(&func.clone().with_doc("")));
    }

    for (name, decl) in &doc.types {
        let isolated = extract(&format!("package iso\n\n{}\n", decl.body));
        assert_eq!(isolated.document.type_decl(name).unwrap().body, decl.body);

        for method in decl.methods.values() {
            // The receiver type is missing on its own, but the method still parses
            let isolated = GoExtractor::new().extract_source(
                &format!("package iso\n\n{}\n", method.body),
                Path::new("iso.go"),
            );
            assert!(isolated.is_ok());
        }
    }
}

#[test]
fn test_extraction_is_idempotent() {
    let extractor = GoExtractor::new();
    let first = extractor.extract_file(&fixture("parse_me.go")).unwrap();
    let second = extractor.extract_file(&fixture("parse_me.go")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_syntax_error() {
    let source = "package demo\n\nfunc broken( {\n";

    let result = GoExtractor::new().extract_source(source, Path::new("main.go"));
    assert!(matches!(result, Err(ParserError::SyntaxError(_, _, _, _))));
}

#[test]
fn test_missing_package_clause_is_syntax_error() {
    let result = GoExtractor::new().extract_source("func foo() {}\n", Path::new("main.go"));
    assert!(matches!(result, Err(ParserError::SyntaxError(_, _, _, _))));
}

#[test]
fn test_missing_file_is_unreadable() {
    let result = GoExtractor::new().extract_file(Path::new("/nonexistent/dir/main.go"));
    assert!(matches!(result, Err(ParserError::SourceUnreadable(_, _))));
}

#[test]
fn test_file_too_large() {
    let config = ExtractorConfig::default().with_max_file_size(10);
    let result = GoExtractor::with_config(config).extract_file(&fixture("parse_me.go"));

    assert!(matches!(result, Err(ParserError::FileTooLarge(_, _))));
}

#[test]
fn test_metrics_track_successes_and_failures() {
    let mut extractor = GoExtractor::new();

    extractor.extract_file(&fixture("parse_me.go")).unwrap();
    extractor
        .extract_file(Path::new("/nonexistent/dir/main.go"))
        .unwrap_err();

    let metrics = extractor.metrics();
    assert_eq!(metrics.files_attempted, 2);
    assert_eq!(metrics.files_succeeded, 1);
    assert_eq!(metrics.files_failed, 1);
    // 2 types, 3 functions, 3 methods
    assert_eq!(metrics.total_declarations, 8);
    assert_eq!(metrics.total_diagnostics, 0);

    extractor.reset_metrics();
    assert_eq!(extractor.metrics().files_attempted, 0);
}

#[test]
fn test_extract_files_collects_failures() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.go");
    std::fs::write(&broken, "package broken\n\nfunc oops( {\n").unwrap();

    let report = GoExtractor::new().extract_files(&[fixture("parse_me.go"), broken.clone()]);

    assert_eq!(report.total_files(), 2);
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].1.document.package_name, "parseme");
    assert_eq!(report.failed_files.len(), 1);
    assert_eq!(report.failed_files[0].0, broken);
}

#[test]
fn test_dump_json() {
    let dir = tempfile::tempdir().unwrap();
    let extraction = GoExtractor::new()
        .extract_file(&fixture("parse_me.go"))
        .unwrap();

    let path = export::dump_json(&extraction.document, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "parseme.json");

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["packageName"], "parseme");
    assert_eq!(json["types"]["Buz"]["methods"]["meth"]["doc"], "recv comments\n");
    assert_eq!(json["topLevelFuncs"]["bar"]["body"], "func bar() {\n\tfoo()\n}");
}
