//! Tests for schema parsing and resolution.

use super::{FieldDef, FieldKind, SchemaRegistry, parse, parse_file, unqualified};
use crate::error::PatchDiffError;
use crate::test_support::{PATCH_SCHEMA, PATCH_SIZE, write_file};
use tempfile::TempDir;

fn registry() -> SchemaRegistry {
    parse(PATCH_SCHEMA).unwrap()
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_registers_top_level_and_nested_structs() {
    let registry = registry();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(
        names,
        vec!["PatchVST", "PatchVST::Cache", "PatchVST::Common", "Tone"]
    );
}

#[test]
fn test_parse_preserves_field_order_kinds_and_counts() {
    let registry = registry();
    let patch = registry.get("PatchVST").unwrap();

    let fields: Vec<(&str, &FieldKind, usize)> = patch
        .fields
        .iter()
        .map(|f| (f.name.as_str(), &f.kind, f.count))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("name", &FieldKind::Text, 8),
            ("reserved", &FieldKind::Byte, 10),
            ("common", &FieldKind::Struct("PatchVST::Common".to_string()), 1),
            ("tones", &FieldKind::Struct("PatchVST::Tone".to_string()), 2),
            (
                "tonePrecomputed",
                &FieldKind::Struct("PatchVST::Cache".to_string()),
                1
            ),
        ]
    );
}

#[test]
fn test_parse_keeps_trailing_comments() {
    let registry = registry();
    let tone = registry.get("Tone").unwrap();
    assert_eq!(tone.fields[0].comment, " // 0-100");
    assert_eq!(tone.fields[1].comment, "");
    assert_eq!(tone.fields[2].kind, FieldKind::UInt16LE);

    let patch = registry.get("PatchVST").unwrap();
    assert_eq!(patch.fields[0].comment, " // patch name");
}

#[test]
fn test_parse_single_line_struct() {
    let registry = parse("struct P { uint8_t a; uint16le b; char name[4]; }").unwrap();
    let p = registry.get("P").unwrap();

    assert_eq!(
        p.fields,
        vec![
            FieldDef::new("a", FieldKind::Byte, 1, ""),
            FieldDef::new("b", FieldKind::UInt16LE, 1, ""),
            FieldDef::new("name", FieldKind::Text, 4, ""),
        ]
    );
    assert_eq!(registry.byte_size("P").unwrap(), 7);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(PATCH_SCHEMA).unwrap(), parse(PATCH_SCHEMA).unwrap());
}

#[test]
fn test_parse_tolerates_missing_closing_brace() {
    let registry = parse("struct Open\n{\n    uint8_t a;\n    uint8_t b;\n").unwrap();
    assert_eq!(registry.get("Open").unwrap().fields.len(), 2);
}

#[test]
fn test_parse_nested_namespace_uses_enclosing_bare_name() {
    let source = r#"
struct A {
    struct B {
        struct C {
            uint8_t x;
        };
        C c;
    };
    B b;
};
"#;
    let registry = parse(source).unwrap();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["A", "A::B", "B::C"]);

    let b = registry.get("A::B").unwrap();
    assert_eq!(b.fields[0].kind, FieldKind::Struct("B::C".to_string()));
    let a = registry.get("A").unwrap();
    assert_eq!(a.fields[0].kind, FieldKind::Struct("A::B".to_string()));
    assert_eq!(registry.byte_size("A").unwrap(), 1);
}

#[test]
fn test_parse_skips_comment_only_and_blank_lines() {
    let source = "struct S\n{\n    // a comment line\n\n    uint8_t a; // kept\n};\n";
    let registry = parse(source).unwrap();
    let s = registry.get("S").unwrap();
    assert_eq!(s.fields.len(), 1);
    assert_eq!(s.fields[0].comment, " // kept");
}

#[test]
fn test_parse_uint16le_array_form() {
    let registry = parse("struct W { uint16le<arr,4> vals; }").unwrap();
    let field = &registry.get("W").unwrap().fields[0];
    assert_eq!(field.kind, FieldKind::UInt16LE);
    assert_eq!(field.count, 4);
    assert_eq!(field.name, "vals");
}

#[test]
fn test_parse_empty_source_fails() {
    let err = parse("   \n\n").unwrap_err();
    assert!(matches!(err, PatchDiffError::Schema(_)));
}

#[test]
fn test_parse_source_without_structs_fails() {
    let err = parse("#pragma once\nuint8_t stray;\n").unwrap_err();
    assert_eq!(
        err,
        PatchDiffError::Schema("no struct definitions found".to_string())
    );
}

#[test]
fn test_parse_rejects_bad_array_count() {
    let err = parse("struct S {\n  std::array<uint8_t, N> data;\n}").unwrap_err();
    match err {
        PatchDiffError::Schema(msg) => assert!(msg.contains("line 2"), "{}", msg),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_field_without_name() {
    let err = parse("struct S {\n  uint8_t;\n  lonely\n}").unwrap_err();
    assert!(matches!(err, PatchDiffError::Schema(_)));
}

#[test]
fn test_parse_file_reads_schema() {
    let temp = TempDir::new().unwrap();
    let path = write_file(temp.path(), "JD-08.patchdef", PATCH_SCHEMA.as_bytes());
    assert_eq!(parse_file(&path).unwrap(), registry());
}

#[test]
fn test_parse_file_missing_is_schema_error() {
    let temp = TempDir::new().unwrap();
    let err = parse_file(temp.path().join("missing.patchdef")).unwrap_err();
    match err {
        PatchDiffError::Schema(msg) => assert!(msg.contains("schema file not found")),
        other => panic!("expected schema error, got {:?}", other),
    }
}

// =========================================================================
// Resolution
// =========================================================================

#[test]
fn test_resolve_exact_name() {
    let registry = registry();
    let def = registry.resolve("PatchVST::Common").unwrap();
    assert_eq!(def.qualified_name, "PatchVST::Common");
}

#[test]
fn test_resolve_qualified_reference_falls_back_to_top_level() {
    let registry = registry();
    let def = registry.resolve("PatchVST::Tone").unwrap();
    assert_eq!(def.qualified_name, "Tone");
}

#[test]
fn test_resolve_bare_name_finds_nested_struct() {
    let registry = registry();
    let def = registry.resolve("Common").unwrap();
    assert_eq!(def.qualified_name, "PatchVST::Common");
}

#[test]
fn test_resolve_top_level_shadows_nested() {
    let source = r#"
struct Inner { uint8_t top; };
struct Outer {
    struct Inner { uint8_t nested; uint8_t other; };
    Inner inner;
};
"#;
    let registry = parse(source).unwrap();
    assert_eq!(registry.resolve("Inner").unwrap().fields[0].name, "top");
    assert_eq!(registry.resolve("Outer::Inner").unwrap().fields[0].name, "nested");
    assert_eq!(registry.byte_size("Outer").unwrap(), 2);
}

#[test]
fn test_resolve_unknown_struct_fails() {
    let err = registry().resolve("Bogus").unwrap_err();
    assert_eq!(
        err,
        PatchDiffError::Schema("struct not found: Bogus".to_string())
    );
}

#[test]
fn test_unqualified_takes_last_segment() {
    assert_eq!(unqualified("A::B::C"), "C");
    assert_eq!(unqualified("Plain"), "Plain");
}

// =========================================================================
// Sizing
// =========================================================================

#[test]
fn test_byte_size_sums_nested_layout() {
    let registry = registry();
    assert_eq!(registry.byte_size("Tone").unwrap(), 4);
    assert_eq!(registry.byte_size("PatchVST").unwrap(), PATCH_SIZE);
}

#[test]
fn test_byte_size_rejects_uint16le_array() {
    let registry = parse("struct W { uint8_t a; uint16le<arr,4> vals; }").unwrap();
    let err = registry.byte_size("W").unwrap_err();
    assert!(matches!(err, PatchDiffError::Unsupported(_)));
}

#[test]
fn test_byte_size_stops_on_self_reference() {
    let registry = parse("struct Loop { uint8_t a; Loop next; }").unwrap();
    let err = registry.byte_size("Loop").unwrap_err();
    match err {
        PatchDiffError::Schema(msg) => assert!(msg.contains("nesting deeper")),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_byte_size_overflow_is_schema_error() {
    let registry =
        parse("struct P { std::array<uint8_t, 18446744073709551615> a; uint8_t b; }").unwrap();
    let err = registry.byte_size("P").unwrap_err();
    match err {
        PatchDiffError::Schema(msg) => assert!(msg.contains("overflows"), "{}", msg),
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_byte_size_struct_array_overflow_is_schema_error() {
    let schema = "struct T { uint16le v; }\nstruct P { T items[9223372036854775808]; }";
    let registry = parse(schema).unwrap();
    assert_eq!(registry.byte_size("T").unwrap(), 2);
    let err = registry.byte_size("P").unwrap_err();
    assert!(matches!(err, PatchDiffError::Schema(_)));
}

#[test]
fn test_field_display_matches_schema_spelling() {
    let registry = registry();
    let patch = registry.get("PatchVST").unwrap();
    assert_eq!(patch.fields[0].to_string(), "char name[8] // patch name");
    assert_eq!(patch.fields[1].to_string(), "uint8_t reserved[10]");
    assert_eq!(patch.fields[2].to_string(), "PatchVST::Common common");
}
