//! Configuration loading and serialized output

use links_notation::lino::config::{load_defaults, Loader};
use links_notation::lino::testing::{named, refs};
use links_notation::{parse_document, FormatConfig, Link, Parser, Strictness};

#[test]
fn test_loaded_config_drives_parser_and_formatter() {
    let config = Loader::new()
        .with_toml(
            "[parsing]\nstrictness = \"lenient\"\n\n[formatting]\nless_parentheses = true\n",
        )
        .build()
        .unwrap();
    assert_eq!(config.parsing.strictness, Strictness::Lenient);

    let doc = Parser::new(config.parsing.clone())
        .parse_document("(: a b)\n(id: c d)")
        .unwrap();
    assert_eq!(doc.format(&config.formatting), "a b\nid: c d");
}

#[test]
fn test_user_file_layers_over_defaults() {
    let dir = std::env::temp_dir().join(format!("lino-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("lino.toml");
    std::fs::write(&path, "[formatting]\nindent_string = \"    \"\nmax_line_length = 40\n").unwrap();

    let config = Loader::new().with_file(&path).build().unwrap();
    assert_eq!(config.formatting.indent_string, "    ");
    assert_eq!(config.formatting.max_line_length, 40);
    assert!(!config.formatting.less_parentheses);
    assert_eq!(config.parsing, load_defaults().unwrap().parsing);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_overrides_win_over_files() {
    let config = Loader::new()
        .with_toml("[formatting]\ngroup_consecutive = false\n")
        .set_override("formatting.group_consecutive", true)
        .unwrap()
        .build()
        .unwrap();
    assert!(config.formatting.group_consecutive);
}

#[test]
fn test_format_config_serde_defaults() {
    let config: FormatConfig = serde_json::from_str(r#"{"less_parentheses": true}"#).unwrap();
    assert_eq!(
        config,
        FormatConfig::builder().less_parentheses(true).build()
    );
}

#[test]
fn test_document_serializes_as_link_list() {
    let doc = parse_document("(id: a b)").unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "identifier": {"kind": "single", "parts": "id"},
            "values": [
                {"identifier": {"kind": "single", "parts": "a"}},
                {"identifier": {"kind": "single", "parts": "b"}}
            ]
        }])
    );

    let back: Vec<Link> = serde_json::from_value(json).unwrap();
    assert_eq!(back, vec![named("id", refs(&["a", "b"]))]);
}

#[test]
fn test_document_yaml_output() {
    let doc = parse_document("(some example: x)").unwrap();
    let yaml = serde_yaml::to_string(&doc).unwrap();
    assert!(yaml.contains("kind: multi"), "{yaml}");
    assert!(yaml.contains("- some"), "{yaml}");
}
