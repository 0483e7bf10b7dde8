//! Placeholder scan and unresolved diagnostics

use super::helpers::simple_context;
use super::*;

#[test]
fn test_scan_placeholders_in_order() {
    let found = scan_placeholders("{{ topic }}\n<p>{{ date }}</p>");
    assert_eq!(
        found,
        vec![
            Placeholder {
                key: "topic".to_string(),
                line: 1
            },
            Placeholder {
                key: "date".to_string(),
                line: 2
            },
        ]
    );
}

#[test]
fn test_ensure_resolved_ok() {
    let rendered = render("{{ topic }} by {{ user_name }}", &simple_context());
    assert!(ensure_resolved(&rendered).is_ok());
}

#[test]
fn test_ensure_resolved_reports_first_leftover() {
    let rendered = render("{{ topic }}\n\n{{ missing }}", &simple_context());
    match ensure_resolved(&rendered) {
        Err(TemplateError::UnresolvedPlaceholder { key, line }) => {
            assert_eq!(key, "missing");
            assert_eq!(line, 3);
        }
        other => panic!("Expected UnresolvedPlaceholder error, got {:?}", other),
    }
}

#[test]
fn test_unresolved_display() {
    let err = TemplateError::UnresolvedPlaceholder {
        key: "topic".to_string(),
        line: 7,
    };
    assert_eq!(
        err.to_string(),
        "Unresolved placeholder '{{ topic }}' at line 7"
    );
}
