//! Unit tests for TokenStream

use super::tokenize::{ScanState, TokenStream};

#[test]
fn test_scan_state_transitions() {
    let normal = ScanState::Normal;
    assert_eq!(normal.clone(), ScanState::Normal);

    let seen_lbrace = ScanState::SeenLBrace { pos: 10 };
    assert_ne!(seen_lbrace, ScanState::SeenLBrace { pos: 11 });

    let in_token = ScanState::InToken {
        start: 10,
        content_start: 12,
    };
    assert_eq!(
        in_token,
        ScanState::InToken {
            start: 10,
            content_start: 12
        }
    );
}

#[test]
fn test_tokenstream_single_placeholder() {
    let text = "Hello {{name}} world";
    let mut stream = TokenStream::new(text);

    let token = stream.next().unwrap();
    assert_eq!(token.start, 6);
    assert_eq!(token.length, 8); // {{name}}
    assert_eq!(token.key, "name");
    assert_eq!(token.end(), 14);

    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_trims_spaces() {
    let keys: Vec<String> = TokenStream::new("{{a}} {{ b }} {{   c   }}")
        .map(|t| t.key)
        .collect();
    assert_eq!(keys, vec!["a", "b", "c"]);
}

#[test]
fn test_tokenstream_multiple_tokens() {
    let text = "{{a}} {{b}} {{c}}";
    let starts: Vec<usize> = TokenStream::new(text).map(|t| t.start).collect();
    assert_eq!(starts, vec![0, 6, 12]);
}

#[test]
fn test_tokenstream_empty_input() {
    let mut stream = TokenStream::new("");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_no_tokens() {
    let mut stream = TokenStream::new("body { color: red; } {single}");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_empty_braces_are_text() {
    let mut stream = TokenStream::new("{{}} {{   }}");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_unclosed_is_text() {
    let mut stream = TokenStream::new("{{ topic");
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_newline_abandons_token() {
    let text = "{{ topic\n}} {{ date }}";
    let tokens: Vec<_> = TokenStream::new(text).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].key, "date");
    assert_eq!(tokens[0].line, 2);
}

#[test]
fn test_tokenstream_brace_restarts_token() {
    let text = "{{ stray {{ topic }}";
    let tokens: Vec<_> = TokenStream::new(text).collect();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].key, "topic");
    assert_eq!(tokens[0].start, 9);
}

#[test]
fn test_tokenstream_triple_braces() {
    // The innermost {{ opens the token
    let text = "{{{triple}}}";
    let mut stream = TokenStream::new(text);

    let token = stream.next().unwrap();
    assert_eq!(token.start, 1);
    assert_eq!(token.key, "triple");
    assert_eq!(&text[token.start..token.end()], "{{triple}}");

    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_single_rbrace_in_content() {
    let mut stream = TokenStream::new("{{a}b}}");
    let token = stream.next().unwrap();
    assert_eq!(token.key, "a}b");
}

#[test]
fn test_tokenstream_line_numbers() {
    let text = "Line 1\n{{token1}}\nLine 3\n{{token2}}";
    let mut stream = TokenStream::new(text);

    assert_eq!(stream.next().unwrap().line, 2);
    assert_eq!(stream.next().unwrap().line, 4);
    assert!(stream.next().is_none());
}

#[test]
fn test_tokenstream_multibyte_text() {
    let text = "报告：{{ topic }}，日期 {{ date }}";
    let tokens: Vec<_> = TokenStream::new(text).collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(&text[tokens[0].start..tokens[0].end()], "{{ topic }}");
    assert_eq!(&text[tokens[1].start..tokens[1].end()], "{{ date }}");
}
