use std::sync::{Arc, Mutex};

use gon_core::{
    load_from_buffer, parse_tokens, to_json, tokenize, FailFast, GonError, Kind, Loader, MAX_DEPTH,
};

/// Helper: a loader whose hook records every message and continues.
fn recording_loader() -> (Loader, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let loader = Loader::with_hook(Arc::new(move |e: GonError| -> gon_core::Result<()> {
        sink.lock().unwrap().push(e.to_string());
        Ok(())
    }));
    (loader, seen)
}

// ============================================================================
// Top-level framing and scalar inference
// ============================================================================

#[test]
fn top_level_is_an_implicit_object() {
    let doc = load_from_buffer("x 5 y 3.14 z true w null").unwrap();
    let root = doc.root();
    assert_eq!(root.kind(), Kind::Object);
    assert_eq!(root.children().count(), 4);

    let x = root.get("x").unwrap();
    assert_eq!(x.kind(), Kind::Number);
    assert_eq!(x.as_int().unwrap(), 5);

    let y = root.get("y").unwrap();
    assert_eq!(y.kind(), Kind::Number);
    assert!((y.as_number().unwrap() - 3.14).abs() < 1e-12);

    let z = root.get("z").unwrap();
    assert_eq!(z.kind(), Kind::Bool);
    assert!(z.as_bool().unwrap());

    let w = root.get("w").unwrap();
    assert_eq!(w.kind(), Kind::Null);
    assert!(!w.exists());
    assert!(!w.is_shared_null(), "a null literal is its own node");
    assert_eq!(w.name(), "w");
}

#[test]
fn empty_document_is_an_empty_object() {
    let doc = load_from_buffer("").unwrap();
    assert_eq!(doc.root().kind(), Kind::Object);
    assert!(doc.root().is_empty());
}

#[test]
fn comment_only_document_is_empty() {
    let doc = load_from_buffer("# nothing here").unwrap();
    assert!(doc.root().is_empty());
}

#[test]
fn trailing_comment_without_newline_keeps_the_closing_brace() {
    let doc = load_from_buffer("a 1 # note").unwrap();
    assert_eq!(doc.root().get("a").unwrap().as_int().unwrap(), 1);

    let (loader, seen) = recording_loader();
    let doc = loader.load_from_buffer("list [a b] # tail").unwrap();
    assert!(seen.lock().unwrap().is_empty());
    assert_eq!(doc.root().get("list").unwrap().len().unwrap(), 2);
}

#[test]
fn member_names_are_recorded_on_children() {
    let doc = load_from_buffer("first 1 second two").unwrap();
    let names: Vec<&str> = doc.root().children().map(|c| c.name()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn quoted_keywords_are_still_inferred() {
    let doc = load_from_buffer(r#"a "true" b "null" c "42""#).unwrap();
    let root = doc.root();
    assert_eq!(root.get("a").unwrap().kind(), Kind::Bool);
    assert_eq!(root.get("b").unwrap().kind(), Kind::Null);
    assert_eq!(root.get("c").unwrap().kind(), Kind::Number);
}

#[test]
fn number_literal_forms() {
    let doc = load_from_buffer("hex 0xff oct 017 neg -12 exp 1e3 frac .5").unwrap();
    let root = doc.root();
    assert_eq!(root.get("hex").unwrap().as_int().unwrap(), 255);
    assert_eq!(root.get("oct").unwrap().as_int().unwrap(), 15);
    assert_eq!(root.get("neg").unwrap().as_int().unwrap(), -12);
    assert_eq!(root.get("exp").unwrap().as_number().unwrap(), 1000.0);
    assert_eq!(root.get("exp").unwrap().as_int().unwrap(), 1000);
    assert_eq!(root.get("frac").unwrap().as_number().unwrap(), 0.5);
}

#[test]
fn words_with_digits_are_strings() {
    let doc = load_from_buffer("version 1.2.3 id 12abc").unwrap();
    assert_eq!(doc.root().get("version").unwrap().kind(), Kind::String);
    assert_eq!(doc.root().get("id").unwrap().kind(), Kind::String);
}

// ============================================================================
// Objects and arrays
// ============================================================================

#[test]
fn nested_objects_and_arrays() {
    let doc = load_from_buffer(
        "window { title \"Main Window\" size [640 480] flags { vsync true } }",
    )
    .unwrap();
    let window = doc.root().get("window").unwrap();
    assert_eq!(window.kind(), Kind::Object);
    assert_eq!(window.get("title").unwrap().as_str().unwrap(), "Main Window");

    let size = window.get("size").unwrap();
    assert_eq!(size.kind(), Kind::Array);
    assert_eq!(size.len().unwrap(), 2);
    assert_eq!(size.at(0).unwrap().as_int().unwrap(), 640);
    assert_eq!(size.at(1).unwrap().as_int().unwrap(), 480);

    assert!(window.get("flags").unwrap().get("vsync").unwrap().as_bool().unwrap());
}

#[test]
fn array_elements_have_no_names() {
    let doc = load_from_buffer("list [a b]").unwrap();
    let list = doc.root().get("list").unwrap();
    assert!(list.children().all(|c| c.name().is_empty()));
}

#[test]
fn bare_token_stream_parses_to_its_first_value() {
    let tokens = tokenize("[1 2 3]");
    let doc = parse_tokens(&tokens, Arc::new(FailFast)).unwrap();
    assert_eq!(doc.root().kind(), Kind::Array);
    assert_eq!(doc.root().at(1).unwrap().as_int().unwrap(), 2);
}

#[test]
fn arrays_of_arrays_and_objects() {
    let doc = load_from_buffer("grid [[1 2] [3 4]] people [{name a} {name b}]").unwrap();
    let root = doc.root();
    assert_eq!(
        root.get("grid").unwrap().at(1).unwrap().at(0).unwrap().as_int().unwrap(),
        3
    );
    let people = root.get("people").unwrap();
    assert_eq!(people.at(1).unwrap().get("name").unwrap().as_str().unwrap(), "b");
}

#[test]
fn empty_containers() {
    let doc = load_from_buffer("o {} a []").unwrap();
    assert_eq!(doc.root().get("o").unwrap().kind(), Kind::Object);
    assert_eq!(doc.root().get("a").unwrap().len().unwrap(), 0);
}

#[test]
fn separators_are_cosmetic() {
    let plain = load_from_buffer("a 1 b [1 2] c { d 3 }").unwrap();
    let punctuated = load_from_buffer("a = 1, b: [1, 2], c = { d: 3 }").unwrap();
    assert_eq!(plain, punctuated);
}

#[test]
fn duplicate_key_resolves_to_last_but_keeps_both() {
    let doc = load_from_buffer("a 1 a 2").unwrap();
    let root = doc.root();
    assert_eq!(root.get("a").unwrap().as_int().unwrap(), 2);
    let values: Vec<i64> = root.children().map(|c| c.as_int().unwrap()).collect();
    assert_eq!(values, vec![1, 2]);
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn missing_brace_fails_fast_by_default() {
    let err = Loader::with_hook(Arc::new(FailFast))
        .load_from_buffer("obj { a 1")
        .unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("'}'"));
}

#[test]
fn missing_bracket_fails_fast() {
    let err = Loader::with_hook(Arc::new(FailFast))
        .load_from_buffer("list [1 2")
        .unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("']'"));
}

#[test]
fn missing_bracket_with_lenient_hook_keeps_partial_tree() {
    let (loader, seen) = recording_loader();
    let doc = loader.load_from_buffer("a 1 list [1 2").unwrap();

    // The array swallows the wrapper's closing brace, then both the array and
    // the implicit object report running out of tokens.
    let messages = seen.lock().unwrap().clone();
    assert_eq!(messages.len(), 2, "{messages:?}");
    assert!(messages[0].contains("']'"));
    assert!(messages[1].contains("'}'"));

    let root = doc.root();
    assert_eq!(root.get("a").unwrap().as_int().unwrap(), 1);
    let list = root.get("list").unwrap();
    assert_eq!(list.at(0).unwrap().as_int().unwrap(), 1);
    assert_eq!(list.at(1).unwrap().as_int().unwrap(), 2);
}

#[test]
fn unterminated_string_reports_once_per_open_object() {
    let (loader, seen) = recording_loader();
    let doc = loader.load_from_buffer("name \"open").unwrap();
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(doc.root().get("name").unwrap().as_str().unwrap(), "open\n}");
}

#[test]
fn extra_closing_brace_is_ignored() {
    let doc = load_from_buffer("a 1 } b 2").unwrap();
    assert_eq!(doc.root().get("a").unwrap().as_int().unwrap(), 1);
    assert!(!doc.root().contains("b"));
}

// ============================================================================
// Nesting limit
// ============================================================================

/// `a [[...]]` with `depth` nested arrays under the member `a`.
fn nested_arrays(depth: usize) -> String {
    format!("a {}{}", "[".repeat(depth), "]".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    // The implicit top-level object counts as one level.
    let doc = load_from_buffer(&nested_arrays(MAX_DEPTH - 1)).unwrap();
    let path = vec!["0"; MAX_DEPTH - 2].join(".");
    let innermost = doc.root().get("a").unwrap().lookup(&path);
    assert_eq!(innermost.kind(), Kind::Array);
    assert!(innermost.is_empty());
}

#[test]
fn nesting_past_the_limit_fails_fast() {
    let err = Loader::with_hook(Arc::new(FailFast))
        .load_from_buffer(&nested_arrays(MAX_DEPTH))
        .unwrap_err();
    assert!(err.is_structural());
    assert!(matches!(err, GonError::TooDeep { limit } if limit == MAX_DEPTH));
}

#[test]
fn very_deep_nesting_does_not_overflow_the_stack() {
    let err = Loader::with_hook(Arc::new(FailFast))
        .load_from_buffer(&nested_arrays(5000))
        .unwrap_err();
    assert!(matches!(err, GonError::TooDeep { .. }));
}

#[test]
fn very_deep_nesting_with_lenient_hook_is_cut_off() {
    let (loader, seen) = recording_loader();
    let source = format!("{} after 1", nested_arrays(5000));
    let doc = loader.load_from_buffer(&source).unwrap();

    let messages = seen.lock().unwrap().clone();
    assert_eq!(messages.len(), 1, "{messages:?}");
    assert!(messages[0].contains("nesting exceeds"));

    // The over-deep subtree is skipped whole, so later members still parse.
    let root = doc.root();
    assert_eq!(root.get("after").unwrap().as_int().unwrap(), 1);
    let path = vec!["0"; MAX_DEPTH - 2].join(".");
    let deepest = root.get("a").unwrap().lookup(&path);
    assert_eq!(deepest.len().unwrap(), 1);
    assert_eq!(deepest.at(0).unwrap().kind(), Kind::Null);

    // Output paths recurse over the bounded tree.
    let text = doc.to_text().unwrap();
    assert_eq!(loader.load_from_buffer(&text).unwrap(), doc);
    assert!(to_json(&root).is_ok());
}
