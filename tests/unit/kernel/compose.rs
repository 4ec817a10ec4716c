use super::*;

#[test]
fn compose_is_deterministic() {
    let a = compose("<p>hi</p>", "p { color: red; }", "console.log(1);");
    let b = compose("<p>hi</p>", "p { color: red; }", "console.log(1);");
    assert_eq!(a, b);
}

#[test]
fn default_style_precedes_user_style() {
    let doc = compose("", "body { margin: 4px; }", "");
    let default_at = doc.find(DEFAULT_STYLE).unwrap();
    let user_at = doc.find("body { margin: 4px; }").unwrap();
    assert!(default_at < user_at);

    let head_end = doc.find("</head>").unwrap();
    assert!(user_at < head_end);
}

#[test]
fn script_follows_markup_inside_body() {
    let doc = compose("<button id=\"b\">x</button>", "", "go();");
    let body_at = doc.find("<body>").unwrap();
    let markup_at = doc.find("<button id=\"b\">x</button>").unwrap();
    let script_at = doc.find("<script>go();</script>").unwrap();
    let body_end = doc.find("</body>").unwrap();

    assert!(body_at < markup_at);
    assert!(markup_at < script_at);
    assert!(script_at < body_end);
}

#[test]
fn empty_inputs_compose_to_minimal_document() {
    let doc = compose("", "", "");

    assert!(doc.starts_with("<!DOCTYPE html>\n<html>\n<head>\n"));
    assert!(doc.contains(VIEWPORT_META));
    assert!(doc.contains(DEFAULT_STYLE));
    assert!(doc.contains("<body>\n\n<script></script>\n</body>"));
    assert!(doc.ends_with("</html>\n"));
}

#[test]
fn inputs_are_embedded_verbatim() {
    let markup = "<div>&amp; <b>bold</b></div>";
    let script = "if (a < b && c > d) { alert('</div>'); }";
    let doc = compose(markup, "", script);

    assert!(doc.contains(markup));
    assert!(doc.contains(script));
}

#[test]
fn compose_buffers_matches_compose() {
    let buffers = BufferSet::new("<h1>x</h1>", "h1 {}", "run();");
    assert_eq!(
        compose_buffers(&buffers),
        compose("<h1>x</h1>", "h1 {}", "run();")
    );
}
