//! Composition of the three source buffers into one self-contained document.
//!
//! The output is a pure function of the inputs: the kernel never caches it, every render
//! recomputes it from the current buffers.

use super::buffers::BufferSet;

pub const VIEWPORT_META: &str =
    r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#;

/// Injected ahead of the user style, so user rules win on conflict.
pub const DEFAULT_STYLE: &str = "body {
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
  margin: 0;
  overflow: auto;
}";

pub fn compose(markup: &str, style: &str, script: &str) -> String {
    let mut doc = String::with_capacity(
        256 + DEFAULT_STYLE.len() + markup.len() + style.len() + script.len(),
    );

    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    doc.push_str(VIEWPORT_META);
    doc.push_str("\n<style>\n");
    doc.push_str(DEFAULT_STYLE);
    doc.push('\n');
    doc.push_str(style);
    doc.push_str("\n</style>\n</head>\n<body>\n");
    doc.push_str(markup);
    doc.push('\n');
    push_script(&mut doc, script);
    doc.push_str("\n</body>\n</html>\n");
    doc
}

pub fn compose_buffers(buffers: &BufferSet) -> String {
    compose(buffers.markup(), buffers.style(), buffers.script())
}

// Runs in the document's global scope, after the markup above it is parsed.
fn push_script(doc: &mut String, script: &str) {
    doc.push_str("<script>");
    doc.push_str(script);
    doc.push_str("</script>");
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/compose.rs"]
mod tests;
