//! Source buffers and their persistence.
//!
//! A saved session is the full triple of `lcb_html` / `lcb_css` / `lcb_js`. Anything less is
//! treated as no saved session and all three buffers fall back to the default sample together.

use super::language::Language;
use super::services::ports::{KeyValueStore, StorageError};

pub const SAMPLE_MARKUP: &str = "<div class=\"center\">
  <h1>Hello World</h1>
  <p>Preview on top, code below.</p>
  <button id=\"demo-btn\">Click Me</button>
</div>";

pub const SAMPLE_STYLE: &str = "body {
  font-family: system-ui, sans-serif;
  display: flex;
  justify-content: center;
  align-items: center;
  height: 100vh;
  margin: 0;
  background: #f0f9ff;
}
.center {
  text-align: center;
  color: #334155;
  padding: 20px;
}
button {
  margin-top: 20px;
  padding: 10px 20px;
  background: #3b82f6;
  color: white;
  border: none;
  border-radius: 6px;
  font-size: 1rem;
}";

pub const SAMPLE_SCRIPT: &str = "document.getElementById(\"demo-btn\").addEventListener(\"click\", () => {
  alert(\"Button clicked in the preview!\");
});";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferSet {
    texts: [String; 3],
}

impl BufferSet {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            texts: [markup.into(), style.into(), script.into()],
        }
    }

    pub fn default_sample() -> Self {
        Self::new(SAMPLE_MARKUP, SAMPLE_STYLE, SAMPLE_SCRIPT)
    }

    pub fn empty() -> Self {
        Self::new("", "", "")
    }

    pub fn get(&self, lang: Language) -> &str {
        &self.texts[lang.index()]
    }

    /// Returns whether the text actually changed.
    pub fn set(&mut self, lang: Language, text: String) -> bool {
        let slot = &mut self.texts[lang.index()];
        if *slot == text {
            return false;
        }
        *slot = text;
        true
    }

    pub fn markup(&self) -> &str {
        self.get(Language::Markup)
    }

    pub fn style(&self) -> &str {
        self.get(Language::Style)
    }

    pub fn script(&self) -> &str {
        self.get(Language::Script)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

pub struct BufferStore {
    storage: Box<dyn KeyValueStore>,
}

impl BufferStore {
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Option<BufferSet> {
        let mut texts: [Option<String>; 3] = [None, None, None];

        for lang in Language::ALL {
            let key = lang.storage_key();
            let bytes = match self.storage.get(key) {
                Ok(Some(bytes)) => bytes,
                Ok(None) => {
                    tracing::debug!(key, "no saved buffer");
                    return None;
                }
                Err(e) => {
                    tracing::warn!(key, error = %e, "read saved buffer failed");
                    return None;
                }
            };

            match String::from_utf8(bytes) {
                Ok(text) => texts[lang.index()] = Some(text),
                Err(_) => {
                    tracing::warn!(key, "saved buffer is not valid utf-8");
                    return None;
                }
            }
        }

        let [markup, style, script] = texts;
        Some(BufferSet::new(markup?, style?, script?))
    }

    /// Restores the saved session, or the default sample when none is complete.
    pub fn load_or_default(&self) -> (BufferSet, bool) {
        match self.load() {
            Some(buffers) => (buffers, true),
            None => (BufferSet::default_sample(), false),
        }
    }

    pub fn save(&mut self, buffers: &BufferSet) -> Result<(), StorageError> {
        for (lang, text) in buffers.iter() {
            self.storage.set(lang.storage_key(), text.as_bytes())?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/buffers.rs"]
mod tests;
