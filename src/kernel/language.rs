#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Markup,
    Style,
    Script,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Markup, Language::Style, Language::Script];

    pub fn index(self) -> usize {
        match self {
            Self::Markup => 0,
            Self::Style => 1,
            Self::Script => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Short tag used for tabs and log fields.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Style => "css",
            Self::Script => "js",
        }
    }

    pub fn storage_key(self) -> &'static str {
        match self {
            Self::Markup => "lcb_html",
            Self::Style => "lcb_css",
            Self::Script => "lcb_js",
        }
    }

    /// Parser name understood by the formatter.
    pub fn formatter_parser(self) -> &'static str {
        match self {
            Self::Markup => "html",
            Self::Style => "css",
            Self::Script => "babel",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Markup => "HTML",
            Self::Style => "CSS",
            Self::Script => "JS",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/language.rs"]
mod tests;
