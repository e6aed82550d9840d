// Advice bundle: the structured result every tool returns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured advice returned by a tool.
///
/// Renders to Markdown through `Display` and serialises to JSON for
/// structured MCP output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceBundle {
    pub tool: String,
    pub title: String,
    pub sections: Vec<Section>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl AdviceBundle {
    pub fn new(tool: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            title: title.into(),
            sections: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Append a section
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Append fallback notes
    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Look up a section by its stable id
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

/// A top-level section of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon: String,
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: impl Into<String>, icon: impl Into<String>, heading: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn subheading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Subheading(text.into()));
        self
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Label(text.into()));
        self
    }

    pub fn facts(mut self, items: Vec<Fact>) -> Self {
        self.blocks.push(Block::Facts(items));
        self
    }

    pub fn bullets<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks
            .push(Block::Bullets(items.into_iter().map(Into::into).collect()));
        self
    }

    pub fn numbered<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks
            .push(Block::Numbered(items.into_iter().map(Into::into).collect()));
        self
    }

    /// True when no block carries any content
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| match b {
            Block::Subheading(_) | Block::Label(_) => true,
            Block::Facts(items) => items.is_empty(),
            Block::Bullets(items) | Block::Numbered(items) => items.is_empty(),
        })
    }

    /// All text in the section, for searching
    pub fn text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.write_markdown(&mut out);
        }
        out
    }
}

/// Content inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Subheading(String),
    Label(String),
    Facts(Vec<Fact>),
    Bullets(Vec<String>),
    Numbered(Vec<String>),
}

impl Block {
    fn write_markdown(&self, out: &mut String) {
        match self {
            Block::Subheading(text) => {
                out.push_str(&format!("\n### {}\n", text));
            }
            Block::Label(text) => {
                out.push_str(&format!("**{}:**\n", text));
            }
            Block::Facts(items) => {
                for fact in items {
                    out.push_str(&format!("- **{}:** {}\n", fact.label, fact.value));
                }
            }
            Block::Bullets(items) => {
                for item in items {
                    out.push_str(&format!("- {}\n", item));
                }
            }
            Block::Numbered(items) => {
                for (i, item) in items.iter().enumerate() {
                    out.push_str(&format!("{}. {}\n", i + 1, item));
                }
            }
        }
    }
}

/// A bold label followed by a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub label: String,
    pub value: String,
}

pub fn fact(label: impl Into<String>, value: impl Into<String>) -> Fact {
    Fact {
        label: label.into(),
        value: value.into(),
    }
}

impl fmt::Display for AdviceBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;

        for section in &self.sections {
            writeln!(f)?;
            if section.icon.is_empty() {
                writeln!(f, "## {}", section.heading)?;
            } else {
                writeln!(f, "## {} {}", section.icon, section.heading)?;
            }
            f.write_str(&section.text())?;
        }

        if !self.notes.is_empty() {
            writeln!(f)?;
            for note in &self.notes {
                writeln!(f, "> Note: {}", note)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AdviceBundle {
        AdviceBundle::new("demo", "Demo Title")
            .section(
                Section::new("overview", "📊", "Overview")
                    .facts(vec![fact("Platform", "Youtube"), fact("Audience", "Small")]),
            )
            .section(
                Section::new("plan", "", "Plan")
                    .subheading("Phase 1")
                    .numbered(["Research", "Build"])
                    .label("Extras")
                    .bullets(["Stay consistent"]),
            )
    }

    #[test]
    fn test_render_markdown() {
        let md = sample().to_markdown();

        assert!(md.starts_with("# Demo Title\n"));
        assert!(md.contains("## 📊 Overview\n- **Platform:** Youtube\n- **Audience:** Small\n"));
        assert!(md.contains("## Plan\n\n### Phase 1\n1. Research\n2. Build\n**Extras:**\n- Stay consistent\n"));
        assert!(!md.contains("> Note:"));
    }

    #[test]
    fn test_notes_rendered_last() {
        let md = sample()
            .with_notes(vec!["platform: 'myspace' not recognised".to_string()])
            .to_markdown();

        assert!(md.trim_end().ends_with("> Note: platform: 'myspace' not recognised"));
    }

    #[test]
    fn test_section_lookup_and_emptiness() {
        let bundle = sample();
        assert!(bundle.get("plan").is_some());
        assert!(bundle.get("missing").is_none());
        assert!(!bundle.is_empty());

        let empty = Section::new("empty", "", "Nothing").subheading("Only a heading");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["tool"], "demo");
        assert_eq!(value["sections"][0]["id"], "overview");
        assert_eq!(value["sections"][0]["blocks"][0]["kind"], "facts");
        assert_eq!(value["sections"][0]["blocks"][0]["value"][0]["label"], "Platform");
        // Empty notes are omitted
        assert!(value.get("notes").is_none());
        // Empty icon is omitted
        assert!(value["sections"][1].get("icon").is_none());
    }
}
