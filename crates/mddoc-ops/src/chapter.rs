use std::collections::HashMap;

/// A level-1 heading discovered during the scan pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chapter {
    pub id: usize,
    pub name: String,
}

impl Chapter {
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Anchor name shared by the rewritten heading and its TOC link.
    pub fn anchor_tag(&self) -> String {
        format!("chapter-{}", self.id)
    }

    /// Heading line with an embedded anchor, terminator included.
    pub fn anchored_heading(&self) -> String {
        format!("# <a name=\"{}\"></a>{}\n", self.anchor_tag(), self.name)
    }

    /// Ordered-list TOC line linking to this chapter, terminator included.
    pub fn toc_entry(&self) -> String {
        format!("{}. [{}](#{})\n", self.id, self.name, self.anchor_tag())
    }
}

/// Maps heading titles back to chapters while the assembly pass walks the files.
///
/// When several chapters share a title, every heading with that title resolves
/// to the last of them.
pub struct ChapterIndex<'a> {
    by_name: HashMap<&'a str, &'a Chapter>,
}

impl<'a> ChapterIndex<'a> {
    pub fn new(chapters: &'a [Chapter]) -> Self {
        let by_name = chapters
            .iter()
            .map(|chapter| (chapter.name.as_str(), chapter))
            .collect();
        Self { by_name }
    }

    pub fn resolve(&self, title: &str) -> Option<&'a Chapter> {
        self.by_name.get(title).copied()
    }
}
