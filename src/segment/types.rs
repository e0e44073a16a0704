use super::*;

#[derive(Debug, Clone)]
pub struct Document {
    text: String,
    source_sha256: String,
}

impl Document {
    pub fn from_raw(raw: &str, source_sha256: String) -> Self {
        Self {
            text: normalize_text(raw),
            source_sha256,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn source_sha256(&self) -> &str {
        &self.source_sha256
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub number: String,
    pub title: String,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubChapter {
    pub number: String,
    pub title: String,
    pub page: u32,
    /// Byte range within the parent chapter's cleaned body. `None` when the
    /// heading could not be found there.
    pub span: Option<Range<usize>>,
}

impl SubChapter {
    pub fn body<'a>(&self, chapter_body: &'a str) -> Option<&'a str> {
        self.span
            .as_ref()
            .and_then(|span| chapter_body.get(span.clone()))
    }

    pub fn heading(&self) -> String {
        format!("{} {}", self.number, self.title)
    }
}

#[derive(Debug, Clone)]
pub struct Chapter {
    pub name: String,
    pub number: Option<String>,
    pub page: Option<u32>,
    pub span: Range<usize>,
    pub body: String,
    pub sub_chapters: Vec<SubChapter>,
}

impl Chapter {
    pub fn heading(&self) -> String {
        match &self.number {
            Some(number) => format!("{}. {}", number, self.name),
            None => self.name.clone(),
        }
    }

    pub fn located_sub_chapters(&self) -> impl Iterator<Item = &SubChapter> {
        self.sub_chapters
            .iter()
            .filter(|sub_chapter| sub_chapter.span.is_some())
    }
}
