use serde::Serialize;

use crate::segment::{Chapter, SubChapter};

#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source_path: String,
    pub source_sha256: String,
    pub document_len: usize,
    pub chapter_count: usize,
    pub chapters: Vec<ChapterRecord>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterRecord {
    pub name: String,
    pub number: Option<String>,
    pub page: Option<u32>,
    pub byte_start: usize,
    pub byte_end: usize,
    pub body: String,
    pub sub_chapters: Vec<SubChapterRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubChapterRecord {
    pub number: String,
    pub title: String,
    pub page: u32,
    /// Offsets are relative to the cleaned chapter body.
    pub byte_start: usize,
    pub byte_end: usize,
    pub body: String,
}

impl ChapterRecord {
    pub fn from_chapter(chapter: &Chapter) -> Self {
        Self {
            name: chapter.name.clone(),
            number: chapter.number.clone(),
            page: chapter.page,
            byte_start: chapter.span.start,
            byte_end: chapter.span.end,
            body: chapter.body.clone(),
            sub_chapters: chapter
                .located_sub_chapters()
                .filter_map(|sub_chapter| {
                    SubChapterRecord::from_sub_chapter(sub_chapter, &chapter.body)
                })
                .collect(),
        }
    }
}

impl SubChapterRecord {
    fn from_sub_chapter(sub_chapter: &SubChapter, chapter_body: &str) -> Option<Self> {
        let span = sub_chapter.span.clone()?;
        let body = sub_chapter.body(chapter_body)?.to_string();
        Some(Self {
            number: sub_chapter.number.clone(),
            title: sub_chapter.title.clone(),
            page: sub_chapter.page,
            byte_start: span.start,
            byte_end: span.end,
            body,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub source_path: String,
    pub chapters: Vec<ChapterPages>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChapterPages {
    pub name: String,
    pub number: String,
    pub page: Option<u32>,
    pub sub_chapters: Vec<PageEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub number: String,
    pub title: String,
    pub page: u32,
}
