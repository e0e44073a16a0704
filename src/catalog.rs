use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DEFAULT_FOOTER_PATTERN: &str =
    r"(?i)([0-9]+ — )*202[0-2] SCCA® NATIONAL SOLO® RULES( )*(— [0-9]+)*";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default = "default_footer_pattern")]
    pub footer_pattern: String,
    pub chapters: Vec<ChapterSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChapterSpec {
    pub name: String,
    #[serde(default)]
    pub number: Option<String>,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub footer: Regex,
    pub chapters: Vec<CatalogChapter>,
}

#[derive(Debug, Clone)]
pub struct CatalogChapter {
    pub name: String,
    pub number: Option<String>,
    pub start: Regex,
    pub end: Regex,
}

impl CatalogChapter {
    pub fn shares_boundary_with(&self, next: &CatalogChapter) -> bool {
        self.end.as_str() == next.start.as_str()
    }
}

impl Catalog {
    pub fn compile(file: CatalogFile) -> Result<Self> {
        let footer = Regex::new(&file.footer_pattern)
            .with_context(|| format!("invalid footer pattern: {}", file.footer_pattern))?;

        let chapters = file
            .chapters
            .into_iter()
            .map(|spec| {
                let start = Regex::new(&spec.start).with_context(|| {
                    format!("invalid start pattern for chapter {}: {}", spec.name, spec.start)
                })?;
                let end = Regex::new(&spec.end).with_context(|| {
                    format!("invalid end pattern for chapter {}: {}", spec.name, spec.end)
                })?;
                Ok(CatalogChapter {
                    name: spec.name,
                    number: spec.number.filter(|number| !number.trim().is_empty()),
                    start,
                    end,
                })
            })
            .collect::<Result<Vec<CatalogChapter>>>()?;

        Ok(Self { footer, chapters })
    }
}

pub fn load(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Catalog::compile(builtin());
    };

    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file: CatalogFile = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    info!(
        path = %path.display(),
        chapters = file.chapters.len(),
        "loaded chapter catalog"
    );
    Catalog::compile(file)
}

pub fn builtin() -> CatalogFile {
    let chapter = |name: &str, number: Option<&str>, start: &str, end: &str| ChapterSpec {
        name: name.to_string(),
        number: number.map(str::to_string),
        start: heading_pattern(start),
        end: heading_pattern(end),
    };

    CatalogFile {
        footer_pattern: default_footer_pattern(),
        chapters: vec![
            chapter(
                "Street",
                Some("13"),
                "13. STREET CATEGORY",
                "14. STREET TOURING® CATEGORY",
            ),
            chapter(
                "Street Touring",
                Some("14"),
                "14. STREET TOURING® CATEGORY",
                "15. STREET PREPARED CATEGORY",
            ),
            chapter(
                "Street Prepared",
                Some("15"),
                "15. STREET PREPARED CATEGORY",
                "16. STREET MODIFIED CATEGORY",
            ),
            chapter(
                "Street Modified",
                Some("16"),
                "16. STREET MODIFIED CATEGORY",
                "17. PREPARED CATEGORY",
            ),
            chapter(
                "Prepared",
                Some("17"),
                "17. PREPARED CATEGORY",
                "18. MODIFIED CATEGORY",
            ),
            chapter(
                "Modified",
                Some("18"),
                "18. MODIFIED CATEGORY",
                "19. KART CATEGORY",
            ),
            chapter(
                "Solo Spec Coupe",
                Some("20"),
                "20. SOLO® SPEC COUPE (SSC)",
                "21. PROSOLO® NATIONAL SERIES RULES",
            ),
            chapter(
                "Extreme Street",
                None,
                "EXTREME STREET (XS)",
                "APPENDIX C - SOLO® ROLL BAR STANDARDS",
            ),
        ],
    }
}

pub fn heading_pattern(heading: &str) -> String {
    format!(r"\n{}\n", regex::escape(heading))
}

fn default_footer_pattern() -> String {
    DEFAULT_FOOTER_PATTERN.to_string()
}
