use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::catalog;
use crate::cli::ExtractArgs;
use crate::model::{ChapterRecord, ExtractionReport};
use crate::segment::{Chapter, extract_chapters, read_document};
use crate::util::{now_utc_string, write_json_pretty};

const REPORT_VERSION: u32 = 1;

pub fn run(args: ExtractArgs) -> Result<()> {
    let document = read_document(&args.source.input)?;
    let catalog = catalog::load(args.source.catalog_path.as_deref())?;

    // Resolve everything before writing anything.
    let extraction = extract_chapters(&document, &catalog)?;
    let chapters = select_chapters(&extraction.chapters, &args.chapters)?;

    if !args.json && args.output.is_none() {
        return write_text_blocks(&chapters);
    }

    let report = ExtractionReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source_path: args.source.input.display().to_string(),
        source_sha256: document.source_sha256().to_string(),
        document_len: document.len(),
        chapter_count: chapters.len(),
        chapters: chapters
            .iter()
            .map(|chapter| ChapterRecord::from_chapter(chapter))
            .collect(),
        warnings: extraction.warnings,
    };

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &report)?;
            info!(
                path = %path.display(),
                chapters = report.chapter_count,
                "wrote extraction report"
            );
            Ok(())
        }
        None => {
            let mut output = io::BufWriter::new(io::stdout().lock());
            serde_json::to_writer_pretty(&mut output, &report)
                .context("failed to serialize extraction json output")?;
            writeln!(output)?;
            output.flush()?;
            Ok(())
        }
    }
}

fn select_chapters<'a>(chapters: &'a [Chapter], wanted: &[String]) -> Result<Vec<&'a Chapter>> {
    if wanted.is_empty() {
        return Ok(chapters.iter().collect());
    }

    for number in wanted {
        let known = chapters
            .iter()
            .any(|chapter| chapter_matches(chapter, number));
        if !known {
            bail!("chapter {number} is not in the catalog");
        }
    }

    Ok(chapters
        .iter()
        .filter(|chapter| wanted.iter().any(|number| chapter_matches(chapter, number)))
        .collect())
}

fn chapter_matches(chapter: &Chapter, wanted: &str) -> bool {
    chapter.number.as_deref() == Some(wanted) || chapter.name.eq_ignore_ascii_case(wanted)
}

fn write_text_blocks(chapters: &[&Chapter]) -> Result<()> {
    let mut output = io::BufWriter::new(io::stdout().lock());
    render_text_blocks(&mut output, chapters)?;
    output.flush()?;
    Ok(())
}

fn render_text_blocks<W: Write>(output: &mut W, chapters: &[&Chapter]) -> Result<()> {
    for chapter in chapters {
        writeln!(output, "{}", chapter.heading())?;

        if chapter.sub_chapters.is_empty() {
            writeln!(output, "{}", chapter.body)?;
            continue;
        }

        for sub_chapter in chapter.located_sub_chapters() {
            let Some(body) = sub_chapter.body(&chapter.body) else {
                continue;
            };
            writeln!(output, "{}", sub_chapter.heading())?;
            writeln!(output, "{body}")?;
        }
    }

    Ok(())
}
