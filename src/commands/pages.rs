use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog;
use crate::cli::PagesArgs;
use crate::model::{ChapterPages, PageEntry, PageReport};
use crate::segment::{chapter_page, parse_sub_chapters, read_document};

pub fn run(args: PagesArgs) -> Result<()> {
    let document = read_document(&args.source.input)?;
    let catalog = catalog::load(args.source.catalog_path.as_deref())?;

    let mut chapters = Vec::<ChapterPages>::new();
    for spec in &catalog.chapters {
        // Unnumbered chapters have no table-of-contents line to look up.
        let Some(number) = spec.number.as_deref() else {
            continue;
        };
        chapters.push(lookup_chapter_pages(document.text(), &spec.name, number)?);
    }

    info!(
        chapters = chapters.len(),
        entries = chapters.iter().map(|chapter| chapter.sub_chapters.len()).sum::<usize>(),
        "page lookup complete"
    );

    let report = PageReport {
        source_path: args.source.input.display().to_string(),
        chapters,
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &report)
            .context("failed to serialize page json output")?;
        writeln!(output)?;
    } else {
        render_page_lines(&mut output, &report)?;
    }
    output.flush()?;
    Ok(())
}

fn lookup_chapter_pages(text: &str, name: &str, number: &str) -> Result<ChapterPages> {
    let page = chapter_page(text, number)
        .with_context(|| format!("failed to look up page for chapter {name}"))?;
    let sub_chapters = parse_sub_chapters(text, number)
        .with_context(|| format!("failed to parse table of contents for chapter {name}"))?
        .into_iter()
        .map(|entry| PageEntry {
            number: entry.number,
            title: entry.title,
            page: entry.page,
        })
        .collect();

    Ok(ChapterPages {
        name: name.to_string(),
        number: number.to_string(),
        page,
        sub_chapters,
    })
}

fn render_page_lines<W: Write>(output: &mut W, report: &PageReport) -> Result<()> {
    for chapter in &report.chapters {
        match chapter.page {
            Some(page) => writeln!(output, "{}. {}\t{}", chapter.number, chapter.name, page)?,
            None => writeln!(output, "{}. {}\t-", chapter.number, chapter.name)?,
        }
        for entry in &chapter.sub_chapters {
            writeln!(output, "  {} {}\t{}", entry.number, entry.title, entry.page)?;
        }
    }
    Ok(())
}
