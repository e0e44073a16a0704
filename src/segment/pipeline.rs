use super::*;

#[derive(Debug, Clone)]
pub struct Extraction {
    pub chapters: Vec<Chapter>,
    pub warnings: Vec<String>,
}

pub fn extract_chapters(document: &Document, catalog: &Catalog) -> Result<Extraction> {
    let mut chapters = Vec::<Chapter>::with_capacity(catalog.chapters.len());
    let mut warnings = Vec::<String>::new();

    for spec in &catalog.chapters {
        let chapter = extract_chapter(document.text(), spec, &catalog.footer, &mut warnings)
            .with_context(|| format!("failed to extract chapter {}", spec.name))?;
        chapters.push(chapter);
    }

    info!(
        chapters = chapters.len(),
        sub_chapters = chapters
            .iter()
            .map(|chapter| chapter.located_sub_chapters().count())
            .sum::<usize>(),
        warnings = warnings.len(),
        "extraction complete"
    );

    Ok(Extraction { chapters, warnings })
}

fn extract_chapter(
    text: &str,
    spec: &CatalogChapter,
    footer: &Regex,
    warnings: &mut Vec<String>,
) -> Result<Chapter> {
    let number = spec.number.as_deref();

    let (entries, page) = match number {
        Some(number) => (parse_sub_chapters(text, number)?, chapter_page(text, number)?),
        None => (Vec::new(), None),
    };

    let span = locate(text, &spec.start, &spec.end)?;
    let body = strip_noise(&text[span.clone()], number, footer)?;

    let sub_chapters = if entries.is_empty() {
        Vec::new()
    } else {
        split_bodies(&body, &entries)?
    };

    for sub_chapter in sub_chapters.iter().filter(|sub| sub.span.is_none()) {
        warnings.push(format!(
            "chapter {}: heading for sub-chapter {} not found",
            spec.name,
            sub_chapter.heading()
        ));
    }

    info!(
        chapter = %spec.name,
        number = number.unwrap_or("-"),
        start = span.start,
        end = span.end,
        toc_entries = entries.len(),
        located = sub_chapters.iter().filter(|sub| sub.span.is_some()).count(),
        "resolved chapter"
    );

    Ok(Chapter {
        name: spec.name.clone(),
        number: spec.number.clone(),
        page,
        span,
        body,
        sub_chapters,
    })
}
