use super::*;

pub fn split_bodies(chapter_body: &str, entries: &[TocEntry]) -> Result<Vec<SubChapter>> {
    let mut starts = Vec::<Option<usize>>::with_capacity(entries.len());
    let mut cursor = 0usize;

    // Search after the previous heading so spans stay ordered.
    for entry in entries {
        let marker = sub_chapter_marker(entry)?;
        match marker.find_span_at(chapter_body, cursor) {
            Some(span) => {
                starts.push(Some(span.start));
                cursor = span.end;
            }
            None => {
                warn!(
                    sub_chapter = %entry.number,
                    title = %entry.title,
                    "sub-chapter heading not found in chapter body; skipping"
                );
                starts.push(None);
            }
        }
    }

    let mut sub_chapters = Vec::<SubChapter>::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let span = starts[index].map(|start| {
            let end = starts[index + 1..]
                .iter()
                .flatten()
                .next()
                .copied()
                .unwrap_or(chapter_body.len());
            start..end
        });

        sub_chapters.push(SubChapter {
            number: entry.number.clone(),
            title: entry.title.clone(),
            page: entry.page,
            span,
        });
    }

    Ok(sub_chapters)
}

fn sub_chapter_marker(entry: &TocEntry) -> Result<Regex> {
    let pattern = format!(
        "(?i){} {}",
        regex::escape(&entry.number),
        regex::escape(&entry.title)
    );
    Regex::new(&pattern).with_context(|| {
        format!(
            "failed to compile heading marker for sub-chapter {}",
            entry.number
        )
    })
}
