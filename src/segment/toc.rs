use super::*;

// A single table-of-contents hit is more likely body text that happens to
// look like a leader line than a one-entry chapter.
const MIN_TOC_ENTRIES: usize = 2;

pub fn parse_sub_chapters(document: &str, chapter_number: &str) -> Result<Vec<TocEntry>> {
    let pattern = format!(
        r"{}\.([0-9]+[.A-Z]*) ([^.\n]*)\.+[. ]+([0-9]+)",
        regex::escape(chapter_number)
    );
    let toc_regex = Regex::new(&pattern).with_context(|| {
        format!("failed to compile table-of-contents regex for chapter {chapter_number}")
    })?;

    let mut entries = Vec::<TocEntry>::new();
    for captures in toc_regex.captures_iter(document) {
        let sub_number = captures
            .get(1)
            .map(|value| value.as_str())
            .context("missing sub-chapter number capture")?;
        let title = captures
            .get(2)
            .map(|value| value.as_str().trim())
            .unwrap_or_default();
        let page = captures
            .get(3)
            .map(|value| value.as_str())
            .context("missing page number capture")?;

        entries.push(TocEntry {
            number: format!("{chapter_number}.{sub_number}"),
            title: title.to_string(),
            page: parse_page_number(page).with_context(|| {
                format!("in table-of-contents entry {chapter_number}.{sub_number} {title}")
            })?,
        });
    }

    if entries.len() < MIN_TOC_ENTRIES {
        debug!(
            chapter = chapter_number,
            matches = entries.len(),
            "too few table-of-contents matches; treating chapter as having no sub-chapters"
        );
        return Ok(Vec::new());
    }

    Ok(entries)
}

pub fn chapter_page(document: &str, chapter_number: &str) -> Result<Option<u32>> {
    let pattern = format!(
        r"(?m)^{}\. ([^.\n]*)\.+[. ]+([0-9]+)",
        regex::escape(chapter_number)
    );
    let chapter_regex = Regex::new(&pattern).with_context(|| {
        format!("failed to compile chapter page regex for chapter {chapter_number}")
    })?;

    let Some(captures) = chapter_regex.captures(document) else {
        return Ok(None);
    };
    let page = captures
        .get(2)
        .map(|value| value.as_str())
        .context("missing page number capture")?;

    parse_page_number(page)
        .map(Some)
        .with_context(|| format!("in table-of-contents line for chapter {chapter_number}"))
}

fn parse_page_number(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .with_context(|| format!("invalid table-of-contents page number: {token}"))
}
