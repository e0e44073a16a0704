use super::*;

pub fn strip_noise(body: &str, chapter_number: Option<&str>, footer: &Regex) -> Result<String> {
    let mut cleaned = body.to_string();

    if let Some(number) = chapter_number {
        let header_regex = running_header_regex(number)?;
        let before = cleaned.len();
        cleaned = header_regex.replace_all(&cleaned, "").into_owned();
        debug!(
            chapter = number,
            bytes_removed = before - cleaned.len(),
            "removed running chapter headers"
        );
    }

    let before = cleaned.len();
    cleaned = footer.replace_all(&cleaned, "").into_owned();
    debug!(bytes_removed = before - cleaned.len(), "removed footer stamps");

    Ok(cleaned)
}

fn running_header_regex(chapter_number: &str) -> Result<Regex> {
    let pattern = format!(r"\n?\x0c{}\. .+\n", regex::escape(chapter_number));
    Regex::new(&pattern).with_context(|| {
        format!("failed to compile running header regex for chapter {chapter_number}")
    })
}
