use super::*;

pub fn locate<S, E>(document: &str, start: &S, end: &E) -> Result<Range<usize>>
where
    S: TextMatcher + ?Sized,
    E: TextMatcher + ?Sized,
{
    let start_span = start
        .find_span(document)
        .with_context(|| format!("chapter start marker not found: {}", start.describe()))?;
    let end_span = end
        .find_span(document)
        .with_context(|| format!("chapter end marker not found: {}", end.describe()))?;

    if end_span.start < start_span.start {
        bail!(
            "chapter end marker {} (offset {}) precedes start marker {} (offset {})",
            end.describe(),
            end_span.start,
            start.describe(),
            start_span.start
        );
    }

    Ok(start_span.start..end_span.start)
}
