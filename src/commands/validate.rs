use anyhow::{Result, bail};
use tracing::{info, warn};

use crate::catalog::{self, Catalog};
use crate::cli::ValidateArgs;
use crate::segment::{Chapter, extract_chapters, read_document};

pub fn run(args: ValidateArgs) -> Result<()> {
    let document = read_document(&args.source.input)?;
    let catalog = catalog::load(args.source.catalog_path.as_deref())?;
    let extraction = extract_chapters(&document, &catalog)?;

    for warning in &extraction.warnings {
        warn!(warning = %warning, "extraction warning");
    }

    let failures = check_invariants(&extraction.chapters, &catalog);
    for failure in &failures {
        warn!(failure = %failure, "invariant check failed");
    }

    info!(
        chapters = extraction.chapters.len(),
        warnings = extraction.warnings.len(),
        failures = failures.len(),
        "validation complete"
    );

    if !failures.is_empty() {
        bail!("{} invariant check(s) failed", failures.len());
    }
    Ok(())
}

fn check_invariants(chapters: &[Chapter], catalog: &Catalog) -> Vec<String> {
    let mut failures = Vec::<String>::new();

    for (index, pair) in chapters.windows(2).enumerate() {
        let (Some(current), Some(next)) = (
            catalog.chapters.get(index),
            catalog.chapters.get(index + 1),
        ) else {
            continue;
        };
        if current.shares_boundary_with(next) && pair[0].span.end != pair[1].span.start {
            failures.push(format!(
                "chapter {} ends at {} but chapter {} starts at {}",
                pair[0].name, pair[0].span.end, pair[1].name, pair[1].span.start
            ));
        }
    }

    for chapter in chapters {
        failures.extend(check_sub_chapter_spans(chapter));
    }

    failures
}

fn check_sub_chapter_spans(chapter: &Chapter) -> Vec<String> {
    let mut failures = Vec::<String>::new();
    let located = chapter.located_sub_chapters().collect::<Vec<_>>();

    for pair in located.windows(2) {
        let (Some(current), Some(next)) = (&pair[0].span, &pair[1].span) else {
            continue;
        };
        if current.end != next.start {
            failures.push(format!(
                "chapter {}: sub-chapter {} ends at {} but {} starts at {}",
                chapter.name, pair[0].number, current.end, pair[1].number, next.start
            ));
        }
    }

    if let Some(last) = located.last().and_then(|sub_chapter| sub_chapter.span.as_ref()) {
        if last.end != chapter.body.len() {
            failures.push(format!(
                "chapter {}: last sub-chapter ends at {} instead of body end {}",
                chapter.name,
                last.end,
                chapter.body.len()
            ));
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::segment::SubChapter;

    fn sub_chapter(number: &str, span: Option<std::ops::Range<usize>>) -> SubChapter {
        SubChapter {
            number: number.to_string(),
            title: "Title".to_string(),
            page: 1,
            span,
        }
    }

    fn chapter(
        name: &str,
        span: std::ops::Range<usize>,
        body: &str,
        sub_chapters: Vec<SubChapter>,
    ) -> Chapter {
        Chapter {
            name: name.to_string(),
            number: None,
            page: None,
            span,
            body: body.to_string(),
            sub_chapters,
        }
    }

    #[test]
    fn back_to_back_sub_chapters_pass() {
        let body = "0123456789";
        let street = chapter(
            "Street",
            0..10,
            body,
            vec![
                sub_chapter("13.1", Some(0..4)),
                sub_chapter("13.2", None),
                sub_chapter("13.3", Some(4..10)),
            ],
        );

        assert!(check_sub_chapter_spans(&street).is_empty());
    }

    #[test]
    fn gap_and_short_tail_are_reported() {
        let street = chapter(
            "Street",
            0..10,
            "0123456789",
            vec![sub_chapter("13.1", Some(0..3)), sub_chapter("13.2", Some(4..8))],
        );

        let failures = check_sub_chapter_spans(&street);
        assert_eq!(failures.len(), 2);
        assert!(failures[0].contains("13.1"));
        assert!(failures[1].contains("body end 10"));
    }

    #[test]
    fn shared_boundary_mismatch_is_reported() {
        let catalog = Catalog::compile(builtin()).expect("builtin catalog compiles");
        let chapters = vec![
            chapter("Street", 10..50, "", Vec::new()),
            chapter("Street Touring", 60..90, "", Vec::new()),
        ];

        let failures = check_invariants(&chapters, &catalog);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].contains("Street Touring starts at 60"));
    }
}
