use super::*;

const LIGATURES: [(&str, &str); 5] = [
    ("ﬀ", "ff"),
    ("ﬁ", "fi"),
    ("ﬂ", "fl"),
    ("ﬃ", "ffi"),
    ("ﬄ", "ffl"),
];

pub fn read_document(path: &Path) -> Result<Document> {
    let raw = fs::read(path)
        .with_context(|| format!("failed to read rulebook text: {}", path.display()))?;
    let source_sha256 = sha256_hex(&raw);

    let text = match String::from_utf8(raw) {
        Ok(text) => text,
        Err(error) => {
            warn!(
                path = %path.display(),
                valid_up_to = error.utf8_error().valid_up_to(),
                "rulebook text is not valid utf-8; decoding lossily"
            );
            String::from_utf8_lossy(error.as_bytes()).into_owned()
        }
    };

    let document = Document::from_raw(&text, source_sha256);
    info!(
        path = %path.display(),
        raw_len = text.len(),
        normalized_len = document.len(),
        "loaded rulebook text"
    );
    Ok(document)
}

pub fn normalize_text(raw: &str) -> String {
    let mut text = raw.to_string();

    for (ligature, expansion) in LIGATURES {
        if text.contains(ligature) {
            text = text.replace(ligature, expansion);
        }
    }

    text = text.replace(['\u{201c}', '\u{201d}'], "\"");

    // "\n\n\f\f" leaves a fresh "\n\f" after one pass.
    while text.contains("\n\u{000c}") {
        text = text.replace("\n\u{000c}", "");
    }

    text
}
