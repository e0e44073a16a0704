use super::*;

pub trait TextMatcher {
    fn find_span_at(&self, haystack: &str, start: usize) -> Option<Range<usize>>;

    fn describe(&self) -> String;

    fn find_span(&self, haystack: &str) -> Option<Range<usize>> {
        self.find_span_at(haystack, 0)
    }
}

impl TextMatcher for Regex {
    fn find_span_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        if start > haystack.len() {
            return None;
        }
        self.find_at(haystack, start).map(|found| found.range())
    }

    fn describe(&self) -> String {
        self.as_str().escape_debug().to_string()
    }
}

impl TextMatcher for str {
    fn find_span_at(&self, haystack: &str, start: usize) -> Option<Range<usize>> {
        let offset = haystack.get(start..)?.find(self)? + start;
        Some(offset..offset + self.len())
    }

    fn describe(&self) -> String {
        self.escape_debug().to_string()
    }
}
