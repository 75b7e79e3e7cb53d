// src/core/tokenizer.rs
//! Tag-level tokenizer for table regions.
//!
//! Every scan here owns its cursor. Nested scans (cells inside a row, a
//! route block inside a cell) therefore never disturb an outer scan, no
//! matter how they interleave.

use regex::Regex;

use super::clean::{clean_fragment, to_lower};

/// Substring of `document` between the end of the `anchor` match and the
/// next closing `close_tag`, or `None` when either is missing.
pub fn region<'a>(document: &'a str, anchor: &Regex, close_tag: &str) -> Option<&'a str> {
    let m = anchor.find(document)?;
    let start = m.end();
    let close = format!("</{}>", to_lower(close_tag));
    let end = to_lower(&document[start..]).find(&close)?;
    Some(&document[start..start + end])
}

/// Lazy, finite, non-restartable iterator over `<tag ...> ... </tag>`
/// blocks in document order. Tag matching is case-insensitive.
pub struct TagBlocks<'a> {
    source: &'a str,
    lower: String,
    open: String,
    close: String,
    pos: usize,
}

impl<'a> TagBlocks<'a> {
    pub fn new(source: &'a str, tag: &str) -> Self {
        let tag = to_lower(tag);
        Self {
            source,
            lower: to_lower(source),
            open: format!("<{tag}"),
            close: format!("</{tag}>"),
            pos: 0,
        }
    }
}

impl<'a> Iterator for TagBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.lower.get(self.pos..)?.find(&self.open)? + self.pos;
        let open_end = self.source[start..].find('>')? + start + 1;
        let end_rel = self.lower.get(open_end..)?.find(&self.close)?;
        let end = open_end + end_rel + self.close.len();
        self.pos = end;
        Some(&self.source[start..end])
    }
}

/// Ordered cell blocks for a tag alternation (e.g. `td`/`th`). Picks the
/// earliest next opening tag among the alternatives each step, so mixed
/// rows come out in document order.
pub struct CellBlocks<'a> {
    source: &'a str,
    lower: String,
    tags: Vec<(String, String)>,
    pos: usize,
}

impl<'a> CellBlocks<'a> {
    pub fn new(source: &'a str, tags: &[String]) -> Self {
        let tags = tags
            .iter()
            .map(|t| {
                let t = to_lower(t);
                (format!("<{t}"), format!("</{t}>"))
            })
            .collect();
        Self { source, lower: to_lower(source), tags, pos: 0 }
    }
}

impl<'a> Iterator for CellBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let tail = self.lower.get(self.pos..)?;
        let mut best: Option<(usize, usize)> = None; // (offset, tag index)
        for (k, (open, _)) in self.tags.iter().enumerate() {
            if let Some(i) = tail.find(open) {
                if best.is_none_or(|(b, _)| i < b) {
                    best = Some((i, k));
                }
            }
        }
        let (rel, k) = best?;
        let start = self.pos + rel;
        let open_end = self.source[start..].find('>')? + start + 1;
        let close = &self.tags[k].1;
        let end_rel = self.lower.get(open_end..)?.find(close)?;
        let end = open_end + end_rel + close.len();
        self.pos = end;
        Some(&self.source[start..end])
    }
}

/// Raw contents between the opening tag and the final closing tag.
pub fn inner(block: &str) -> &str {
    match (block.find('>'), block.rfind('<')) {
        (Some(oe), Some(cs)) if cs > oe => &block[oe + 1..cs],
        _ => "",
    }
}

/// Contents of a block after its opening tag, cleaned for record fields.
pub fn inner_text(block: &str) -> String {
    clean_fragment(inner(block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn anchor(pat: &str) -> Regex {
        RegexBuilder::new(pat).case_insensitive(true).build().unwrap()
    }

    #[test]
    fn region_between_anchor_and_close() {
        let doc = "junk<table class=\"res\"><tr><td>x</td></tr></table>junk";
        let re = anchor(r#"<table class="res">"#);
        assert_eq!(region(doc, &re, "table"), Some("<tr><td>x</td></tr>"));
    }

    #[test]
    fn region_missing_anchor_or_close() {
        let re = anchor("<table>");
        assert_eq!(region("nothing here", &re, "table"), None);
        assert_eq!(region("<table><tr>unterminated", &re, "table"), None);
    }

    #[test]
    fn rows_in_document_order() {
        let table = "<TR><td>a</td></TR> <tr><td>b</td></tr>";
        let rows: Vec<&str> = TagBlocks::new(table, "tr").collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains('a'));
        assert!(rows[1].contains('b'));
    }

    #[test]
    fn cell_alternation_keeps_document_order() {
        let row = "<tr><th>h</th><td>1</td><TD>2</TD></tr>";
        let cells: Vec<String> = CellBlocks::new(row, &[s!("td"), s!("th")])
            .map(inner_text)
            .collect();
        assert_eq!(cells, vec!["h", "1", "2"]);
    }

    #[test]
    fn nested_scans_use_independent_cursors() {
        let table = "<tr><td>a1</td><td>a2</td></tr><tr><td>b1</td></tr>";
        let mut rows = TagBlocks::new(table, "tr");

        let first = rows.next().unwrap();
        // Exhaust an inner scan before touching the outer one again.
        let inner_cells: Vec<&str> = CellBlocks::new(first, &[s!("td")]).collect();
        assert_eq!(inner_cells.len(), 2);

        let second = rows.next().unwrap();
        assert!(second.contains("b1"));
        assert!(rows.next().is_none());
    }

    #[test]
    fn inner_text_cleans_markup() {
        assert_eq!(inner_text("<td class=\"x\"> <b>Central</b>&nbsp;Station </td>"), "Central Station");
        assert_eq!(inner_text("<td></td>"), "");
    }
}
