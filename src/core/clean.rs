// src/core/clean.rs

/// Decode the handful of entities that actually show up in timetable cells.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop everything between '<' and '>'. Good enough for tag-delimited
/// tables; this is not a general HTML parser. Keeps line breaks, so route
/// blocks stay line-addressable after stripping.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// `<br>` variants become newlines before tag stripping, so providers that
/// render route lines with breaks keep their line structure.
pub fn breaks_to_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let lower = to_lower(s);
    let mut i = 0;
    while i < s.len() {
        if lower[i..].starts_with("<br") {
            if let Some(close) = s[i..].find('>') {
                out.push('\n');
                i += close + 1;
                continue;
            }
        }
        // ASCII-safe: advance one char
        let ch = s[i..].chars().next().unwrap_or('\0');
        out.push(ch);
        i += ch.len_utf8();
    }
    out
}

/// The standard cell cleanup: entities, then tags, then whitespace.
pub fn clean_fragment(s: &str) -> String {
    normalize_ws(&strip_tags(&normalize_entities(s)))
}

/// Lowercase ASCII only, so byte offsets keep lining up with the source.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// "central STATION" -> "Central Station". Used for destination names
/// where the provider shouts or mumbles.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split(' ').enumerate() {
        if i > 0 { out.push(' '); }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    out
}
