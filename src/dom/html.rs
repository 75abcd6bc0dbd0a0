//! Case-insensitive scanning over raw page markup.
//!
//! The documents fed to the pipeline are real-site HTML: attribute order
//! varies, classes stack, tags nest, and markup changes without notice.
//! Everything here works on byte offsets into the original string so the
//! annotator can splice new nodes back in, and every miss is a `None`,
//! never a panic.

/// Byte offsets of one element in a document.
/// `start..open_end` is the open tag, `open_end..close_start` the inner
/// markup, `close_start..end` the close tag. Self-closing elements have an
/// empty inner range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub start: usize,
    pub open_end: usize,
    pub close_start: usize,
    pub end: usize
}

impl Element {
    pub fn inner<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.open_end..self.close_start]
    }

    pub fn open_tag<'a>(&self, doc: &'a str) -> &'a str {
        &doc[self.start..self.open_end]
    }
}

fn to_lower(s: &str) -> String {
    // ASCII-only lowering keeps byte offsets aligned with the source
    s.chars().map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c }).collect()
}

/// Name of the tag an open tag opens, e.g. `"a"` for `<a href="...">`.
pub fn tag_name(open_tag: &str) -> Option<&str> {
    let rest = open_tag.strip_prefix('<')?;
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(rest.len());

    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}

/// Value of an attribute within an open tag. Attribute names match
/// case-insensitively; single, double and missing quotes are tolerated.
pub fn attr<'a>(open_tag: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open_tag);
    let needle = to_lower(name);
    let bytes = open_tag.as_bytes();
    let mut search = 0usize;

    while let Some(rel) = lc[search..].find(&needle) {
        let at = search + rel;
        search = at + needle.len();

        if at == 0 || !bytes[at - 1].is_ascii_whitespace() {
            continue;
        }

        let mut i = at + needle.len();
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }

        let quote = bytes[i];
        if quote == b'"' || quote == b'\'' {
            let vstart = i + 1;
            let vend = open_tag[vstart..].find(quote as char)? + vstart;
            return Some(&open_tag[vstart..vend]);
        }

        let vstart = i;
        let vend = open_tag[vstart..]
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .map(|j| vstart + j)
            .unwrap_or(open_tag.len());
        return Some(&open_tag[vstart..vend]);
    }

    None
}

/// Whole-word match against the `class` attribute of an open tag.
pub fn has_class(open_tag: &str, class: &str) -> bool {
    match attr(open_tag, "class") {
        Some(value) => value.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)),
        None => false
    }
}

/// Next element named `tag` at or after byte offset `from`.
pub fn next_element(doc: &str, tag: &str, from: usize) -> Option<Element> {
    scan(doc, from, |open| tag_name(open).is_some_and(|n| n.eq_ignore_ascii_case(tag)))
}

/// Next element carrying `class` (any tag) at or after byte offset `from`.
pub fn next_element_with_class(doc: &str, class: &str, from: usize) -> Option<Element> {
    scan(doc, from, |open| has_class(open, class))
}

fn scan(doc: &str, from: usize, matches: impl Fn(&str) -> bool) -> Option<Element> {
    let mut pos = from;

    while pos < doc.len() {
        let start = pos + doc[pos..].find('<')?;
        let open_end = start + doc[start..].find('>')? + 1;
        let open = &doc[start..open_end];
        pos = open_end;

        if open.starts_with("</") || open.starts_with("<!") {
            continue;
        }
        if !matches(open) {
            continue;
        }

        let name = match tag_name(open) {
            Some(n) => n,
            None => continue
        };

        if open.ends_with("/>") {
            return Some(Element {
                start,
                open_end,
                close_start: open_end,
                end: open_end
            });
        }

        // First close tag with the same name; good enough for the site's
        // markup, which never nests ratings inside ratings.
        let close_pat = format!("</{}", to_lower(name));
        let close_start = open_end + to_lower(&doc[open_end..]).find(&close_pat)?;
        let end = close_start + doc[close_start..].find('>')? + 1;

        return Some(Element {
            start,
            open_end,
            close_start,
            end
        });
    }

    None
}

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

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

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }

    out.trim().to_string()
}

/// Visible text of a markup fragment: entities resolved, tags stripped,
/// whitespace collapsed.
pub fn text(fragment: &str) -> String {
    normalize_ws(&strip_tags(&normalize_entities(fragment)))
}
