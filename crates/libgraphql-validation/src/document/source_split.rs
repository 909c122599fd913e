use std::ops::Range;

const EXECUTABLE_KEYWORDS: [&str; 4] = [
    "fragment",
    "mutation",
    "query",
    "subscription",
];

const TYPE_SYSTEM_KEYWORDS: [&str; 9] = [
    "directive",
    "enum",
    "extend",
    "input",
    "interface",
    "scalar",
    "schema",
    "type",
    "union",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RunKind {
    Executable,
    TypeSystem,
}

/// A span of source text holding one or more consecutive top-level
/// definitions of the same [`RunKind`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DefinitionRun {
    pub kind: RunKind,
    pub range: Range<usize>,
}

#[derive(Clone, Copy, Debug)]
enum Token<'a> {
    CloseBrace,
    CloseParen,
    Name(&'a str),
    Punct(u8),
    Str,
}

/// Split `source` into runs of executable and type-system definitions by
/// scanning its top-level tokens.
///
/// The runs are contiguous and together cover all of `source`. Leading
/// ignored text (whitespace, comments) belongs to the first run.
pub(crate) fn split_definition_runs(source: &str) -> Vec<DefinitionRun> {
    let bytes = source.as_bytes();
    let mut starts: Vec<(usize, RunKind)> = vec![];
    let mut depth = 0usize;
    let mut prev: Option<Token<'_>> = None;

    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        match byte {
            b'#' => {
                while i < bytes.len() && !matches!(bytes[i], b'\n' | b'\r') {
                    i += 1;
                }
                continue;
            },

            b'"' => {
                // A top-level string can only be a description, which opens
                // the type-system definition that follows it.
                if depth == 0 && !matches!(prev, Some(Token::Str)) {
                    starts.push((i, RunKind::TypeSystem));
                }
                i = skip_string(bytes, i);
                prev = Some(Token::Str);
                continue;
            },

            b'{' | b'(' | b'[' => {
                if byte == b'{' && depth == 0 && matches!(prev, None | Some(Token::CloseBrace)) {
                    starts.push((i, RunKind::Executable));
                }
                depth += 1;
                prev = Some(Token::Punct(byte));
            },

            b'}' | b')' | b']' => {
                depth = depth.saturating_sub(1);
                prev = Some(match byte {
                    b'}' => Token::CloseBrace,
                    b')' => Token::CloseParen,
                    _ => Token::Punct(byte),
                });
            },

            b'_' | b'A'..=b'Z' | b'a'..=b'z' => {
                let start = i;
                while i < bytes.len()
                    && matches!(bytes[i], b'_' | b'0'..=b'9' | b'A'..=b'Z' | b'a'..=b'z') {
                    i += 1;
                }
                let name = &source[start..i];
                if depth == 0 && keyword_may_start_definition(prev) {
                    if EXECUTABLE_KEYWORDS.contains(&name) {
                        starts.push((start, RunKind::Executable));
                    } else if TYPE_SYSTEM_KEYWORDS.contains(&name) {
                        starts.push((start, RunKind::TypeSystem));
                    }
                }
                prev = Some(Token::Name(name));
                continue;
            },

            b' ' | b'\t' | b'\n' | b'\r' | b',' => (),

            _ if byte.is_ascii() => prev = Some(Token::Punct(byte)),

            // Non-ASCII bytes outside of strings and comments (e.g. a BOM).
            _ => (),
        }
        i += 1;
    }

    let mut runs: Vec<DefinitionRun> = vec![];
    for (start, kind) in starts {
        if let Some(run) = runs.last_mut() {
            if run.kind == kind {
                continue;
            }
            run.range.end = start;
        }
        let run_start = if runs.is_empty() { 0 } else { start };
        runs.push(DefinitionRun {
            kind,
            range: run_start..source.len(),
        });
    }
    runs
}

/// The text of `range` preceded by blank padding that keeps every line and
/// column of the original `source`, so parse positions stay accurate.
pub(crate) fn positioned_source(source: &str, range: Range<usize>) -> String {
    let mut padded: String = source[..range.start]
        .chars()
        .map(|c| if matches!(c, '\n' | '\r' | '\t' | '\u{feff}') { c } else { ' ' })
        .collect();
    padded.push_str(&source[range]);
    padded
}

fn keyword_may_start_definition(prev: Option<Token<'_>>) -> bool {
    match prev {
        None | Some(Token::CloseBrace) | Some(Token::CloseParen) => true,
        Some(Token::Str) => false,
        Some(Token::Punct(punct)) =>
            !matches!(punct, b'=' | b'|' | b'&' | b':' | b'@' | b'$'),
        Some(Token::Name(name)) =>
            !EXECUTABLE_KEYWORDS.contains(&name)
                && !TYPE_SYSTEM_KEYWORDS.contains(&name)
                && !matches!(name, "implements" | "on"),
    }
}

/// Index just past the string (or block string) starting at `start`.
fn skip_string(bytes: &[u8], start: usize) -> usize {
    if bytes[start..].starts_with(b"\"\"\"") {
        let mut i = start + 3;
        while i < bytes.len() {
            if bytes[i..].starts_with(b"\\\"\"\"") {
                i += 4;
            } else if bytes[i..].starts_with(b"\"\"\"") {
                return i + 3;
            } else {
                i += 1;
            }
        }
        return bytes.len();
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i + 1,
            b'\n' | b'\r' => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}
