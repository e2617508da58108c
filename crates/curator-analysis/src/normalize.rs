//! Canonical-form body rewriting.
//!
//! The normalizer applies a fixed pipeline of whitespace and spacing
//! passes: unify line endings, collapse blank-line runs, respace
//! heading markers, pad heading and fence lines with blank lines,
//! strip trailing whitespace, and end the document with exactly one
//! trailing newline. Applying it twice equals applying it once.

use regex::Regex;

use crate::error::AnalysisError;

/// Rewrites body text into canonical structural form.
pub struct Normalizer {
    heading_respace: Regex,
    heading_line: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self, AnalysisError> {
        Ok(Self {
            heading_respace: Regex::new(r"^(#{1,6})\s+(.*)$")?,
            heading_line: Regex::new(r"^#{1,6}\s")?,
        })
    }

    pub fn normalize(&self, body: &str) -> String {
        let unix = body.replace("\r\n", "\n");

        // collapse runs of blank lines to a single empty line
        let mut lines: Vec<String> = Vec::new();
        for line in unix.split('\n') {
            let blank = line.trim().is_empty();
            if blank && lines.last().is_some_and(|prev| prev.is_empty()) {
                continue;
            }
            lines.push(if blank { String::new() } else { line.to_string() });
        }

        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| match self.heading_respace.captures(&line) {
                Some(caps) => format!("{} {}", &caps[1], &caps[2]),
                None => line,
            })
            .collect();

        let lines = pad_around(lines, |line| self.heading_line.is_match(line));
        let lines = pad_around(lines, |line| line.starts_with("```"));

        let joined = lines
            .iter()
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n", joined.trim())
    }
}

/// Insert one blank line between a target line and any non-blank
/// neighbor. Relies on blank lines already being empty strings.
fn pad_around(lines: Vec<String>, target: impl Fn(&str) -> bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let needs_blank = match out.last() {
            Some(prev) => !prev.is_empty() && !line.is_empty() && (target(prev) || target(&line)),
            None => false,
        };
        if needs_blank {
            out.push(String::new());
        }
        out.push(line);
    }
    out
}
