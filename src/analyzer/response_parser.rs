//! Splits model output into the three labeled rhetorical dimensions.
//!
//! Prompts ask for `ETHOS:` / `LOGOS:` / `ENERGEIA:` sections. A JSON object
//! with `ethos`, `logos` and `energeia` string keys is accepted as well, since
//! models sometimes answer structured requests that way.

use crate::error::OpampError;
use crate::models::{DeltaSet, Dimension, RhetoricalProfile};
use serde_json::Value;

pub fn parse_profile(step: &str, response: &str) -> Result<RhetoricalProfile, OpampError> {
    let [ethos, logos, energeia] = parse_dimension_sections(step, response)?;
    Ok(RhetoricalProfile::new(ethos, logos, energeia))
}

pub fn parse_deltas(step: &str, response: &str) -> Result<DeltaSet, OpampError> {
    let [ethos, logos, energeia] = parse_dimension_sections(step, response)?;
    Ok(DeltaSet::new(ethos, logos, energeia))
}

/// Returns section texts in `Dimension::ALL` order.
pub fn parse_dimension_sections(step: &str, response: &str) -> Result<[String; 3], OpampError> {
    if let Some(sections) = parse_json_sections(response) {
        return Ok(sections);
    }
    parse_labeled_sections(response).map_err(|reason| OpampError::ParseError {
        step: step.to_string(),
        reason,
    })
}

fn parse_labeled_sections(response: &str) -> Result<[String; 3], String> {
    let mut sections: [Option<Vec<String>>; 3] = [None, None, None];
    let mut current: Option<usize> = None;

    for line in response.lines() {
        // Once every label has been seen, a blank line closes the last
        // section so trailing remarks stay out of it.
        if line.trim().is_empty() && sections.iter().all(Option::is_some) {
            if let Some(index) = current {
                let has_text = sections[index]
                    .as_ref()
                    .map_or(false, |lines| lines.iter().any(|l| !l.trim().is_empty()));
                if has_text {
                    current = None;
                    continue;
                }
            }
        }

        if let Some((dimension, rest)) = match_label(line) {
            let index = dimension_index(dimension);
            if sections[index].is_some() {
                return Err(format!("{} section appears more than once", dimension.label()));
            }
            let mut lines = Vec::new();
            if !rest.is_empty() {
                lines.push(rest.to_string());
            }
            sections[index] = Some(lines);
            current = Some(index);
            continue;
        }

        if let Some(index) = current {
            if let Some(lines) = sections[index].as_mut() {
                lines.push(line.trim().to_string());
            }
        }
    }

    let mut result: [String; 3] = Default::default();
    for dimension in Dimension::ALL {
        let index = dimension_index(dimension);
        let lines = sections[index]
            .take()
            .ok_or_else(|| format!("missing {} section", dimension.label()))?;
        let text = clean_section_text(&lines.join("\n"));
        if text.is_empty() {
            return Err(format!("{} section is empty", dimension.label()));
        }
        result[index] = text;
    }

    Ok(result)
}

/// Recognizes a section label at the start of a line, tolerating markdown
/// decoration and a parenthetical gloss: `**ETHOS** (credibility): text`.
/// A heading or bold line holding only the label (`### Ethos`) also counts,
/// with the body on the following lines.
fn match_label(line: &str) -> Option<(Dimension, &str)> {
    let stripped = strip_line_decoration(line);

    let word_end = stripped
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(stripped.len());
    let dimension = Dimension::from_label(&stripped[..word_end])?;

    let mut rest = stripped[word_end..].trim_start_matches(|c: char| c == '*' || c == '_');
    rest = rest.trim_start();

    if rest.starts_with('(') {
        let close = rest.find(')')?;
        rest = rest[close + 1..]
            .trim_start_matches(|c: char| c == '*' || c == '_')
            .trim_start();
    }

    if let Some(text) = rest.strip_prefix(':').or_else(|| rest.strip_prefix('：')) {
        return Some((dimension, text.trim_start_matches(|c: char| c == '*' || c == '_').trim()));
    }

    if rest.trim().is_empty() && is_heading_line(line) {
        return Some((dimension, ""));
    }

    None
}

fn is_heading_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('#') || trimmed.contains("**") || trimmed.contains("__")
}

fn strip_line_decoration(line: &str) -> &str {
    let mut stripped = line.trim_start();
    loop {
        let before = stripped;
        stripped = stripped
            .trim_start_matches(|c: char| matches!(c, '#' | '*' | '-' | '•' | '>' | '_'))
            .trim_start();

        let digits = stripped
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(stripped.len());
        if digits > 0 {
            let after = &stripped[digits..];
            if let Some(next) = after.strip_prefix('.').or_else(|| after.strip_prefix(')')) {
                stripped = next.trim_start();
            }
        }

        if stripped == before {
            return stripped;
        }
    }
}

fn clean_section_text(text: &str) -> String {
    text.trim()
        .trim_matches('"')
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn parse_json_sections(response: &str) -> Option<[String; 3]> {
    let json = extract_json(response)?;
    let value: Value = serde_json::from_str(json).ok()?;
    let object = value.as_object()?;

    let mut result: [String; 3] = Default::default();
    for dimension in Dimension::ALL {
        let text = object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(dimension.as_str()))
            .and_then(|(_, v)| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())?;
        result[dimension_index(dimension)] = text;
    }
    Some(result)
}

fn extract_json(content: &str) -> Option<&str> {
    if let Some(start) = content.find("```json") {
        let start = start + 7;
        if let Some(end) = content[start..].find("```") {
            return Some(content[start..start + end].trim());
        }
    }

    let trimmed = content.trim();
    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Some(trimmed);
    }

    None
}

fn dimension_index(dimension: Dimension) -> usize {
    match dimension {
        Dimension::Ethos => 0,
        Dimension::Logos => 1,
        Dimension::Energeia => 2,
    }
}
