const SUMMARY_LABEL: &str = "Summary:";
const SCORE_LABEL: &str = "Score:";
const ROADMAP_LABEL: &str = "Roadmap";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFeedback {
    pub summary: String,
    pub score: i64,
    pub roadmap: Vec<String>,
}

/// Parses a free-text completion into labeled sections. Returns None on any
/// missing label, non-integer score, or empty section; callers treat None as
/// "use the deterministic path".
pub fn parse_completion(text: &str) -> Option<ParsedFeedback> {
    let lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_bullet)
        .collect::<Vec<_>>();

    let summary = lines
        .iter()
        .find_map(|line| after_label(line, SUMMARY_LABEL))
        .map(str::to_string)
        .filter(|summary| !summary.is_empty())?;

    let score = lines
        .iter()
        .find_map(|line| after_label(line, SCORE_LABEL))?
        .parse::<i64>()
        .ok()?;

    let heading = lines.iter().position(|line| line.contains(ROADMAP_LABEL))?;
    let roadmap = lines[heading + 1..]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect::<Vec<_>>();
    if roadmap.is_empty() {
        return None;
    }

    Some(ParsedFeedback {
        summary,
        score,
        roadmap,
    })
}

fn after_label<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.find(label)
        .map(|start| line[start + label.len()..].trim())
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(['-', '*', '•']).trim().to_string()
}
