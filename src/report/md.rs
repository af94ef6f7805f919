use crate::types::assessment::Assessment;

pub fn to_markdown(repository: &str, assessment: &Assessment) -> String {
    let mut output = String::new();
    output.push_str("# Repository Assessment\n\n");
    output.push_str(&format!("Repository: {repository}\n"));
    output.push_str(&format!("Score: {} / 100\n\n", assessment.score));
    output.push_str(&format!("Summary: {}\n\n", assessment.summary));

    output.push_str("## Roadmap\n\n");
    for entry in &assessment.roadmap {
        output.push_str(&format!("- {entry}\n"));
    }

    output
}
