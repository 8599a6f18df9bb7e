use crate::compare::{format_value, ComparisonResult, Observation, ValueType};

/// Renders comparison results as a markdown table
#[derive(Debug, Clone)]
pub struct MarkdownTable<'a> {
    platforms: &'a [String],
}

impl<'a> MarkdownTable<'a> {
    /// `platforms` sets the column order and header labels
    pub fn new(platforms: &'a [String]) -> Self {
        MarkdownTable { platforms }
    }

    pub fn render(&self, results: &[ComparisonResult]) -> String {
        let mut out = String::new();

        let header: Vec<String> = self.platforms.iter().map(|p| escape_cell(p)).collect();
        out.push_str(&format!("| Key | {} |\n", header.join(" | ")));

        let separators: Vec<String> = self.platforms.iter().map(|_| "-".repeat(15)).collect();
        out.push_str(&format!("|{}|{}|\n", "-".repeat(4), separators.join("|")));

        for result in results {
            let cells: Vec<String> = self
                .platforms
                .iter()
                .map(|name| format_cell(result.platform(name)))
                .collect();
            out.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(result.key.as_str()),
                cells.join(" | ")
            ));
        }

        out
    }
}

/// Render one platform's cell: `-` when missing, otherwise the type and,
/// for anything but objects, the formatted value
pub fn format_cell(observation: Option<&Observation>) -> String {
    match observation {
        Some(obs) if obs.exists => {
            if obs.value_type == ValueType::Object {
                obs.value_type.to_string()
            } else {
                let value = format_value(&obs.value, obs.value_type);
                format!("{}: {}", obs.value_type, escape_cell(&value))
            }
        }
        _ => "-".to_string(),
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}
