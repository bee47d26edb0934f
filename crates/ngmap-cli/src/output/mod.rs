use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use ngmap_core::{ComponentInfo, FlattenNode};

    use super::*;

    fn sample() -> Vec<ComponentInfo> {
        vec![ComponentInfo {
            name: "import".to_string(),
            child_elements: vec![FlattenNode::new("div", None)],
        }]
    }

    #[test]
    fn raw_is_single_line() {
        let rendered = render(&sample(), OutputFormat::Raw).expect("render");
        assert_eq!(
            rendered,
            r#"[{"name":"import","childElements":[{"tagName":"div","className":"undefined"}]}]"#
        );
    }

    #[test]
    fn json_is_pretty() {
        let rendered = render(&sample(), OutputFormat::Json).expect("render");
        assert!(rendered.starts_with("[\n"));
        assert!(rendered.contains("\"tagName\": \"div\""));
    }

    #[test]
    fn empty_list_renders_as_array() {
        let empty: Vec<ComponentInfo> = Vec::new();
        assert_eq!(render(&empty, OutputFormat::Raw).expect("render"), "[]");
    }
}
