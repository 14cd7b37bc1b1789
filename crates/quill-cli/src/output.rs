use serde_json::Value;

use crate::cli::OutputFormat;
use crate::envelope::Envelope;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => print!("{}", render_table(envelope)?),
    }

    Ok(())
}

fn render_table(envelope: &Envelope<Value>) -> Result<String, CliError> {
    let mut out = String::new();

    if let Some(quotes) = envelope.data.get("quotes").and_then(Value::as_array) {
        for entry in quotes {
            render_quote(&mut out, entry);
        }
    } else {
        out.push_str("data:\n");
        for line in serde_json::to_string_pretty(&envelope.data)?.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str(&format!("request_id  : {}\n", envelope.meta.request_id));
    out.push_str(&format!("generated_at: {}\n", envelope.meta.generated_at));
    if !envelope.meta.source_chain.is_empty() {
        let chain = envelope
            .meta
            .source_chain
            .iter()
            .map(|source| source.as_str())
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&format!("sources     : {chain}\n"));
    }
    out.push_str(&format!("latency_ms  : {}\n", envelope.meta.latency_ms));

    if !envelope.meta.warnings.is_empty() {
        out.push_str("warnings:\n");
        for warning in &envelope.meta.warnings {
            out.push_str(&format!("  - {warning}\n"));
        }
    }

    Ok(out)
}

fn render_quote(out: &mut String, entry: &Value) {
    let quote = &entry["quote"];
    let text = quote["text"].as_str().unwrap_or_default();
    let author = quote["author"].as_str().unwrap_or_default();

    out.push_str(&format!("\"{text}\"\n  - {author}\n"));

    let tags = quote["tags"]
        .as_array()
        .map(|tags| tags.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();
    if !tags.is_empty() {
        out.push_str(&format!("  tags: {}\n", tags.join(", ")));
    }
    if let Some(share_url) = entry["share_url"].as_str() {
        out.push_str(&format!("  share: {share_url}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::EnvelopeMeta;
    use quill_core::ProviderId;
    use serde_json::json;

    #[test]
    fn table_lists_quotes_before_metadata() {
        let envelope = Envelope::with_errors(
            EnvelopeMeta {
                request_id: String::from("123e4567-e89b-42d3-a456-426614174000"),
                schema_version: String::from("v1.0.0"),
                generated_at: String::from("2026-01-01T00:00:00Z"),
                source_chain: vec![ProviderId::Quotable, ProviderId::Typefit],
                latency_ms: 7,
                warnings: vec![String::from("trying alternative source... (2/2)")],
            },
            json!({
                "quotes": [{
                    "quote": {"text": "X", "author": "Y", "tags": ["life", "wisdom"]},
                    "origin": {"kind": "live", "source": "typefit"}
                }]
            }),
            Vec::new(),
        );

        let table = render_table(&envelope).expect("renders");

        assert!(table.starts_with("\"X\"\n  - Y\n  tags: life, wisdom\n"));
        assert!(table.contains("sources     : quotable,typefit\n"));
        assert!(table.contains("  - trying alternative source... (2/2)\n"));
    }
}
