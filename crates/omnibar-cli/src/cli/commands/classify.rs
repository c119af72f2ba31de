//! `omnibar classify <input>` – URL-vs-query verdict.

use anyhow::Result;
use omnibar_core::classify::is_not_url;
use omnibar_core::normalize::get_url_from_input;

pub fn run_classify(input: &str, json: bool) -> Result<()> {
    let not_url = is_not_url(input);
    let verdict = if not_url { "not-url" } else { "url" };

    if json {
        let normalized = if not_url {
            serde_json::Value::Null
        } else {
            get_url_from_input(input).into()
        };
        let report = serde_json::json!({
            "input": input,
            "trimmed": input.trim(),
            "verdict": verdict,
            "normalized": normalized,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{verdict}");
    }
    Ok(())
}
