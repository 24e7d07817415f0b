use std::error::Error;

use hippoplast::{experiment, params, render};
use log::info;
use serde_json::json;

const CHART_PATH: &str = "plasticity.svg";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = params::default_params();
    let result = experiment::run_experiment(&params)?;

    let summaries: Vec<_> = result
        .summarize()
        .into_iter()
        .map(|(name, summary)| json!({ "condition": name, "summary": summary }))
        .collect();

    println!("{}", serde_json::to_string_pretty(&summaries)?);

    render::render_svg_file(&result, CHART_PATH)?;
    info!("chart written to {}", CHART_PATH);

    Ok(())
}
