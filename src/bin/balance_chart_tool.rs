use balance_chart::api::{BalanceChart, BalanceChartConfig};
use balance_chart::core::{Step, Viewport};
use balance_chart::render::NullRenderer;
use balance_chart::telemetry::init_default_tracing;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str =
    "usage: balance_chart_tool --input <path> [--output <path>] [--reference <value>] [--config <path>]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    reference: Option<f64>,
    config: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct SeriesFile {
    reference: f64,
    #[serde(default)]
    max_steps: Option<usize>,
    steps: Vec<Step>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let raw = read_file(&args.input)?;
    let file: SeriesFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid series json: {err}"))?;

    let mut config = match &args.config {
        Some(path) => BalanceChartConfig::from_json_str(&read_file(path)?)
            .map_err(|err| err.to_string())?,
        None => BalanceChartConfig::new(Viewport::new(800, 400)),
    };
    if config.max_steps.is_none() {
        config.max_steps = file.max_steps;
    }

    let reference = args.reference.unwrap_or(file.reference);
    let mut chart =
        BalanceChart::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let snapshot = chart
        .render(&file.steps, reference)
        .map_err(|err| err.to_string())?;
    let json = snapshot
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    match &args.output {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut reference = None::<f64>;
    let mut config = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--reference" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --reference".to_owned())?;
                let parsed = value
                    .parse::<f64>()
                    .map_err(|err| format!("invalid --reference `{value}`: {err}"))?;
                reference = Some(parsed);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| USAGE.to_owned())?,
        output,
        reference,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_file_keeps_step_metadata() {
        let raw = r#"{
            "reference": 1000.0,
            "max_steps": 50,
            "steps": [
                {"index": 0, "value": 1000.0, "outcome": "start"},
                {"index": 1, "value": 1040.5, "outcome": "win", "net_change": 40.5}
            ]
        }"#;
        let file: SeriesFile = serde_json::from_str(raw).expect("series file");

        assert_eq!(file.reference, 1000.0);
        assert_eq!(file.max_steps, Some(50));
        assert_eq!(file.steps.len(), 2);

        let keys: Vec<&str> = file.steps[1].metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["outcome", "net_change"]);
        assert_eq!(file.steps[1].metadata["net_change"], 40.5);
        assert_eq!(file.steps[0].metadata["outcome"], "start");

        let back = serde_json::to_value(&file.steps[1]).expect("serialize");
        assert_eq!(back["outcome"], "win");
    }

    #[test]
    fn max_steps_is_optional() {
        let file: SeriesFile =
            serde_json::from_str(r#"{"reference": 1.0, "steps": [{"index": 0, "value": 1.0}]}"#)
                .expect("series file");
        assert_eq!(file.max_steps, None);
        assert!(file.steps[0].metadata.is_empty());
    }
}
