use claims_waterfall::api::{ErrorMetric, WaterfallChartConfig, WaterfallEngine};
use claims_waterfall::core::WaterfallMode;
use claims_waterfall::render::{NullRenderer, WaterfallFrame};
use claims_waterfall::telemetry;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: waterfall_export <bridge|cumulative> --input <metrics.json> --output <frames.json> [--config <config.json>]";

#[derive(Debug, PartialEq)]
struct CliArgs {
    mode: WaterfallMode,
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportFile {
    mode: WaterfallMode,
    config: WaterfallChartConfig,
    frames: Vec<WaterfallFrame>,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = match &args.config {
        Some(path) => {
            let raw = read_file(path)?;
            WaterfallChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => WaterfallChartConfig::default(),
    };

    let raw = read_file(&args.input)?;
    let metrics = ErrorMetric::list_from_json_str(&raw).map_err(|err| err.to_string())?;

    let mut engine =
        WaterfallEngine::new(NullRenderer::default(), config).map_err(|err| err.to_string())?;
    let frames = engine
        .render_error_waterfalls(&metrics, args.mode)
        .map_err(|err| err.to_string())?;

    let export = ExportFile {
        mode: args.mode,
        config: engine.config().clone(),
        frames,
    };
    write_json(&args.output, &export)
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut args = args.into_iter();
    let mode = args
        .next()
        .as_deref()
        .and_then(WaterfallMode::parse)
        .ok_or_else(|| USAGE.to_owned())?;

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
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
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    let output = output.ok_or_else(|| "missing --output".to_owned())?;
    Ok(CliArgs {
        mode,
        input,
        output,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, USAGE, parse_args};
    use claims_waterfall::core::WaterfallMode;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> Result<CliArgs, String> {
        parse_args(args.iter().map(|arg| (*arg).to_owned()))
    }

    #[test]
    fn parses_mode_and_paths() {
        let args = parse(&[
            "cumulative",
            "--output",
            "frames.json",
            "--input",
            "metrics.json",
            "--config",
            "config.json",
        ])
        .expect("valid args");
        assert_eq!(
            args,
            CliArgs {
                mode: WaterfallMode::Cumulative,
                input: PathBuf::from("metrics.json"),
                output: PathBuf::from("frames.json"),
                config: Some(PathBuf::from("config.json")),
            }
        );
    }

    #[test]
    fn config_is_optional() {
        let args = parse(&["bridge", "--input", "in.json", "--output", "out.json"])
            .expect("valid args");
        assert_eq!(args.mode, WaterfallMode::Bridge);
        assert_eq!(args.config, None);
    }

    #[test]
    fn unknown_or_missing_mode_prints_usage() {
        assert_eq!(parse(&[]), Err(USAGE.to_owned()));
        assert_eq!(
            parse(&["stacked", "--input", "a", "--output", "b"]),
            Err(USAGE.to_owned())
        );
        assert_eq!(parse(&["bridge", "--help"]), Err(USAGE.to_owned()));
    }

    #[test]
    fn missing_paths_are_reported() {
        assert_eq!(
            parse(&["bridge", "--output", "out.json"]),
            Err("missing --input".to_owned())
        );
        assert_eq!(
            parse(&["bridge", "--input", "in.json"]),
            Err("missing --output".to_owned())
        );
        assert_eq!(
            parse(&["bridge", "--input"]),
            Err("missing value for --input".to_owned())
        );
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert_eq!(
            parse(&["bridge", "--verbose"]),
            Err("unknown argument `--verbose`".to_owned())
        );
    }
}
