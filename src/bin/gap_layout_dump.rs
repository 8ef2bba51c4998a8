use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use gap_chart::api::{BaselineSelector, GapChartEngine, GapLayout, RenderOutcome, VisualUpdate};
use gap_chart::render::{NullRenderer, RecordingRenderer, RenderFrame};
use serde::Serialize;

#[derive(Debug, Default)]
struct CliArgs {
    input_path: Option<PathBuf>,
    scene: bool,
    compact: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
enum DumpOutput<'a> {
    NoRender,
    SelectorOnly {
        groups: &'a [String],
    },
    Ready {
        layout: &'a GapLayout,
        #[serde(skip_serializing_if = "Option::is_none")]
        scene: Option<&'a RenderFrame>,
    },
}

fn main() {
    let _ = gap_chart::telemetry::init_default_tracing();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = match &args.input_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("failed to read stdin: {err}"))?;
            buffer
        }
    };
    let update: VisualUpdate =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;

    let rendered = if args.scene {
        let mut engine = GapChartEngine::new(RecordingRenderer::default());
        let outcome = engine.update(&update).map_err(|err| err.to_string())?;
        let groups = selector_groups(engine.selector());
        let frame = engine.into_renderer().last_frame;
        to_json(&outcome, &groups, frame.as_ref(), args.compact)?
    } else {
        let mut engine = GapChartEngine::new(NullRenderer::default());
        let outcome = engine.layout(&update).map_err(|err| err.to_string())?;
        let groups = selector_groups(engine.selector());
        to_json(&outcome, &groups, None, args.compact)?
    };
    println!("{rendered}");
    Ok(())
}

fn selector_groups(selector: &BaselineSelector) -> Vec<String> {
    selector
        .options()
        .iter()
        .map(|option| option.value.clone())
        .collect()
}

fn to_json(
    outcome: &RenderOutcome,
    groups: &[String],
    scene: Option<&RenderFrame>,
    compact: bool,
) -> Result<String, String> {
    let output = match outcome {
        RenderOutcome::NoRender => DumpOutput::NoRender,
        RenderOutcome::SelectorOnly => DumpOutput::SelectorOnly { groups },
        RenderOutcome::Ready(layout) => DumpOutput::Ready { layout, scene },
    };
    let encoded = if compact {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    };
    encoded.map_err(|err| format!("failed to encode layout: {err}"))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                cli.input_path = Some(PathBuf::from(value));
            }
            "--scene" => cli.scene = true,
            "--compact" => cli.compact = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin gap_layout_dump -- [--input <update.json>] [--scene] [--compact]"
                );
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`"));
            }
        }
    }

    Ok(cli)
}
