use anyhow::{bail, Context};
use boardgen::{render_asset, AssetReport, ImageSink, MemorySink, PngSink, Preset};
use clap::Parser;
use log::info;
use serde::Serialize;
use std::path::PathBuf;

/// Render checkerboard board textures and highlight overlays as PNG files.
#[derive(Parser, Debug)]
#[command(name = "boardgen", version, about)]
struct Cli {
    /// Presets to render (defaults to all of them)
    #[arg(value_enum)]
    presets: Vec<Preset>,

    /// Write to this path instead of the preset's fixed location (single preset only)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encode in memory without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON report of every rendered asset to stdout
    #[arg(long)]
    json: bool,
}

/// One entry of the `--json` report
#[derive(Debug, Serialize)]
struct PresetReport {
    preset: Preset,
    #[serde(flatten)]
    report: AssetReport,
}

/// Empty selection means every preset; `--output` only makes sense for one.
fn select_presets(requested: Vec<Preset>, output: Option<&PathBuf>) -> anyhow::Result<Vec<Preset>> {
    let presets = if requested.is_empty() {
        Preset::all().to_vec()
    } else {
        requested
    };
    if output.is_some() && presets.len() != 1 {
        bail!("--output requires exactly one preset, got {}", presets.len());
    }
    Ok(presets)
}

fn run(cli: Cli) -> anyhow::Result<Vec<PresetReport>> {
    let Cli {
        presets,
        output,
        dry_run,
        ..
    } = cli;
    let presets = select_presets(presets, output.as_ref())?;

    let mut sink: Box<dyn ImageSink> = if dry_run {
        Box::new(MemorySink::new())
    } else {
        Box::new(PngSink::new())
    };

    let mut reports = Vec::with_capacity(presets.len());
    for preset in presets {
        let mut spec = preset.spec();
        if let Some(out) = &output {
            spec.output = out.clone();
        }
        let report = render_asset(&spec, sink.as_mut())
            .with_context(|| format!("failed to render {} to {}", preset, spec.output.display()))?;
        info!("{}: {} ({})", preset, report.path.display(), report.sha256);
        reports.push(PresetReport { preset, report });
    }
    Ok(reports)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let json = cli.json;

    let reports = run(cli)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("boardgen").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn scratch_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("boardgen-cli-{}-{}", name, std::process::id()));
        p.push("out.png");
        p
    }

    #[test]
    fn no_presets_selects_all() {
        let presets = select_presets(Vec::new(), None).unwrap();
        assert_eq!(presets, Preset::all().to_vec());
    }

    #[test]
    fn output_override_needs_exactly_one_preset() {
        let out = PathBuf::from("x.png");
        assert!(select_presets(Vec::new(), Some(&out)).is_err());
        assert!(select_presets(vec![Preset::Board, Preset::Highlight], Some(&out)).is_err());
        assert_eq!(
            select_presets(vec![Preset::Highlight], Some(&out)).unwrap(),
            vec![Preset::Highlight]
        );
    }

    #[test]
    fn dry_run_writes_no_file() {
        let out = scratch_path("dry");
        let out_str = out.to_str().unwrap().to_string();
        let reports = run(parse(&["board", "--dry-run", "--output", &out_str])).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].report.path, out);
        assert!(!out.exists());
        assert!(!out.parent().unwrap().exists());
    }

    #[test]
    fn run_rejects_output_with_several_presets() {
        let cli = parse(&["board", "highlight", "--dry-run", "--output", "x.png"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn json_report_is_flat() {
        let reports = run(parse(&["highlight", "--dry-run"])).unwrap();
        let value = serde_json::to_value(&reports).unwrap();
        let entry = value[0].as_object().expect("report entry is an object");

        let mut keys: Vec<&str> = entry.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["height", "mode", "path", "preset", "sha256", "width"]);
        assert_eq!(entry["preset"], "highlight");
        assert_eq!(entry["mode"], "RGBA");
        assert_eq!(entry["width"], 80);
        assert_eq!(entry["path"], "../assets/boards/highlight.png");
    }
}
