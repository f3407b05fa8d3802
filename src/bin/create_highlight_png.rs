//! Writes the highlight asset to its fixed location, overwriting any previous file.

use anyhow::Context;
use boardgen::{render_asset, PngSink, Preset};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let spec = Preset::Highlight.spec();
    render_asset(&spec, &mut PngSink::new())
        .with_context(|| format!("failed to write {}", spec.output.display()))?;
    Ok(())
}
