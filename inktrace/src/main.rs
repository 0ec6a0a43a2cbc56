#![warn(clippy::pedantic)]

mod trace;

use anyhow::{Context as _, Result as AnyResult};

fn main() -> AnyResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Args are a plain list of traces to convert.
    // Keep paths as OsString, character encoding is the system's business.
    let paths: Vec<std::path::PathBuf> = std::env::args_os().skip(1).map(Into::into).collect();
    if paths.is_empty() {
        anyhow::bail!("usage: inktrace <trace.json> ...");
    }
    let mut failures = 0usize;
    for path in &paths {
        if let Err(e) = convert(path) {
            log::error!("failed to convert {path:?}: {e:#}");
            failures += 1;
        }
    }
    if failures != 0 {
        anyhow::bail!("{failures} of {} conversions failed", paths.len());
    }
    Ok(())
}

/// Replay one recorded trace and write the drawing it describes as an SVG
/// next to it.
fn convert(path: &std::path::Path) -> AnyResult<()> {
    let trace: trace::Trace = {
        let file = std::fs::File::open(path).context("open trace")?;
        serde_json::from_reader(std::io::BufReader::new(file)).context("parse trace")?
    };
    let document = trace::replay(&trace)?;

    let out_path = path.with_extension("svg");
    let mut writer =
        std::io::BufWriter::new(std::fs::File::create(&out_path).context("create output")?);
    inktrace_core::svg::write_svg(&document, &mut writer).context("write svg")?;
    // BufWriter's drop swallows errors. Flush by hand.
    std::io::Write::flush(&mut writer).context("write svg")?;

    log::info!(
        "converted {} -> {} ({} paths, {} texts)",
        path.display(),
        out_path.display(),
        document.paths().len(),
        document.texts().len()
    );
    Ok(())
}
