use clap::Parser;
use focus_indicator::frame::update_frame;
use focus_indicator::io::{TraceEntry, load_replay, object_from_json, write_trace};
use focus_indicator::{DetachedNode, FocusIndicator, IndicatorConfig};
use glam::Vec3;
use std::time::Instant;

#[derive(Parser)]
#[command(version, about, author)]
struct FocusReplayCli {
    /// recorded frames, JSON array of {object_visible, hit, camera}
    replay: String,

    /// indicator config JSON
    #[arg(short, long)]
    config: Option<String>,

    /// trace output path
    #[arg(short, long, default_value = "focus_trace.json")]
    output: String,

    /// save a rerun recording (needs the `visualization` feature)
    #[arg(long)]
    rerun: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = FocusReplayCli::parse();

    let config = match &cli.config {
        Some(path) => object_from_json::<IndicatorConfig, _>(path)?,
        None => IndicatorConfig::default(),
    };
    log::info!("{:?}", config);

    #[cfg(feature = "visualization")]
    let recording = match &cli.rerun {
        Some(path) => Some(rerun::RecordingStreamBuilder::new("focus_indicator").save(path)?),
        None => None,
    };
    if cli.rerun.is_some() && !cfg!(feature = "visualization") {
        log::warn!("built without the visualization feature, ignoring --rerun");
    }

    let frames = load_replay(&cli.replay)?;
    let mut indicator = FocusIndicator::with_config(DetachedNode::default(), &config)?;

    let now = Instant::now();
    let mut trace = Vec::with_capacity(frames.len());
    for (idx, f) in frames.iter().enumerate() {
        let mut hit_tester = |_hint: Option<Vec3>| f.hit;
        let outcome = update_frame(&mut indicator, f.object_visible, &mut hit_tester, f.camera);

        let transform = indicator.display_transform();
        #[cfg(feature = "visualization")]
        if let Some(recording) = &recording {
            focus_indicator::visualization::log_indicator(
                recording,
                idx as i64,
                f.hit.map(|h| h.position),
                &transform,
                indicator.state(),
            )?;
        }

        trace.push(TraceEntry {
            frame: idx,
            state: indicator.state().kind().to_string(),
            display_position: (!transform.position.is_nan()).then_some(transform.position),
            opacity: transform.opacity,
            pulsing: indicator.node().pulsing,
            attachment: outcome.attachment,
            visited_surfaces: indicator.visited().sorted_ids(),
        });
    }
    let duration_sec = now.elapsed().as_secs_f64();
    log::info!(
        "replayed {} frames in {:.6} sec, visited {} surfaces",
        frames.len(),
        duration_sec,
        indicator.visited().len()
    );

    write_trace(&cli.output, &trace)?;
    log::info!("trace written to {}", cli.output);
    Ok(())
}
