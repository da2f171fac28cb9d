use aligner::*;
use common::init_logger;
use config::*;
use log::*;

mod config;

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger();

  let cfg = DemoConfig::read()?;
  info!(
    "Generating {:?} preset with {} samples (seed {})",
    cfg.preset, cfg.samples, cfg.seed
  );
  let (first, second) = cfg.signals();
  let a = first.load()?;
  let b = second.load()?;

  let result = SignalAligner::compare(a.values(), b.values())?;
  let labels = SeriesLabels::new(first.label(), second.label())
    .with_difference("Difference (Signal 2 - Signal 1)");
  ComparisonReport::new(&result, &labels).log();

  BitmapRenderer::new(&cfg.out_file).render(&result, &labels, &cfg.chart)?;
  if let Some(table_file) = &cfg.table_file {
    export_table_to_path(&result, &labels, table_file)?;
  }
  info!("EEG Comparison Plot Generated Successfully!");
  Ok(())
}
