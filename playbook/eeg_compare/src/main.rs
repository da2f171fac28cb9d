use aligner::*;
use common::init_logger;
use config::*;
use log::*;

mod config;

fn main() -> anyhow::Result<()> {
  dotenv::dotenv().ok();
  init_logger();

  let cfg = Config::read()?;
  let mut failed = 0;

  // a failed load skips its comparison entirely
  let mut loaded = vec![];
  let mut pairs = vec![];
  for comparison in &cfg.comparisons {
    match comparison.load() {
      Ok(pair) => {
        loaded.push(comparison);
        pairs.push(pair);
      }
      Err(e) => {
        error!("{}: {}", comparison.name, e);
        error!("Please check your CSV file paths and column names.");
        failed += 1;
      }
    }
  }

  let results = SignalAligner::compare_all(&pairs);
  for (comparison, result) in loaded.into_iter().zip(results) {
    let published = result
      .map_err(anyhow::Error::from)
      .and_then(|result| publish(comparison, &result, &cfg.chart));
    if let Err(e) = published {
      error!("{}: {}", comparison.name, e);
      failed += 1;
    }
  }

  if failed > 0 {
    return Err(anyhow::anyhow!(
      "{} of {} comparisons failed",
      failed,
      cfg.comparisons.len()
    ));
  }
  info!("EEG Analysis Complete!");
  Ok(())
}

fn publish(comparison: &Comparison, result: &ComparisonResult, chart: &ChartConfig) -> anyhow::Result<()> {
  let labels = comparison.labels();
  info!("Comparison {}", comparison.name);
  ComparisonReport::new(result, &labels).log();
  BitmapRenderer::new(&comparison.out_file).render(result, &labels, chart)?;
  if let Some(table_file) = &comparison.table_file {
    export_table_to_path(result, &labels, table_file)?;
  }
  Ok(())
}
