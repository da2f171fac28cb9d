use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Conventional EEG frequency bands. Used only to annotate channel labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyBand {
  Delta,
  Theta,
  Alpha,
  Beta,
  Gamma,
}

impl FrequencyBand {
  pub const ALL: [FrequencyBand; 5] = [
    FrequencyBand::Delta,
    FrequencyBand::Theta,
    FrequencyBand::Alpha,
    FrequencyBand::Beta,
    FrequencyBand::Gamma,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      FrequencyBand::Delta => "Delta",
      FrequencyBand::Theta => "Theta",
      FrequencyBand::Alpha => "Alpha",
      FrequencyBand::Beta => "Beta",
      FrequencyBand::Gamma => "Gamma",
    }
  }

  pub fn range(&self) -> &'static str {
    match self {
      FrequencyBand::Delta => "0.5-4 Hz",
      FrequencyBand::Theta => "4-8 Hz",
      FrequencyBand::Alpha => "8-13 Hz",
      FrequencyBand::Beta => "13-30 Hz",
      FrequencyBand::Gamma => "30+ Hz",
    }
  }

  pub fn description(&self) -> &'static str {
    match self {
      FrequencyBand::Delta => "Deep Sleep",
      FrequencyBand::Theta => "Drowsy/Meditative",
      FrequencyBand::Alpha => "Relaxed/Calm",
      FrequencyBand::Beta => "Alert/Focused",
      FrequencyBand::Gamma => "Cognitive/Active",
    }
  }
}

impl fmt::Display for FrequencyBand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl FromStr for FrequencyBand {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|band| band.name().eq_ignore_ascii_case(s.trim()))
      .ok_or_else(|| anyhow::anyhow!("Unknown frequency band: {:?}", s))
  }
}

#[test]
fn parses_band_names() -> anyhow::Result<()> {
  assert_eq!(FrequencyBand::from_str("alpha")?, FrequencyBand::Alpha);
  assert_eq!(FrequencyBand::from_str(" GAMMA ")?, FrequencyBand::Gamma);
  assert!(FrequencyBand::from_str("mu").is_err());
  assert_eq!(FrequencyBand::Beta.range(), "13-30 Hz");
  Ok(())
}
