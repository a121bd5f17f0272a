// THEORY:
// Tunables for an insertion live in one plain struct, passed explicitly. The
// library never reads the environment on its own; `from_env` exists for the
// command-line driver, which is the only place that should call it. The parsers
// for the driver's ROI list and `class:path` item arguments live here too, so the
// binary stays a thin loop over library calls.

use crate::core_modules::roi::Roi;
use crate::error::{Result, SynthError};
use log::warn;
use std::env;
use std::str::FromStr;

pub const DEFAULT_THRESHOLD: u8 = 50;

pub const THRESHOLD_VAR: &str = "NUT_SYNTH_THRESHOLD";
pub const CLASS_ID_VAR: &str = "NUT_SYNTH_CLASS_ID";
pub const ROIS_VAR: &str = "NUT_SYNTH_ROIS";

/// Configuration for item insertion and labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthConfig {
    /// Grayscale level an item pixel must exceed to count as foreground.
    pub threshold: u8,
    /// Class written for items whose class is not given explicitly.
    pub class_id: u32,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            class_id: 0,
        }
    }
}

impl SynthConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Overlays whatever `lookup` yields for the known variables onto the defaults.
    /// Values that fail to parse are logged and ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            threshold: read_var(&lookup, THRESHOLD_VAR).unwrap_or(defaults.threshold),
            class_id: read_var(&lookup, CLASS_ID_VAR).unwrap_or(defaults.class_id),
        }
    }
}

fn read_var<T, F>(lookup: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {name}={raw:?}: not a valid value");
            None
        }
    }
}

/// Parses `col,row,w,h;col,row,w,h`. Blank entries are skipped; at least one
/// ROI must remain.
pub fn parse_rois(raw: &str) -> Result<Vec<Roi>> {
    let rois = raw
        .split(';')
        .filter(|part| !part.trim().is_empty())
        .map(Roi::parse)
        .collect::<Result<Vec<_>>>()?;
    if rois.is_empty() {
        return Err(SynthError::InvalidConfiguration(format!("no ROIs in `{raw}`")));
    }
    Ok(rois)
}

/// Splits an item argument into `(class_id, path)`. Without an all-digit
/// `class:` prefix the whole argument is the path and `default_class` applies.
pub fn parse_item_arg(arg: &str, default_class: u32) -> Result<(u32, &str)> {
    match arg.split_once(':') {
        Some((class, path)) if !class.is_empty() && class.chars().all(|c| c.is_ascii_digit()) => {
            let class_id = class.parse().map_err(|_| {
                SynthError::InvalidConfiguration(format!("class id in `{arg}` is out of range"))
            })?;
            Ok((class_id, path))
        }
        _ => Ok((default_class, arg)),
    }
}
