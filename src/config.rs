//! Picker configuration parsed from environment variables.

use crate::error::Error;
use crate::sampler::EdgePolicy;
use crate::types::PixelRatio;
use std::path::PathBuf;

pub const DEFAULT_WINDOW_WIDTH: usize = 480;
pub const DEFAULT_WINDOW_HEIGHT: usize = 320;

#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub pixel_ratio: PixelRatio,
    pub edge_policy: EdgePolicy,
    pub image: Option<PathBuf>,
    pub window_width: usize,
    pub window_height: usize,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            pixel_ratio: PixelRatio::ONE,
            edge_policy: EdgePolicy::Transparent,
            image: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl PickerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PICKER_PIXEL_RATIO`: logical -> physical scale, default 1.0
    /// - `PICKER_EDGE_POLICY`: `transparent` (default) or `clamp`
    /// - `PICKER_IMAGE`: image to sample from; a test pattern when absent
    /// - `PICKER_WINDOW_WIDTH` / `PICKER_WINDOW_HEIGHT`: logical size of the test pattern window
    pub fn from_env() -> Result<Self, Error> {
        let pixel_ratio = match std::env::var("PICKER_PIXEL_RATIO").ok() {
            Some(raw) => {
                let v = raw
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| Error::Config(format!("PICKER_PIXEL_RATIO: not a number: {raw}")))?;
                PixelRatio::new(v)?
            }
            None => PixelRatio::ONE,
        };
        let edge_policy = parse_edge_policy(std::env::var("PICKER_EDGE_POLICY").ok().as_deref())?;
        let image = std::env::var_os("PICKER_IMAGE").map(PathBuf::from);

        Ok(Self {
            pixel_ratio,
            edge_policy,
            image,
            window_width: env_parse_usize("PICKER_WINDOW_WIDTH", DEFAULT_WINDOW_WIDTH),
            window_height: env_parse_usize("PICKER_WINDOW_HEIGHT", DEFAULT_WINDOW_HEIGHT),
        })
    }
}

fn env_parse_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn parse_edge_policy(raw: Option<&str>) -> Result<EdgePolicy, Error> {
    match raw.map(str::trim).unwrap_or("transparent") {
        "transparent" => Ok(EdgePolicy::Transparent),
        "clamp" => Ok(EdgePolicy::Clamp),
        other => Err(Error::Config(format!("PICKER_EDGE_POLICY: unknown policy: {other}"))),
    }
}
