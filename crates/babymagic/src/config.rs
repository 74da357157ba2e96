// Author: Dustin Pilgrim
// License: MIT

use std::env;
use std::path::{Path, PathBuf};

use rune_cfg::RuneConfig;

use babymagic_core::AspectPreset;
use babymagic_crop::DEFAULT_JPEG_QUALITY;

#[derive(Debug, Clone)]
pub struct BabyMagicConfig {
    pub output_directory: PathBuf,
    pub jpeg_quality: u8,
    pub default_aspect: AspectPreset,
}

impl Default for BabyMagicConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_dir(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            default_aspect: AspectPreset::Free,
        }
    }
}

pub fn load(path: Option<&Path>) -> Result<BabyMagicConfig, String> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_user_config_path);

    if !path.exists() {
        return Ok(BabyMagicConfig::default());
    }

    let rc = RuneConfig::from_file(&path)
        .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;

    parse_config(&rc)
}

fn parse_config(rc: &RuneConfig) -> Result<BabyMagicConfig, String> {
    let mut cfg = BabyMagicConfig::default();

    if !rc.has("babymagic") {
        return Ok(cfg);
    }

    // output_directory
    if let Some(dir) = rc
        .get_optional::<String>("babymagic.output_directory")
        .map_err(|e| format!("config error at babymagic.output_directory: {e}"))?
    {
        cfg.output_directory = expand_env(&dir);
    }

    // jpeg_quality: bare number or quoted string
    if let Some(q) = read_quality(rc, "babymagic.jpeg_quality")
        .map_err(|e| format!("config error at babymagic.jpeg_quality: {e}"))?
    {
        cfg.jpeg_quality = q;
    }

    // default_aspect
    if let Some(aspect) = rc
        .get_optional::<String>("babymagic.default_aspect")
        .map_err(|e| format!("config error at babymagic.default_aspect: {e}"))?
    {
        cfg.default_aspect = parse_aspect(&aspect)
            .map_err(|e| format!("config error at babymagic.default_aspect: {e}"))?;
    }

    Ok(cfg)
}

fn read_quality(rc: &RuneConfig, key: &str) -> Result<Option<u8>, String> {
    match rc.get_optional::<f64>(key) {
        Ok(Some(n)) => quality_from_number(n).map(Some),
        Ok(None) => Ok(None),
        Err(_) => rc
            .get_optional::<String>(key)
            .map_err(|e| e.to_string())?
            .map(|s| parse_quality(&s))
            .transpose(),
    }
}

fn quality_from_number(n: f64) -> Result<u8, String> {
    if n.fract() != 0.0 || !(1.0..=100.0).contains(&n) {
        return Err(format!("expected 1-100, got {n}"));
    }
    Ok(n as u8)
}

fn parse_quality(s: &str) -> Result<u8, String> {
    let q: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("expected 1-100, got \"{}\"", s.trim()))?;

    if !(1..=100).contains(&q) {
        return Err(format!("expected 1-100, got {q}"));
    }

    Ok(q)
}

fn parse_aspect(s: &str) -> Result<AspectPreset, String> {
    AspectPreset::from_key(s).ok_or_else(|| {
        let keys: Vec<&str> = AspectPreset::ALL.iter().map(|p| p.key()).collect();
        format!("expected {}, got \"{}\"", keys.join("|"), s.trim())
    })
}

fn expand_env(s: &str) -> PathBuf {
    let mut out = s.to_string();

    if out.contains("$env.HOME") {
        if let Ok(home) = env::var("HOME") {
            out = out.replace("$env.HOME", &home);
        }
    }

    PathBuf::from(out)
}

fn default_user_config_path() -> PathBuf {
    let dir: PathBuf = if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg)
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| ".".into());
        PathBuf::from(home).join(".config")
    };

    dir.join("babymagic").join("babymagic.rune")
}

fn default_output_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join("Pictures").join("BabyMagic")
}
