use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::error::Error;
use crate::transport::DEFAULT_BASE_URL;

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    token: Option<String>,
}

pub(crate) fn load_config(url: Option<String>, token: Option<String>) -> Result<ClientConfig, Error> {
    resolve_config(url, token, env_value)
}

/// Resolution with an injectable environment lookup.
fn resolve_config(
    url: Option<String>,
    token: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ClientConfig, Error> {
    let mut url = url.or_else(|| env("MAPBOX_API_URL"));
    let mut token = token.or_else(|| env("MAPBOX_ACCESS_TOKEN"));

    let rc_candidates = rc_candidates(&env);

    if url.is_none() || token.is_none() {
        for rc_path in &rc_candidates {
            if rc_path.exists() {
                let cfg = read_rc(rc_path)?;
                if url.is_none() {
                    url = cfg.url;
                }
                if token.is_none() {
                    token = cfg.token;
                }
                break;
            }
        }
    }

    let access_token = match token {
        Some(v) => v,
        None => {
            let searched = rc_candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>();
            return Err(Error::Config(if searched.is_empty() {
                "missing access token (set MAPBOX_ACCESS_TOKEN or create .mapboxrc)".to_string()
            } else {
                format!(
                    "missing access token (set MAPBOX_ACCESS_TOKEN or put `token:` in one of: {})",
                    searched.join(", ")
                )
            }));
        }
    };

    Ok(ClientConfig {
        access_token,
        base_url: url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    })
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn read_rc(path: &Path) -> Result<RcConfig, Error> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    // `token:` may be on one line with its value on the next.
    let mut pending_key: Option<&str> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(pk) = pending_key.take() {
            if !line.contains(':') || looks_like_url(line) {
                set_rc_value(&mut cfg, pk, strip_quotes(line));
                continue;
            }
        }

        if let Some((k, v)) = line.split_once(':') {
            let k = k.trim();
            let v = strip_quotes(v.trim());
            match k {
                "url" | "token" if v.is_empty() => pending_key = Some(k),
                "url" | "token" => set_rc_value(&mut cfg, k, v),
                _ => {}
            }
        }
    }

    cfg
}

fn set_rc_value(cfg: &mut RcConfig, key: &str, value: &str) {
    match key {
        "url" => cfg.url = Some(value.to_string()),
        "token" => cfg.token = Some(value.to_string()),
        _ => {}
    }
}

fn looks_like_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"') && s.len() >= 2)
        || (s.starts_with('\'') && s.ends_with('\'') && s.len() >= 2)
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates(env: impl Fn(&str) -> Option<String>) -> Vec<PathBuf> {
    // 1) MAPBOX_RC (explicit)
    // 2) ./.mapboxrc
    // 3) ~/.mapboxrc
    if let Some(p) = env("MAPBOX_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".mapboxrc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".mapboxrc"));
    }
    v
}
