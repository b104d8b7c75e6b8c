use anyhow::{Result, bail};

/// Parse one CLI seed token: decimal (negative values fold to their magnitude) or `0x` hex.
fn parse_seed(token: &str) -> Option<u64> {
    if let Ok(value) = token.parse::<i64>() {
        return Some(value.unsigned_abs());
    }
    if let Ok(value) = token.parse::<u64>() {
        return Some(value);
    }
    token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .and_then(|hex| u64::from_str_radix(hex, 16).ok())
}

/// Resolve a list of CLI seed arguments into unique seeds, keeping first-seen order.
///
/// # Errors
/// Fails on a token that is not a seed, or when no seeds remain.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>> {
    let mut seeds: Vec<u64> = Vec::new();
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let Some(seed) = parse_seed(token) else {
            bail!("invalid seed '{token}': expected an integer or 0x-prefixed hex");
        };
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }
    if seeds.is_empty() {
        bail!("no seeds provided");
    }
    Ok(seeds)
}
