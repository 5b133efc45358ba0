// Tier-list extraction from the champion statistics page.
//
// The page carries one `<tbody class="... champion-trend-tier-ROLE">` per
// role. Each `<tr>` row holds the champion name and a tier badge image
// `icon-champtier-<tier>.png`, in the last cell of the current layout.

use std::sync::OnceLock;

use lanepick_core::{FetchError, Role, Tier};
use regex::Regex;
use tracing::debug;

fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<tr\b[^>]*>(.*?)</tr>").expect("valid row regex"))
}

fn cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<td\b[^>]*>(.*?)</td>").expect("valid cell regex"))
}

fn name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?s)class="[^"]*champion-index-table__name[^"]*"[^>]*>\s*([^<]*?)\s*<"#)
            .expect("valid name regex")
    })
}

fn badge_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<img\b[^>]*\bsrc="[^"]*icon-champtier-([^"/.]+)\.png[^"]*""#)
            .expect("valid badge regex")
    })
}

fn entity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(?:#(\d+)|#[xX]([0-9a-fA-F]+)|([a-zA-Z]+));").expect("valid entity regex")
    })
}

/// Extract the champions of `role` whose badge matches one of `tiers`.
///
/// Rows are visited in document order; within a row every matching tier
/// appends the name once.
pub fn parse_tier_list(html: &str, role: Role, tiers: &[Tier]) -> Result<Vec<String>, FetchError> {
    let body = role_table(html, role).ok_or(FetchError::MissingTable { role })?;

    let mut champions = Vec::new();
    for row in row_re().captures_iter(body) {
        let row = &row[1];
        let Some(name) = name_re().captures(row).map(|c| decode_entities(&c[1])) else {
            continue;
        };
        let Some(badge) = tier_badge(row) else {
            debug!(champion = %name, "row without tier badge");
            continue;
        };
        for tier in tiers {
            if badge == tier.badge() {
                champions.push(name.clone());
            }
        }
    }

    debug!(role = %role, count = champions.len(), "tier list parsed");
    Ok(champions)
}

fn role_table(html: &str, role: Role) -> Option<&str> {
    let pattern = format!(
        r#"(?s)<tbody\b[^>]*class="[^"]*\bchampion-trend-tier-{}\b[^"]*"[^>]*>(.*?)</tbody>"#,
        regex::escape(role.site_key())
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(html).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Tier badge of a row (`OP`, `1`..`5`), taken from whichever cell carries
/// the `icon-champtier-*` image.
fn tier_badge(row: &str) -> Option<String> {
    cell_re()
        .captures_iter(row)
        .filter_map(|c| c.get(1))
        .find_map(|cell| badge_re().captures(cell.as_str()))
        .map(|c| c[1].to_string())
}

fn decode_entities(text: &str) -> String {
    entity_re()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let decoded = if let Some(dec) = caps.get(1) {
                dec.as_str().parse().ok().and_then(char::from_u32)
            } else if let Some(hex) = caps.get(2) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else {
                match &caps[3] {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    "nbsp" => Some('\u{a0}'),
                    _ => None,
                }
            };
            match decoded {
                Some(ch) => ch.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
