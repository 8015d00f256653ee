//! DRM class directory entry names.

use regex::Regex;
use std::sync::LazyLock;

/// `cardN`, a GPU.
static CARD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^card([0-9]+)$").expect("Invalid card pattern"));

/// `cardN-eDP-M`, an embedded DisplayPort connector of card N.
static EDP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^card([0-9]+)-eDP-[0-9]+$").expect("Invalid eDP pattern"));

/// A DRM class entry relevant to offload selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrmEntry {
    /// A GPU with this card number.
    Card(u32),
    /// An internal panel connector on this card number.
    InternalPanel(u32),
}

/// Classify a DRM class entry by name.
///
/// Both patterns yield the card number from their first capture group.
/// Other connectors, render nodes and unparsable numbers are ignored.
pub fn classify_entry(name: &str) -> Option<DrmEntry> {
    if let Some(card) = card_number(&CARD_PATTERN, name) {
        return Some(DrmEntry::Card(card));
    }
    card_number(&EDP_PATTERN, name).map(DrmEntry::InternalPanel)
}

fn card_number(pattern: &Regex, name: &str) -> Option<u32> {
    pattern
        .captures(name)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse().ok())
}
