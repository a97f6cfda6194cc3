//! Player move input: castling spellings, SAN and UCI, all reduced to
//! canonical UCI so correctness is a plain string comparison.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use shakmaty::san::SanPlus;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Move};

static CASTLING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0oO]-[0oO](-[0oO])?([+#]?[!?]*)$").unwrap());

/// Map `0-0`, `o-o`, `O-O` (and the queenside forms) onto `O-O` / `O-O-O`,
/// keeping any check or annotation suffix. Other input is returned trimmed.
pub fn normalize_castling(raw: &str) -> Cow<'_, str> {
    let trimmed = raw.trim();
    match CASTLING_RE.captures(trimmed) {
        Some(caps) => {
            let base = if caps.get(1).is_some() { "O-O-O" } else { "O-O" };
            let suffix = caps.get(2).map_or("", |m| m.as_str());
            Cow::Owned(format!("{base}{suffix}"))
        }
        None => Cow::Borrowed(trimmed),
    }
}

fn uci_string(mv: &Move) -> String {
    mv.to_uci(CastlingMode::Standard).to_string()
}

/// Re-emit a UCI move in canonical form, if it is legal in `pos`.
pub fn canonical_uci(pos: &Chess, uci: &str) -> Option<String> {
    let uci_move: UciMove = uci.trim().parse().ok()?;
    let legal_move = uci_move.to_move(pos).ok()?;
    Some(uci_string(&legal_move))
}

/// Parse a SAN move (castling spellings normalized first) into canonical UCI.
pub fn san_to_uci(pos: &Chess, raw: &str) -> Option<String> {
    let normalized = normalize_castling(raw);
    let san: SanPlus = normalized.parse().ok()?;
    let legal_move = san.san.to_move(pos).ok()?;
    Some(uci_string(&legal_move))
}

/// Translate player input in either UCI or SAN into canonical UCI.
/// `None` means the input is unparseable or illegal in this position.
pub fn to_machine_notation(pos: &Chess, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    canonical_uci(pos, trimmed).or_else(|| san_to_uci(pos, trimmed))
}
