//! Target string parsing.
//!
//! Targets travel as plain strings so a relay can forward them untouched:
//!
//! - single card: `"12"`
//! - pair of cards: `"12:15"`
//! - card plus destination zone: `"12:4"`
//!
//! A missing or empty target is `NoTarget`; anything unparsable is
//! `InvalidTarget`.

use smallvec::SmallVec;

use crate::core::{EngineError, Result, SlotId};

fn present(target: Option<&str>) -> Result<&str> {
    match target.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(EngineError::NoTarget),
    }
}

fn split(target: &str) -> SmallVec<[&str; 2]> {
    target.split(':').map(str::trim).collect()
}

fn slot(part: &str, whole: &str) -> Result<SlotId> {
    part.parse()
        .map_err(|_| EngineError::InvalidTarget(format!("bad card id in {:?}", whole)))
}

/// Parse a single card id.
pub fn parse_single(target: Option<&str>) -> Result<SlotId> {
    let target = present(target)?;
    slot(target, target)
}

/// Parse an optional single card id. Absent is fine, malformed is not.
pub fn parse_optional(target: Option<&str>) -> Result<Option<SlotId>> {
    match parse_single(target) {
        Ok(id) => Ok(Some(id)),
        Err(EngineError::NoTarget) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Parse `"idA:idB"`.
pub fn parse_pair(target: Option<&str>) -> Result<(SlotId, SlotId)> {
    let target = present(target)?;
    match split(target).as_slice() {
        [a, b] => Ok((slot(a, target)?, slot(b, target)?)),
        _ => Err(EngineError::InvalidTarget(format!("need two targets, got {:?}", target))),
    }
}

/// Parse `"id:position"`.
pub fn parse_move(target: Option<&str>) -> Result<(SlotId, usize)> {
    let target = present(target)?;
    match split(target).as_slice() {
        [id, position] => {
            let position = position
                .parse()
                .map_err(|_| EngineError::InvalidTarget(format!("bad position in {:?}", target)))?;
            Ok((slot(id, target)?, position))
        }
        _ => Err(EngineError::InvalidTarget(format!("expected id:position, got {:?}", target))),
    }
}
