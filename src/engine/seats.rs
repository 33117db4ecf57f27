//! Seat resolution.
//!
//! The coordinator stores *base* seat indices for the attacker and the
//! thrower. A base seat may have gone out of play; these functions turn a
//! base index into the seat that actually acts. In team play the partner
//! (two seats along) substitutes; otherwise the search moves clockwise to
//! the next live seat.
//!
//! Every search visits each seat at most once and reports
//! [`EngineError::NoLiveSeat`] instead of spinning.

use crate::core::{EngineError, PlayerId, PlayerMap, RuleSet};

/// First seat at or after `from`, clockwise, that satisfies `accept`.
pub fn first_from(
    out_of_play: &PlayerMap<bool>,
    from: PlayerId,
    accept: impl Fn(PlayerId) -> bool,
) -> Result<PlayerId, EngineError> {
    let n = out_of_play.player_count();
    from.rotation(n)
        .find(|&seat| accept(seat))
        .ok_or(EngineError::NoLiveSeat {
            from: from.0,
            player_count: n,
        })
}

/// First live seat at or after `from`.
pub fn next_live(out_of_play: &PlayerMap<bool>, from: PlayerId) -> Result<PlayerId, EngineError> {
    first_from(out_of_play, from, |seat| !out_of_play[seat])
}

/// The base seat itself if live, otherwise its team partner if live.
fn live_or_partner(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    base: PlayerId,
) -> Result<PlayerId, EngineError> {
    if !out_of_play[base] {
        return Ok(base);
    }
    match rules.partner_of(base) {
        Some(partner) if !out_of_play[partner] => Ok(partner),
        _ => Err(EngineError::NoLiveSeat {
            from: base.0,
            player_count: out_of_play.player_count(),
        }),
    }
}

/// Seat that leads the trick from base index `base`.
pub fn attacker(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    base: PlayerId,
) -> Result<PlayerId, EngineError> {
    if rules.team_play {
        live_or_partner(rules, out_of_play, base)
    } else {
        next_live(out_of_play, base)
    }
}

/// Seat that defends against the attack led from base index `base`.
pub fn defender(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    base: PlayerId,
) -> Result<PlayerId, EngineError> {
    let left = base.offset(1, rules.player_count);
    if rules.team_play {
        live_or_partner(rules, out_of_play, left)
    } else {
        next_live(out_of_play, left)
    }
}

/// Seat that would defend if `defender` passed the attack on.
pub fn next_defender(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    defender: PlayerId,
) -> Result<PlayerId, EngineError> {
    self::defender(rules, out_of_play, defender)
}

/// Seat entitled to throw from base index `base`.
///
/// Never the defender: without teams the search skips it along with
/// out-of-play seats.
pub fn thrower(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    base: PlayerId,
    defender: PlayerId,
) -> Result<PlayerId, EngineError> {
    if rules.team_play {
        live_or_partner(rules, out_of_play, base)
    } else {
        first_from(out_of_play, base, |seat| !out_of_play[seat] && seat != defender)
    }
}

/// How many seats must say done before a beaten trick finishes.
///
/// In team play: the live members of the attacking team. Otherwise at most
/// two throwers take part.
#[must_use]
pub fn opponents_count(rules: &RuleSet, out_of_play: &PlayerMap<bool>, attacker_base: PlayerId) -> usize {
    if rules.team_play {
        let partner = attacker_base.offset(2, rules.player_count);
        usize::from(!out_of_play[attacker_base]) + usize::from(!out_of_play[partner])
    } else if live_count(out_of_play) > 2 {
        2
    } else {
        1
    }
}

/// Base attacker index for the next trick.
///
/// Advances one seat, or two when the defender took. Without teams the
/// search then skips out-of-play seats and never lands on a defender who
/// just took. With teams the partner rule resolves out-of-play seats later.
pub fn next_attacker_base(
    rules: &RuleSet,
    out_of_play: &PlayerMap<bool>,
    attacker_base: PlayerId,
    defender: PlayerId,
    defender_took: bool,
) -> Result<PlayerId, EngineError> {
    let step = if defender_took { 2 } else { 1 };
    let start = attacker_base.offset(step, rules.player_count);
    if rules.team_play {
        return Ok(start);
    }
    first_from(out_of_play, start, |seat| {
        !out_of_play[seat] && !(defender_took && seat == defender)
    })
}

/// Seats still holding cards or able to draw.
#[must_use]
pub fn live_count(out_of_play: &PlayerMap<bool>) -> usize {
    out_of_play.count_where(|&out| !out)
}

/// Whether the game has ended.
///
/// Teams: one whole team is out. Otherwise: at most one seat remains.
#[must_use]
pub fn is_game_over(rules: &RuleSet, out_of_play: &PlayerMap<bool>) -> bool {
    if rules.team_play {
        let out = |i: u8| out_of_play[PlayerId::new(i)];
        (out(0) && out(2)) || (out(1) && out(3))
    } else {
        live_count(out_of_play) <= 1
    }
}
