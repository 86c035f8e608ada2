//! Dice cost satisfaction.
//!
//! [`recommend`] picks which dice to spend for a cost, or returns `None`
//! when the pool cannot pay it. [`satisfies`] checks a player's own
//! selection against the same cost; the selection need not match the
//! recommendation.

use super::cost::{Cost, CostKind};
use super::element::Element;

/// Recommend dice from `pool` to pay `cost`.
///
/// `pool` should already be sorted (see [`DicePool`](super::DicePool)):
/// unaligned dice are taken from its end, so the least-preferred dice are
/// spent first.
///
/// The result has exactly `cost.total()` dice and is a sub-multiset of
/// `pool`. `None` means no subset of `pool` pays the cost.
///
/// ```
/// use dice_duel::dice::{recommend, Cost, DiceCost, Element::*};
///
/// let pool = [Omni, Omni, Pyro, Pyro, Hydro];
/// let cost = Cost::new([DiceCost::element(Pyro, 1), DiceCost::unaligned(2)]).unwrap();
///
/// assert_eq!(recommend(&pool, &cost), Some(vec![Pyro, Pyro, Hydro]));
/// ```
#[must_use]
pub fn recommend(pool: &[Element], cost: &Cost) -> Option<Vec<Element>> {
    if cost.total() > pool.len() {
        return None;
    }

    let mut used = vec![false; pool.len()];
    let mut picked: Vec<usize> = Vec::with_capacity(cost.total());

    if let Some(colored) = cost.colored() {
        let amount = colored.amount as usize;
        let omni = count_unused(pool, &used, Element::is_omni);

        let color = match colored.kind {
            CostKind::Element(element) => {
                let matching = count_unused(pool, &used, |d| d == element);
                if matching + omni < amount {
                    return None;
                }
                Some(element)
            }
            CostKind::Matching => pick_matching_color(pool, &used, amount, omni)?,
            CostKind::Unaligned => None,
        };

        let mut remaining = amount;
        if let Some(color) = color {
            remaining -= take_front(pool, &mut used, &mut picked, |d| d == color, remaining);
        }
        remaining -= take_front(pool, &mut used, &mut picked, Element::is_omni, remaining);
        debug_assert_eq!(remaining, 0);
    }

    let mut fillers: Vec<usize> = (0..pool.len())
        .rev()
        .filter(|&i| !used[i])
        .take(cost.unaligned())
        .collect();
    fillers.reverse();
    picked.extend(fillers);

    Some(picked.into_iter().map(|i| pool[i]).collect())
}

/// Check whether `chosen` pays `cost` exactly.
///
/// `chosen` must have exactly `cost.total()` dice; whether those dice are
/// actually in the player's pool is checked separately.
#[must_use]
pub fn satisfies(chosen: &[Element], cost: &Cost) -> bool {
    chosen.len() == cost.total() && recommend(chosen, cost).is_some()
}

/// Pick the color for a "matching" requirement.
///
/// Colors are scanned by descending frequency among unused colored dice,
/// ties broken by first appearance. Returns `Some(None)` when only omni
/// dice can pay, and `None` when nothing can.
fn pick_matching_color(
    pool: &[Element],
    used: &[bool],
    amount: usize,
    omni: usize,
) -> Option<Option<Element>> {
    if amount == 0 {
        return Some(None);
    }

    let mut colors: Vec<(Element, usize)> = Vec::new();
    for (i, &die) in pool.iter().enumerate() {
        if used[i] || !die.is_colored() {
            continue;
        }
        match colors.iter_mut().find(|(c, _)| *c == die) {
            Some((_, count)) => *count += 1,
            None => colors.push((die, 1)),
        }
    }
    // Stable: ties keep first-encountered order.
    colors.sort_by(|a, b| b.1.cmp(&a.1));

    if let Some(&(color, _)) = colors.iter().find(|(_, count)| count + omni >= amount) {
        return Some(Some(color));
    }
    if omni >= amount {
        return Some(None);
    }
    None
}

fn count_unused(pool: &[Element], used: &[bool], pred: impl Fn(Element) -> bool) -> usize {
    pool.iter()
        .zip(used)
        .filter(|(&die, &u)| !u && pred(die))
        .count()
}

fn take_front(
    pool: &[Element],
    used: &mut [bool],
    picked: &mut Vec<usize>,
    pred: impl Fn(Element) -> bool,
    limit: usize,
) -> usize {
    let mut taken = 0;
    for (i, &die) in pool.iter().enumerate() {
        if taken == limit {
            break;
        }
        if !used[i] && pred(die) {
            used[i] = true;
            picked.push(i);
            taken += 1;
        }
    }
    taken
}
