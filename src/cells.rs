//! Render cells - a good mapping broken into the atomic units the
//! panels draw: icon, quantity, separator.

use crate::catalog::{CatalogError, Field};
use crate::goods::{self, Amount, GoodId, GoodMap};

/// One atomic renderable unit in a good run.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderCell {
    /// A good's icon, resolved against the registry at layout time.
    Icon(GoodId),
    /// The quantity drawn right of its icon.
    Quantity(Amount),
    /// Middle-dot spacer between consecutive goods.
    Separator,
    /// Placeholder for records without the field.
    NotApplicable,
}

/// Width hint for a production region: single-good rows reserve a
/// narrow strip, multi-good rows the generalized icon/qty/sep/icon/qty
/// strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowArity {
    Single,
    Multi,
}

impl RowArity {
    /// Display slots the rendering layer should reserve for the run.
    pub fn display_slots(self) -> usize {
        match self {
            RowArity::Single => 2,
            RowArity::Multi => 5,
        }
    }
}

/// Arity hint for a production field. Deterministic in the good count;
/// an unavailable field counts as a single slot pair.
pub fn row_arity(field: &Field<GoodMap>) -> RowArity {
    match field.as_value() {
        Some(goods) if goods.len() > 1 => RowArity::Multi,
        _ => RowArity::Single,
    }
}

/// Lay out a good mapping as an ordered cell sequence: `Icon, Quantity`
/// per good in map order, with a `Separator` strictly between
/// consecutive goods (never after the last). `3n - 1` cells for `n >= 1`
/// goods; a lone `NotApplicable` when the field is absent.
///
/// Every good is resolved against the registry up front. An identifier
/// with no registered icon means the catalog and the shipped assets have
/// drifted apart, and that is surfaced as an error - not a blank icon.
pub fn layout(field: &Field<GoodMap>) -> Result<Vec<RenderCell>, CatalogError> {
    let Some(goods) = field.as_value() else {
        return Ok(vec![RenderCell::NotApplicable]);
    };
    if goods.is_empty() {
        return Ok(vec![RenderCell::NotApplicable]);
    }

    for good in goods.keys() {
        if goods::good_def(good).is_none() {
            return Err(CatalogError::UnknownGoodId(good.clone()));
        }
    }

    let mut run = Vec::with_capacity(goods.len() * 3 - 1);
    for (index, (good, amount)) in goods.iter().enumerate() {
        if index > 0 {
            run.push(RenderCell::Separator);
        }
        run.push(RenderCell::Icon(good.clone()));
        run.push(RenderCell::Quantity(amount.clone()));
    }
    Ok(run)
}
