//! Production string parsing - delimited `good:amount` lists from the
//! layout table's Cost and Production columns.

use crate::catalog::CatalogError;
use crate::goods::{Amount, GoodId, GoodMap};

/// Parse a comma-delimited `good:amount` list, e.g. `"Timber:20,Bricks:10"`.
///
/// The returned map keeps the left-to-right source order. A repeated
/// good keeps its first position but takes the later amount. Any token
/// that is not a well-formed pair with a positive numeric amount is a
/// fatal data error for the record - nothing is dropped silently.
pub fn parse_goods(column: &'static str, raw: &str) -> Result<GoodMap, CatalogError> {
    let mut goods = GoodMap::new();

    for token in raw.split(',') {
        let token = token.trim();
        let Some((name, amount)) = token.split_once(':') else {
            return Err(malformed(column, token, "expected `good:amount`"));
        };
        let name = name.trim();
        let amount = amount.trim();

        if name.is_empty() {
            return Err(malformed(column, token, "empty good identifier"));
        }
        match amount.parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => {
                goods.insert(GoodId::new(name), Amount::new(amount));
            }
            _ => return Err(malformed(column, token, "amount is not a positive number")),
        }
    }

    // An all-whitespace column value reads as zero pairs; "present but
    // empty" is bad data, not the missing marker.
    if goods.is_empty() {
        return Err(malformed(column, raw.trim(), "no `good:amount` pairs"));
    }

    Ok(goods)
}

fn malformed(column: &'static str, token: &str, reason: &'static str) -> CatalogError {
    CatalogError::MalformedProductionField {
        column,
        token: token.to_string(),
        reason,
    }
}
