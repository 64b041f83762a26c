//! Best-effort numeric coercion for loosely typed source values.
//!
//! Both functions here are total: anything that is not a usable number comes
//! back as `None`, never as an error and never as zero.

/// A source value of unknown shape, as handed over by a format parser.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue<'a> {
    Absent,
    Number(f64),
    Text(&'a str),
    Sequence(Vec<RawValue<'a>>),
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        match value {
            Some(text) => RawValue::Text(text),
            None => RawValue::Absent,
        }
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(text: &'a str) -> Self {
        RawValue::Text(text)
    }
}

impl From<f64> for RawValue<'_> {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

/// Coerce a single value to a finite float.
///
/// Text is trimmed before parsing; empty or unparseable text is absent.
/// Sequences are not scalars and are absent too.
pub fn to_float(value: &RawValue<'_>) -> Option<f64> {
    let n = match value {
        RawValue::Absent | RawValue::Sequence(_) => return None,
        RawValue::Number(n) => *n,
        RawValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
    };
    n.is_finite().then_some(n)
}

/// Reduce one rating or a list of ratings to their mean.
///
/// Elements that don't coerce are dropped. A list with no usable element is
/// absent rather than zero.
pub fn avg_rating(value: &RawValue<'_>) -> Option<f64> {
    match value {
        RawValue::Sequence(items) => {
            let (sum, count) = items
                .iter()
                .filter_map(to_float)
                .fold((0.0, 0usize), |(sum, count), n| (sum + n, count + 1));
            (count > 0).then(|| sum / count as f64)
        }
        scalar => to_float(scalar),
    }
}

#[cfg(test)]
#[path = "tests/coerce_tests.rs"]
mod tests;
