//! # Prefixes
//!
//! A prefix scales a measure and prepends its symbol: `kilo` applied to
//! `1 m` is `1000 m` labelled `km`.

use crate::engine::{Measure, MeasureResult};
use crate::ports::Numeric;

/// The metric prefixes, largest first: (name, symbol, factor)
pub const METRIC: [(&str, &str, f64); 20] = [
    ("yotta", "Y", 1e24),
    ("zetta", "Z", 1e21),
    ("exa", "E", 1e18),
    ("peta", "P", 1e15),
    ("tera", "T", 1e12),
    ("giga", "G", 1e9),
    ("mega", "M", 1e6),
    ("kilo", "k", 1e3),
    ("hecto", "h", 1e2),
    ("deka", "da", 1e1),
    ("deci", "d", 1e-1),
    ("centi", "c", 1e-2),
    ("milli", "m", 1e-3),
    ("micro", "μ", 1e-6),
    ("nano", "n", 1e-9),
    ("pico", "p", 1e-12),
    ("femto", "f", 1e-15),
    ("atto", "a", 1e-18),
    ("zepto", "z", 1e-21),
    ("yocto", "y", 1e-24),
];

/// A symbol paired with a multiplier
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix<N: Numeric> {
    symbol: String,
    multiplier: N,
}

impl<N: Numeric> Prefix<N> {
    pub fn new(symbol: impl Into<String>, multiplier: N) -> Self {
        Self {
            symbol: symbol.into(),
            multiplier,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn multiplier(&self) -> &N {
        &self.multiplier
    }

    /// Scale `measure` by the multiplier
    ///
    /// The result is labelled `prefix + symbol` when `measure` has a symbol,
    /// and left unlabelled otherwise.
    pub fn apply(&self, measure: &Measure<N>) -> MeasureResult<Measure<N>> {
        let scaled = measure.scale(&self.multiplier)?;
        Ok(match measure.symbol() {
            Some(symbol) => scaled.with_symbol(format!("{}{}", self.symbol, symbol)),
            None => scaled,
        })
    }
}

/// All metric prefixes for `f64`, largest first
pub fn metric() -> Vec<Prefix<f64>> {
    METRIC
        .iter()
        .map(|&(_, symbol, factor)| Prefix::new(symbol, factor))
        .collect()
}

/// Look up a metric prefix by name, e.g. `"kilo"`
pub fn metric_prefix(name: &str) -> Option<Prefix<f64>> {
    METRIC
        .iter()
        .find(|(prefix, _, _)| *prefix == name)
        .map(|&(_, symbol, factor)| Prefix::new(symbol, factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MeasureType;

    #[test]
    fn test_metric_table() {
        let prefixes = metric();

        assert_eq!(prefixes.len(), 20);
        assert_eq!(prefixes[0].symbol(), "Y");
        assert_eq!(prefixes[19].symbol(), "y");
        assert!(prefixes.windows(2).all(|w| w[0].multiplier() > w[1].multiplier()));
    }

    #[test]
    fn test_metric_prefix_lookup() {
        let kilo = metric_prefix("kilo").unwrap();
        assert_eq!(kilo.symbol(), "k");
        assert_eq!(*kilo.multiplier(), 1000.0);

        assert_eq!(metric_prefix("atto").unwrap().symbol(), "a");
        assert!(metric_prefix("kibi").is_none());
    }

    #[test]
    fn test_prefix_apply() {
        let ty = MeasureType::<f64>::new();
        let meters = ty.dimension("length", Some("m"));

        let km = metric_prefix("kilo").unwrap().apply(&meters).unwrap();
        assert_eq!(*km.value(), 1000.0);
        assert_eq!(km.symbol(), Some("km"));
        assert_eq!(km.unit(), meters.unit());
        assert!(ty.owns(&km));
    }

    #[test]
    fn test_prefix_apply_without_symbol() {
        let ty = MeasureType::<f64>::new();
        let speed = ty.dimension("length", None).per(&ty.dimension("time", None)).unwrap();

        let scaled = ty.prefix("k", 1000.0).apply(&speed).unwrap();
        assert_eq!(*scaled.value(), 1000.0);
        assert_eq!(scaled.symbol(), None);
    }
}
