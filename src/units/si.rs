//! # SI Units
//!
//! The seven base units and the named derived units, built for any
//! backend through the public measure API.
//!
//! Base dimensions: `length`, `mass`, `time`, `current`, `temperature`,
//! `amount`, `luminous_intensity`. Radians and steradians are
//! dimensionless measures that only carry a symbol.

use crate::engine::{Measure, MeasureResult, MeasureType};
use crate::ports::Numeric;

/// SI units bound to one measure type
#[derive(Debug, Clone)]
pub struct SiUnits<N: Numeric> {
    // Base units
    pub meters: Measure<N>,
    pub kilograms: Measure<N>,
    pub seconds: Measure<N>,
    pub amperes: Measure<N>,
    pub kelvin: Measure<N>,
    pub moles: Measure<N>,
    pub candelas: Measure<N>,

    // Dimensionless
    pub radians: Measure<N>,
    pub steradians: Measure<N>,

    // Derived units
    pub hertz: Measure<N>,
    pub newtons: Measure<N>,
    pub pascals: Measure<N>,
    pub joules: Measure<N>,
    pub watts: Measure<N>,
    pub coulombs: Measure<N>,
    pub volts: Measure<N>,
    pub farads: Measure<N>,
    pub ohms: Measure<N>,
    pub siemens: Measure<N>,
    pub henrys: Measure<N>,
    pub webers: Measure<N>,
    pub teslas: Measure<N>,
    pub sieverts: Measure<N>,
    pub katals: Measure<N>,
    pub lumens: Measure<N>,
    pub luxes: Measure<N>,
}

impl<N: Numeric> SiUnits<N> {
    pub fn new(ty: &MeasureType<N>) -> MeasureResult<Self> {
        let meters = ty.dimension("length", Some("m"));
        let kilograms = ty.dimension("mass", Some("kg"));
        let seconds = ty.dimension("time", Some("s"));
        let amperes = ty.dimension("current", Some("A"));
        let kelvin = ty.dimension("temperature", Some("K"));
        let moles = ty.dimension("amount", Some("mol"));
        let candelas = ty.dimension("luminous_intensity", Some("cd"));

        let radians = ty.dimensionless(N::one()).with_symbol("rad");
        let steradians = ty.dimensionless(N::one()).with_symbol("sr");

        let square_meters = meters.squared()?;

        let hertz = seconds.inverse()?.with_symbol("Hz");
        let newtons = kilograms
            .times(&meters)?
            .per(&seconds.squared()?)?
            .with_symbol("N");
        let pascals = newtons.per(&square_meters)?.with_symbol("Pa");
        let joules = newtons.times(&meters)?.with_symbol("J");
        let watts = joules.per(&seconds)?.with_symbol("W");
        let coulombs = amperes.times(&seconds)?.with_symbol("C");
        let volts = watts.per(&amperes)?.with_symbol("V");
        let farads = coulombs.per(&volts)?.with_symbol("F");
        let ohms = volts.per(&amperes)?.with_symbol("Ω");
        let siemens = amperes.per(&volts)?.with_symbol("S");
        let webers = volts.times(&seconds)?.with_symbol("Wb");
        let teslas = webers.per(&square_meters)?.with_symbol("T");
        let henrys = webers.per(&amperes)?.with_symbol("H");
        let sieverts = joules.per(&kilograms)?.with_symbol("Sv");
        let katals = moles.per(&seconds)?.with_symbol("kat");
        let lumens = candelas.times(&steradians)?.with_symbol("lm");
        let luxes = lumens.per(&square_meters)?.with_symbol("lx");

        Ok(Self {
            meters,
            kilograms,
            seconds,
            amperes,
            kelvin,
            moles,
            candelas,
            radians,
            steradians,
            hertz,
            newtons,
            pascals,
            joules,
            watts,
            coulombs,
            volts,
            farads,
            ohms,
            siemens,
            henrys,
            webers,
            teslas,
            sieverts,
            katals,
            lumens,
            luxes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Unit;

    fn si() -> SiUnits<f64> {
        SiUnits::new(&MeasureType::new()).unwrap()
    }

    fn unit(pairs: &[(&str, i32)]) -> Unit {
        Unit::from_exponents(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_si_base_units() {
        let si = si();

        assert_eq!(si.meters.to_string(), "1 m");
        assert_eq!(si.kilograms.unit(), &Unit::base("mass"));
        assert_eq!(si.candelas.unit(), &Unit::base("luminous_intensity"));
        assert!(si.radians.is_dimensionless());
        assert_eq!(si.radians.to_string(), "1 rad");
    }

    #[test]
    fn test_si_derived_dimensions() {
        let si = si();

        assert_eq!(
            si.newtons.unit(),
            &unit(&[("mass", 1), ("length", 1), ("time", -2)])
        );
        assert_eq!(
            si.ohms.unit(),
            &unit(&[("mass", 1), ("length", 2), ("time", -3), ("current", -2)])
        );
        assert_eq!(
            si.farads.unit(),
            &unit(&[("mass", -1), ("length", -2), ("time", 4), ("current", 2)])
        );
        assert_eq!(si.lumens.unit(), si.candelas.unit());
        assert_eq!(si.sieverts.unit(), &unit(&[("length", 2), ("time", -2)]));
    }

    #[test]
    fn test_si_symbols() {
        let si = si();

        assert_eq!(si.joules.symbol(), Some("J"));
        assert_eq!(si.watts.symbol(), Some("W"));
        assert_eq!(si.ohms.symbol(), Some("Ω"));
        assert_eq!(si.luxes.symbol(), Some("lx"));
    }

    #[test]
    fn test_si_relations() {
        let si = si();

        assert_eq!(si.watts.times(&si.seconds).unwrap(), si.joules);
        assert_eq!(si.volts.times(&si.amperes).unwrap(), si.watts);
        assert_eq!(si.ohms.inverse().unwrap(), si.siemens);
        assert_eq!(si.teslas.times(&si.meters.squared().unwrap()).unwrap(), si.webers);
    }
}
