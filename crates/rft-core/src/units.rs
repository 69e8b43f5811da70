// rft-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Frequency as UomFrequency, Inductance as UomInductance, Length as UomLength,
    Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Capacitance = UomCapacitance;
pub type Current = UomElectricCurrent;
pub type Frequency = UomFrequency;
pub type Inductance = UomInductance;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Resistance = UomElectricalResistance;
pub type Voltage = UomElectricPotential;

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn henry(v: f64) -> Inductance {
    use uom::si::inductance::henry;
    Inductance::new::<henry>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn watt(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn ampere(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

pub mod constants {
    /// Speed of light in vacuum, exact by SI definition (m/s).
    pub const SPEED_OF_LIGHT_MPS: f64 = 299_792_458.0;
}
