#![allow(missing_docs)]

//! This module defines various unit types and their conversions.

/// Represents a dimensionless quantity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::Sub,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Dimensionless(pub f64);

impl std::ops::Mul for Dimensionless {
    type Output = Dimensionless;

    fn mul(self, rhs: Dimensionless) -> Self::Output {
        Dimensionless::from(self.0 * rhs.0)
    }
}

impl std::ops::Div for Dimensionless {
    type Output = Dimensionless;

    fn div(self, rhs: Dimensionless) -> Self::Output {
        Dimensionless::from(self.0 / rhs.0)
    }
}

impl Dimensionless {
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Clamp the value to the given closed range.
    pub fn clamp(self, min: f64, max: f64) -> Self {
        Dimensionless(self.0.clamp(min, max))
    }
}

impl From<f64> for Dimensionless {
    fn from(val: f64) -> Self {
        Self(val)
    }
}

impl From<Dimensionless> for f64 {
    fn from(val: Dimensionless) -> Self {
        val.0
    }
}

impl float_cmp::ApproxEq for Dimensionless {
    type Margin = float_cmp::F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        float_cmp::ApproxEq::approx_eq(self.0, other.0, margin.into())
    }
}

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            PartialOrd,
            derive_more::Add,
            derive_more::Sub,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn new(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Whether the value is neither infinite nor NaN.
            pub fn is_finite(self) -> bool {
                self.0.is_finite()
            }
        }

        impl std::ops::Mul<Dimensionless> for $name {
            type Output = $name;
            fn mul(self, rhs: Dimensionless) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Mul<$name> for Dimensionless {
            type Output = $name;
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl std::ops::Div<Dimensionless> for $name {
            type Output = $name;
            fn div(self, rhs: Dimensionless) -> $name {
                $name(self.0 / rhs.0)
            }
        }

        impl std::ops::Div for $name {
            type Output = Dimensionless;
            fn div(self, rhs: $name) -> Dimensionless {
                Dimensionless(self.0 / rhs.0)
            }
        }

        impl float_cmp::ApproxEq for $name {
            type Margin = float_cmp::F64Margin;

            fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
                float_cmp::ApproxEq::approx_eq(self.0, other.0, margin.into())
            }
        }
    };
}

macro_rules! impl_mul {
    ($Same:ty, $Out:ty) => {
        impl std::ops::Mul<$Same> for $Same {
            type Output = $Out;
            fn mul(self, rhs: $Same) -> $Out {
                <$Out>::new(self.0 * rhs.0)
            }
        }
    };
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Mul<$Rhs> for $Lhs {
            type Output = $Out;
            fn mul(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 * rhs.0)
            }
        }
        impl std::ops::Mul<$Lhs> for $Rhs {
            type Output = $Out;
            fn mul(self, lhs: $Lhs) -> $Out {
                <$Out>::new(self.0 * lhs.0)
            }
        }
    };
}

macro_rules! impl_div {
    ($Lhs:ty, $Rhs:ty, $Out:ty) => {
        impl std::ops::Div<$Rhs> for $Lhs {
            type Output = $Out;
            fn div(self, rhs: $Rhs) -> $Out {
                <$Out>::new(self.0 / rhs.0)
            }
        }
    };
}

// Base quantities
unit_struct!(Metres);
unit_struct!(SquareMetres);
unit_struct!(CubicMetres);
unit_struct!(KilowattHours);
unit_struct!(Money);

// Derived quantities
unit_struct!(MoneyPerArea);

// Multiplication rules
impl_mul!(Metres, SquareMetres);
impl_mul!(SquareMetres, Metres, CubicMetres);
impl_mul!(MoneyPerArea, SquareMetres, Money);

// Division rules
impl_div!(CubicMetres, SquareMetres, Metres);
impl_div!(Money, SquareMetres, MoneyPerArea);

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_area_and_volume_algebra() {
        let area = Metres(10.0) * Metres(8.0);
        assert_approx_eq!(SquareMetres, area, SquareMetres(80.0));

        let volume = area * Metres(3.0);
        assert_approx_eq!(CubicMetres, volume, CubicMetres(240.0));

        let ratio = volume / SquareMetres(268.0);
        assert_approx_eq!(f64, ratio.value(), 0.8955, epsilon = 1e-4);
    }

    #[test]
    fn test_money_per_area() {
        let cost = MoneyPerArea(25.0) * SquareMetres(108.0);
        assert_approx_eq!(Money, cost, Money(2700.0));
    }
}
