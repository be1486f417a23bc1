//! Projecting installation and maintenance costs for a recommended material.
use crate::house::{HouseSpec, Shape};
use crate::units::{Dimensionless, Metres, Money, MoneyPerArea, SquareMetres};
use serde::Serialize;

/// The total insulated wall area for a house.
///
/// The four shapes use fixed formulas; L and U shapes have partial wall segments at half length
/// or width, and the O shape (courtyard) has four full wall pairs. Wall area is always in square
/// metres, whatever unit system the model's predictors use: material costs are quoted per square
/// metre.
pub fn wall_area(shape: Shape, length: Metres, width: Metres, height: Metres) -> SquareMetres {
    let two = Dimensionless(2.0);
    let four = Dimensionless(4.0);
    let half = Dimensionless(0.5);

    match shape {
        Shape::Box => two * (height * length) + two * (height * width),
        Shape::L => {
            height * length
                + height * width
                + height * (length * half)
                + height * (width * half)
        }
        Shape::O => four * (height * length) + four * (height * width),
        Shape::U => {
            two * (height * length) + two * (height * width) + four * (height * (length * half))
        }
    }
}

/// The wall area for a house spec
pub fn wall_area_for_spec(spec: &HouseSpec) -> SquareMetres {
    wall_area(spec.shape, spec.length, spec.width, spec.height)
}

/// The one-time cost of installing a material over the given wall area
pub fn installation_cost(wall_area: SquareMetres, cost_per_sqm: MoneyPerArea) -> Money {
    cost_per_sqm * wall_area
}

/// A point in a maintenance cost projection
#[derive(PartialEq, Clone, Copy, Debug, Serialize)]
pub struct MaintenancePoint {
    /// Years since installation
    pub year: u32,
    /// Cumulative maintenance cost up to this year
    pub cost: Money,
}

/// Project cumulative maintenance costs over the given horizon.
///
/// Costs accumulate linearly, one year's maintenance at a time; there is no discounting or
/// inflation.
///
/// # Arguments
///
/// * `wall_area` - The insulated wall area
/// * `cost_per_sqm` - The material's annual maintenance cost per square metre
/// * `horizon_years` - Number of years to project over
///
/// # Returns
///
/// One point per year, from year 1 to the horizon.
pub fn maintenance_schedule(
    wall_area: SquareMetres,
    cost_per_sqm: MoneyPerArea,
    horizon_years: u32,
) -> Vec<MaintenancePoint> {
    let annual = cost_per_sqm * wall_area;
    (1..=horizon_years)
        .map(|year| MaintenancePoint {
            year,
            cost: annual * Dimensionless(year as f64),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    // A 10 x 8 x 3 house
    const LENGTH: Metres = Metres(10.0);
    const WIDTH: Metres = Metres(8.0);
    const HEIGHT: Metres = Metres(3.0);

    #[rstest]
    #[case(Shape::Box, 108.0)] // 2(3x10) + 2(3x8)
    #[case(Shape::L, 81.0)] // 3x10 + 3x8 + 3x5 + 3x4
    #[case(Shape::O, 216.0)] // 4(3x10) + 4(3x8)
    #[case(Shape::U, 168.0)] // 2(3x10) + 2(3x8) + 4(3x5)
    fn test_wall_area(#[case] shape: Shape, #[case] expected: f64) {
        let area = wall_area(shape, LENGTH, WIDTH, HEIGHT);
        assert_approx_eq!(SquareMetres, area, SquareMetres(expected));
    }

    #[test]
    fn test_installation_cost() {
        let area = wall_area(Shape::Box, LENGTH, WIDTH, HEIGHT);
        let cost = installation_cost(area, MoneyPerArea(25.0));
        assert_approx_eq!(Money, cost, Money(2700.0));
    }

    #[test]
    fn test_maintenance_schedule_linearity() {
        let area = wall_area(Shape::Box, LENGTH, WIDTH, HEIGHT);
        let schedule = maintenance_schedule(area, MoneyPerArea(2.0), 10);

        assert_eq!(schedule.len(), 10);
        assert_eq!(schedule[0].year, 1);
        assert_eq!(schedule[9].year, 10);

        // Year 5 costs exactly five times year 1
        assert_approx_eq!(
            Money,
            schedule[4].cost,
            Money(5.0 * schedule[0].cost.value())
        );
    }
}
