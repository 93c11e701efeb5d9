// Decorator: condiments wrap a beverage and extend its description and cost.

use std::io::Write;

use crate::error::Result;

pub trait Beverage {
    fn description(&self) -> String {
        "Unknown Beverage".to_string()
    }

    fn cost(&self) -> f64;
}

// ============================================================================
// Concrete components
// ============================================================================

pub struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> f64 {
        1.99
    }
}

pub struct HouseBlend;

impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        0.89
    }
}

// ============================================================================
// Decorators
// ============================================================================

/// A beverage that wraps another one.
pub trait CondimentDecorator: Beverage {
    fn beverage(&self) -> &dyn Beverage;
}

pub struct Mocha {
    beverage: Box<dyn Beverage>,
}

impl Mocha {
    pub fn new(beverage: Box<dyn Beverage>) -> Self {
        Self { beverage }
    }
}

impl Beverage for Mocha {
    fn description(&self) -> String {
        format!("{}, Mocha", self.beverage().description())
    }

    fn cost(&self) -> f64 {
        self.beverage().cost() + 0.20
    }
}

impl CondimentDecorator for Mocha {
    fn beverage(&self) -> &dyn Beverage {
        &*self.beverage
    }
}

pub fn order_line(beverage: &dyn Beverage) -> String {
    format!("{} ${}", beverage.description(), beverage.cost())
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let beverage1: Box<dyn Beverage> = Box::new(Espresso);
    writeln!(out, "{}", order_line(&*beverage1))?;

    let mut beverage2: Box<dyn Beverage> = Box::new(HouseBlend);
    beverage2 = Box::new(Mocha::new(beverage2));
    writeln!(out, "{}", order_line(&*beverage2))?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
