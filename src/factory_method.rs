// Factory Method: each store subclass decides which pizza variant to build.

use std::io::Write;

use crate::error::{PatternError, Result};

// ============================================================================
// Pizzas
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceStyle {
    Diagonal,
    Square,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    name: String,
    toppings: Vec<String>,
    slices: SliceStyle,
}

impl Pizza {
    pub fn new(name: impl Into<String>, toppings: &[&str]) -> Self {
        Self {
            name: name.into(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            slices: SliceStyle::Diagonal,
        }
    }

    pub fn cut_into(mut self, slices: SliceStyle) -> Self {
        self.slices = slices;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn slices(&self) -> SliceStyle {
        self.slices
    }

    pub fn prepare(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Preparing {}...", self.name)?;
        writeln!(out, "Tossing dough...")?;
        writeln!(out, "Adding sauce...")?;
        writeln!(out, "Adding toppings: ")?;
        for topping in self.toppings() {
            writeln!(out, "   {}", topping)?;
        }
        Ok(())
    }

    pub fn bake(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Baking for 25 minutes at 350 degrees...")?;
        Ok(())
    }

    pub fn cut(&self, out: &mut dyn Write) -> Result<()> {
        match self.slices() {
            SliceStyle::Diagonal => writeln!(out, "Cutting the pizza into diagonal slices...")?,
            SliceStyle::Square => writeln!(out, "Cutting the pizza into square slices")?,
        }
        Ok(())
    }

    pub fn box_up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Placing the pizza in official PizzaStore box...")?;
        Ok(())
    }
}

pub fn chicago_style_cheese_pizza() -> Pizza {
    Pizza::new("Chicago Style Cheese Pizza", &["Shredded Mozzarella Cheese"])
        .cut_into(SliceStyle::Square)
}

pub fn chicago_style_veggie_pizza() -> Pizza {
    Pizza::new("Chicago Style Veggie Pizza", &["Mushroom", "Pepper"])
}

pub fn new_york_style_cheese_pizza() -> Pizza {
    Pizza::new("NewYork Style Cheese Pizza", &["Shredded Mozzarella Cheese"])
}

pub fn new_york_style_pepperoni_pizza() -> Pizza {
    Pizza::new("NewYork Style Pepperoni Pizza", &["Susage"])
}

// ============================================================================
// Stores
// ============================================================================

pub trait PizzaStore {
    /// The factory method.
    fn create_pizza(&self, kind: &str) -> Result<Pizza>;

    fn order_pizza(&self, kind: &str, out: &mut dyn Write) -> Result<Pizza> {
        let pizza = self.create_pizza(kind)?;

        pizza.prepare(out)?;
        pizza.bake(out)?;
        pizza.cut(out)?;
        pizza.box_up(out)?;
        Ok(pizza)
    }
}

pub struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Pizza> {
        match kind {
            "cheese" => Ok(chicago_style_cheese_pizza()),
            "veggie" => Ok(chicago_style_veggie_pizza()),
            other => Err(PatternError::unsupported_pizza("Chicago Pizza Store", other)),
        }
    }
}

pub struct NewYorkPizzaStore;

impl PizzaStore for NewYorkPizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Pizza> {
        match kind {
            "cheese" => Ok(new_york_style_cheese_pizza()),
            "pepperoni" => Ok(new_york_style_pepperoni_pizza()),
            other => Err(PatternError::unsupported_pizza("New York Pizza Store", other)),
        }
    }
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let chicago_store = ChicagoPizzaStore;
    let new_york_store = NewYorkPizzaStore;

    let pizza = chicago_store.order_pizza("cheese", out)?;
    writeln!(out, "Here's your {}!\n", pizza.name())?;

    let pizza = new_york_store.order_pizza("pepperoni", out)?;
    writeln!(out, "Here's your {}!\n", pizza.name())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chicago_menu() {
        let store = ChicagoPizzaStore;
        assert_eq!(store.create_pizza("cheese").unwrap().name(), "Chicago Style Cheese Pizza");
        assert_eq!(
            store.create_pizza("veggie").unwrap().toppings(),
            &["Mushroom".to_string(), "Pepper".to_string()]
        );
        assert!(store.create_pizza("pepperoni").is_err());
    }

    #[test]
    fn test_new_york_menu() {
        let store = NewYorkPizzaStore;
        assert_eq!(
            store.create_pizza("pepperoni").unwrap().name(),
            "NewYork Style Pepperoni Pizza"
        );
        assert!(matches!(
            store.create_pizza("veggie"),
            Err(PatternError::UnsupportedPizza { .. })
        ));
    }

    #[test]
    fn test_only_chicago_cheese_is_square_cut() {
        assert_eq!(chicago_style_cheese_pizza().slices(), SliceStyle::Square);
        assert_eq!(chicago_style_veggie_pizza().slices(), SliceStyle::Diagonal);
        assert_eq!(new_york_style_cheese_pizza().slices(), SliceStyle::Diagonal);
    }

    #[test]
    fn test_prepare_lists_toppings() {
        let mut out: Vec<u8> = Vec::new();
        chicago_style_veggie_pizza().prepare(&mut out).unwrap();

        let expected = "Preparing Chicago Style Veggie Pizza...\n\
                        Tossing dough...\n\
                        Adding sauce...\n\
                        Adding toppings: \n   \
                        Mushroom\n   \
                        Pepper\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_order_runs_every_step() {
        let mut out: Vec<u8> = Vec::new();
        let pizza = NewYorkPizzaStore.order_pizza("cheese", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(pizza.name(), "NewYork Style Cheese Pizza");
        assert_eq!(text.lines().count(), 8);
        assert!(text.ends_with("Placing the pizza in official PizzaStore box...\n"));
    }
}
