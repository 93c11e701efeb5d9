// Abstract Factory: regional ingredient factories composed into pizzas.
// A store picks one ingredient family and every pizza it builds uses only that family.

use std::io::Write;

use crate::error::{PatternError, Result};

// ============================================================================
// Ingredients and their factories
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    name: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One family of ingredients. Every `create_*` call announces the ingredient on `out`.
pub trait PizzaIngredientFactory {
    fn create_dough(&self, out: &mut dyn Write) -> Result<Ingredient>;
    fn create_sauce(&self, out: &mut dyn Write) -> Result<Ingredient>;
    fn create_cheese(&self, out: &mut dyn Write) -> Result<Ingredient>;
    fn create_clam(&self, out: &mut dyn Write) -> Result<Ingredient>;
}

fn toss(out: &mut dyn Write, name: &str) -> Result<Ingredient> {
    writeln!(out, "Tossing {}...", name)?;
    Ok(Ingredient::new(name))
}

fn add(out: &mut dyn Write, name: &str) -> Result<Ingredient> {
    writeln!(out, "Adding {}...", name)?;
    Ok(Ingredient::new(name))
}

pub struct ChicagoPizzaIngredientFactory;

impl PizzaIngredientFactory for ChicagoPizzaIngredientFactory {
    fn create_dough(&self, out: &mut dyn Write) -> Result<Ingredient> {
        toss(out, "very thin crust dough")
    }

    fn create_sauce(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "brushetta sauce")
    }

    fn create_cheese(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "goat cheese")
    }

    fn create_clam(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "clamari")
    }
}

pub struct NewYorkPizzaIngredientFactory;

impl PizzaIngredientFactory for NewYorkPizzaIngredientFactory {
    fn create_dough(&self, out: &mut dyn Write) -> Result<Ingredient> {
        toss(out, "thin crust dough")
    }

    fn create_sauce(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "marinara sauce")
    }

    fn create_cheese(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "reggiano cheese")
    }

    fn create_clam(&self, out: &mut dyn Write) -> Result<Ingredient> {
        add(out, "fresh clam")
    }
}

// ============================================================================
// Pizzas
// ============================================================================

/// Ingredients a pizza was prepared with. Empty until `prepare` runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Ingredients {
    pub dough: Option<Ingredient>,
    pub sauce: Option<Ingredient>,
    pub cheese: Option<Ingredient>,
    pub clam: Option<Ingredient>,
}

pub trait Pizza {
    fn name(&self) -> &str;

    fn ingredients(&self) -> &Ingredients;

    fn prepare(&mut self, out: &mut dyn Write) -> Result<()>;

    fn bake(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Baking for 25 minutes at 350 degrees...")?;
        Ok(())
    }

    fn cut(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Cutting the pizza into diagonal slices...")?;
        Ok(())
    }

    fn box_up(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Placing the pizza in official PizzaStore box...")?;
        Ok(())
    }
}

pub struct CheesePizza {
    name: String,
    factory: Box<dyn PizzaIngredientFactory>,
    ingredients: Ingredients,
}

impl CheesePizza {
    pub fn new(name: impl Into<String>, factory: Box<dyn PizzaIngredientFactory>) -> Self {
        Self {
            name: name.into(),
            factory,
            ingredients: Ingredients::default(),
        }
    }
}

impl Pizza for CheesePizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }

    fn prepare(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Preparing...")?;
        self.ingredients.dough = Some(self.factory.create_dough(out)?);
        self.ingredients.sauce = Some(self.factory.create_sauce(out)?);
        self.ingredients.cheese = Some(self.factory.create_cheese(out)?);
        Ok(())
    }
}

pub struct ClamPizza {
    name: String,
    factory: Box<dyn PizzaIngredientFactory>,
    ingredients: Ingredients,
}

impl ClamPizza {
    pub fn new(name: impl Into<String>, factory: Box<dyn PizzaIngredientFactory>) -> Self {
        Self {
            name: name.into(),
            factory,
            ingredients: Ingredients::default(),
        }
    }
}

impl Pizza for ClamPizza {
    fn name(&self) -> &str {
        &self.name
    }

    fn ingredients(&self) -> &Ingredients {
        &self.ingredients
    }

    fn prepare(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Preparing...")?;
        self.ingredients.dough = Some(self.factory.create_dough(out)?);
        self.ingredients.sauce = Some(self.factory.create_sauce(out)?);
        self.ingredients.cheese = Some(self.factory.create_cheese(out)?);
        self.ingredients.clam = Some(self.factory.create_clam(out)?);
        Ok(())
    }
}

// ============================================================================
// Stores
// ============================================================================

pub trait PizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>>;

    fn order_pizza(&self, kind: &str, out: &mut dyn Write) -> Result<Box<dyn Pizza>> {
        let mut pizza = self.create_pizza(kind)?;

        pizza.prepare(out)?;
        pizza.bake(out)?;
        pizza.cut(out)?;
        pizza.box_up(out)?;
        Ok(pizza)
    }
}

pub struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>> {
        let factory = Box::new(ChicagoPizzaIngredientFactory);
        match kind {
            "cheese" => Ok(Box::new(CheesePizza::new("Chicago Style Cheese Pizza", factory))),
            "clam" => Ok(Box::new(ClamPizza::new("Chicago Style Clam Pizza", factory))),
            other => Err(PatternError::unsupported_pizza("Chicago Pizza Store", other)),
        }
    }
}

pub struct NewYorkPizzaStore;

impl PizzaStore for NewYorkPizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>> {
        let factory = Box::new(NewYorkPizzaIngredientFactory);
        match kind {
            "cheese" => Ok(Box::new(CheesePizza::new("New York Style Cheese Pizza", factory))),
            "clam" => Ok(Box::new(ClamPizza::new("New York Style Clam Pizza", factory))),
            other => Err(PatternError::unsupported_pizza("New York Pizza Store", other)),
        }
    }
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let chicago_store = ChicagoPizzaStore;
    let new_york_store = NewYorkPizzaStore;

    let pizza = chicago_store.order_pizza("cheese", out)?;
    writeln!(out, "Here's your {}!\n", pizza.name())?;

    let pizza = new_york_store.order_pizza("clam", out)?;
    writeln!(out, "Here's your {}!\n", pizza.name())?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
