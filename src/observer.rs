// Observer: a weather-data subject pushes new measurements to its displays.

use std::cell::RefCell;
use std::io::Write;
use std::ptr;
use std::rc::Rc;

use tracing::debug;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measurements {
    pub temperature: f64,
    pub humidity: f64,
    pub pressure: f64,
}

impl Measurements {
    pub fn new(temperature: f64, humidity: f64, pressure: f64) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

pub trait Observer {
    /// Receive updates from the subject.
    fn update(&mut self, measurements: Measurements, out: &mut dyn Write) -> Result<()>;
}

pub trait DisplayElement {
    fn display(&self, out: &mut dyn Write) -> Result<()>;
}

/// Shared handle the subject keeps for each observer. Identity is the allocation address.
pub type ObserverHandle = Rc<RefCell<dyn Observer>>;

pub trait Subject {
    fn register_observer(&mut self, observer: ObserverHandle) -> Result<()>;
    fn remove_observer(&mut self, observer: &ObserverHandle) -> Result<()>;
    fn notify_observers(&self, out: &mut dyn Write) -> Result<()>;
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Default)]
pub struct WeatherData {
    observers: Vec<ObserverHandle>,
    measurements: Measurements,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, observer: &ObserverHandle) -> Option<usize> {
        self.observers
            .iter()
            .position(|o| ptr::addr_eq(Rc::as_ptr(o), Rc::as_ptr(observer)))
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Store a new reading and push it to every observer in registration order.
    pub fn set_measurements(
        &mut self,
        temperature: f64,
        humidity: f64,
        pressure: f64,
        out: &mut dyn Write,
    ) -> Result<()> {
        self.measurements = Measurements::new(temperature, humidity, pressure);
        self.notify_observers(out)
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }

    pub fn temperature(&self) -> f64 {
        self.measurements.temperature
    }

    pub fn humidity(&self) -> f64 {
        self.measurements.humidity
    }

    pub fn pressure(&self) -> f64 {
        self.measurements.pressure
    }
}

impl Subject for WeatherData {
    fn register_observer(&mut self, observer: ObserverHandle) -> Result<()> {
        if self.position(&observer).is_some() {
            return Err(PatternError::ObserverAlreadyRegistered);
        }
        self.observers.push(observer);
        debug!(observers = self.observer_count(), "observer registered");
        Ok(())
    }

    fn remove_observer(&mut self, observer: &ObserverHandle) -> Result<()> {
        let index = self
            .position(observer)
            .ok_or(PatternError::ObserverNotRegistered)?;
        self.observers.remove(index);
        debug!(observers = self.observer_count(), "observer removed");
        Ok(())
    }

    fn notify_observers(&self, out: &mut dyn Write) -> Result<()> {
        for observer in &self.observers {
            let mut observer = observer
                .try_borrow_mut()
                .map_err(|_| PatternError::ObserverBusy)?;
            observer.update(self.measurements, out)?;
        }
        Ok(())
    }
}

// ============================================================================
// Observers
// ============================================================================

#[derive(Debug, Default)]
pub struct CurrentConditionsDisplay {
    last: Option<Measurements>,
}

impl CurrentConditionsDisplay {
    /// Build a display and register it with `subject`.
    ///
    /// Drop any borrow of the returned handle before the subject notifies,
    /// otherwise the notification fails with `ObserverBusy`.
    pub fn attach(subject: &mut dyn Subject) -> Result<Rc<RefCell<CurrentConditionsDisplay>>> {
        let display = Rc::new(RefCell::new(CurrentConditionsDisplay::default()));
        subject.register_observer(display.clone())?;
        Ok(display)
    }

    pub fn last(&self) -> Option<Measurements> {
        self.last
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurements: Measurements, out: &mut dyn Write) -> Result<()> {
        self.last = Some(measurements);
        self.display(out)
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn display(&self, out: &mut dyn Write) -> Result<()> {
        if let Some(m) = self.last {
            writeln!(
                out,
                "Current Conditions: temperature {}, humidity {}%, and pressure {} atm",
                m.temperature, m.humidity, m.pressure
            )?;
        }
        Ok(())
    }
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let mut weather_data = WeatherData::new();
    let _current_display = CurrentConditionsDisplay::attach(&mut weather_data)?;

    weather_data.set_measurements(80.0, 65.0, 30.4, out)?;
    weather_data.set_measurements(82.0, 70.0, 29.2, out)?;
    weather_data.set_measurements(78.0, 90.0, 29.2, out)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
