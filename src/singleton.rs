// Singleton: one chocolate boiler per process, created on first use.

use std::io::Write;
use std::ptr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;
use tracing::debug;

use crate::error::Result;

lazy_static! {
    static ref BOILER: Mutex<ChocolateBoiler> = {
        debug!("creating the chocolate boiler");
        Mutex::new(ChocolateBoiler::new())
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChocolateBoiler {
    empty: bool,
    boiled: bool,
}

impl ChocolateBoiler {
    fn new() -> Self {
        Self {
            empty: true,
            boiled: false,
        }
    }

    /// The process-wide boiler.
    pub fn instance() -> &'static Mutex<ChocolateBoiler> {
        &BOILER
    }

    /// Lock the shared boiler. The state is two flags and stays valid even if a
    /// holder panicked, so a poisoned lock is recovered.
    pub fn lock() -> MutexGuard<'static, ChocolateBoiler> {
        Self::instance()
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn fill(&mut self) {
        if self.is_empty() {
            self.empty = false;
            self.boiled = false;
        } else {
            debug!("fill skipped: boiler is not empty");
        }
    }

    pub fn boil(&mut self) {
        if !self.is_empty() && !self.is_boiled() {
            self.boiled = true;
        } else {
            debug!(empty = self.empty, boiled = self.boiled, "boil skipped");
        }
    }

    // Same guard as boil: only a full, unboiled boiler drains.
    pub fn drain(&mut self) {
        if !self.is_empty() && !self.is_boiled() {
            self.empty = true;
        } else {
            debug!(empty = self.empty, boiled = self.boiled, "drain skipped");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn is_boiled(&self) -> bool {
        self.boiled
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn status_line(&self) -> String {
        format!(
            "isEmpty: {},\tisBoiled: {}",
            title_case(self.is_empty()),
            title_case(self.is_boiled())
        )
    }

    pub fn show_status(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.status_line())?;
        Ok(())
    }
}

fn title_case(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    let boiler1 = ChocolateBoiler::instance();
    let boiler2 = ChocolateBoiler::instance();

    // One guard for the whole sequence keeps other users of the boiler out.
    let mut boiler = ChocolateBoiler::lock();
    boiler.reset();

    boiler.show_status(out)?;
    boiler.fill();
    boiler.show_status(out)?;
    boiler.boil();
    boiler.show_status(out)?;
    boiler.drain();
    boiler.show_status(out)?;
    drop(boiler);

    if ptr::eq(boiler1, boiler2) {
        writeln!(out, "Singleton works, both variables contain the same instance.")?;
    } else {
        writeln!(out, "Singleton failed, variables contain different instances.")?;
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
