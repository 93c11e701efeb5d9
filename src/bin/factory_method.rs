use std::io::{self, Write};

use anyhow::Context;
use design_patterns::{factory_method, logger};

fn main() -> anyhow::Result<()> {
    logger::init(false);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    factory_method::run_demo(&mut out).context("factory method demo failed")?;
    out.flush()?;
    Ok(())
}
