use anyhow::{Result, ensure};

use super::ScenarioCtx;

pub fn run(ctx: &ScenarioCtx) -> Result<()> {
    let harness = ctx.harness();
    let mut source = ctx.pack_source();
    let opening = harness.engine.open(&mut source);
    let expected = u64::try_from(ctx.pack_size)?;

    ensure!(
        opening.pack.len() == ctx.pack_size,
        "pack has {} cards, expected {}",
        opening.pack.len(),
        ctx.pack_size
    );
    ensure!(opening.luck <= 100, "luck {} above 100", opening.luck);
    ensure!(
        opening.counters.daily_total == expected && opening.counters.grand_total == expected,
        "counters {:?} after one pack of {expected}",
        opening.counters
    );
    ensure!(
        source.draws() == expected * 2,
        "pack consumed {} draws, expected {}",
        source.draws(),
        expected * 2
    );
    log::debug!(
        "smoke seed {}: best {:?}, luck {}",
        ctx.seed,
        opening.pack.best(),
        opening.luck
    );
    Ok(())
}
