use anyhow::{Context, Result, ensure};
use cardkkang_game::{
    CounterSnapshot, KeyValueStore, MemoryStore, StorageKeys, Theme, ThemePreference,
};

use super::ScenarioCtx;

pub fn lifecycle(ctx: &ScenarioCtx) -> Result<()> {
    let harness = ctx.harness();
    let n = u64::try_from(ctx.pack_size)?;
    let mut source = ctx.pack_source();

    let first = harness.engine.open(&mut source).counters;
    ensure!(
        first
            == CounterSnapshot {
                daily_total: n,
                grand_total: n
            },
        "first open gave {first:?}"
    );
    let second = harness.engine.open(&mut source).counters;
    ensure!(
        second
            == CounterSnapshot {
                daily_total: 2 * n,
                grand_total: 2 * n
            },
        "second open gave {second:?}"
    );
    let reset = harness.engine.reset_daily();
    ensure!(
        reset
            == CounterSnapshot {
                daily_total: 0,
                grand_total: 2 * n
            },
        "reset gave {reset:?}"
    );
    ensure!(
        harness.engine.counters() == reset,
        "snapshot drifted after reset"
    );

    let keys = harness.engine.counter_store().keys();
    let total = harness.backend.raw(&keys.total_key());
    ensure!(
        total.as_deref() == Some((2 * n).to_string().as_str()),
        "stored total {total:?}"
    );
    Ok(())
}

pub fn date_rollover(ctx: &ScenarioCtx) -> Result<()> {
    let harness = ctx.harness();
    let n = u64::try_from(ctx.pack_size)?;
    let mut source = ctx.pack_source();
    let counters = harness.engine.counter_store();

    let day_one = counters.today_key();
    harness.engine.open(&mut source);
    harness.clock.advance_days(1);
    let day_two = counters.today_key();
    let after = harness.engine.open(&mut source).counters;

    ensure!(day_one != day_two, "rollover reused key {day_one}");
    ensure!(after.daily_total == n, "new day counted {}", after.daily_total);
    ensure!(after.grand_total == 2 * n, "total counted {}", after.grand_total);
    for key in [&day_one, &day_two] {
        let stored = harness
            .backend
            .get_item(key)?
            .with_context(|| format!("missing daily key {key}"))?;
        ensure!(stored == n.to_string(), "{key} holds {stored}");
    }
    Ok(())
}

pub fn theme_toggle(_ctx: &ScenarioCtx) -> Result<()> {
    let backend = MemoryStore::new();
    let keys = StorageKeys::default();
    let pref = ThemePreference::new(backend.clone(), &keys);

    ensure!(pref.load() == Theme::Light, "fresh theme is not light");
    let dark = pref.toggle(pref.load());
    ensure!(
        dark == Theme::Dark && backend.raw(&keys.theme_key()).as_deref() == Some("dark"),
        "first toggle stored {:?}",
        backend.raw(&keys.theme_key())
    );
    let light = pref.toggle(dark);
    ensure!(
        light == Theme::Light && backend.raw(&keys.theme_key()).as_deref() == Some("light"),
        "second toggle stored {:?}",
        backend.raw(&keys.theme_key())
    );

    backend.insert_raw(keys.theme_key(), "Dark");
    ensure!(pref.load() == Theme::Light, "only exact 'dark' selects dark");
    Ok(())
}
