use crate::components::button::Button;
use crate::components::counter_panel::CounterPanel;
use crate::components::header::Header;
use crate::components::luck_bar::LuckBar;
use crate::components::pack_grid::PackGrid;
use crate::components::reel_strip::ReelStrip;
use crate::dom;
use crate::random::MathRandomSource;
use crate::storage::WebStorage;
use crate::theme;
use cardkkang_game::constants::{REEL_FLASH_MS, REEL_TICK_MS};
use cardkkang_game::{Pack, PackEngine, RARITY_TABLE, ReelFrame, ReelSpin};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Engine wired to `localStorage` and the local calendar.
pub type WebEngine = PackEngine<WebStorage>;

/// Claim the spin flag; `false` when a spin is already running.
fn begin_spin(running: &RefCell<bool>) -> bool {
    !running.replace(true)
}

/// Drive one reel spin to completion, one frame per tick.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn run_spin(
    reels: UseStateHandle<Option<ReelFrame>>,
    flashing: UseStateHandle<bool>,
    spinning: UseStateHandle<bool>,
    running: Rc<RefCell<bool>>,
) {
    let mut source = MathRandomSource;
    let mut spin = ReelSpin::start(&mut source);
    log::debug!("reel spin for {} ticks", spin.max_ticks());
    while !spin.is_finished() {
        if let Err(err) = dom::sleep_ms(REEL_TICK_MS).await {
            log::warn!("reel timer failed: {}", dom::js_error_message(&err));
            break;
        }
        let Some(frame) = spin.tick(&RARITY_TABLE, &mut source) else {
            break;
        };
        reels.set(Some(frame));
        flashing.set(true);
        let flash_off = flashing.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dom::sleep_ms(REEL_FLASH_MS).await {
                log::warn!("reel flash timer failed: {}", dom::js_error_message(&err));
            }
            flash_off.set(false);
        });
    }
    running.replace(false);
    spinning.set(false);
}

/// Root component: header, reels, action buttons, counters, luck and the pack grid.
#[function_component(App)]
pub fn app() -> Html {
    let engine = use_memo((), |_| WebEngine::with_store(WebStorage::new()));
    let pack = use_state(|| None::<Pack>);
    let luck = use_state(|| 0_u8);
    let counters = {
        let engine = engine.clone();
        use_state(move || engine.counters())
    };
    let current_theme = use_state(|| theme::preference().load());
    let reels = use_state(|| None::<ReelFrame>);
    let flashing = use_state(|| false);
    let spinning = use_state(|| false);
    // Updated synchronously so clicks before the next render see it.
    let spin_running = use_mut_ref(|| false);

    let on_open = {
        let engine = engine.clone();
        let pack = pack.clone();
        let luck = luck.clone();
        let counters = counters.clone();
        Callback::from(move |_: MouseEvent| {
            let opening = engine.open(&mut MathRandomSource);
            luck.set(opening.luck);
            counters.set(opening.counters);
            pack.set(Some(opening.pack));
        })
    };

    let on_spin = {
        let reels = reels.clone();
        let flashing = flashing.clone();
        let spinning = spinning.clone();
        let spin_running = spin_running.clone();
        Callback::from(move |_: MouseEvent| {
            if !begin_spin(&spin_running) {
                return;
            }
            spinning.set(true);
            wasm_bindgen_futures::spawn_local(run_spin(
                reels.clone(),
                flashing.clone(),
                spinning.clone(),
                spin_running.clone(),
            ));
        })
    };

    let on_reset = {
        let engine = engine.clone();
        let counters = counters.clone();
        Callback::from(move |_: MouseEvent| counters.set(engine.reset_daily()))
    };

    let on_toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |()| current_theme.set(theme::toggle(*current_theme)))
    };

    html! {
        <div class="app max-w-3xl mx-auto p-4 space-y-4">
            <Header theme={*current_theme} {on_toggle_theme} />
            <main id="main" role="main" class="space-y-4">
                <ReelStrip frame={*reels} flashing={*flashing} />
                <div class="flex flex-wrap gap-2">
                    <Button id={AttrValue::from("openBtn")} label="팩 열기" onclick={on_open} />
                    <Button id={AttrValue::from("spinBtn")} label="스핀" disabled={*spinning} onclick={on_spin} />
                    <Button id={AttrValue::from("resetBtn")} label="오늘 초기화" onclick={on_reset} />
                </div>
                <CounterPanel counters={*counters} />
                <LuckBar luck={*luck} />
                <PackGrid pack={(*pack).clone()} />
            </main>
        </div>
    }
}
