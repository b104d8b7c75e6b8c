use cardkkang_game::CounterSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub counters: CounterSnapshot,
}

/// Group digits in threes: `12345` becomes `12,345`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[function_component(CounterPanel)]
pub fn counter_panel(p: &Props) -> Html {
    let milestone = p.counters.milestone();
    let width = format!("width: {}%", milestone.percent);
    html! {
        <section class="counter-panel" aria-label="Card counters">
            <dl class="grid grid-cols-2 gap-2">
                <div>
                    <dt class="text-xs text-zinc-500">{ "오늘" }</dt>
                    <dd id="todayCount" class="text-xl font-semibold">{ format_count(p.counters.daily_total) }</dd>
                </div>
                <div>
                    <dt class="text-xs text-zinc-500">{ "누적" }</dt>
                    <dd id="totalCount" class="text-xl font-semibold">{ format_count(p.counters.grand_total) }</dd>
                </div>
            </dl>
            <div
                class="progress-track h-2 rounded-full bg-zinc-200"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={milestone.percent.to_string()}
            >
                <div id="progressBar" class="h-2 rounded-full" style={width}></div>
            </div>
            <p class="text-xs text-zinc-500">
                { "다음 마일스톤까지 " }
                <span id="toNext">{ milestone.to_next.to_string() }</span>
                { "장" }
            </p>
        </section>
    }
}
