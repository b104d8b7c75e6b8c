use cardkkang_game::clamp_percent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub luck: u8,
}

#[function_component(LuckBar)]
pub fn luck_bar(p: &Props) -> Html {
    let percent = clamp_percent(i64::from(p.luck));
    html! {
        <section class="luck" aria-label="Luck score">
            <div class="flex justify-between text-xs text-zinc-500">
                <span>{ "행운 지수" }</span>
                <span>{ format!("{percent}%") }</span>
            </div>
            <div
                class="h-2 rounded-full bg-zinc-200"
                role="meter"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={percent.to_string()}
            >
                <div id="luckBar" class="h-2 rounded-full" style={format!("width: {percent}%")}></div>
            </div>
        </section>
    }
}
