use cardkkang_game::ReelFrame;
use yew::prelude::*;

const IDLE_SYMBOL: &str = "?";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub frame: Option<ReelFrame>,
    /// Set for a moment after every tick.
    #[prop_or_default]
    pub flashing: bool,
}

#[function_component(ReelStrip)]
pub fn reel_strip(p: &Props) -> Html {
    let reel = |idx: usize| {
        let symbol = p
            .frame
            .as_ref()
            .and_then(|frame| frame.get(idx))
            .map_or(IDLE_SYMBOL, |code| code.as_str());
        let class = classes!("reel", p.flashing.then_some("spin"));
        html! {
            <div {class}>
                <span id={format!("reel{}", idx + 1)}>{ symbol }</span>
            </div>
        }
    };
    html! {
        <div class="reels flex gap-2" aria-live="polite">
            { for (0..cardkkang_game::constants::REEL_COUNT).map(reel) }
        </div>
    }
}
