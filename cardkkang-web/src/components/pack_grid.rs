use cardkkang_game::constants::TILE_STAGGER_MS;
use cardkkang_game::{Card, Pack};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub pack: Option<Pack>,
}

/// Animation delay for the tile at `index`.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    let step = u64::from(TILE_STAGGER_MS);
    let delay = u64::try_from(index).map_or(u64::MAX, |idx| idx.saturating_mul(step));
    format!("animation-delay: {delay}ms")
}

fn card_tile(index: usize, card: &Card) -> Html {
    let class = classes!(
        "relative",
        "rounded-xl",
        "p-3",
        "border",
        "bg-white",
        "dark:bg-zinc-900",
        "animate-fadein",
        card.tier.class_tag
    );
    html! {
        <div {class} style={stagger_delay(index)} data-rarity={card.code().as_str()}>
            <div class="card-badge absolute -top-2 -right-2 text-[10px] px-2 py-1 rounded-full border">
                { card.code().as_str() }
            </div>
            <div class="card-tile aspect-[3/4] w-full rounded-lg flex items-center justify-center text-sm font-medium">
                { card.name.clone() }
            </div>
            <div class="card-label mt-2 text-xs text-zinc-500">{ card.tier.name }</div>
        </div>
    }
}

#[function_component(PackGrid)]
pub fn pack_grid(p: &Props) -> Html {
    let cards = p.pack.as_ref().filter(|pack| !pack.is_empty());
    html! {
        <section aria-label="Opened pack">
            <div id="packGrid" class="grid grid-cols-2 sm:grid-cols-5 gap-3">
                { for cards.into_iter().flat_map(|pack| pack.iter().enumerate()).map(|(idx, card)| card_tile(idx, card)) }
            </div>
            if cards.is_none() {
                <p id="emptyHint" class="text-sm text-zinc-500">
                    { "아직 연 팩이 없어요. 팩을 열어보세요!" }
                </p>
            }
        </section>
    }
}
