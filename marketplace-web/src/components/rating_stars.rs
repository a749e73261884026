use shared::actions::MAX_RATING;
use yew::{Callback, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct RatingStarsProps {
    /// Average rating, `0.0..=5.0`.
    pub value: f64,
    /// Clicking a star emits its value; read-only without a callback.
    #[prop_or_default]
    pub on_rate: Option<Callback<u8>>,
}

#[function_component(RatingStars)]
pub fn rating_stars(props: &RatingStarsProps) -> Html {
    let filled = props.value.round();

    html! {
        <div class="flex items-center gap-1" title={format!("{:.1}", props.value)}>
            {
                for (1..=MAX_RATING).map(|star| {
                    let icon = if f64::from(star) <= filled {
                        IconId::HeroiconsSolidStar
                    } else {
                        IconId::HeroiconsOutlineStar
                    };
                    match props.on_rate.clone() {
                        Some(on_rate) => html! {
                            <button
                                class="btn btn-ghost btn-xs px-0 text-warning"
                                aria-label={format!("{star}")}
                                onclick={move |_| on_rate.emit(star)}
                            >
                                <Icon icon_id={icon} width="18" height="18" />
                            </button>
                        },
                        None => html! {
                            <span class="text-warning"><Icon icon_id={icon} width="18" height="18" /></span>
                        },
                    }
                })
            }
            <span class="text-xs opacity-70 ml-1">{format!("{:.1}", props.value)}</span>
        </div>
    }
}
