use std::collections::HashMap;

use triplink_core::api::Cab;
use triplink_core::pricing::estimate;
use triplink_core::rates::{RateTable, VehicleCategory};
use triplink_core::trip::TripContext;
use yew::prelude::*;

/// Selectable models per card, keyed by the card's vehicle kind. The first
/// entry is the pre-selected default.
const HATCHBACK_MODELS: &[(&str, &str)] = &[
    ("Maruti Wagonr", "/images/wagonr.jpg"),
    ("Toyota Glanza", "/images/glanza.jpg"),
    ("Celerio", "/images/celerio.png"),
];
const SEDAN_MODELS: &[(&str, &str)] = &[
    ("Maruti Swift Dzire", "/images/swift.jpg"),
    ("Honda Amaze", "/images/amaze.jpg"),
    ("Hyundai Aura/Xcent", "/images/aura.jpg"),
    ("Toyota etios", "/images/etios.jpg"),
];
const SUV_MODELS: &[(&str, &str)] = &[
    ("Maruti Ertiga", "/images/ertiga.jpg"),
    ("Mahindra Marazzo", "/images/marazzo.jpg"),
];

fn models_for(kind: &str) -> &'static [(&'static str, &'static str)] {
    match kind {
        "Hatchback" => HATCHBACK_MODELS,
        "Sedan" => SEDAN_MODELS,
        "SUV" => SUV_MODELS,
        _ => &[],
    }
}

fn subtitle_for(kind: &str) -> &'static str {
    match kind {
        "Hatchback" => "Compact Hatchback • Manual • Efficient",
        "Sedan" => "Luxury Sedan • Manual • Sleek Design",
        "SUV" => "Premium SUV • Automatic • Spacious",
        "MUV" => "Luxury MUV • Automatic • Premium",
        _ => "",
    }
}

/// What the reserve action hands back to the owner: the card's display name
/// and currently selected model image plus the price shown at click time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveChoice {
    pub name: String,
    pub image: String,
    pub price: i64,
    pub features: Vec<String>,
    pub category: String,
}

#[derive(Properties, PartialEq)]
pub struct SearchPageProps {
    pub ctx: TripContext,
    pub table: RateTable,
    pub cabs: Vec<Cab>,
    pub on_reserve: Callback<ReserveChoice>,
}

#[function_component(SearchPage)]
pub fn search_page(props: &SearchPageProps) -> Html {
    // Selected model index per card kind; absent means the first model.
    let selections = use_state(HashMap::<String, usize>::new);
    let distance_known = props.ctx.distance_km.is_some();

    html! {
        <div class="min-h-screen bg-gray-50 px-4 py-6" data-testid="search-page">
            <div class="max-w-5xl mx-auto">
                <div class="bg-white rounded-xl shadow p-4 mb-6" data-testid="trip-summary">
                    <h1 class="text-2xl font-bold text-gray-800">
                        { format!("{} → {}", props.ctx.pickup, props.ctx.drop) }
                    </h1>
                    <p class="text-sm text-gray-600">
                        { &props.ctx.date }
                        if props.ctx.trip_type.is_round_trip() {
                            { format!(" – {} ({} days)", props.ctx.return_date, props.ctx.days) }
                        }
                        { format!(" • {}", props.ctx.time) }
                    </p>
                    <p class="text-sm text-gray-600">
                        {
                            props.ctx.distance_km.map_or_else(
                                || "Distance unavailable".to_string(),
                                |km| format!("Distance: {km} km"),
                            )
                        }
                    </p>
                    if !distance_known {
                        <p class="text-sm text-red-600 mt-1">
                            { "Please select pickup and drop locations to get the final price" }
                        </p>
                    }
                </div>

                <div class="space-y-6">
                    { for props.cabs.iter().map(|cab| {
                        render_card(props, &selections, cab, distance_known)
                    }) }
                </div>
            </div>
        </div>
    }
}

fn render_card(
    props: &SearchPageProps,
    selections: &UseStateHandle<HashMap<String, usize>>,
    cab: &Cab,
    distance_known: bool,
) -> Html {
    let category_label = cab.category.clone().unwrap_or_else(|| cab.kind.clone());
    let category = VehicleCategory::from_label(&category_label);
    let rate = category.map_or(0.0, |c| props.table.rate(c));
    let price = category.map_or(0, |c| estimate(&props.ctx, &props.table, c).total);

    let models = models_for(&cab.kind);
    let selected_idx = selections.get(&cab.kind).copied().unwrap_or(0);
    let selected_image = models
        .get(selected_idx)
        .map(|(_, image)| (*image).to_string())
        .or_else(|| cab.image.clone())
        .unwrap_or_default();

    let on_reserve = {
        let cb = props.on_reserve.clone();
        let choice = ReserveChoice {
            name: cab.kind.clone(),
            image: selected_image.clone(),
            price,
            features: cab.features.clone(),
            category: cab.kind.clone(),
        };
        Callback::from(move |_| cb.emit(choice.clone()))
    };

    html! {
        <div class="bg-white rounded-xl shadow overflow-hidden md:flex" data-testid={format!("cab-card-{}", cab.kind)}>
            <img src={selected_image.clone()} alt={cab.kind.clone()} class="w-full md:w-64 h-44 object-cover" />
            <div class="p-4 flex-1">
                <div class="flex items-start justify-between">
                    <div>
                        <h2 class="text-xl font-bold text-gray-800">{ &cab.kind }</h2>
                        <p class="text-sm text-gray-500">{ subtitle_for(&cab.kind) }</p>
                        <p class="text-xs text-gray-400">
                            { format!("★ {} ({} reviews)", cab.rating, cab.reviews) }
                        </p>
                    </div>
                    <div class="text-right">
                        <p class="text-2xl font-bold text-blue-600">{ format!("₹{price}") }</p>
                        <p class="text-xs text-gray-500">{ format!("Current Rate: ₹{rate}/km") }</p>
                    </div>
                </div>

                <div class="flex flex-wrap gap-2 mt-2">
                    { for cab.features.iter().map(|f| html! {
                        <span class="text-xs bg-gray-100 px-2 py-1 rounded">{ f }</span>
                    }) }
                </div>

                if !models.is_empty() {
                    <div class="flex flex-wrap gap-3 mt-3" role="radiogroup">
                        { for models.iter().enumerate().map(|(idx, (model, _))| {
                            let onchange = {
                                let selections = selections.clone();
                                let kind = cab.kind.clone();
                                Callback::from(move |_| {
                                    let mut next = (*selections).clone();
                                    next.insert(kind.clone(), idx);
                                    selections.set(next);
                                })
                            };
                            html! {
                                <label class="flex items-center gap-1 text-sm text-gray-700">
                                    <input
                                        type="radio"
                                        name={format!("model-{}", cab.kind)}
                                        checked={idx == selected_idx}
                                        {onchange}
                                    />
                                    { *model }
                                </label>
                            }
                        }) }
                    </div>
                }

                <button
                    type="button"
                    class="mt-4 px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:opacity-50"
                    disabled={!distance_known}
                    onclick={on_reserve}
                >
                    { "Reserve Now" }
                </button>
            </div>
        </div>
    }
}
