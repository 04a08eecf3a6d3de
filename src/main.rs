//! Main module for the Can I Drive There? wizard using Yew.
//! Wires UI components, state hooks, and side-effect logic.

use can_i_drive_there::{
    catalog::{self, DrinkCategory},
    estimate_bac, matching_countries, read_country_limits_from_csv_string,
    worker_agent::{BacArgs, BacTask},
    BacResults, ConsumptionProfile, CountryLimit, Drink, EatingStatus, Sex,
};
use futures::{SinkExt, StreamExt};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_agent::Spawnable;

mod components;
mod config;
mod utils;

use components::{render_confetti, render_results, MascotGuide};
use config::*;
use utils::{validate_age, validate_hours, validate_weight};

// ──────────────────────────────────────────────────────────────────────────────

/// The five wizard screens, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Drinks,
    Time,
    AboutYou,
    Confirm,
    Results,
}

impl Step {
    fn progress_percent(self) -> u32 {
        match self {
            Step::Drinks => 25,
            Step::Time => 50,
            Step::AboutYou => 75,
            Step::Confirm | Step::Results => 100,
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Drinks => Some(Step::Time),
            Step::Time => Some(Step::AboutYou),
            Step::AboutYou => Some(Step::Confirm),
            Step::Confirm | Step::Results => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::Drinks | Step::Results => None,
            Step::Time => Some(Step::Drinks),
            Step::AboutYou => Some(Step::Time),
            Step::Confirm => Some(Step::AboutYou),
        }
    }
}

/// One drink the user added, carrying the display fields alongside the
/// numbers the estimator needs.
#[derive(Debug, Clone, PartialEq)]
struct SelectedDrink {
    /// Option id plus serving id; duplicates merge into one row.
    key: String,
    name: &'static str,
    serving_name: &'static str,
    color: &'static str,
    emoji: &'static str,
    size_icon: &'static str,
    abv_percent: f64,
    amount_ml: f64,
    quantity: u32,
}

impl SelectedDrink {
    fn to_drink(&self) -> Drink {
        Drink {
            volume_ml: self.amount_ml,
            abv_percent: self.abv_percent,
            quantity: self.quantity,
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// Helper functions

/// What the mascot says above the current screen.
fn mascot_message(step: Step, results: Option<&BacResults>) -> &'static str {
    match step {
        Step::Drinks => "Let's start by selecting what you've been drinking!",
        Step::Time => "Now, tell me how long it's been since your last drink.",
        Step::AboutYou => "I need to know a bit about you to calculate accurately.",
        Step::Confirm => "Ready to see the results? Let's calculate!",
        Step::Results => match results {
            Some(r) if r.bac > 0.0 => "Here are your results! Remember, never drink and drive!",
            _ => "Good news! Your BAC is 0%. You're good to go!",
        },
    }
}

/// Footer quip under the selected-drinks list.
fn drink_list_tip(count: usize) -> &'static str {
    match count {
        1 => "That's a good start! Add more or continue.",
        2 => "Looking good! Ready to continue?",
        _ => "Wow, that's quite a selection! Ready to see the results?",
    }
}

/// Ask the background worker for one calculation; `None` if the bridge died.
async fn run_in_worker(args: BacArgs) -> Option<BacResults> {
    let mut bridge = <BacTask as Spawnable>::spawner().spawn(WORKER_SCRIPT);
    bridge.send(args).await.ok()?;
    bridge.next().await
}

// ──────────────────────────────────────────────────────────────────────────────

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let csv_data = include_str!("countries.csv");
    let countries = use_state(Vec::<CountryLimit>::new);
    let step = use_state(|| Step::Drinks);

    // Drink selection state
    let selected_category = use_state(|| DrinkCategory::Beer);
    let selected_drink_id = use_state(|| None::<&'static str>);
    let selected_size_id = use_state(|| None::<&'static str>);
    let drinks = use_state(Vec::<SelectedDrink>::new);
    let show_confetti = use_state(|| false);
    let confetti_timer = use_state(|| None::<Timeout>);

    // Elapsed time state
    let hours = use_state(|| DEFAULT_HOURS);
    let hours_text = use_state(|| DEFAULT_HOURS.to_string());
    let hours_error = use_state(|| None::<String>);

    // Personal info state
    let sex = use_state(|| None::<Sex>);
    let weight = use_state(|| 0.0f64);
    let weight_text = use_state(String::new);
    let weight_error = use_state(|| None::<String>);
    let age = use_state(|| None::<u32>);
    let age_text = use_state(String::new);
    let age_error = use_state(|| None::<String>);
    let eating_status = use_state(|| None::<EatingStatus>);

    // Result state
    let results = use_state(|| None::<BacResults>);
    let is_calculating = use_state(|| false);
    let countries_revealed = use_state(|| false);
    let reveal_timer = use_state(|| None::<Timeout>);

    // Load the country-limit table on mount
    {
        let countries = countries.clone();
        use_effect_with((), move |_| {
            let loaded = read_country_limits_from_csv_string(csv_data, 0, 1, 1);
            countries.set(loaded);
        });
    }

    // Snapshot the form, hand it to the worker, and hold the spinner for the
    // minimum display time before showing the results screen.
    let calculate = {
        let drinks = drinks.clone();
        let hours = hours.clone();
        let sex = sex.clone();
        let weight = weight.clone();
        let age = age.clone();
        let eating_status = eating_status.clone();
        let countries = countries.clone();
        let results = results.clone();
        let is_calculating = is_calculating.clone();
        let countries_revealed = countries_revealed.clone();
        let reveal_timer = reveal_timer.clone();
        let step = step.clone();
        Callback::from(move |_: ()| {
            let profile = ConsumptionProfile {
                drinks: drinks.iter().map(SelectedDrink::to_drink).collect(),
                hours_since_last_drink: *hours,
                sex: *sex,
                weight_kg: *weight,
                age: *age,
                eating_status: (*eating_status).unwrap_or_default(),
            };
            let args = BacArgs {
                profile,
                countries: (*countries).clone(),
            };

            is_calculating.set(true);
            let started = js_sys::Date::now();

            let results = results.clone();
            let is_calculating = is_calculating.clone();
            let countries_revealed = countries_revealed.clone();
            let reveal_timer = reveal_timer.clone();
            let step = step.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match run_in_worker(args.clone()).await {
                    Some(r) => r,
                    None => {
                        // Worker bridge unavailable; the computation is
                        // instant, so run it on the main thread instead.
                        let bac = estimate_bac(&args.profile);
                        let countries = matching_countries(bac, &args.countries);
                        BacResults { bac, countries }
                    }
                };

                let elapsed = js_sys::Date::now() - started;
                let remaining = (MIN_SPINNER_MS - elapsed).max(0.0) as u32;
                Timeout::new(remaining, move || {
                    results.set(Some(outcome));
                    is_calculating.set(false);
                    step.set(Step::Results);
                    countries_revealed.set(false);
                    let countries_revealed = countries_revealed.clone();
                    reveal_timer.set(Some(Timeout::new(COUNTRY_REVEAL_MS, move || {
                        countries_revealed.set(true);
                    })));
                })
                .forget();
            });
        })
    };

    let next_step = {
        let step = step.clone();
        let calculate = calculate.clone();
        Callback::from(move |_: MouseEvent| match step.next() {
            Some(next) => step.set(next),
            None => calculate.emit(()),
        })
    };

    let prev_step = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = step.prev() {
                step.set(prev);
            }
        })
    };

    let restart = {
        let step = step.clone();
        let drinks = drinks.clone();
        let selected_drink_id = selected_drink_id.clone();
        let selected_size_id = selected_size_id.clone();
        let hours = hours.clone();
        let sex = sex.clone();
        let weight = weight.clone();
        let weight_text = weight_text.clone();
        let age = age.clone();
        let age_text = age_text.clone();
        let eating_status = eating_status.clone();
        let results = results.clone();
        Callback::from(move |_: MouseEvent| {
            step.set(Step::Drinks);
            drinks.set(Vec::new());
            selected_drink_id.set(None);
            selected_size_id.set(None);
            hours.set(DEFAULT_HOURS);
            sex.set(None);
            weight.set(0.0);
            weight_text.set(String::new());
            age.set(None);
            age_text.set(String::new());
            eating_status.set(None);
            results.set(None);
        })
    };

    // --- Drink selection handlers ---
    let select_category = {
        let selected_category = selected_category.clone();
        let selected_drink_id = selected_drink_id.clone();
        let selected_size_id = selected_size_id.clone();
        Callback::from(move |category: DrinkCategory| {
            selected_category.set(category);
            selected_drink_id.set(None);
            selected_size_id.set(None);
        })
    };

    let add_drink = {
        let selected_category = selected_category.clone();
        let selected_drink_id = selected_drink_id.clone();
        let selected_size_id = selected_size_id.clone();
        let drinks = drinks.clone();
        let show_confetti = show_confetti.clone();
        let confetti_timer = confetti_timer.clone();
        Callback::from(move |_: MouseEvent| {
            let (Some(drink_id), Some(size_id)) = (*selected_drink_id, *selected_size_id) else {
                return;
            };
            let category = *selected_category;
            let (Some(option), Some(serving)) = (
                catalog::find_option(category, drink_id),
                catalog::find_serving(category, size_id),
            ) else {
                return;
            };

            let key = format!("{}-{}", option.id, serving.id);
            let mut updated = (*drinks).clone();
            if let Some(existing) = updated.iter_mut().find(|d| d.key == key) {
                existing.quantity += 1;
            } else {
                updated.push(SelectedDrink {
                    key,
                    name: option.name,
                    serving_name: serving.name,
                    color: option.color,
                    emoji: category.emoji(),
                    size_icon: serving.icon,
                    abv_percent: option.abv_percent,
                    amount_ml: serving.amount_ml,
                    quantity: 1,
                });
            }
            drinks.set(updated);

            // Reset selections and celebrate
            selected_drink_id.set(None);
            selected_size_id.set(None);
            show_confetti.set(true);
            let show_confetti = show_confetti.clone();
            confetti_timer.set(Some(Timeout::new(CONFETTI_CLEAR_MS, move || {
                show_confetti.set(false);
            })));
        })
    };

    // --- Elapsed time handlers ---
    let hours_slider_oninput = {
        let hours = hours.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(val) = input.value().parse::<f64>() {
                hours.set(val);
            }
        })
    };

    let hours_text_oninput = {
        let hours_text = hours_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            hours_text.set(input.value());
        })
    };

    let handle_hours_input = {
        let hours_text = hours_text.clone();
        let hours = hours.clone();
        let hours_error = hours_error.clone();
        Callback::from(move |_: ()| {
            let text_val = (*hours_text).clone();
            if text_val.trim().is_empty() {
                // Allow empty commit to clear errors, but don't change hours
                hours_error.set(None);
                return;
            }
            match validate_hours(&text_val) {
                Ok(valid) => {
                    hours_error.set(None);
                    hours.set(valid);
                    hours_text.set(valid.to_string());
                }
                Err(e) => {
                    hours_error.set(Some(e));
                }
            }
        })
    };

    let hours_onkeydown = {
        let commit_handler = handle_hours_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_handler.emit(());
            }
        })
    };

    // Sync hours -> hours_text
    {
        let num_val = *hours;
        let text_setter = hours_text.clone();
        let error_setter = hours_error.clone();
        use_effect_with(num_val, move |&current| {
            let as_string = current.to_string();
            if *text_setter != as_string {
                text_setter.set(as_string);
                error_setter.set(None);
            }
            || ()
        });
    }

    // --- Personal info handlers ---
    let weight_text_oninput = {
        let weight_text = weight_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            weight_text.set(input.value());
        })
    };

    let handle_weight_input = {
        let weight_text = weight_text.clone();
        let weight = weight.clone();
        let weight_error = weight_error.clone();
        Callback::from(move |_: ()| {
            let text_val = (*weight_text).clone();
            if text_val.trim().is_empty() {
                // An empty commit clears the field; the estimator treats the
                // missing weight as a zero result rather than an error.
                weight_error.set(None);
                weight.set(0.0);
                return;
            }
            match validate_weight(&text_val) {
                Ok(valid) => {
                    weight_error.set(None);
                    weight.set(valid);
                    weight_text.set(valid.to_string());
                }
                Err(e) => {
                    weight_error.set(Some(e));
                }
            }
        })
    };

    let weight_onkeydown = {
        let commit_handler = handle_weight_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_handler.emit(());
            }
        })
    };

    let age_text_oninput = {
        let age_text = age_text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            age_text.set(input.value());
        })
    };

    let handle_age_input = {
        let age_text = age_text.clone();
        let age = age.clone();
        let age_error = age_error.clone();
        Callback::from(move |_: ()| {
            let text_val = (*age_text).clone();
            if text_val.trim().is_empty() {
                age_error.set(None);
                age.set(None);
                return;
            }
            match validate_age(&text_val) {
                Ok(valid) => {
                    age_error.set(None);
                    age.set(Some(valid));
                    age_text.set(valid.to_string());
                }
                Err(e) => {
                    age_error.set(Some(e));
                }
            }
        })
    };

    let age_onkeydown = {
        let commit_handler = handle_age_input.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                commit_handler.emit(());
            }
        })
    };

    let eating_onchange = {
        let eating_status = eating_status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let status = match select.value().as_str() {
                "empty" => Some(EatingStatus::Empty),
                "some" => Some(EatingStatus::SomeFood),
                "full" => Some(EatingStatus::FullMeal),
                _ => None,
            };
            eating_status.set(status);
        })
    };

    // --- Step views ---
    let drinks_view = {
        let category = *selected_category;
        html! {
            <div class="step-drinks">
                <h2>{ "What have you been drinking?" }</h2>

                <div class="panel">
                    <div class="category-tabs">
                        { DrinkCategory::ALL.iter().map(|&c| {
                            let select_category = select_category.clone();
                            let class = if c == category { "tab active" } else { "tab" };
                            html! {
                                <button
                                    class={class}
                                    onclick={Callback::from(move |_| select_category.emit(c))}
                                >
                                    <span class="tab-emoji">{ c.emoji() }</span>
                                    <span>{ c.name() }</span>
                                </button>
                            }
                        }).collect::<Html>() }
                    </div>

                    <h3>{ format!("Select your {}:", category.name().to_lowercase()) }</h3>
                    <div class="option-grid">
                        { category.options().iter().map(|option| {
                            let selected_drink_id = selected_drink_id.clone();
                            let selected_size_id = selected_size_id.clone();
                            let id = option.id;
                            let class = if *selected_drink_id == Some(id) {
                                "option-card selected"
                            } else {
                                "option-card"
                            };
                            html! {
                                <div
                                    class={class}
                                    onclick={Callback::from(move |_| {
                                        selected_drink_id.set(Some(id));
                                        selected_size_id.set(None);
                                    })}
                                >
                                    <div
                                        class="option-icon"
                                        style={format!("background-color: {}20", option.color)}
                                    >
                                        <span>{ category.emoji() }</span>
                                    </div>
                                    <h4>{ option.name }</h4>
                                    <p>{ format!("{} %", option.abv_percent) }</p>
                                </div>
                            }
                        }).collect::<Html>() }
                    </div>

                    if selected_drink_id.is_some() {
                        <>
                        <h3>{ "Choose serving size:" }</h3>
                        <div class="serving-grid">
                            { category.serving_sizes().iter().map(|serving| {
                                let selected_size_id = selected_size_id.clone();
                                let id = serving.id;
                                let class = if *selected_size_id == Some(id) {
                                    "serving-card selected"
                                } else {
                                    "serving-card"
                                };
                                html! {
                                    <div
                                        class={class}
                                        onclick={Callback::from(move |_| selected_size_id.set(Some(id)))}
                                    >
                                        <div class="serving-icon">{ serving.icon }</div>
                                        <h4>{ serving.name }</h4>
                                        <p>{ format!("{}ml", serving.amount_ml) }</p>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>
                        </>
                    }

                    if selected_drink_id.is_some() && selected_size_id.is_some() {
                        <div class="add-drink-row">
                            <button class="btn-primary" onclick={add_drink.clone()}>
                                { "Add to My Drinks" }
                            </button>
                        </div>
                    }
                </div>

                if !drinks.is_empty() {
                    <div class="panel selected-drinks">
                        <h3>{ "Your Drinks:" }</h3>
                        <div class="drink-list">
                            { drinks.iter().enumerate().map(|(index, drink)| {
                                let bump = {
                                    let drinks = drinks.clone();
                                    Callback::from(move |change: i64| {
                                        let mut updated = (*drinks).clone();
                                        let quantity = i64::from(updated[index].quantity) + change;
                                        updated[index].quantity = quantity.max(1) as u32;
                                        drinks.set(updated);
                                    })
                                };
                                let remove = {
                                    let drinks = drinks.clone();
                                    Callback::from(move |_: MouseEvent| {
                                        let mut updated = (*drinks).clone();
                                        updated.remove(index);
                                        drinks.set(updated);
                                    })
                                };
                                html! {
                                    <div class="drink-row">
                                        <div class="drink-row-info">
                                            <div
                                                class="drink-row-icon"
                                                style={format!("background-color: {}30", drink.color)}
                                            >
                                                <span>{ drink.emoji }</span>
                                            </div>
                                            <div>
                                                <p class="drink-row-title">
                                                    { format!("{} ({})", drink.name, drink.serving_name) }
                                                </p>
                                                <p class="drink-row-detail">
                                                    { format!("{}% | {}ml | {}",
                                                              drink.abv_percent,
                                                              drink.amount_ml,
                                                              drink.size_icon) }
                                                </p>
                                            </div>
                                        </div>
                                        <div class="drink-row-actions">
                                            <button
                                                class="btn-icon"
                                                onclick={bump.reform(|_| -1)}
                                            >{ "−" }</button>
                                            <span class="drink-quantity">{ drink.quantity }</span>
                                            <button
                                                class="btn-icon"
                                                onclick={bump.reform(|_| 1)}
                                            >{ "+" }</button>
                                            <button class="btn-danger" onclick={remove}>
                                                { "Remove" }
                                            </button>
                                        </div>
                                    </div>
                                }
                            }).collect::<Html>() }
                        </div>

                        <div class="drink-list-footer">
                            <p class="drink-list-tip">{ drink_list_tip(drinks.len()) }</p>
                            <button class="btn-primary" onclick={next_step.clone()}>{ "Next" }</button>
                        </div>
                    </div>
                }
            </div>
        }
    };

    let time_view = html! {
        <div class="step-time">
            <h2>{ "How long since your last drink?" }</h2>

            <div class="panel">
                <div class="hours-ring-wrap">
                    <div class="hours-ring">
                        <span class="hours-value">{ *hours }</span>
                        <p>{ "hours ago" }</p>
                    </div>
                </div>

                <input type="range"
                    min="0"
                    max={MAX_HOURS.to_string()}
                    step={HOURS_STEP.to_string()}
                    value={hours.to_string()}
                    class="hours-slider"
                    oninput={hours_slider_oninput}
                />
                <div class="hours-slider-labels">
                    <span>{ "0 hours" }</span>
                    <span>{ "12 hours" }</span>
                    <span>{ "24 hours" }</span>
                </div>

                <div class="form-group">
                    <label for="hours_text_input">{ "Or type it:" }</label>
                    <input
                        type="text"
                        id="hours_text_input"
                        value={(*hours_text).clone()}
                        class={if (*hours_error).is_some() { "invalid" } else { "" }}
                        placeholder="e.g. 2.5 or 2h30m"
                        oninput={hours_text_oninput}
                        onchange={handle_hours_input.reform(|_| ())}
                        onkeydown={hours_onkeydown}
                    />
                    if let Some(ref err) = *hours_error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="info-box">
                    <h3>{ "Did you know?" }</h3>
                    <p>
                        { "On average, the human body metabolizes alcohol at a rate of about \
                           0.015% BAC per hour. This means it takes approximately one hour to \
                           eliminate one standard drink from your system." }
                    </p>
                </div>
            </div>
        </div>
    };

    let about_view = html! {
        <div class="step-about">
            <h2>{ "Tell us about yourself" }</h2>
            <p>
                { "We need some information about you to calculate your blood alcohol \
                   content accurately." }
            </p>

            <div class="form-group">
                <label>{ "Biological Sex" }</label>
                <div class="radio-group">
                    <label>
                        <input type="radio"
                            name="sex"
                            checked={*sex == Some(Sex::Male)}
                            onchange={
                                let sex = sex.clone();
                                Callback::from(move |_| sex.set(Some(Sex::Male)))
                            }
                        />
                        { "Male" }
                    </label>
                    <label>
                        <input type="radio"
                            name="sex"
                            checked={*sex == Some(Sex::Female)}
                            onchange={
                                let sex = sex.clone();
                                Callback::from(move |_| sex.set(Some(Sex::Female)))
                            }
                        />
                        { "Female" }
                    </label>
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="weight_text_input">{ "Weight (kg)" }</label>
                    <input
                        type="number"
                        id="weight_text_input"
                        min={MIN_WEIGHT_KG.to_string()}
                        max={MAX_WEIGHT_KG.to_string()}
                        value={(*weight_text).clone()}
                        class={if (*weight_error).is_some() { "invalid" } else { "" }}
                        placeholder="Enter your weight"
                        oninput={weight_text_oninput}
                        onchange={handle_weight_input.reform(|_| ())}
                        onkeydown={weight_onkeydown}
                    />
                    if let Some(ref err) = *weight_error {
                        <div class="input-error">{ err }</div>
                    }
                </div>

                <div class="form-group">
                    <label for="age_text_input">{ "Age" }</label>
                    <input
                        type="number"
                        id="age_text_input"
                        min={MIN_AGE.to_string()}
                        max={MAX_AGE.to_string()}
                        value={(*age_text).clone()}
                        class={if (*age_error).is_some() { "invalid" } else { "" }}
                        placeholder="Enter your age"
                        oninput={age_text_oninput}
                        onchange={handle_age_input.reform(|_| ())}
                        onkeydown={age_onkeydown}
                    />
                    if let Some(ref err) = *age_error {
                        <div class="input-error">{ err }</div>
                    }
                </div>
            </div>

            <div class="form-group">
                <label for="eating_select">{ "Have you eaten?" }</label>
                <select id="eating_select" onchange={eating_onchange}>
                    <option value="" selected={eating_status.is_none()} disabled={true}>
                        { "Select eating status" }
                    </option>
                    <option value="empty" selected={*eating_status == Some(EatingStatus::Empty)}>
                        { "Empty stomach" }
                    </option>
                    <option value="some" selected={*eating_status == Some(EatingStatus::SomeFood)}>
                        { "Some food" }
                    </option>
                    <option value="full" selected={*eating_status == Some(EatingStatus::FullMeal)}>
                        { "Full meal" }
                    </option>
                </select>
            </div>

            <div class="info-box warning">
                <h3>{ "Why do we need this information?" }</h3>
                <p>
                    { "Your biological sex, weight, and eating status all affect how your \
                       body processes alcohol. This helps us provide a more accurate \
                       estimate of your blood alcohol content." }
                </p>
            </div>
        </div>
    };

    let confirm_view = html! {
        <div class="step-confirm">
            <h2>{ "Ready to Calculate!" }</h2>
            <p>
                { "We have all the information we need. Click the button below to \
                   calculate your BAC and see where you can drive!" }
            </p>
            <button class="btn-primary" onclick={calculate.reform(|_: MouseEvent| ())}>
                { "Calculate Results" }
            </button>
        </div>
    };

    let step_view = match *step {
        Step::Drinks => drinks_view,
        Step::Time => time_view,
        Step::AboutYou => about_view,
        Step::Confirm => confirm_view,
        Step::Results => match &*results {
            Some(r) => render_results(r, *countries_revealed, &restart),
            None => html! {},
        },
    };

    html! {
        <div class="container">
            <div class="progress-wrap">
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style={format!("width: {}%", step.progress_percent())}
                    />
                </div>
                <div class="progress-labels">
                    <span>{ "Start" }</span>
                    <span>{ "Drinks" }</span>
                    <span>{ "Time" }</span>
                    <span>{ "You" }</span>
                    <span>{ "Results" }</span>
                </div>
            </div>

            <MascotGuide message={mascot_message(*step, (*results).as_ref())} />

            <div class="card">
                if *is_calculating {
                    <div class="calculating">
                        <div class="spinner large" />
                        <h3>{ "Calculating..." }</h3>
                        <p>{ "Crunching the numbers and checking global driving laws!" }</p>
                    </div>
                } else {
                    <div class="card-body">
                        { step_view }

                        if matches!(*step, Step::Time | Step::AboutYou | Step::Confirm) {
                            <div class="step-nav">
                                <button class="btn-secondary" onclick={prev_step}>
                                    { "Back" }
                                </button>
                                if matches!(*step, Step::Time | Step::AboutYou) {
                                    <button class="btn-primary" onclick={next_step}>
                                        { "Next" }
                                    </button>
                                }
                            </div>
                        }
                    </div>
                }
            </div>

            if *show_confetti {
                { render_confetti() }
            }
        </div>
    }
}

/// App wrapper so the wizard mounts as a single root component.
#[function_component]
pub fn App() -> Html {
    html! { <Main /> }
}

/// Entry point: initializes the Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
