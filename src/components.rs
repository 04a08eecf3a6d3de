//! Pure Yew view components for the results and guide UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use crate::config::{CONFETTI_PARTICLE_COUNT, GAUGE_MAX_BAC};
use can_i_drive_there::{BacResults, CountryLimit};
use rand_distr::{Distribution, Uniform};
use yew::prelude::*;

/// Severity band for an estimated BAC value, driving colors and copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacSeverity {
    Sober,
    Low,
    Moderate,
    High,
}

impl BacSeverity {
    pub fn of(bac: f64) -> Self {
        if bac == 0.0 {
            BacSeverity::Sober
        } else if bac < 0.05 {
            BacSeverity::Low
        } else if bac < 0.08 {
            BacSeverity::Moderate
        } else {
            BacSeverity::High
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            BacSeverity::Sober => "severity-sober",
            BacSeverity::Low => "severity-low",
            BacSeverity::Moderate => "severity-moderate",
            BacSeverity::High => "severity-high",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            BacSeverity::Sober => "You're completely sober!",
            BacSeverity::Low => "You have a low level of alcohol in your system.",
            BacSeverity::Moderate => "You have a moderate level of alcohol in your system.",
            BacSeverity::High => "You have a high level of alcohol in your system!",
        }
    }
}

/// How full the severity gauge is, as a percentage of its width.
pub fn gauge_fill_percent(bac: f64) -> f64 {
    (bac / GAUGE_MAX_BAC * 100.0).min(100.0)
}

/// The wine-glass mascot with a speech bubble.
#[derive(Properties, PartialEq)]
pub struct MascotGuideProps {
    pub message: AttrValue,
}

#[function_component(MascotGuide)]
pub fn mascot_guide(props: &MascotGuideProps) -> Html {
    html! {
        <div class="mascot-guide">
            <span class="mascot-image" role="img" aria-label="Wine glass mascot">{ "🍷" }</span>
            <div class="mascot-bubble">
                <p>{ props.message.clone() }</p>
            </div>
        </div>
    }
}

fn render_country_card(country: &CountryLimit) -> Html {
    html! {
        <div class="country-card">
            <div class="country-name">
                <span class="country-check">{ "✔" }</span>
                <span>{ country.country.clone() }</span>
            </div>
            if country.is_no_limit() {
                <span class="limit-badge no-limit">{ "No limit!" }</span>
            } else {
                <span class="limit-badge">{ format!("{:.2}%", country.limit) }</span>
            }
        </div>
    }
}

/// Renders the full results screen: BAC readout, severity gauge, the list of
/// countries still legal to drive in, and the closing actions.
///
/// While `countries_revealed` is false the country section shows its own
/// spinner; the caller flips it after a short delay for the staged reveal.
pub fn render_results(
    results: &BacResults,
    countries_revealed: bool,
    on_restart: &Callback<MouseEvent>,
) -> Html {
    let severity = BacSeverity::of(results.bac);

    let on_save = Callback::from(|_: MouseEvent| {
        // Browser print dialog doubles as "save as PDF"
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    });

    html! {
        <div class="results">
            <h2>{ "Your Results" }</h2>

            <div class="results-panel">
                <h3>{ "Estimated Blood Alcohol Content" }</h3>
                <div class="bac-ring-wrap">
                    <div class={classes!("bac-ring", severity.css_class())}>
                        <span class="bac-value">{ format!("{:.3}%", results.bac) }</span>
                    </div>
                </div>
                <div class="bac-gauge">
                    <div class="bac-gauge-labels">
                        <span class="severity-sober">{ "0.00%" }</span>
                        <span class="severity-low">{ "0.05%" }</span>
                        <span class="severity-moderate">{ "0.08%" }</span>
                        <span class="severity-high">{ "0.15%+" }</span>
                    </div>
                    <div class="bac-gauge-track">
                        <div
                            class={classes!("bac-gauge-fill", severity.css_class())}
                            style={format!("width: {:.1}%", gauge_fill_percent(results.bac))}
                        />
                    </div>
                </div>
                <div class={classes!("severity-banner", severity.css_class())}>
                    <p>{ severity.message() }</p>
                </div>
            </div>

            <div class="results-panel">
                <h3>{ "Countries Where You Can Legally Drive a Car" }</h3>
                if !countries_revealed {
                    <div class="countries-loading">
                        <div class="spinner" />
                        <p>{ "Checking global driving laws..." }</p>
                    </div>
                } else if !results.countries.is_empty() {
                    <div class="country-grid">
                        { results.countries.iter().map(render_country_card).collect::<Html>() }
                    </div>
                } else {
                    <p class="no-countries-message">
                        { "No jurisdiction on our list allows driving at this level. Sleep it off!" }
                    </p>
                }
            </div>

            <div class="disclaimer-box">
                <h3>{ "Important Disclaimer" }</h3>
                <p>
                    { "This app is for entertainment purposes only. Never drink and drive, \
                       regardless of BAC levels. Always follow local laws and regulations. \
                       The calculations provided are estimates and should not be used to \
                       determine if you are fit to drive." }
                </p>
            </div>

            <div class="results-actions">
                <button class="btn-secondary" onclick={on_restart.clone()}>{ "Start Over" }</button>
                <button class="btn-primary" onclick={on_save}>{ "Save Results" }</button>
            </div>
        </div>
    }
}

/// Full-screen confetti burst, one particle per random trajectory.
pub fn render_confetti() -> Html {
    let mut rng = rand::rng();
    let size = Uniform::new(5.0, 15.0).expect("valid range");
    let left = Uniform::new(0.0, 100.0).expect("valid range");
    let duration = Uniform::new(2.0, 5.0).expect("valid range");
    let delay = Uniform::new(0.0, 0.5).expect("valid range");
    let hue = Uniform::new(0.0, 360.0).expect("valid range");

    html! {
        <div class="confetti-overlay">
            { (0..CONFETTI_PARTICLE_COUNT).map(|_| {
                let style = format!(
                    "left: {:.1}%; width: {:.0}px; height: {:.0}px; \
                     background-color: hsl({:.0}, 80%, 60%); \
                     animation-duration: {:.2}s; animation-delay: {:.2}s;",
                    left.sample(&mut rng),
                    size.sample(&mut rng),
                    size.sample(&mut rng),
                    hue.sample(&mut rng),
                    duration.sample(&mut rng),
                    delay.sample(&mut rng),
                );
                html! { <div class="confetti-particle" style={style} /> }
            }).collect::<Html>() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_bands_follow_the_thresholds() {
        assert_eq!(BacSeverity::of(0.0), BacSeverity::Sober);
        assert_eq!(BacSeverity::of(0.024), BacSeverity::Low);
        assert_eq!(BacSeverity::of(0.05), BacSeverity::Moderate);
        assert_eq!(BacSeverity::of(0.079), BacSeverity::Moderate);
        assert_eq!(BacSeverity::of(0.08), BacSeverity::High);
        assert_eq!(BacSeverity::of(0.3), BacSeverity::High);
    }

    #[test]
    fn gauge_fill_clamps_at_full_width() {
        assert_eq!(gauge_fill_percent(0.0), 0.0);
        assert!((gauge_fill_percent(0.075) - 50.0).abs() < 1e-9);
        assert_eq!(gauge_fill_percent(0.15), 100.0);
        assert_eq!(gauge_fill_percent(0.4), 100.0);
    }
}
