//! Web Worker agent that runs the calculation off the UI thread.

use crate::{estimate_bac, matching_countries, BacResults, ConsumptionProfile, CountryLimit};
use futures::sink::SinkExt;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use yew_agent::reactor::{reactor, ReactorScope};

/// Arguments for one calculation request sent to the worker.
#[derive(Serialize, Deserialize, Clone)]
pub struct BacArgs {
    pub profile: ConsumptionProfile,
    pub countries: Vec<CountryLimit>,
}

/// Worker reactor that answers calculation requests.
///
/// The estimation is total (degraded inputs produce a zero estimate rather
/// than an error), so every request yields a `BacResults`.
#[reactor]
pub async fn BacTask(mut scope: ReactorScope<BacArgs, BacResults>) {
    while let Some(args) = scope.next().await {
        let bac = estimate_bac(&args.profile);
        let countries = matching_countries(bac, &args.countries);

        // abort loop if all bridges dropped
        if scope.send(BacResults { bac, countries }).await.is_err() {
            break;
        }
    }
}
