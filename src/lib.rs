pub mod config;
pub mod engine;
pub mod error;
pub mod exact;
pub mod report;
pub mod run;
pub mod spot;
pub mod strategy;
pub mod trial;

pub use config::{OutputFormat, RunConfig};
pub use engine::{example_games, run_strategy, win_rate, RunOutcome};
pub use error::SimError;
pub use exact::exact_hider_win_probability;
pub use spot::{Spot, SpotSet, JOKE_SPOT, LEGIT_SPOTS};
pub use strategy::Strategy;
pub use trial::{play_trial, Trial, Winner};
