use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random source for the weather roll.
///
/// Seeded from `CycleConfig::weather_seed` when set, so a run can be replayed.
#[derive(Resource, Debug, Clone)]
pub struct WeatherRng(pub StdRng);

impl WeatherRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for WeatherRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}
