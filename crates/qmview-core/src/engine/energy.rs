use super::config::EnergyConfig;
use super::error::EngineError;
use super::tasks::energy_sample;
use super::timer::{SettlingTimer, TimerError, TimerState};
use crate::core::models::energy::EnergyReading;
use rand::Rng;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tracing::{info, instrument};

/// The circuit dimensions an energy sample belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnergyKey {
    pub qubit_count: usize,
    pub depth: usize,
}

impl EnergyKey {
    pub fn new(qubit_count: usize, depth: usize) -> Self {
        Self { qubit_count, depth }
    }
}

/// Produces the displayed ground-state energy with a settling window.
///
/// Every [`trigger`](Self::trigger) draws the terminal sample at once but hides it
/// until the window closes; meanwhile [`reading`](Self::reading) reports the previous
/// settled value (or the reference before anything settled) flagged as converging.
/// A trigger that arrives while a window is still open supersedes it, and the
/// superseded sample is never exposed.
pub struct EnergyEstimator {
    config: EnergyConfig,
    timer: SettlingTimer<f64>,
    shown: f64,
    key: Option<EnergyKey>,
}

impl EnergyEstimator {
    pub fn new(config: EnergyConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let shown = config.reference;
        Ok(Self {
            config,
            timer: SettlingTimer::new(),
            shown,
            key: None,
        })
    }

    pub fn config(&self) -> &EnergyConfig {
        &self.config
    }

    /// The configuration the current (pending or settled) sample belongs to.
    pub fn key(&self) -> Option<EnergyKey> {
        self.key
    }

    /// Starts a new settling window for `key`, cancelling any window still open.
    ///
    /// Must be called from within a Tokio runtime. Returns the timer generation of the
    /// new window. Outside a runtime it fails before touching the estimator or `rng`.
    #[instrument(skip(self, rng), fields(qubits = key.qubit_count, depth = key.depth))]
    pub fn trigger(&mut self, key: EnergyKey, rng: &mut impl Rng) -> Result<u64, EngineError> {
        Handle::try_current().map_err(|_| TimerError::NoRuntime)?;
        let previous = self.timer.fired();
        let sample = energy_sample::run(&self.config, rng)?;
        let generation = self.timer.arm(self.config.settling, sample)?;
        if let Some(settled) = previous {
            self.shown = settled;
        }
        self.key = Some(key);
        info!(generation, "Energy estimate converging.");
        Ok(generation)
    }

    /// Current reading. Converging until the latest window closes.
    pub fn reading(&self) -> EnergyReading {
        match self.timer.state() {
            TimerState::Fired { payload, .. } => EnergyReading::settled(payload),
            TimerState::Pending { .. } | TimerState::Idle => {
                EnergyReading::provisional(self.shown)
            }
        }
    }

    pub fn is_converging(&self) -> bool {
        !self.timer.state().is_fired()
    }

    /// Cancels the open window, if any. The reading keeps showing the provisional value.
    pub fn cancel(&mut self) {
        self.timer.cancel();
    }

    /// A receiver that changes whenever a window opens, closes or is cancelled.
    pub fn subscribe(&self) -> watch::Receiver<TimerState<f64>> {
        self.timer.subscribe()
    }

    /// Waits for the latest window to close and returns its settled value.
    ///
    /// If a later trigger supersedes the awaited window, this keeps waiting for the
    /// newest one.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Internal`] if nothing was ever triggered (or the open
    /// window was cancelled), since no value would ever settle.
    pub async fn settled(&self) -> Result<f64, EngineError> {
        let mut rx = self.subscribe();
        if matches!(*rx.borrow(), TimerState::Idle) {
            return Err(EngineError::Internal(
                "no energy window is open or settled".to_string(),
            ));
        }
        let state = rx
            .wait_for(TimerState::is_fired)
            .await
            .map_err(|e| EngineError::Internal(e.to_string()))?;
        state
            .payload()
            .copied()
            .ok_or_else(|| EngineError::Internal("fired state without a payload".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{DEFAULT_REFERENCE_ENERGY, EnergyConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::time::Duration;
    use tokio::time::{Instant, advance};

    fn estimator() -> EnergyEstimator {
        EnergyEstimator::new(EnergyConfig::default()).unwrap()
    }

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn untriggered_estimator_shows_reference_as_provisional() {
        let estimator = estimator();
        assert_eq!(
            estimator.reading(),
            EnergyReading::provisional(DEFAULT_REFERENCE_ENERGY)
        );
        assert!(estimator.key().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EnergyConfig {
            jitter_bound: f64::NAN,
            ..EnergyConfig::default()
        };
        assert!(EnergyEstimator::new(config).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn converging_right_after_trigger_and_settled_after_window() {
        let mut estimator = estimator();
        let mut rng = StdRng::seed_from_u64(8);
        estimator.trigger(EnergyKey::new(4, 6), &mut rng).unwrap();
        assert!(estimator.reading().converging);
        assert_eq!(estimator.reading().value, DEFAULT_REFERENCE_ENERGY);

        advance(Duration::from_millis(1999)).await;
        settle().await;
        assert!(estimator.is_converging());

        advance(Duration::from_millis(1)).await;
        settle().await;
        let reading = estimator.reading();
        assert!(!reading.converging);
        assert!((reading.value - DEFAULT_REFERENCE_ENERGY).abs() <= 0.05 + 1e-12);

        advance(Duration::from_secs(30)).await;
        settle().await;
        assert_eq!(estimator.reading(), reading);
    }

    #[tokio::test(start_paused = true)]
    async fn settled_value_is_the_sample_drawn_at_trigger_time() {
        let mut estimator = estimator();
        estimator
            .trigger(EnergyKey::new(4, 6), &mut StdRng::seed_from_u64(21))
            .unwrap();
        let expected =
            energy_sample::run(&EnergyConfig::default(), &mut StdRng::seed_from_u64(21)).unwrap();
        assert_eq!(estimator.settled().await.unwrap(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn retrigger_exposes_only_the_latest_sample() {
        let start = Instant::now();
        let mut estimator = estimator();
        let mut rng = StdRng::seed_from_u64(5);

        estimator.trigger(EnergyKey::new(4, 6), &mut rng).unwrap();
        advance(Duration::from_millis(1000)).await;
        settle().await;

        let mut replay = StdRng::seed_from_u64(5);
        let _superseded = energy_sample::run(estimator.config(), &mut replay).unwrap();
        let latest = energy_sample::run(estimator.config(), &mut replay).unwrap();

        estimator.trigger(EnergyKey::new(5, 6), &mut rng).unwrap();
        assert_eq!(estimator.key(), Some(EnergyKey::new(5, 6)));

        advance(Duration::from_millis(1500)).await;
        settle().await;
        assert!(estimator.reading().converging);

        assert_eq!(estimator.settled().await.unwrap(), latest);
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn converging_reading_carries_the_previous_settled_value() {
        let mut estimator = estimator();
        let mut rng = StdRng::seed_from_u64(13);
        estimator.trigger(EnergyKey::new(4, 6), &mut rng).unwrap();
        let first = estimator.settled().await.unwrap();

        estimator.trigger(EnergyKey::new(4, 7), &mut rng).unwrap();
        assert_eq!(estimator.reading(), EnergyReading::provisional(first));
    }

    #[test]
    fn failed_trigger_leaves_the_estimator_untouched() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let mut estimator = estimator();
        let mut rng = StdRng::seed_from_u64(17);
        let first = runtime.block_on(async {
            estimator.trigger(EnergyKey::new(4, 6), &mut rng).unwrap();
            estimator.settled().await.unwrap()
        });
        drop(runtime);

        let mut untouched = rng.clone();
        let result = estimator.trigger(EnergyKey::new(2, 3), &mut rng);
        assert!(matches!(
            result,
            Err(EngineError::Timer {
                source: TimerError::NoRuntime
            })
        ));
        assert_eq!(estimator.shown, DEFAULT_REFERENCE_ENERGY);
        assert_eq!(estimator.key(), Some(EnergyKey::new(4, 6)));
        assert_eq!(estimator.reading(), EnergyReading::settled(first));
        assert_eq!(rng.gen_range(0..u64::MAX), untouched.gen_range(0..u64::MAX));
    }

    #[tokio::test(start_paused = true)]
    async fn settled_without_trigger_is_an_error() {
        assert!(matches!(
            estimator().settled().await,
            Err(EngineError::Internal(_))
        ));
    }
}
