//! Cosmetic alarm indicator: a ping counter with a best-effort tone
//!
//! Driven by `poll` from the UI loop. Audio failures are swallowed here and
//! go nowhere else.

use std::time::{Duration, Instant};

use crate::audio::{AudioHost, ToneOutput};

/// Shortest interval accepted between pings
pub const MIN_INTERVAL: Duration = Duration::from_millis(250);

/// A short synthesized ping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration: Duration,
    pub gain: f32,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency_hz: 740.0,
            duration: Duration::from_millis(220),
            gain: 0.2,
        }
    }
}

pub struct AlarmIndicator {
    interval: Duration,
    tone: Tone,
    muted: bool,
    ticks: u32,
    /// Next due tick; `None` until armed by the first unmuted poll
    next_tick: Option<Instant>,
    host: Box<dyn AudioHost>,
    /// Lazily acquired, dropped on mute and with the indicator
    output: Option<Box<dyn ToneOutput>>,
}

impl AlarmIndicator {
    pub fn new(interval: Duration, tone: Tone, host: Box<dyn AudioHost>) -> Self {
        Self {
            interval: interval.max(MIN_INTERVAL),
            tone,
            muted: false,
            ticks: 0,
            next_tick: None,
            host,
            output: None,
        }
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.set_muted(muted);
        self
    }

    /// Advance the timer. Fires at most one tick; returns whether it did.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.muted {
            return false;
        }
        match self.next_tick {
            None => {
                self.next_tick = Some(now + self.interval);
                false
            }
            Some(due) if now >= due => {
                self.tick();
                self.next_tick = Some(now + self.interval);
                true
            }
            Some(_) => false,
        }
    }

    /// How long the UI may sleep before the next `poll`; `None` while muted
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.muted {
            return None;
        }
        Some(
            self.next_tick
                .map(|due| due.saturating_duration_since(now))
                .unwrap_or(Duration::ZERO),
        )
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.next_tick = None;
        if muted {
            self.output = None;
        }
    }

    /// Flip mute, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.set_muted(!self.muted);
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Counter as shown to the operator, e.g. `#007`
    pub fn label(&self) -> String {
        format!("#{:03}", self.ticks)
    }

    pub fn has_audio_output(&self) -> bool {
        self.output.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        self.play_tone();
    }

    fn play_tone(&mut self) {
        if self.output.is_none() {
            self.output = self.host.open().ok();
        }
        if let Some(output) = self.output.as_mut() {
            let _ = output.play(&self.tone);
        }
    }
}

impl std::fmt::Debug for AlarmIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlarmIndicator")
            .field("interval", &self.interval)
            .field("muted", &self.muted)
            .field("ticks", &self.ticks)
            .field("has_output", &self.output.is_some())
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use weighmaster_types::AudioError;

    #[derive(Debug, Default)]
    pub(crate) struct Counters {
        pub opens: u32,
        pub plays: u32,
        pub releases: u32,
        pub fail_open: bool,
        pub fail_play: bool,
        pub last_tone: Option<Tone>,
    }

    pub(crate) struct FakeHost(pub Rc<RefCell<Counters>>);

    struct FakeOutput(Rc<RefCell<Counters>>);

    impl AudioHost for FakeHost {
        fn open(&mut self) -> Result<Box<dyn ToneOutput>, AudioError> {
            let mut c = self.0.borrow_mut();
            c.opens += 1;
            if c.fail_open {
                return Err(AudioError::Unavailable("no permission".to_string()));
            }
            Ok(Box::new(FakeOutput(self.0.clone())))
        }
    }

    impl ToneOutput for FakeOutput {
        fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
            let mut c = self.0.borrow_mut();
            c.plays += 1;
            c.last_tone = Some(*tone);
            if c.fail_play {
                return Err(AudioError::Unavailable("device lost".to_string()));
            }
            Ok(())
        }
    }

    impl Drop for FakeOutput {
        fn drop(&mut self) {
            self.0.borrow_mut().releases += 1;
        }
    }

    pub(crate) fn fake_indicator() -> (AlarmIndicator, Rc<RefCell<Counters>>) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let indicator = AlarmIndicator::new(
            Duration::from_secs(4),
            Tone::default(),
            Box::new(FakeHost(counters.clone())),
        );
        (indicator, counters)
    }

    const STEP: Duration = Duration::from_secs(4);

    #[test]
    fn test_first_poll_only_arms() {
        let (mut alarm, counters) = fake_indicator();
        let t0 = Instant::now();
        assert!(!alarm.poll(t0));
        assert_eq!(alarm.ticks(), 0);
        assert_eq!(counters.borrow().opens, 0);
        assert_eq!(alarm.time_until_next(t0), Some(STEP));
    }

    #[test]
    fn test_ticks_on_interval_and_opens_lazily_once() {
        let (mut alarm, counters) = fake_indicator();
        let t0 = Instant::now();
        alarm.poll(t0);
        assert!(!alarm.poll(t0 + Duration::from_secs(2)));
        assert!(alarm.poll(t0 + STEP));
        assert!(alarm.poll(t0 + STEP * 2));

        assert_eq!(alarm.ticks(), 2);
        let c = counters.borrow();
        assert_eq!(c.opens, 1);
        assert_eq!(c.plays, 2);
        assert!(alarm.has_audio_output());
    }

    #[test]
    fn test_configured_tone_reaches_output() {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let config = crate::Config {
            tone_frequency_hz: 523.25,
            tone_duration_ms: 90,
            tone_gain: 0.6,
            ..crate::Config::default()
        };
        let mut alarm = AlarmIndicator::new(
            config.alarm_interval(),
            config.tone(),
            Box::new(FakeHost(counters.clone())),
        );
        let t0 = Instant::now();
        alarm.poll(t0);
        assert!(alarm.poll(t0 + STEP));

        assert_eq!(
            counters.borrow().last_tone,
            Some(Tone {
                frequency_hz: 523.25,
                duration: Duration::from_millis(90),
                gain: 0.6,
            })
        );
    }

    #[test]
    fn test_one_tick_per_poll_after_long_gap() {
        let (mut alarm, _) = fake_indicator();
        let t0 = Instant::now();
        alarm.poll(t0);
        assert!(alarm.poll(t0 + STEP * 10));
        assert_eq!(alarm.ticks(), 1);
        assert!(!alarm.poll(t0 + STEP * 10 + Duration::from_secs(1)));
    }

    #[test]
    fn test_mute_releases_output_and_stops_ticks() {
        let (mut alarm, counters) = fake_indicator();
        let t0 = Instant::now();
        alarm.poll(t0);
        alarm.poll(t0 + STEP);
        assert!(alarm.has_audio_output());

        assert!(alarm.toggle_mute());
        assert!(!alarm.has_audio_output());
        assert_eq!(counters.borrow().releases, 1);
        assert!(!alarm.poll(t0 + STEP * 5));
        assert_eq!(alarm.ticks(), 1);
        assert_eq!(alarm.time_until_next(t0), None);
    }

    #[test]
    fn test_unmute_resumes_with_full_interval_and_keeps_count() {
        let (mut alarm, counters) = fake_indicator();
        let t0 = Instant::now();
        alarm.poll(t0);
        alarm.poll(t0 + STEP);
        alarm.set_muted(true);
        alarm.set_muted(false);

        let t1 = t0 + STEP * 3;
        assert!(!alarm.poll(t1));
        assert!(!alarm.poll(t1 + Duration::from_secs(3)));
        assert!(alarm.poll(t1 + STEP));
        assert_eq!(alarm.ticks(), 2);
        assert_eq!(counters.borrow().opens, 2);
    }

    #[test]
    fn test_open_failure_is_swallowed_and_retried() {
        let (mut alarm, counters) = fake_indicator();
        counters.borrow_mut().fail_open = true;
        let t0 = Instant::now();
        alarm.poll(t0);
        assert!(alarm.poll(t0 + STEP));
        assert!(alarm.poll(t0 + STEP * 2));

        assert_eq!(alarm.ticks(), 2);
        assert_eq!(counters.borrow().opens, 2);
        assert_eq!(counters.borrow().plays, 0);
        assert!(!alarm.has_audio_output());
    }

    #[test]
    fn test_play_failure_is_swallowed() {
        let (mut alarm, counters) = fake_indicator();
        counters.borrow_mut().fail_play = true;
        let t0 = Instant::now();
        alarm.poll(t0);
        assert!(alarm.poll(t0 + STEP));
        assert_eq!(alarm.ticks(), 1);
        assert_eq!(counters.borrow().plays, 1);
    }

    #[test]
    fn test_drop_releases_output() {
        let (mut alarm, counters) = fake_indicator();
        let t0 = Instant::now();
        alarm.poll(t0);
        alarm.poll(t0 + STEP);
        drop(alarm);
        assert_eq!(counters.borrow().releases, 1);
    }

    #[test]
    fn test_start_muted_never_opens() {
        let (alarm, counters) = fake_indicator();
        let mut alarm = alarm.with_muted(true);
        let t0 = Instant::now();
        for i in 0..5 {
            alarm.poll(t0 + STEP * i);
        }
        assert_eq!(alarm.ticks(), 0);
        assert_eq!(counters.borrow().opens, 0);
    }

    #[test]
    fn test_label_is_zero_padded() {
        let (mut alarm, _) = fake_indicator();
        assert_eq!(alarm.label(), "#000");
        let t0 = Instant::now();
        alarm.poll(t0);
        for i in 1..=7 {
            alarm.poll(t0 + STEP * i);
        }
        assert_eq!(alarm.label(), "#007");
    }

    #[test]
    fn test_interval_has_floor() {
        let alarm = AlarmIndicator::new(
            Duration::ZERO,
            Tone::default(),
            Box::new(crate::audio::SilentAudio),
        );
        assert_eq!(alarm.interval(), MIN_INTERVAL);
    }
}
