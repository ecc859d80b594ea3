//! Impact section: counter animation model and the `/api/impact` payload.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counter animation frame rate.
pub const COUNTER_FPS: u32 = 60;

/// Default counter animation length.
pub const COUNTER_DURATION: Duration = Duration::from_secs(2);

/// Delay between successive cards starting their animation.
pub const CARD_STAGGER: Duration = Duration::from_millis(200);

/// Payload of `GET /api/impact`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactData {
    pub co2_saved: u64,
    pub trees_planted: u64,
    pub partners_count: u64,
    pub last_updated: DateTime<Utc>,
}

impl ImpactData {
    /// Zeroed figures; there is no live impact source yet.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            co2_saved: 0,
            trees_planted: 0,
            partners_count: 0,
            last_updated: now,
        }
    }
}

/// One card in the impact section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactStat {
    pub key: &'static str,
    pub value: u64,
    pub suffix: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const IMPACT_STATS: [ImpactStat; 3] = [
    ImpactStat {
        key: "co2",
        value: 20_000,
        suffix: "+",
        title: "CO₂ Saved",
        description: "Tons of CO₂ saved by avoiding greenhouse gas emissions through our electric fleet.",
    },
    ImpactStat {
        key: "trees",
        value: 68_000,
        suffix: "+",
        title: "Trees Planted",
        description: "Trees planted through Zypp's environmental initiatives and carbon offset programs.",
    },
    ImpactStat {
        key: "fleet",
        value: 24,
        suffix: "/7",
        title: "Zypp Fleet",
        description: "Our electric fleet delivering around the clock, ensuring sustainable last-mile delivery.",
    },
];

/// Start delay for the card at `index`.
pub fn stagger(index: usize) -> Duration {
    CARD_STAGGER * index as u32
}

/// Counts from zero to `end` over a fixed number of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedCounter {
    end: u64,
    frames: u32,
    frame: u32,
}

impl AnimatedCounter {
    pub fn new(end: u64, duration: Duration) -> Self {
        let frames = (duration.as_secs_f64() * f64::from(COUNTER_FPS)).round() as u32;
        Self {
            end,
            frames: frames.max(1),
            frame: 0,
        }
    }

    pub fn frame_interval() -> Duration {
        Duration::from_secs(1) / COUNTER_FPS
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn value(&self) -> u64 {
        self.value_at(self.frame)
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Displayed value after `frame` ticks: floored linear progress,
    /// snapping to `end` on the last frame.
    pub fn value_at(&self, frame: u32) -> u64 {
        if frame >= self.frames {
            return self.end;
        }
        let increment = self.end as f64 / f64::from(self.frames);
        let current = increment * f64::from(frame);
        if current >= self.end as f64 {
            self.end
        } else {
            current.floor() as u64
        }
    }

    /// Advance one frame. Returns the new value, or `None` once finished.
    pub fn tick(&mut self) -> Option<u64> {
        if self.is_done() {
            return None;
        }
        self.frame += 1;
        Some(self.value())
    }
}

/// `20000` -> `20,000`.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_reaches_end_exactly() {
        let mut counter = AnimatedCounter::new(20_000, COUNTER_DURATION);
        assert_eq!(counter.frames(), 120);
        assert_eq!(counter.value(), 0);

        let mut last = 0;
        while let Some(v) = counter.tick() {
            assert!(v >= last, "counter must not go backwards");
            last = v;
        }
        assert_eq!(last, 20_000);
        assert!(counter.is_done());
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn test_counter_floors_intermediate_values() {
        let counter = AnimatedCounter::new(24, COUNTER_DURATION);
        // 24 / 120 = 0.2 per frame
        assert_eq!(counter.value_at(4), 0);
        assert_eq!(counter.value_at(5), 1);
        assert_eq!(counter.value_at(60), 12);
        assert_eq!(counter.value_at(500), 24);
    }

    #[test]
    fn test_zero_duration_is_one_frame() {
        let mut counter = AnimatedCounter::new(7, Duration::ZERO);
        assert_eq!(counter.tick(), Some(7));
        assert_eq!(counter.tick(), None);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(24), "24");
        assert_eq!(format_thousands(20_000), "20,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0), Duration::ZERO);
        assert_eq!(stagger(2), Duration::from_millis(400));
    }

    #[test]
    fn test_impact_payload_shape() {
        let now = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let value = serde_json::to_value(ImpactData::placeholder(now)).unwrap();
        assert_eq!(value["co2Saved"], 0);
        assert_eq!(value["treesPlanted"], 0);
        assert_eq!(value["partnersCount"], 0);
        assert_eq!(value["lastUpdated"], "2026-01-01T00:00:00Z");
    }
}
