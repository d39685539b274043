use ratatui::style::Color;

use crate::sim::EnergySample;

/// The five quantities plotted for each ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Potential,
    Kinetic,
    Mechanical,
    InitialTotal,
    Drift,
}

impl Channel {
    pub fn all() -> &'static [Channel] {
        &[
            Channel::Potential,
            Channel::Kinetic,
            Channel::Mechanical,
            Channel::InitialTotal,
            Channel::Drift,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Potential => "Potential Energy",
            Channel::Kinetic => "Kinetic Energy",
            Channel::Mechanical => "Mechanical Energy",
            Channel::InitialTotal => "Total Constant Energy",
            Channel::Drift => "Numerical Energy Loss",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Channel::Potential => Color::Rgb(255, 186, 186),
            Channel::Kinetic => Color::Rgb(216, 242, 233),
            Channel::Mechanical => Color::Rgb(255, 230, 194),
            Channel::InitialTotal => Color::Rgb(149, 146, 173),
            Channel::Drift => Color::Rgb(175, 202, 230),
        }
    }

    pub fn value(&self, s: &EnergySample) -> f64 {
        match self {
            Channel::Potential => s.potential,
            Channel::Kinetic => s.kinetic,
            Channel::Mechanical => s.mechanical,
            Channel::InitialTotal => s.initial_total,
            Channel::Drift => s.drift,
        }
    }
}

/// Append-only energy log for one ball. Nothing is ever dropped; the chart
/// just looks at the tail.
#[derive(Debug, Default, Clone)]
pub struct EnergySeries {
    samples: Vec<EnergySample>,
}

impl EnergySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sample: EnergySample) {
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&EnergySample> {
        self.samples.last()
    }

    /// Index of the first sample inside a trailing window (`0` = everything).
    fn window_start(&self, window: usize) -> usize {
        if window == 0 {
            0
        } else {
            self.samples.len().saturating_sub(window)
        }
    }

    /// Chart points for one channel, x being the sample index.
    pub fn points(&self, channel: Channel, window: usize) -> Vec<(f64, f64)> {
        let start = self.window_start(window);
        self.samples[start..]
            .iter()
            .enumerate()
            .map(|(i, s)| ((start + i) as f64, channel.value(s)))
            .collect()
    }

    /// X bounds of the visible window. Never collapses to a single point.
    pub fn x_bounds(&self, window: usize) -> [f64; 2] {
        let start = self.window_start(window) as f64;
        let end = (self.samples.len().max(1) - 1) as f64;
        [start, end.max(start + 1.0)]
    }

    /// Y bounds over every channel of the visible window, padded by 5%.
    pub fn y_bounds(&self, window: usize) -> [f64; 2] {
        let start = self.window_start(window);
        let (lo, hi) = self.samples[start..]
            .iter()
            .flat_map(|s| Channel::all().iter().map(move |c| c.value(s)))
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = ((hi - lo) * 0.05).max(1.0);
        [lo - pad, hi + pad]
    }

    /// Timestamps at the left edge, middle and right edge of the window.
    pub fn time_labels(&self, window: usize) -> Vec<String> {
        if self.is_empty() {
            return vec!["0s".to_string()];
        }
        let start = self.window_start(window);
        let last = self.samples.len() - 1;
        let mid = start + (last - start) / 2;
        [start, mid, last]
            .iter()
            .map(|&i| format!("{}s", self.samples[i].timestamp))
            .collect()
    }
}
