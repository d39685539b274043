use std::io;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::info;
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::config::SimConfig;
use crate::series::EnergySeries;
use crate::sim::{Scheme, Simulation};
use crate::ui;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Tab {
    Overview,
    Euler,
    Verlet,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Overview, Tab::Euler, Tab::Verlet]
    }

    pub fn title(&self) -> &str {
        match self {
            Tab::Overview => " Overview ",
            Tab::Euler => " Euler ",
            Tab::Verlet => " Verlet ",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Euler => 1,
            Tab::Verlet => 2,
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_tab: Tab,
    pub sim: Simulation,
    pub euler_series: EnergySeries,
    pub verlet_series: EnergySeries,
    pub chart_window: usize,
    started: Instant,
}

impl App {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            should_quit: false,
            current_tab: Tab::Overview,
            sim: Simulation::new(config),
            euler_series: EnergySeries::new(),
            verlet_series: EnergySeries::new(),
            chart_window: config.chart_window,
            started: Instant::now(),
        }
    }

    pub fn series(&self, scheme: Scheme) -> &EnergySeries {
        match scheme {
            Scheme::Euler => &self.euler_series,
            Scheme::Verlet => &self.verlet_series,
        }
    }

    /// Frame clock tick: draw, then step. Frame N shows the state left by frame N-1.
    pub fn frame<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|f| ui::render(f, self))?;
        self.on_frame();
        Ok(())
    }

    /// Sample clock tick: record energies, then redraw the charts.
    pub fn sample<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.on_sample();
        terminal.draw(|f| ui::render(f, self))?;
        Ok(())
    }

    pub fn on_frame(&mut self) {
        self.sim.step_frame();
    }

    pub fn on_sample(&mut self) {
        let elapsed = self.started.elapsed().as_secs();
        self.record_sample(elapsed);
    }

    fn record_sample(&mut self, timestamp: u64) {
        let [euler, verlet] = self.sim.sample(timestamp);
        self.euler_series.push(euler);
        self.verlet_series.push(verlet);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Esc => {
                if matches!(self.current_tab, Tab::Overview) {
                    self.quit();
                } else {
                    self.current_tab = Tab::Overview;
                }
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.prev_tab();
                } else {
                    self.next_tab();
                }
            }
            KeyCode::BackTab => self.prev_tab(),
            KeyCode::Char('1') => self.current_tab = Tab::Overview,
            KeyCode::Char('2') => self.current_tab = Tab::Euler,
            KeyCode::Char('3') => self.current_tab = Tab::Verlet,
            _ => {}
        }
    }

    fn quit(&mut self) {
        if !self.should_quit {
            info!(
                "quitting after {} steps, {} samples, bounces euler={} verlet={}",
                self.sim.steps(),
                self.euler_series.len(),
                self.sim.bounces(Scheme::Euler),
                self.sim.bounces(Scheme::Verlet)
            );
        }
        self.should_quit = true;
    }

    fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = self.current_tab.index();
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }
}
