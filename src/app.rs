use std::{
    future::{poll_fn, Future},
    io,
    pin::Pin,
    task::Poll,
    time::Duration,
};

use color_eyre::eyre::Result;
use rand::{rngs::ThreadRng, thread_rng, Rng};
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use strum::Display;
use tracing::{debug, info, trace};

use crate::{
    components::tree::{TreeRenderer, TreeRendererBuilder},
    config::Config,
    constants::tree::FAREWELL_COLOR,
    scene::{light::LightSet, Tree},
    tui::{Surface, Tui},
};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum State {
    #[default]
    Running,
    Stopped,
}

pub struct App<S: Surface, R: Rng> {
    config: Config,
    tree: Tree,
    lights: LightSet,
    renderer: TreeRenderer,
    surface: S,
    rng: R,
    state: State,
    frames: u64,
}

impl App<Tui<io::Stdout>, ThreadRng> {
    pub fn new() -> Result<Self> {
        let config = Config::new()?;
        Self::with_parts(config, Tui::stdout(), thread_rng())
    }
}

impl<S: Surface, R: Rng> App<S, R> {
    pub fn with_parts(config: Config, surface: S, mut rng: R) -> Result<Self> {
        let lights = LightSet::initialize(&Tree::default(), &config.lights, &mut rng);
        Self::with_lights(config, lights, surface, rng)
    }

    pub fn with_lights(config: Config, lights: LightSet, surface: S, rng: R) -> Result<Self> {
        let tree = Tree::default();
        let renderer = TreeRendererBuilder::default().tree(tree).greeting(config.scene.greeting.clone()).build()?;
        debug!(lights = lights.len(), "lights hung");
        Ok(Self { config, tree, lights, renderer, surface, rng, state: State::Running, frames: 0 })
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn lights(&self) -> &LightSet {
        &self.lights
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Runs until Ctrl-C.
    pub async fn run(&mut self) -> Result<()> {
        self.run_until(tokio::signal::ctrl_c()).await
    }

    /// Animates frames until `shutdown` resolves, then says goodbye.
    ///
    /// The surface is released even when the loop fails.
    pub async fn run_until<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = io::Result<()>>,
    {
        tokio::pin!(shutdown);
        let interval = self.config.scene.frame_interval();
        info!(?interval, lights = self.lights.len(), "starting animation");
        self.surface.enter()?;

        let result = self.animate(&mut shutdown, interval).await;
        let released = self.surface.exit();
        info!(state = %self.state, frames = self.frames, "animation finished");
        result.and(released)
    }

    async fn animate<F>(&mut self, shutdown: &mut F, interval: Duration) -> Result<()>
    where
        F: Future<Output = io::Result<()>> + Unpin,
    {
        // Poll once up front so a signal handler is in place before the first frame.
        if let Some(signal) = poll_once(shutdown).await {
            signal?;
            return self.stop();
        }

        while self.state == State::Running {
            self.frame()?;
            tokio::select! {
                biased;
                signal = &mut *shutdown => {
                    signal?;
                    self.stop()?;
                },
                _ = tokio::time::sleep(interval) => {},
            }
        }
        Ok(())
    }

    /// One step of the animation: move the lights and redraw everything.
    pub fn frame(&mut self) -> Result<()> {
        self.surface.clear()?;
        self.lights.advance(&self.tree, &self.config.lights, &mut self.rng);
        let positions = self.lights.project(&self.tree);
        let frame = self.renderer.render(&positions);
        for line in &frame.lines {
            self.surface.write_line(line)?;
        }
        self.surface.flush()?;
        self.frames += 1;
        trace!(frame = self.frames, lit = positions.len(), "drew frame");
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        info!("interrupted");
        self.surface.clear()?;
        self.surface.write_line(&Line::default())?;
        self.surface.write_line(&Line::from(Span::styled(
            self.config.scene.farewell.clone(),
            Style::default().fg(FAREWELL_COLOR),
        )))?;
        self.surface.write_line(&Line::default())?;
        self.surface.flush()?;
        self.state = State::Stopped;
        Ok(())
    }
}

async fn poll_once<F: Future + Unpin>(future: &mut F) -> Option<F::Output> {
    poll_fn(|cx| match Pin::new(&mut *future).poll(cx) {
        Poll::Ready(output) => Poll::Ready(Some(output)),
        Poll::Pending => Poll::Ready(None),
    })
    .await
}
