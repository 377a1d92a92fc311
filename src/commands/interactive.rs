use crate::core::{
    config::ScreenConfig,
    error::{IaddError, Result},
    git::{GitRepo, WorkingTree},
    screen::ScreenModel,
};
use crate::ui::{self, Action};
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::env;

/// Whether the input loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Screen model bound to the working tree it displays
pub struct Session<W: WorkingTree> {
    tree: W,
    model: ScreenModel,
    notice: Option<String>,
}

impl<W: WorkingTree> Session<W> {
    /// Build the model and load the current status
    pub fn new(tree: W, config: &ScreenConfig) -> Result<Self> {
        let mut session = Self {
            tree,
            model: ScreenModel::new(config),
            notice: None,
        };
        session.refresh()?;
        Ok(session)
    }

    pub fn model(&self) -> &ScreenModel {
        &self.model
    }

    pub fn tree(&self) -> &W {
        &self.tree
    }

    /// Message about the last failed stage/unstage, if any
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn refresh(&mut self) -> Result<()> {
        let statuses = self.tree.status()?;
        self.model.refresh(&statuses)
    }

    pub fn handle(&mut self, action: Action) -> Result<Flow> {
        match action {
            Action::Quit => return Ok(Flow::Quit),
            Action::MoveDown => self.model.move_down(),
            Action::MoveUp => self.model.move_up(),
            Action::Stage | Action::Unstage => self.mutate(action)?,
        }
        Ok(Flow::Continue)
    }

    fn mutate(&mut self, action: Action) -> Result<()> {
        if self.model.is_empty() {
            return Ok(());
        }

        let result = if action == Action::Stage {
            self.model.stage_selected(&self.tree)
        } else {
            self.model.unstage_selected(&self.tree)
        };

        match result {
            Ok(()) => {
                self.notice = None;
                self.refresh()
            }
            Err(e) if e.is_mutation_failure() => {
                log::warn!("{e}");
                self.notice = Some(e.to_string());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Draw, wait for a key, dispatch it; until quit
pub fn run_loop<B: Backend, W: WorkingTree>(
    terminal: &mut Terminal<B>,
    session: &mut Session<W>,
) -> Result<()> {
    loop {
        let lines = session.model().lines();
        terminal.draw(|f| ui::draw(f, &lines, session.notice()))?;

        if let Event::Key(key) = event::read()? {
            if let Some(action) = ui::action_for_key(key) {
                if session.handle(action)? == Flow::Quit {
                    return Ok(());
                }
            }
        }
    }
}

pub fn execute_interactive() -> Result<()> {
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir)?;
    let config = ScreenConfig::load()?;
    let mut session = Session::new(git_repo, &config)?;

    let mut terminal = ui::setup_terminal()?;
    let result = run_loop(&mut terminal, &mut session);
    let restored = ui::restore_terminal(&mut terminal);

    finish(result, restored)
}

/// Combine the loop outcome with terminal restoration; a loop error takes precedence
fn finish(result: Result<()>, restored: std::io::Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        log::warn!("Failed to restore terminal: {e}");
    }
    result.and(restored.map_err(IaddError::from))
}
