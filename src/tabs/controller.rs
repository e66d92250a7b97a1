//! Tab controller: owns the session and all tab panels, routes input and
//! draws frames.

use std::ops::ControlFlow;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use derive_getters::Getters;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::tabs::screens::{GameScreen, MenuScreen, ProfileScreen, RulesScreen, SettingsScreen};
use crate::tabs::tab::{TabKind, TabScreen, TabTransition};
use crate::tui::ui::{AppLayout, draw_footer, draw_header, draw_tab_bar};
use crate::{DisplaySettings, Session};

/// Drives the tabbed UI.
///
/// Every event is handled to completion before the next frame is drawn, so
/// the session only ever has one writer.
#[derive(Debug, Getters)]
pub struct TabsController {
    session: Session,
    active: TabKind,
    game: GameScreen,
    profile: ProfileScreen,
    rules: RulesScreen,
    menu: MenuScreen,
    settings: SettingsScreen,
}

impl TabsController {
    /// Creates a controller showing `start_tab`.
    #[instrument(skip(settings))]
    pub fn new(settings: DisplaySettings, start_tab: TabKind) -> Self {
        info!("Creating TabsController");
        Self {
            session: Session::new(settings),
            active: start_tab,
            game: GameScreen::new(),
            profile: ProfileScreen,
            rules: RulesScreen,
            menu: MenuScreen::new(),
            settings: SettingsScreen::new(),
        }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if self.handle_event(event::read()?, area).is_break() {
                    info!("Quitting");
                    return Ok(());
                }
            }

            sleep(Duration::from_millis(10)).await;
        }
    }

    /// Draws one frame. Reads state only.
    pub fn render(&self, frame: &mut Frame) {
        let layout = AppLayout::new(frame.area());

        draw_header(frame, layout.header, &self.session);
        draw_tab_bar(frame, layout.tabs, self.active);

        let screen = self.screen();
        screen.render(frame, layout.body, &self.session);
        draw_footer(frame, layout.footer, &self.session, screen.help());
    }

    /// Handles one terminal event. `area` is the full frame area, used to
    /// map mouse clicks onto the board.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event, area: Rect) -> ControlFlow<()> {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse, area);
                ControlFlow::Continue(())
            }
            _ => ControlFlow::Continue(()),
        }
    }

    /// Handles a key: global bindings first, then the active tab.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow<()> {
        // Skip key release events (crossterm fires both press and release on some platforms).
        if key.kind == KeyEventKind::Release {
            return ControlFlow::Continue(());
        }

        let transition = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => TabTransition::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                TabTransition::Quit
            }
            KeyCode::Tab => TabTransition::Switch(self.active.next()),
            KeyCode::BackTab => TabTransition::Switch(self.active.previous()),
            KeyCode::Char('n') | KeyCode::Char('N') => TabTransition::NewGame,
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                match TabKind::from_index(index) {
                    Some(tab) => TabTransition::Switch(tab),
                    None => TabTransition::Stay,
                }
            }
            _ => self.screen_mut_handle_key(key),
        };

        self.apply_transition(transition)
    }

    /// Left clicks on the board activate the square under the pointer.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if self.active != TabKind::Game
            || mouse.kind != MouseEventKind::Down(MouseButton::Left)
        {
            return;
        }

        let layout = AppLayout::new(area);
        let Some(geometry) = GameScreen::board_geometry(layout.body) else {
            return;
        };

        match geometry.square_at(mouse.column, mouse.row) {
            Some(square) => {
                debug!(square = %square, "Board clicked");
                self.session.activate(square);
            }
            None => debug!(column = mouse.column, row = mouse.row, "Click outside board"),
        }
    }

    fn screen(&self) -> &dyn TabScreen {
        match self.active {
            TabKind::Game => &self.game,
            TabKind::Profile => &self.profile,
            TabKind::Rules => &self.rules,
            TabKind::Menu => &self.menu,
            TabKind::Settings => &self.settings,
        }
    }

    fn screen_mut_handle_key(&mut self, key: KeyEvent) -> TabTransition {
        let session = &mut self.session;
        match self.active {
            TabKind::Game => self.game.handle_key(key, session),
            TabKind::Profile => self.profile.handle_key(key, session),
            TabKind::Rules => self.rules.handle_key(key, session),
            TabKind::Menu => self.menu.handle_key(key, session),
            TabKind::Settings => self.settings.handle_key(key, session),
        }
    }

    #[instrument(skip(self))]
    fn apply_transition(&mut self, transition: TabTransition) -> ControlFlow<()> {
        debug!(transition = ?transition, "Applying tab transition");
        match transition {
            TabTransition::Stay => {}
            TabTransition::Switch(tab) => {
                info!(tab = %tab, "Switching tab");
                self.active = tab;
            }
            TabTransition::NewGame => {
                self.session.new_game();
                self.active = TabKind::Game;
            }
            TabTransition::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }
}
