use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::sync::Once;

use anyhow::{Context, Result, anyhow};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    form::FormState,
    submit::{RequestPayload, build_payload},
    ui::{self, UiContext},
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    status::StatusLine,
};

const DEFAULT_TITLE: &str = "Create New Request";
const SECTION_HEADING: &str = "Add videos or folders";
const DEFAULT_BLURB: &str =
    "These videos will be cut, labeled and made available in your video library";
const HELP_TEXT: &str =
    "Tab/Shift+Tab move • Ctrl+A add URL • Ctrl+D remove URL • Ctrl+S create request • Ctrl+Q quit";

pub(crate) struct App {
    form: FormState,
    options: UiOptions,
    status: StatusLine,
    title: String,
    blurb: String,
    exit_armed: bool,
    should_quit: bool,
    result: Option<RequestPayload>,
}

impl App {
    pub fn new(title: Option<String>, description: Option<String>, options: UiOptions) -> Self {
        Self {
            form: FormState::new(),
            options,
            status: StatusLine::new(),
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            blurb: description.unwrap_or_else(|| DEFAULT_BLURB.to_string()),
            exit_armed: false,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<RequestPayload> {
        let mut terminal = TerminalGuard::new()?;
        while !self.should_quit {
            self.form.sync_pending_focus();
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(self.options.tick_rate)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }

        self.result
            .take()
            .ok_or_else(|| anyhow!("form closed without creating a request"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = if self.options.show_help {
            Some(HELP_TEXT)
        } else {
            None
        };
        ui::draw(
            frame,
            UiContext {
                title: &self.title,
                heading: SECTION_HEADING,
                blurb: &self.blurb,
                form: &self.form,
                status_message: self.status.message(),
                help,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match classify(&key) {
            KeyCommand::Submit => {
                self.exit_armed = false;
                self.on_submit();
            }
            KeyCommand::Quit => self.on_exit(),
            KeyCommand::AddEntry => self.on_add_entry(),
            KeyCommand::RemoveEntry => self.on_remove_entry(),
            KeyCommand::NextEntry => {
                self.exit_armed = false;
                self.form.focus_next();
            }
            KeyCommand::PrevEntry => {
                self.exit_armed = false;
                self.form.focus_prev();
            }
            KeyCommand::ResetStatus => {
                self.exit_armed = false;
                self.status.ready();
            }
            KeyCommand::Edit(event) => self.handle_edit(&event),
            KeyCommand::None => {}
        }
    }

    fn handle_edit(&mut self, key: &KeyEvent) {
        let Some(entry) = self.form.focused_entry() else {
            return;
        };
        let id = entry.id;
        let mut buffer = entry.url.clone();
        let edited = match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return;
                }
                buffer.push(c);
                true
            }
            KeyCode::Backspace => {
                buffer.pop();
                true
            }
            KeyCode::Delete => {
                buffer.clear();
                true
            }
            _ => false,
        };
        if edited {
            self.form.update_entry(id, buffer);
            self.exit_armed = false;
            self.status.editing(self.form.cursor() + 1);
        }
    }

    fn on_add_entry(&mut self) {
        self.exit_armed = false;
        if !self.form.can_insert() {
            self.status.list_full();
            return;
        }
        self.form.insert_entry();
        self.status.entry_added(self.form.list().len());
    }

    fn on_remove_entry(&mut self) {
        self.exit_armed = false;
        if !self.form.can_remove() {
            self.status.last_entry();
            return;
        }
        if let Some(entry) = self.form.focused_entry() {
            let id = entry.id;
            self.form.remove_entry(id);
            self.status.entry_removed(self.form.list().len());
        }
    }

    fn on_submit(&mut self) {
        if !self.form.submission_ready() {
            self.status.blocked(self.form.blocking_count());
            return;
        }
        let payload = build_payload(self.form.list());
        info!(urls = payload.len(), "request submitted");
        self.result = Some(payload);
        self.status.submitted();
        self.should_quit = true;
    }

    fn on_exit(&mut self) {
        if self.options.confirm_exit && self.form.is_dirty() && !self.exit_armed {
            self.exit_armed = true;
            self.status.pending_exit();
            return;
        }
        self.should_quit = true;
        self.result = None;
    }
}

static PANIC_HOOK: Once = Once::new();

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("failed to initialize terminal")?;
        install_panic_hook();
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        restore_terminal();
    }
}

impl Deref for TerminalGuard {
    type Target = Terminal<CrosstermBackend<Stdout>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalGuard {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            previous(panic_info);
        }));
    });
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
}
