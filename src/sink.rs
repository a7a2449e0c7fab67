//! Presentation surface.
//!
//! The updater only talks to [`PresentationSink`]; `TerminalSink` is the
//! display used by the binary. Writes simply replace whatever a region held
//! before, so the last completed request wins.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use parking_lot::Mutex;

use crate::classifier::BackgroundTheme;
use crate::formatters::notification_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    FetchStarted,
    UpdateSucceeded,
    Error,
}

pub trait PresentationSink: Send + Sync {
    /// Reveal the widget once a location is known
    fn show_container(&self);

    fn render_current(&self, content: &str);

    fn render_daily(&self, blocks: &[String]);

    /// `None` clears the background
    fn render_theme(&self, theme: Option<BackgroundTheme>);

    /// Transient notification, dismissed by the sink
    fn notify(&self, kind: NotificationKind);

    /// Blocking user-facing message for terminal failures
    fn alert(&self, message: &str);
}

/// Display regions of the terminal widget
#[derive(Debug, Default)]
struct Screen {
    visible: bool,
    alert: Option<String>,
    current: String,
    daily: Vec<String>,
    theme: Option<BackgroundTheme>,
    notifications: Vec<(NotificationKind, Instant)>,
}

impl Screen {
    fn prune(&mut self, now: Instant, dismiss_after: Duration) {
        self.notifications
            .retain(|(_, shown_at)| now.duration_since(*shown_at) < dismiss_after);
    }

    fn render(&self) -> String {
        let mut output = String::new();

        if let Some(alert) = &self.alert {
            output.push_str(&format!("!! {alert}\n"));
        }
        for (kind, _) in &self.notifications {
            output.push_str(&format!("[{}]\n", notification_text(*kind)));
        }
        if !self.visible {
            return output;
        }

        if let Some(theme) = self.theme {
            output.push_str(theme_banner(theme));
            output.push('\n');
        }
        output.push_str(&self.current);
        output.push('\n');
        for block in &self.daily {
            output.push_str(block);
            output.push('\n');
        }
        output
    }
}

fn theme_banner(theme: BackgroundTheme) -> &'static str {
    match theme {
        BackgroundTheme::Sun => r"   \ | /   ~ sun ~",
        BackgroundTheme::Rain => r"  ' ' ' '  ~ rain ~",
        BackgroundTheme::Clouds => r"  (  )(  ) ~ clouds ~",
    }
}

/// Redraws the whole widget on stdout after every change
#[derive(Debug, Clone)]
pub struct TerminalSink {
    screen: Arc<Mutex<Screen>>,
    dismiss_after: Duration,
}

impl TerminalSink {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::default())),
            dismiss_after,
        }
    }

    /// Current screen contents, with expired notifications removed
    pub fn snapshot(&self) -> String {
        let mut screen = self.screen.lock();
        screen.prune(Instant::now(), self.dismiss_after);
        screen.render()
    }

    fn update(&self, apply: impl FnOnce(&mut Screen)) {
        let mut screen = self.screen.lock();
        apply(&mut screen);
        self.draw_locked(&mut screen);
    }

    fn redraw(&self) {
        let mut screen = self.screen.lock();
        self.draw_locked(&mut screen);
    }

    /// Frames are drawn under the screen lock so an older frame never lands last.
    fn draw_locked(&self, screen: &mut Screen) {
        screen.prune(Instant::now(), self.dismiss_after);
        let frame = screen.render();
        if let Err(e) = draw(&mut std::io::stdout().lock(), &frame) {
            tracing::debug!("Failed to draw widget: {}", e);
        }
    }
}

fn draw(out: &mut impl Write, frame: &str) -> std::io::Result<()> {
    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.write_all(frame.as_bytes())?;
    out.flush()
}

impl PresentationSink for TerminalSink {
    fn show_container(&self) {
        self.update(|screen| screen.visible = true);
    }

    fn render_current(&self, content: &str) {
        self.update(|screen| screen.current = content.to_string());
    }

    fn render_daily(&self, blocks: &[String]) {
        self.update(|screen| screen.daily = blocks.to_vec());
    }

    fn render_theme(&self, theme: Option<BackgroundTheme>) {
        self.update(|screen| screen.theme = theme);
    }

    fn notify(&self, kind: NotificationKind) {
        self.update(|screen| screen.notifications.push((kind, Instant::now())));

        // Redraw once the notification has expired so it disappears on its own.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            let sink = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(sink.dismiss_after).await;
                sink.redraw();
            });
        }
    }

    fn alert(&self, message: &str) {
        self.update(|screen| screen.alert = Some(message.to_string()));
    }
}
