//! Main application module.
//!
//! - [`App`] holds the state and implements the Elm architecture methods
//! - `update()` dispatches to the handlers in [`crate::handler`]
//! - `view()` renders through [`crate::view`]

use std::time::Duration;

use iced::keyboard::{self, key::Named};
use iced::{Element, Subscription, Task, Theme};

use qt_client::ApiClient;

use crate::cli::Startup;
use crate::error::GuiError;
use crate::handler::{MessageHandler, MetricsHandler, ReportHandler, SubjectsHandler, reload};
use crate::message::{Message, ReportMessage};
use crate::state::{AppState, Settings};
use crate::theme::quality_theme;
use crate::view::view_app;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and start loading the report.
    pub fn new(startup: Startup) -> (Self, Task<Message>) {
        let settings_path = startup
            .settings_path
            .clone()
            .unwrap_or_else(Settings::config_path);
        let (settings, settings_error) = Settings::load_from(&settings_path);
        let settings = apply_overrides(settings, &startup);

        let (client, client_error) = match ApiClient::new(&settings.client) {
            Ok(client) => (Some(client), None),
            Err(error) => {
                tracing::error!(%error, "Unusable server settings");
                (None, Some(GuiError::report_load(&error)))
            }
        };

        let report_uuid = startup
            .report
            .clone()
            .map(Into::into)
            .or_else(|| settings.general.last_report.clone());

        let mut state = AppState::new(settings, settings_path, client);
        if let Some(query) = startup.query {
            state.location = qt_model::Location::new(state.location.base().to_string(), query);
        }
        if let Some(report_uuid) = report_uuid {
            state.set_report(report_uuid);
        }
        state.error = client_error.or(settings_error);

        let mut app = Self { state };
        let task = reload(&mut app.state);
        (app, task)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Report(msg) => ReportHandler.handle(&mut self.state, msg),
            Message::Subjects(msg) => SubjectsHandler.handle(&mut self.state, msg),
            Message::Metrics(msg) => MetricsHandler.handle(&mut self.state, msg),

            Message::DismissError => {
                self.state.error = None;
                Task::none()
            }

            Message::CopyLink => {
                let href = self.state.location.href();
                tracing::info!(%href, "Copying report link");
                iced::clipboard::write(href)
            }

            Message::KeyPressed(key, modifiers) => self.handle_key(&key, modifiers),

            Message::Noop => Task::none(),
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        match key {
            keyboard::Key::Named(Named::F5) => self.update(ReportMessage::Reload.into()),
            keyboard::Key::Named(Named::Escape) => self.update(Message::DismissError),
            keyboard::Key::Character(c) if modifiers.command() && c.as_str() == "r" => {
                self.update(ReportMessage::Reload.into())
            }
            _ => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        match self.state.current_report() {
            Some(report) => format!("{} - Quality-time", report.title),
            None => "Quality-time".to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        quality_theme(self.state.settings.display.dark_mode)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::time;

        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        // Periodic reload; paused while a reload is in flight
        let interval = self.state.settings.general.refresh_interval_secs;
        let refresh_sub = if interval > 0 && !self.state.is_loading {
            time::every(Duration::from_secs(interval))
                .map(|_| Message::Report(ReportMessage::Reload))
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, refresh_sub])
    }
}

/// Apply command-line overrides to the loaded settings.
fn apply_overrides(mut settings: Settings, startup: &Startup) -> Settings {
    if let Some(api_url) = &startup.api_url {
        settings.client.api_url = api_url.clone();
    }
    if let Some(record_url) = &startup.record_url {
        settings.client.record_url = record_url.clone();
    }
    if startup.editor {
        settings.permissions.editor = true;
    }
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use qt_client::ClientSettings;
    use qt_model::{History, ReportId, Reports};

    fn startup(dir: &tempfile::TempDir) -> Startup {
        Startup {
            settings_path: Some(dir.path().join("settings.toml")),
            ..Startup::default()
        }
    }

    #[test]
    fn test_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = App::new(Startup {
            api_url: Some("http://qt.example.org".into()),
            editor: true,
            report: Some("r-9".into()),
            query: Some("hidden_columns=trend".into()),
            ..startup(&dir)
        });
        let state = &app.state;
        assert_eq!(state.settings.client.api_url, "http://qt.example.org");
        assert!(state.settings.permissions.can_edit());
        assert_eq!(state.report_uuid, Some(ReportId::new("r-9")));
        assert_eq!(state.location.search(), "?hidden_columns=trend");
        assert_eq!(state.location.base(), "http://qt.example.org/r-9");
        assert!(state.is_loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_overrides_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        let (mut app, _) = App::new(Startup {
            api_url: Some("http://once.example.org".into()),
            record_url: Some("http://records.example.org".into()),
            editor: true,
            ..startup(&dir)
        });
        let generation = app.state.reload_generation.unwrap();
        let reports = Reports::from_json(
            r#"{"reports": [{"report_uuid": "r-1", "title": "First", "subjects": {}}]}"#,
        )
        .unwrap();
        let _ = app.update(
            ReportMessage::ReportsLoaded {
                generation,
                result: Ok(reports),
            }
            .into(),
        );

        let (saved, error) = Settings::load_from(&path);
        assert!(error.is_none());
        assert_eq!(saved.general.last_report, Some(ReportId::new("r-1")));
        assert_eq!(saved.client, ClientSettings::default());
        assert!(!saved.permissions.can_edit());

        assert_eq!(app.state.settings.client.api_url, "http://once.example.org");
        assert!(app.state.settings.permissions.can_edit());
    }

    #[test]
    fn test_invalid_url_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = App::new(Startup {
            api_url: Some("not a url".into()),
            ..startup(&dir)
        });
        assert!(app.state.client.is_none());
        assert!(!app.state.is_loading);
        assert!(matches!(app.state.error, Some(GuiError::ReportLoad { .. })));
    }

    #[test]
    fn test_dismiss_error() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _) = App::new(Startup {
            api_url: Some("not a url".into()),
            ..startup(&dir)
        });
        let _ = app.update(Message::DismissError);
        assert!(app.state.error.is_none());
    }

    #[test]
    fn test_title() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = App::new(startup(&dir));
        assert_eq!(app.title(), "Quality-time");
    }
}
