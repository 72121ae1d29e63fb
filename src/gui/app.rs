//! Main GUI application

use crate::api::{ApiBase, ApiClient, ExtractionResult};
use crate::controller::{MediaPreview, ResultView, Settlement, UiController};
use crate::database::DatabaseManager;
use crate::downloader::{download_to_file, DownloadStatus, DownloadTask};
use crate::gui::clipboard;
use crate::gui::preview::{fetch_preview, PreviewImage};
use crate::gui::theme::{self, Palette};
use crate::history::{self, HistoryEntry};
use crate::preferences::ThemePreference;
use crate::utils::config::AppSettings;
use crate::utils::error::ControllerError;
use crate::utils::{sanitize_filename, unique_destination};
use chrono::Local;
use iced::widget::image::Handle;
use iced::{Application, Command, Element, Theme};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{debug, error, info, warn};

/// Everything `main` prepares before the window opens
pub struct AppFlags {
    pub store: Arc<DatabaseManager>,
    /// Runtime the database pool was created on; kept alive with the app
    pub runtime: Arc<Runtime>,
    pub api: ApiClient,
    /// Whether the API base came from the command line and ignores settings
    pub api_base_locked: bool,
    pub settings: AppSettings,
    pub theme: ThemePreference,
    pub history: Vec<HistoryEntry>,
}

/// Main application state
pub struct PinloaderApp {
    store: Arc<DatabaseManager>,
    _runtime: Arc<Runtime>,
    api: ApiClient,
    api_base_locked: bool,

    // UI State
    current_view: View,
    url_input: String,
    status_message: String,
    controller: UiController,
    result_view: Option<ResultView>,
    preview: Option<Handle>,
    theme: ThemePreference,

    history: Vec<HistoryEntry>,
    downloads: Vec<DownloadTask>,

    // Settings
    settings: AppSettings,
    settings_draft: SettingsDraft,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    History,
    Settings,
}

/// Settings as edited, before they are saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    pub server_url: String,
    pub download_location: String,
    pub forward_referer: bool,
}

impl From<&AppSettings> for SettingsDraft {
    fn from(settings: &AppSettings) -> Self {
        Self {
            server_url: settings.server_url.clone().unwrap_or_default(),
            download_location: settings.download_location.to_string_lossy().into_owned(),
            forward_referer: settings.forward_referer,
        }
    }
}

impl SettingsDraft {
    fn to_settings(&self) -> AppSettings {
        let server_url = self.server_url.trim();
        AppSettings {
            server_url: (!server_url.is_empty()).then(|| server_url.to_string()),
            download_location: PathBuf::from(self.download_location.trim()),
            forward_referer: self.forward_referer,
        }
    }
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Input events
    UrlInputChanged(String),
    Submit,
    PasteFromClipboard,
    ClearUrlInput,
    DismissNotice,

    // Extraction
    ExtractionCompleted(u64, Result<ExtractionResult, ControllerError>),
    PreviewLoaded(u64, Result<PreviewImage, String>),
    DismissError,
    PlayVideo,

    // Downloads
    StartDownload(usize),
    DownloadFinished(String, Result<u64, String>),
    OpenFile(String),
    OpenDownloadFolder(String),
    RemoveDownload(String),

    // History
    ClearHistory,
    LoadHistoryItem(String),
    HistoryUpdated(Result<Vec<HistoryEntry>, String>),

    // Theme
    ToggleTheme,
    PreferenceSaved(Result<(), String>),

    // View navigation
    SwitchToMain,
    SwitchToHistory,
    SwitchToSettings,

    // Settings
    ServerUrlChanged(String),
    DownloadLocationChanged(String),
    BrowseDownloadLocation,
    ToggleForwardReferer,
    SaveSettings,
    SettingsSaved(Result<AppSettings, String>),
}

impl Application for PinloaderApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let settings_draft = SettingsDraft::from(&flags.settings);

        let app = Self {
            store: flags.store,
            _runtime: flags.runtime,
            api: flags.api,
            api_base_locked: flags.api_base_locked,
            current_view: View::Main,
            url_input: String::new(),
            status_message: "Ready".to_string(),
            controller: UiController::new(),
            result_view: None,
            preview: None,
            theme: flags.theme,
            history: flags.history,
            downloads: Vec::new(),
            settings: flags.settings,
            settings_draft,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Pinloader - Pinterest Downloader")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            // Input events
            Message::UrlInputChanged(url) => {
                self.url_input = url;
                self.controller.dismiss_notice();
                Command::none()
            }

            Message::Submit => self.submit(),

            Message::PasteFromClipboard => {
                match clipboard::get_clipboard_content() {
                    Ok(content) => {
                        self.url_input = content;
                        self.controller.dismiss_notice();
                        self.status_message = "URL pasted from clipboard".to_string();
                    }
                    Err(e) => self.controller.report(&e),
                }
                Command::none()
            }

            Message::ClearUrlInput => {
                self.url_input.clear();
                Command::none()
            }

            Message::DismissNotice => {
                self.controller.dismiss_notice();
                Command::none()
            }

            // Extraction
            Message::ExtractionCompleted(generation, result) => {
                match self.controller.settle(generation, result, Local::now()) {
                    Settlement::Succeeded(entry) => {
                        let mut commands = vec![self.record_history(entry)];
                        commands.extend(self.present_result());
                        Command::batch(commands)
                    }
                    Settlement::Failed(_) => {
                        self.status_message = "Ready".to_string();
                        Command::none()
                    }
                    Settlement::Stale => Command::none(),
                }
            }

            Message::PreviewLoaded(generation, result) => {
                if generation != self.controller.generation() {
                    return Command::none();
                }
                match result {
                    Ok(image) => self.preview = Some(image.handle()),
                    Err(e) => warn!("Preview unavailable: {}", e),
                }
                Command::none()
            }

            Message::DismissError => {
                self.controller.dismiss_error();
                Command::none()
            }

            Message::PlayVideo => {
                if let Some(MediaPreview::Video { src, .. }) =
                    self.result_view.as_ref().map(|v| &v.preview)
                {
                    if let Err(e) = open::that(src) {
                        warn!("Failed to open video {}: {}", src, e);
                        self.status_message = format!("Could not open the video: {}", e);
                    }
                }
                Command::none()
            }

            // Downloads
            Message::StartDownload(index) => self.start_download(index),

            Message::DownloadFinished(task_id, result) => {
                if let Some(task) = self.downloads.iter_mut().find(|t| t.id == task_id) {
                    match result {
                        Ok(bytes) => {
                            task.status = DownloadStatus::Completed {
                                path: task.destination.clone(),
                                bytes,
                            };
                            self.status_message = format!("Saved {}", task.filename);
                        }
                        Err(e) => {
                            self.status_message = format!("Download failed: {}", e);
                            task.status = DownloadStatus::Failed(e);
                        }
                    }
                }
                Command::none()
            }

            Message::OpenFile(task_id) => {
                if let Some(DownloadStatus::Completed { path, .. }) = self
                    .downloads
                    .iter()
                    .find(|t| t.id == task_id)
                    .map(|t| &t.status)
                {
                    if let Err(e) = open::that(path) {
                        warn!("Failed to open file {:?}: {}", path, e);
                    }
                }
                Command::none()
            }

            Message::OpenDownloadFolder(task_id) => {
                let folder = self
                    .downloads
                    .iter()
                    .find(|t| t.id == task_id)
                    .and_then(|t| t.destination.parent().map(PathBuf::from))
                    .unwrap_or_else(|| self.settings.download_location.clone());
                if let Err(e) = open::that(&folder) {
                    warn!("Failed to open folder {:?}: {}", folder, e);
                }
                Command::none()
            }

            Message::RemoveDownload(task_id) => {
                self.downloads.retain(|t| t.id != task_id);
                Command::none()
            }

            // History
            Message::ClearHistory => {
                let confirmed = rfd::MessageDialog::new()
                    .set_title("Clear history")
                    .set_description("Delete your whole download history?")
                    .set_buttons(rfd::MessageButtons::YesNo)
                    .set_level(rfd::MessageLevel::Warning)
                    .show();
                if !matches!(confirmed, rfd::MessageDialogResult::Yes) {
                    return Command::none();
                }

                let store = Arc::clone(&self.store);
                Command::perform(
                    async move {
                        history::clear_history(store.as_ref())
                            .await
                            .map(|_| Vec::new())
                            .map_err(|e| e.to_string())
                    },
                    Message::HistoryUpdated,
                )
            }

            Message::LoadHistoryItem(url) => {
                if !self.controller.can_submit() {
                    self.controller.report(&ControllerError::RequestInFlight);
                    return Command::none();
                }
                self.url_input = url;
                self.current_view = View::Main;
                self.submit()
            }

            Message::HistoryUpdated(result) => {
                match result {
                    Ok(history) => self.history = history,
                    Err(e) => {
                        error!("History update failed: {}", e);
                        self.status_message = format!("Could not update history: {}", e);
                    }
                }
                Command::none()
            }

            // Theme
            Message::ToggleTheme => {
                self.theme = self.theme.toggled();
                let theme = self.theme;
                let store = Arc::clone(&self.store);
                Command::perform(
                    async move { theme.save(store.as_ref()).await.map_err(|e| e.to_string()) },
                    Message::PreferenceSaved,
                )
            }

            Message::PreferenceSaved(result) => {
                if let Err(e) = result {
                    warn!("Failed to persist theme preference: {}", e);
                }
                Command::none()
            }

            // View navigation
            Message::SwitchToMain => {
                self.current_view = View::Main;
                Command::none()
            }

            Message::SwitchToHistory => {
                self.current_view = View::History;
                // Re-read so the list reflects what is actually stored
                let store = Arc::clone(&self.store);
                Command::perform(
                    async move {
                        history::load_history(store.as_ref())
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::HistoryUpdated,
                )
            }

            Message::SwitchToSettings => {
                self.settings_draft = SettingsDraft::from(&self.settings);
                self.current_view = View::Settings;
                Command::none()
            }

            // Settings
            Message::ServerUrlChanged(url) => {
                self.settings_draft.server_url = url;
                Command::none()
            }

            Message::DownloadLocationChanged(location) => {
                self.settings_draft.download_location = location;
                Command::none()
            }

            Message::BrowseDownloadLocation => {
                if let Some(path) = rfd::FileDialog::new()
                    .set_directory(&self.settings_draft.download_location)
                    .pick_folder()
                {
                    self.settings_draft.download_location = path.to_string_lossy().to_string();
                }
                Command::none()
            }

            Message::ToggleForwardReferer => {
                self.settings_draft.forward_referer = !self.settings_draft.forward_referer;
                Command::none()
            }

            Message::SaveSettings => {
                let settings = self.settings_draft.to_settings();
                if let Err(e) = ApiBase::resolve(settings.server_url.as_deref()) {
                    self.status_message = e.to_string();
                    return Command::none();
                }

                let store = Arc::clone(&self.store);
                Command::perform(
                    async move {
                        settings
                            .save(store.as_ref())
                            .await
                            .map(|_| settings)
                            .map_err(|e| e.to_string())
                    },
                    Message::SettingsSaved,
                )
            }

            Message::SettingsSaved(result) => {
                match result {
                    Ok(settings) => {
                        if !self.api_base_locked {
                            self.rebuild_api(&settings);
                        }
                        self.settings = settings;
                        self.current_view = View::Main;
                        self.status_message = "Settings saved".to_string();
                    }
                    Err(e) => {
                        error!("Failed to save settings: {}", e);
                        self.status_message = format!("Could not save settings: {}", e);
                    }
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        use iced::widget::{button, column, container, row, text, Space};
        use iced::Length;

        let palette = Palette::of(self.theme);

        let nav_button = |label: &str, view: View, message: Message| {
            button(text(label).size(16))
                .style(iced::theme::Button::Custom(Box::new(
                    if self.current_view == view {
                        theme::SidebarButtonStyle::Active(palette)
                    } else {
                        theme::SidebarButtonStyle::Inactive(palette)
                    },
                )))
                .width(Length::Fill)
                .padding(12)
                .on_press(message)
        };

        // Sidebar
        let sidebar = container(
            column![
                container(text("Pinloader").size(24).style(palette.text_primary)).padding(20),
                Space::with_height(20),
                nav_button("Download", View::Main, Message::SwitchToMain),
                nav_button("History", View::History, Message::SwitchToHistory),
                nav_button("Settings", View::Settings, Message::SwitchToSettings),
                Space::with_height(Length::Fill),
                text(self.status_message.clone())
                    .size(12)
                    .style(palette.text_muted),
                button(text(format!("{}  Theme", self.theme.icon())).size(14))
                    .on_press(Message::ToggleTheme)
                    .width(Length::Fill)
                    .padding(12)
                    .style(iced::theme::Button::Custom(Box::new(theme::SecondaryButton(
                        palette
                    )))),
            ]
            .spacing(10)
            .padding(10),
        )
        .width(Length::Fixed(220.0))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(theme::SidebarContainer(
            palette,
        ))));

        let content = match self.current_view {
            View::Main => crate::gui::views::main_view(
                palette,
                &self.url_input,
                &self.controller,
                self.result_view.as_ref(),
                self.preview.as_ref(),
                &self.downloads,
            ),
            View::History => crate::gui::views::history_view(
                palette,
                &self.history,
                self.controller.can_submit(),
            ),
            View::Settings => crate::gui::views::settings_view(
                palette,
                &self.settings_draft,
                self.api.base().as_str(),
                self.api_base_locked,
            ),
        };

        let main_layout = row![
            sidebar,
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(20)
        ];

        container(main_layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(iced::theme::Container::Custom(Box::new(
                theme::MainGradientContainer(palette),
            )))
            .into()
    }

    fn theme(&self) -> Self::Theme {
        theme::iced_theme(self.theme)
    }
}

impl PinloaderApp {
    /// Validate the input and, when accepted, send the extraction request
    fn submit(&mut self) -> Command<Message> {
        let submission = match self.controller.begin(&self.url_input) {
            Ok(submission) => submission,
            Err(e) => {
                debug!("Submission rejected: {}", e);
                return Command::none();
            }
        };

        self.result_view = None;
        self.preview = None;
        self.status_message = "Extracting media links...".to_string();

        let api = self.api.clone();
        let generation = submission.generation;
        Command::perform(
            async move { api.extract(&submission.url).await },
            move |result| Message::ExtractionCompleted(generation, result),
        )
    }

    /// Build the result panel and start loading its preview
    fn present_result(&mut self) -> Option<Command<Message>> {
        let view = match self
            .controller
            .render_result(self.api.base(), self.settings.forward_referer)
        {
            Some(view) => view,
            None => {
                self.status_message = "Ready".to_string();
                return None;
            }
        };

        self.status_message = format!("Found {} download option(s)", view.actions.len());
        let still = view.preview.still_url().to_string();
        self.result_view = Some(view);

        if still.is_empty() {
            return None;
        }
        let http = self.api.http().clone();
        let generation = self.controller.generation();
        Some(Command::perform(fetch_preview(http, still), move |result| {
            Message::PreviewLoaded(generation, result)
        }))
    }

    fn record_history(&self, entry: HistoryEntry) -> Command<Message> {
        let store = Arc::clone(&self.store);
        Command::perform(
            async move {
                history::add_to_history(store.as_ref(), entry)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::HistoryUpdated,
        )
    }

    fn start_download(&mut self, index: usize) -> Command<Message> {
        let action = match self.result_view.as_ref().and_then(|v| v.actions.get(index)) {
            Some(action) => action.clone(),
            None => return Command::none(),
        };

        let filename = sanitize_filename(&action.filename);
        let in_progress: Vec<&std::path::Path> = self
            .downloads
            .iter()
            .filter(|t| t.status == DownloadStatus::InProgress)
            .map(|t| t.destination.as_path())
            .collect();
        let destination =
            unique_destination(&self.settings.download_location, &filename, &in_progress);
        let task = DownloadTask::new(filename, destination.clone());
        let task_id = task.id.clone();
        info!("Starting download {} -> {:?}", task_id, destination);
        self.status_message = format!("Downloading {}", task.filename);
        self.downloads.push(task);

        let http = self.api.http().clone();
        Command::perform(
            async move {
                download_to_file(&http, &action.href, &destination)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::DownloadFinished(task_id, result),
        )
    }

    fn rebuild_api(&mut self, settings: &AppSettings) {
        let base = match ApiBase::resolve(settings.server_url.as_deref()) {
            Ok(base) => base,
            Err(e) => {
                warn!("Keeping previous API base: {}", e);
                return;
            }
        };
        match ApiClient::new(base) {
            Ok(api) => {
                info!("API base is now {}", api.base());
                self.api = api;
            }
            Err(e) => warn!("Failed to rebuild API client: {}", e),
        }
    }
}
