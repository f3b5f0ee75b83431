//! The state behind the project creation form, independent of any UI toolkit.
//!
//! A [`Session`] is owned by the UI thread. It holds the three form fields, decides
//! when the create action is available, and hands the creation off to a background
//! thread. While that thread runs, the session refuses to start another one; the front
//! end gets the result back through a callback and feeds it to
//! [`Session::finish_create`] on its own thread.

pub mod status;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    thread::{self, JoinHandle},
    time::Instant,
};

use color_eyre::{eyre::bail, Result};

use crate::config::ConfigStore;
use crate::domain::{Language, ProjectRequest, ValidationError};
use crate::process::CommandRunner;
use crate::utils::constants::error_messages;
use crate::validator;
use crate::worker::{self, CreatedProject, CreationOptions};

pub use status::StatusLine;

#[derive(Debug)]
pub struct Session {
    language: Language,
    parent_path: Option<PathBuf>,
    project_name: String,
    status: StatusLine,
    in_flight: bool,
    config: ConfigStore,
}

impl Session {
    /// A fresh form, with the parent path preloaded from the `config` store
    pub fn new(config: ConfigStore) -> Self {
        let parent_path = config.load_last_path();
        Self {
            language: Language::default(),
            parent_path,
            project_name: String::new(),
            status: StatusLine::default(),
            in_flight: false,
            config,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn parent_path(&self) -> Option<&Path> {
        self.parent_path.as_deref()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusLine {
        &mut self.status
    }

    pub fn select_language(&mut self, language: Language) {
        log::debug!("Project language selected: {language}");
        self.language = language;
    }

    /// The folder picker result. An existing directory is persisted right away; failing
    /// to persist it doesn't prevent using it on this session
    pub fn choose_parent_path(&mut self, path: &Path) {
        if path.is_dir() {
            if let Err(e) = self.config.save_last_path(path) {
                log::warn!("{e}");
            }
        } else {
            log::debug!("Not saving the parent path {path:?}, since it isn't a directory");
        }
        self.set_parent_path(path);
    }

    /// Uses `path` on this session only, leaving the saved one untouched
    pub fn set_parent_path(&mut self, path: &Path) {
        self.parent_path = Some(path.to_path_buf());
    }

    /// The name field received `raw`. Characters that can't be part of a project name
    /// are filtered out, and the rejection of the raw input is reported on the status
    /// line and returned
    pub fn edit_project_name(&mut self, raw: &str, now: Instant) -> Result<(), ValidationError> {
        let verdict = validator::validate_project_name(raw);
        match &verdict {
            Ok(()) => self.project_name = raw.to_string(),
            Err(e) => {
                self.project_name = validator::sanitize_project_name(raw);
                self.status.show(&e.to_string(), now);
            }
        }
        verdict
    }

    /// The request that the form currently describes, if it passes the validation
    pub fn request(&self) -> Result<ProjectRequest, ValidationError> {
        let parent_path = self.parent_path.clone().unwrap_or_default();
        validator::validate(&self.project_name, &parent_path)?;
        Ok(ProjectRequest::new(
            parent_path,
            self.project_name.clone(),
            self.language,
        ))
    }

    /// Whether the create action must be enabled
    pub fn can_create(&self) -> bool {
        !self.in_flight && self.request().is_ok()
    }

    /// Launches the creation of the project described by the form on a background
    /// thread. `on_step` receives the progress of the pipeline and `on_done` its result,
    /// both from the background thread
    pub fn start_create<S, D>(
        &mut self,
        options: CreationOptions,
        runner: Arc<dyn CommandRunner>,
        on_step: S,
        on_done: D,
        now: Instant,
    ) -> Result<JoinHandle<()>>
    where
        S: Fn(&str) + Send + Sync + 'static,
        D: FnOnce(Result<CreatedProject>) + Send + 'static,
    {
        if self.in_flight {
            bail!(error_messages::CREATION_ALREADY_RUNNING);
        }
        let request = self.request()?;

        self.in_flight = true;
        self.status.show("Creating the project...", now);

        let handle = thread::Builder::new()
            .name(String::from("kickoff-create"))
            .spawn(move || {
                let result = worker::create_project(&request, &options, runner.as_ref(), &on_step);
                on_done(result);
            });

        match handle {
            Ok(handle) => Ok(handle),
            Err(e) => {
                self.in_flight = false;
                Err(e.into())
            }
        }
    }

    /// Takes back the result of the background creation, re-enabling the form
    pub fn finish_create(&mut self, result: &Result<CreatedProject>, now: Instant) {
        self.in_flight = false;
        match result {
            Ok(created) => self.status.show(
                &format!("Project {} created successfully", created.name),
                now,
            ),
            Err(e) => {
                log::error!("Failed to create the project: {e:?}");
                self.status.show(&format!("Error: {e}"), now);
            }
        }
    }
}
