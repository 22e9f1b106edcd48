//! One list request, end to end.
//!
//! A [`ListRequest`] is what a subcommand asks for: which list, the search
//! term, filters, page, and for notifications any inbox actions. [`App::run`]
//! picks the record source, applies the actions, queries, and renders.

use std::path::{Path, PathBuf};

use farmdesk_query::{QueryError, Record, Timestamp};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::fixtures;
use crate::inbox::{Inbox, InboxAction};
use crate::records::Notification;
use crate::render::{render_csv, render_page, OutputMode, RenderError, TableRow};
use crate::source::{JsonFileSource, RecordSource, SourceError, StaticSource};
use crate::state::ListState;
use crate::views::ListKind;

/// Errors from running a list request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// What to list and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    kind: ListKind,
    search: String,
    filters: Vec<(String, String)>,
    page: usize,
    page_size: Option<usize>,
    data: Option<PathBuf>,
    actions: Vec<InboxAction>,
}

impl ListRequest {
    /// First page of `kind`, unfiltered.
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            search: String::new(),
            filters: Vec::new(),
            page: 1,
            page_size: None,
            data: None,
            actions: Vec::new(),
        }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    /// Adds a filter when a value is given; `None` leaves the field open.
    pub fn filter(mut self, field: impl Into<String>, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.filters.push((field.into(), value.to_string()));
        }
        self
    }

    /// Restricts notifications to unread ones (`read = false`).
    pub fn unread_only(self, unread: bool) -> Self {
        self.filter("read", unread.then_some("false"))
    }

    /// Page to show, starting at 1. Passed to the engine as given.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Records per page; `None` uses the configured size.
    pub fn page_size(mut self, size: impl Into<Option<usize>>) -> Self {
        self.page_size = size.into();
        self
    }

    /// JSON file to read records from, ahead of the configured one.
    pub fn data(mut self, path: impl Into<PathBuf>) -> Self {
        self.data = Some(path.into());
        self
    }

    /// Queues an inbox action. Only notification requests use them.
    pub fn action(mut self, action: InboxAction) -> Self {
        self.actions.push(action);
        self
    }

    fn state(&self) -> ListState {
        let mut state = ListState::new();
        state.set_search(self.search.as_str());
        for (field, value) in &self.filters {
            state.set_filter(field.as_str(), value.as_str());
        }
        state
    }
}

/// Runs list requests against one configuration.
#[derive(Debug, Clone, Copy)]
pub struct App<'a> {
    config: &'a Config,
    output: OutputMode,
    now: Timestamp,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config, output: OutputMode, now: Timestamp) -> Self {
        Self {
            config,
            output,
            now,
        }
    }

    /// The JSON file backing a request, if any. The request's own path wins
    /// over the configured one; with neither, built-in records are used.
    pub fn data_path<'r>(&'r self, request: &'r ListRequest) -> Option<&'r Path> {
        let configured = match request.kind {
            ListKind::Users => &self.config.data.users,
            ListKind::Farms => &self.config.data.farms,
            ListKind::Notifications => &self.config.data.notifications,
        };
        request.data.as_deref().or(configured.as_deref())
    }

    /// Runs a request and returns the rendered output.
    pub fn run(&self, request: &ListRequest) -> Result<String, AppError> {
        let path = self.data_path(request);
        match request.kind {
            ListKind::Users => {
                let users = fetch(source_for(path, fixtures::users).as_ref(), request.kind)?;
                self.render_list(request, &users)
            }
            ListKind::Farms => {
                let farms = fetch(source_for(path, fixtures::farms).as_ref(), request.kind)?;
                self.render_list(request, &farms)
            }
            ListKind::Notifications => self.run_notifications(request, path),
        }
    }

    /// Applies queued actions, saving them when file-backed, then renders
    /// the list under an "N unread" header in text modes.
    fn run_notifications(
        &self,
        request: &ListRequest,
        path: Option<&Path>,
    ) -> Result<String, AppError> {
        let source = source_for(path, || fixtures::notifications_at(self.now));
        let mut inbox = Inbox::new(fetch(source.as_ref(), request.kind)?);

        if !request.actions.is_empty() {
            for action in &request.actions {
                inbox.apply(action);
            }
            if let Some(path) = path {
                JsonFileSource::<Notification>::new(path).store_records(inbox.notifications())?;
            }
        }

        let body = self.render_list(request, inbox.notifications())?;
        if self.output.resolve_auto().is_structured() {
            Ok(body)
        } else {
            Ok(format!("{} unread\n\n{body}", inbox.unread_count()?))
        }
    }

    fn render_list<T>(&self, request: &ListRequest, records: &[T]) -> Result<String, AppError>
    where
        T: Record + TableRow + Serialize + Clone,
    {
        let kind = request.kind;
        let page_size = request.page_size.unwrap_or(self.config.page_size);
        let query = request.state().to_query(page_size).page(request.page);
        let engine = kind.engine().wildcard(self.config.wildcard.as_str());

        // An export covers every match, not one page.
        if self.output == OutputMode::Csv {
            let matches = engine.filter(records, &query, T::accessor)?;
            tracing::debug!(matched = matches.len(), "{} export", kind.noun());
            return Ok(render_csv(&matches)?);
        }

        let page = engine.query_cloned(records, &query, T::accessor)?;
        tracing::debug!(
            matched = page.total_matched,
            page = page.page,
            total_pages = page.total_pages,
            "{} query",
            kind.noun()
        );

        Ok(render_page(&page, kind, self.output, self.now)?)
    }
}

fn source_for<T, F>(path: Option<&Path>, builtin: F) -> Box<dyn RecordSource<T>>
where
    T: Clone + DeserializeOwned + 'static,
    F: FnOnce() -> Vec<T>,
{
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(StaticSource::new(builtin())),
    }
}

fn fetch<T>(source: &dyn RecordSource<T>, kind: ListKind) -> Result<Vec<T>, SourceError> {
    let records = source.fetch_records()?;
    tracing::debug!(source = %source.name(), count = records.len(), "fetched {}", kind.noun());
    Ok(records)
}
