//! Homepage lifecycle.
//!
//! Mounting the homepage starts exactly one fetch of the featured projects.
//! The view state starts at [`HomeState::Loading`] and is written exactly once
//! more, when the fetch settles:
//!
//! - success with projects: the first [`FEATURED_LIMIT`] of them
//! - success with no projects: [`HomeState::Empty`]
//! - any failure: the four placeholder projects
//!
//! The fetch is bound to the mounted view. [`MountedHome::unmount`] (or
//! dropping the handle) cancels it, and a result arriving after that is
//! discarded.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::api::{FetchError, ProjectSource};
use crate::types::{placeholder_projects, Project, FEATURED_LIMIT};

/// What the homepage currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HomeState {
    /// Fetch in flight: spinner only
    #[default]
    Loading,
    /// Gallery with at least one project
    Populated(Vec<Project>),
    /// Fetch succeeded with no projects
    Empty,
}

impl HomeState {
    /// State for a settled fetch.
    pub fn from_fetch(result: Result<Vec<Project>, FetchError>) -> Self {
        match result {
            Ok(mut projects) => {
                projects.truncate(FEATURED_LIMIT);
                if projects.is_empty() {
                    HomeState::Empty
                } else {
                    HomeState::Populated(projects)
                }
            }
            Err(err) => {
                warn!(
                    kind = err.kind().as_str(),
                    error = %err,
                    cause = ?std::error::Error::source(&err).map(ToString::to_string),
                    "featured projects unavailable, showing placeholders"
                );
                HomeState::Populated(placeholder_projects())
            }
        }
    }

    /// `true` until the fetch settles.
    pub fn is_loading(&self) -> bool {
        matches!(self, HomeState::Loading)
    }

    /// Projects the gallery shows (empty while loading).
    pub fn projects(&self) -> &[Project] {
        match self {
            HomeState::Populated(projects) => projects,
            HomeState::Loading | HomeState::Empty => &[],
        }
    }
}

/// A mounted homepage: owns the in-flight fetch and the view state.
#[derive(Debug)]
pub struct MountedHome {
    state: watch::Receiver<HomeState>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

/// Mount the homepage against `source`. Must be called inside a Tokio runtime.
pub fn mount<S>(source: S) -> MountedHome
where
    S: ProjectSource + 'static,
{
    let (tx, rx) = watch::channel(HomeState::Loading);
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let task = tokio::spawn(async move {
        let fetch = AssertUnwindSafe(source.fetch_featured()).catch_unwind();
        let result = tokio::select! {
            _ = token.cancelled() => {
                debug!("homepage unmounted before projects settled");
                return;
            }
            outcome = fetch => outcome.unwrap_or_else(|panic| Err(FetchError::Aborted(panic_message(&*panic)))),
        };

        // Late results are dropped once the view is gone.
        if token.is_cancelled() {
            debug!("discarding projects that settled after unmount");
            return;
        }

        let next = HomeState::from_fetch(result);
        info!(projects = next.projects().len(), empty = matches!(next, HomeState::Empty), "homepage settled");
        tx.send_replace(next);
    });

    MountedHome {
        state: rx,
        cancel,
        task: Some(task),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

impl MountedHome {
    /// Current view state.
    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.clone()
    }

    /// Wait until the fetch settles. Returns `None` if the view was unmounted
    /// (or the fetch task died) while still loading.
    pub async fn settled(&mut self) -> Option<HomeState> {
        self.state
            .wait_for(|state| !state.is_loading())
            .await
            .ok()
            .map(|state| state.clone())
    }

    /// Tear the view down. After this returns no state update can happen.
    pub async fn unmount(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    /// Cancellation token tied to this view's lifetime.
    pub fn lifetime(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl Drop for MountedHome {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
