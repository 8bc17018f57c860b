// SPDX-License-Identifier: MPL-2.0
//! Gallery selection model: active category, hovered card and opened
//! project.
//!
//! The visible list is always derived from the catalog and the active
//! filter; it is never stored. Opening a project installs a fresh viewer
//! under a new session and suspends background scrolling until the project
//! is closed.

use std::sync::Arc;

use crate::domain::catalog::{Catalog, CategoryFilter, Project, ProjectId};
use crate::domain::viewer::SessionCounter;
use crate::ui::gallery::scroll_lock::{ScrollGuard, ScrollHost};
use crate::ui::viewer::component as viewer;
use crate::ui::viewer::lifecycle::LoadRequest;

/// Messages for the selection model.
#[derive(Debug, Clone)]
pub enum Message {
    SetCategory(CategoryFilter),
    OpenProject(ProjectId),
    CloseProject,
    Hover(ProjectId),
    Unhover,
    /// Forwarded to the opened viewer; ignored when nothing is open.
    Viewer(viewer::Message),
}

/// Effects produced by the selection model.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    FilterChanged(CategoryFilter),
    /// A viewer was installed; the host must start the initial load.
    ProjectOpened {
        id: ProjectId,
        request: LoadRequest,
    },
    ProjectClosed(ProjectId),
    /// `OpenProject` named an id absent from the catalog.
    UnknownProject(ProjectId),
    Viewer(viewer::Effect),
}

/// An opened project with its viewer and scroll suspension.
#[derive(Debug)]
struct OpenProject {
    project: Project,
    viewer: viewer::State,
    _scroll: ScrollGuard,
}

/// Gallery selection state.
#[derive(Debug)]
pub struct State {
    catalog: Catalog,
    active_filter: CategoryFilter,
    open: Option<OpenProject>,
    hovered: Option<ProjectId>,
    sessions: SessionCounter,
    scroll_host: Arc<dyn ScrollHost>,
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog, scroll_host: Arc<dyn ScrollHost>) -> Self {
        Self {
            catalog,
            active_filter: CategoryFilter::default(),
            open: None,
            hovered: None,
            sessions: SessionCounter::new(),
            scroll_host,
        }
    }

    /// Handle a selection message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SetCategory(filter) => self.set_category(filter),
            Message::OpenProject(id) => self.open_project_by_id(id),
            Message::CloseProject => self.close_project(),
            Message::Hover(id) => {
                self.hover(id);
                Effect::None
            }
            Message::Unhover => {
                self.unhover();
                Effect::None
            }
            Message::Viewer(message) => match self.open.as_mut() {
                Some(open) => Effect::Viewer(open.viewer.handle(message)),
                None => Effect::None,
            },
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // OPERATIONS
    // ═══════════════════════════════════════════════════════════════════════

    /// Changes the active category. An empty result is valid.
    pub fn set_category(&mut self, filter: CategoryFilter) -> Effect {
        if filter == self.active_filter {
            return Effect::None;
        }
        self.active_filter = filter;
        if let Some(id) = self.hovered {
            let still_visible = self.visible_projects().any(|p| p.id == id);
            if !still_visible {
                self.hovered = None;
            }
        }
        Effect::FilterChanged(filter)
    }

    /// Opens `project` with a fresh viewer.
    ///
    /// The project does not have to belong to the catalog or to the visible
    /// list. Opening while another project is open replaces it; callbacks
    /// addressed to the replaced viewer become stale.
    pub fn open_project(&mut self, project: Project) -> Effect {
        let (viewer, request) = viewer::State::open(&project, self.sessions.issue());
        let id = project.id;
        // The new guard exists before the replaced one drops, so the lock
        // never flickers off between projects.
        let scroll = ScrollGuard::acquire(Arc::clone(&self.scroll_host));
        self.open = Some(OpenProject {
            project,
            viewer,
            _scroll: scroll,
        });
        Effect::ProjectOpened { id, request }
    }

    /// Opens the catalog project with `id`.
    pub fn open_project_by_id(&mut self, id: ProjectId) -> Effect {
        match self.catalog.find(id) {
            Some(project) => {
                let project = project.clone();
                self.open_project(project)
            }
            None => Effect::UnknownProject(id),
        }
    }

    /// Closes the opened project, if any. Idempotent.
    pub fn close_project(&mut self) -> Effect {
        match self.open.take() {
            Some(open) => Effect::ProjectClosed(open.project.id),
            None => Effect::None,
        }
    }

    /// Highlights a grid card. Ids outside the visible list are ignored.
    pub fn hover(&mut self, id: ProjectId) {
        if self.visible_projects().any(|p| p.id == id) {
            self.hovered = Some(id);
        }
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    /// Catalog projects matching the active filter, in catalog order.
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.catalog.filtered(self.active_filter)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn active_filter(&self) -> CategoryFilter {
        self.active_filter
    }

    #[must_use]
    pub fn hovered(&self) -> Option<ProjectId> {
        self.hovered
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    #[must_use]
    pub fn open_project_ref(&self) -> Option<&Project> {
        self.open.as_ref().map(|open| &open.project)
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&viewer::State> {
        self.open.as_ref().map(|open| &open.viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Category;
    use crate::domain::viewer::{LoadTicket, Pointer, Rect};
    use crate::ui::gallery::scroll_lock::ScrollLock;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Project::new(1, "Espresso", Category::CafeBeverage, "espresso.jpg")
                .with_alternate("espresso-raw.jpg"),
            Project::new(2, "Lobby", Category::ArchitectureInterior, "lobby.jpg"),
            Project::new(3, "Pour over", Category::CafeBeverage, "pour.jpg")
                .with_video("pour.mp4", Some(12.0)),
            Project::new(4, "Bistro", Category::Food, "bistro.jpg"),
        ])
    }

    fn state() -> (State, Arc<ScrollLock>) {
        let lock = Arc::new(ScrollLock::new());
        (State::new(catalog(), lock.clone()), lock)
    }

    fn ids(state: &State) -> Vec<u32> {
        state.visible_projects().map(|p| p.id.0).collect()
    }

    fn opened_ticket(effect: Effect) -> LoadTicket {
        match effect {
            Effect::ProjectOpened { request, .. } => request.ticket,
            other => panic!("expected ProjectOpened, got {other:?}"),
        }
    }

    #[test]
    fn default_filter_shows_whole_catalog() {
        let (state, _) = state();
        assert_eq!(state.active_filter(), CategoryFilter::All);
        assert_eq!(ids(&state), vec![1, 2, 3, 4]);
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let (mut state, _) = state();
        state.set_category(CategoryFilter::Only(Category::CafeBeverage));
        assert_eq!(ids(&state), vec![1, 3]);
    }

    #[test]
    fn filter_law_holds_for_every_category() {
        let (mut state, _) = state();
        for category in Category::ALL {
            state.set_category(CategoryFilter::Only(category));
            let expected: Vec<u32> = catalog()
                .projects()
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.0)
                .collect();
            assert_eq!(ids(&state), expected);
        }
    }

    #[test]
    fn empty_category_is_valid() {
        let (mut state, _) = state();
        state.set_category(CategoryFilter::Only(Category::Animal));
        assert_eq!(ids(&state), Vec::<u32>::new());
    }

    #[test]
    fn open_installs_fresh_viewer_and_locks_scroll() {
        let (mut state, lock) = state();
        let effect = state.open_project_by_id(ProjectId(1));
        assert!(matches!(effect, Effect::ProjectOpened { id: ProjectId(1), .. }));
        assert!(lock.is_locked());

        let viewer = state.viewer().expect("viewer installed");
        assert!(!viewer.showing_alternate());
        assert!(!viewer.is_zoomed());
        assert!(viewer.load_state().is_loading());
    }

    #[test]
    fn open_accepts_project_outside_visible_list() {
        let (mut state, _) = state();
        state.set_category(CategoryFilter::Only(Category::Food));
        let outsider = Project::new(99, "Guest", Category::Portrait, "guest.jpg");
        state.open_project(outsider);
        assert_eq!(state.open_project_ref().map(|p| p.id), Some(ProjectId(99)));
    }

    #[test]
    fn unknown_id_reports_and_keeps_state() {
        let (mut state, lock) = state();
        assert_eq!(
            state.open_project_by_id(ProjectId(42)),
            Effect::UnknownProject(ProjectId(42))
        );
        assert!(!state.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn close_is_idempotent() {
        let (mut state, lock) = state();
        state.open_project_by_id(ProjectId(2));
        assert_eq!(state.close_project(), Effect::ProjectClosed(ProjectId(2)));
        assert!(!lock.is_locked());
        assert_eq!(state.close_project(), Effect::None);
        assert!(!state.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn switching_projects_keeps_single_lock() {
        let (mut state, lock) = state();
        state.open_project_by_id(ProjectId(1));
        state.open_project_by_id(ProjectId(2));
        assert_eq!(lock.depth(), 1);
        state.close_project();
        assert_eq!(lock.depth(), 0);
    }

    #[test]
    fn callbacks_after_close_are_noops() {
        let (mut state, _) = state();
        let ticket = opened_ticket(state.open_project_by_id(ProjectId(1)));
        state.close_project();

        let effect = state.handle(Message::Viewer(viewer::Message::MediaLoaded(ticket)));
        assert_eq!(effect, Effect::None);
        assert!(state.viewer().is_none());
    }

    #[test]
    fn callbacks_for_replaced_project_are_stale() {
        let (mut state, _) = state();
        let old = opened_ticket(state.open_project_by_id(ProjectId(1)));
        state.open_project_by_id(ProjectId(1));

        let effect = state.handle(Message::Viewer(viewer::Message::MediaLoaded(old)));
        assert_eq!(effect, Effect::Viewer(viewer::Effect::StaleCallback(old)));
        assert!(state
            .viewer()
            .is_some_and(|viewer| viewer.load_state().is_loading()));
    }

    #[test]
    fn video_project_opens_in_video_mode() {
        let (mut state, _) = state();
        state.open_project_by_id(ProjectId(3));
        let viewer = state.viewer().expect("viewer installed");
        assert!(viewer.mode().is_video());
        assert!(viewer.playback().is_some());
    }

    #[test]
    fn viewer_messages_reach_open_viewer() {
        let (mut state, _) = state();
        let ticket = opened_ticket(state.open_project_by_id(ProjectId(1)));
        state.handle(Message::Viewer(viewer::Message::MediaLoaded(ticket)));

        let effect = state.handle(Message::Viewer(viewer::Message::MediaPressed {
            pointer: Pointer::new(5.0, 5.0),
            bounds: Rect::sized(10.0, 10.0),
        }));
        assert_eq!(effect, Effect::Viewer(viewer::Effect::ZoomChanged));
    }

    #[test]
    fn hover_tracks_visible_cards_only() {
        let (mut state, _) = state();
        state.hover(ProjectId(2));
        assert_eq!(state.hovered(), Some(ProjectId(2)));

        state.set_category(CategoryFilter::Only(Category::Food));
        assert_eq!(state.hovered(), None);

        state.hover(ProjectId(1));
        assert_eq!(state.hovered(), None);
        state.hover(ProjectId(4));
        state.unhover();
        assert_eq!(state.hovered(), None);
    }
}
