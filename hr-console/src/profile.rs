//! Profile controller
//!
//! Orchestrates the profile-completion form: fetch identity and profile
//! concurrently, gate the form by access mode, bind the record, and
//! save a partial update back. States: `Loading → {ReadOnly, Editable}
//! → Saving → {Saved, SaveFailed}`.

use crate::api::ProfileApi;
use crate::form::FormModel;
use crate::progress::Progress;
use crate::timer::{Timer, TimerHandle};
use crate::view::{Notice, ProfileView};
use shared::models::{ProfileAccess, ProfileRecord, ProfileUpdate};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Advisory shown to read-only viewers.
pub const READ_ONLY_NOTICE: &str = "Admins view employee profiles in read-only mode.";
/// Message shown when the profile reaches full completion.
pub const FULL_COMPLETION_MESSAGE: &str = "Profile complete: 100%";
/// Generic save failure message.
pub const SAVE_FAILED_MESSAGE: &str = "Could not save your profile. Please try again.";
/// Delay before the modal closes after a full completion.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(800);

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileState {
    Loading,
    Ready(ProfileAccess),
    Saving,
    Saved,
    SaveFailed,
}

pub struct ProfileController<A, V, T> {
    api: A,
    view: Arc<V>,
    timer: T,
    form: FormModel,
    state: ProfileState,
    close_timer: Option<TimerHandle>,
}

impl<A, V, T> ProfileController<A, V, T>
where
    A: ProfileApi,
    V: ProfileView + 'static,
    T: Timer,
{
    pub fn new(api: A, view: Arc<V>, timer: T) -> Self {
        Self {
            api,
            view,
            timer,
            form: FormModel::profile_form(),
            state: ProfileState::Loading,
            close_timer: None,
        }
    }

    /// Page-load entry: request identity and profile concurrently.
    ///
    /// Either fetch may fail without aborting the other; a missing
    /// identity hides the profile trigger and falls back to editable,
    /// a missing profile leaves the form blank.
    pub async fn load(&mut self) {
        self.state = ProfileState::Loading;
        // a close scheduled by a previous save must not fire into the
        // freshly opened modal
        if let Some(handle) = self.close_timer.take() {
            handle.cancel();
        }
        let (identity, profile) = tokio::join!(self.api.identity(), self.api.my_profile());

        let access = match identity {
            Ok(identity) => {
                debug!(id = identity.id, ?identity.role, "identity loaded");
                self.view.show_trigger(true);
                ProfileAccess::for_role(identity.role)
            }
            Err(e) => {
                warn!("failed to load identity: {e}");
                self.view.show_trigger(false);
                ProfileAccess::Editor
            }
        };
        self.apply_access(access);

        match profile {
            Ok(record) => self.render_record(&record),
            Err(e) => warn!("failed to load profile: {e}"),
        }

        self.state = ProfileState::Ready(access);
    }

    /// Submit handler: collect the non-empty fields and PUT them.
    ///
    /// On success the server's record replaces the form contents
    /// wholesale and, at full completion, the modal close is scheduled.
    /// On failure the form stays editable for a retry.
    pub async fn save(&mut self) {
        if !self.can_save() {
            return;
        }
        let update = ProfileUpdate::from_map(self.form.payload());
        if update.is_empty() {
            // nothing to send; the server would merge nothing anyway
            return;
        }
        self.state = ProfileState::Saving;

        match self.api.update_profile(&update).await {
            Ok(record) => {
                self.render_record(&record);
                let progress = Progress::new(record.completion_percent);
                if progress.is_complete() {
                    self.view.show_message(Notice::success(FULL_COMPLETION_MESSAGE));
                    let view = Arc::clone(&self.view);
                    self.close_timer = Some(
                        self.timer
                            .schedule(MODAL_CLOSE_DELAY, Box::new(move || view.close_modal())),
                    );
                } else {
                    self.view.show_message(Notice::success(format!(
                        "Saved. Profile {}% complete.",
                        progress.percent()
                    )));
                }
                self.state = ProfileState::Saved;
            }
            Err(e) => {
                warn!("profile save failed: {e}");
                self.view.show_message(Notice::error(SAVE_FAILED_MESSAGE));
                self.state = ProfileState::SaveFailed;
            }
        }
    }

    fn can_save(&self) -> bool {
        match self.state {
            ProfileState::Ready(ProfileAccess::Editor)
            | ProfileState::Saved
            | ProfileState::SaveFailed => true,
            ProfileState::Loading
            | ProfileState::Saving
            | ProfileState::Ready(ProfileAccess::Viewer) => false,
        }
    }

    fn apply_access(&mut self, access: ProfileAccess) {
        self.form.set_access(access);
        match access {
            ProfileAccess::Viewer => {
                self.view.show_save(false);
                self.view.set_notice(Some(READ_ONLY_NOTICE));
            }
            ProfileAccess::Editor => {
                self.view.show_save(true);
                self.view.set_notice(None);
            }
        }
    }

    fn render_record(&mut self, record: &ProfileRecord) {
        self.form.bind(&record.to_map());
        self.view
            .render_progress(Progress::new(record.completion_percent));
    }

    pub fn state(&self) -> ProfileState {
        self.state
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormModel {
        &mut self.form
    }
}
