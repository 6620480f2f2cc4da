// hr-console/tests/profile_flow.rs
// Profile controller flows against fake API/view/timer ports.

use async_trait::async_trait;
use hr_client::{ClientError, ClientResult};
use hr_console::profile::{
    FULL_COMPLETION_MESSAGE, MODAL_CLOSE_DELAY, READ_ONLY_NOTICE, SAVE_FAILED_MESSAGE,
};
use hr_console::view::{Notice, ProfileView};
use hr_console::{ManualTimer, ProfileApi, ProfileController, ProfileState, Progress};
use shared::models::{Identity, ProfileAccess, ProfileRecord, ProfileUpdate, Role};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

fn request_error(status: u16) -> ClientError {
    ClientError::Request {
        status,
        body: String::new(),
    }
}

#[derive(Default)]
struct FakeApi {
    identity: Mutex<Option<Identity>>,
    profile: Mutex<Option<ProfileRecord>>,
    save_results: Mutex<Vec<ClientResult<ProfileRecord>>>,
    saved: Mutex<Vec<ProfileUpdate>>,
}

impl FakeApi {
    fn with_identity(self, role: Role) -> Self {
        *self.identity.lock().unwrap() = Some(Identity {
            id: 1,
            name: "Jane Roe".into(),
            role,
        });
        self
    }

    fn with_profile(self, record: ProfileRecord) -> Self {
        *self.profile.lock().unwrap() = Some(record);
        self
    }

    fn with_save_result(self, result: ClientResult<ProfileRecord>) -> Self {
        self.save_results.lock().unwrap().push(result);
        self
    }
}

#[async_trait]
impl ProfileApi for FakeApi {
    async fn identity(&self) -> ClientResult<Identity> {
        self.identity.lock().unwrap().clone().ok_or(request_error(401))
    }

    async fn my_profile(&self) -> ClientResult<ProfileRecord> {
        self.profile.lock().unwrap().clone().ok_or(request_error(404))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<ProfileRecord> {
        self.saved.lock().unwrap().push(update.clone());
        let mut results = self.save_results.lock().unwrap();
        if results.is_empty() {
            Err(request_error(500))
        } else {
            results.remove(0)
        }
    }
}

#[derive(Default)]
struct FakeView {
    trigger: Mutex<Option<bool>>,
    save_visible: Mutex<Option<bool>>,
    notice: Mutex<Option<String>>,
    progress: Mutex<Vec<Progress>>,
    messages: Mutex<Vec<Notice>>,
    modal_closed: AtomicBool,
}

impl ProfileView for FakeView {
    fn show_trigger(&self, visible: bool) {
        *self.trigger.lock().unwrap() = Some(visible);
    }

    fn show_save(&self, visible: bool) {
        *self.save_visible.lock().unwrap() = Some(visible);
    }

    fn set_notice(&self, notice: Option<&str>) {
        *self.notice.lock().unwrap() = notice.map(str::to_string);
    }

    fn render_progress(&self, progress: Progress) {
        self.progress.lock().unwrap().push(progress);
    }

    fn show_message(&self, notice: Notice) {
        self.messages.lock().unwrap().push(notice);
    }

    fn close_modal(&self) {
        self.modal_closed.store(true, Ordering::SeqCst);
    }
}

fn profile_record(percent: u8) -> ProfileRecord {
    ProfileRecord {
        completion_percent: percent,
        first_name: Some("Jane".into()),
        birthday: Some("1993-06-14T00:00:00".into()),
        ..Default::default()
    }
}

fn controller(
    api: FakeApi,
) -> (
    ProfileController<FakeApi, FakeView, ManualTimer>,
    Arc<FakeView>,
    ManualTimer,
) {
    init_tracing();
    let view = Arc::new(FakeView::default());
    let timer = ManualTimer::new();
    let controller = ProfileController::new(api, Arc::clone(&view), timer.clone());
    (controller, view, timer)
}

#[tokio::test]
async fn admin_loads_read_only() {
    let api = FakeApi::default()
        .with_identity(Role::Admin)
        .with_profile(profile_record(60));
    let (mut controller, view, _) = controller(api);

    controller.load().await;

    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Viewer));
    assert_eq!(*view.save_visible.lock().unwrap(), Some(false));
    assert_eq!(view.notice.lock().unwrap().as_deref(), Some(READ_ONLY_NOTICE));
    let form = controller.form();
    assert!(form.fields().iter().filter(|f| !f.toggle).all(|f| !f.enabled));
    assert!(form.fields().iter().filter(|f| f.toggle).all(|f| f.enabled));
}

#[tokio::test]
async fn employee_loads_editable_with_bound_form() {
    let api = FakeApi::default()
        .with_identity(Role::Employee)
        .with_profile(profile_record(60));
    let (mut controller, view, _) = controller(api);

    controller.load().await;

    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Editor));
    assert_eq!(*view.save_visible.lock().unwrap(), Some(true));
    assert!(view.notice.lock().unwrap().is_none());
    assert!(controller.form().fields().iter().all(|f| f.enabled));
    assert_eq!(controller.form().value("first_name"), Some("Jane"));
    // display transform applied on bind
    assert_eq!(controller.form().value("birthday"), Some("1993-06-14"));
    assert_eq!(view.progress.lock().unwrap().as_slice(), [Progress::new(60)]);
}

#[tokio::test]
async fn identity_failure_hides_trigger_and_degrades_to_editable() {
    let api = FakeApi::default().with_profile(profile_record(60));
    let (mut controller, view, _) = controller(api);

    controller.load().await;

    assert_eq!(*view.trigger.lock().unwrap(), Some(false));
    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Editor));
    assert_eq!(controller.form().value("first_name"), Some("Jane"));
}

#[tokio::test]
async fn profile_failure_leaves_form_blank_but_ready() {
    let api = FakeApi::default().with_identity(Role::Employee);
    let (mut controller, view, _) = controller(api);

    controller.load().await;

    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Editor));
    assert_eq!(controller.form().value("first_name"), Some(""));
    assert!(view.progress.lock().unwrap().is_empty());
}

#[tokio::test]
async fn save_payload_drops_empty_fields() {
    let api = Arc::new(
        FakeApi::default()
            .with_identity(Role::Employee)
            .with_save_result(Ok(profile_record(42))),
    );
    let view = Arc::new(FakeView::default());
    let timer = ManualTimer::new();
    let mut controller = ProfileController::new(Arc::clone(&api), Arc::clone(&view), timer);

    controller.load().await;
    controller.form_mut().set_value("first_name", "Jane");
    controller.form_mut().set_value("last_name", "");
    controller.form_mut().set_value("email", "j@x.com");
    controller.save().await;

    let payloads = api.saved.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    let fields = &payloads[0].fields;
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["first_name"], serde_json::json!("Jane"));
    assert_eq!(fields["email"], serde_json::json!("j@x.com"));
    assert!(!fields.contains_key("last_name"));
}

#[tokio::test]
async fn save_normalizes_birthday_before_sending() {
    let api = Arc::new(
        FakeApi::default()
            .with_identity(Role::Employee)
            .with_save_result(Ok(profile_record(42))),
    );
    let view = Arc::new(FakeView::default());
    let mut controller =
        ProfileController::new(Arc::clone(&api), Arc::clone(&view), ManualTimer::new());

    controller.load().await;
    controller.form_mut().set_value("birthday", "14/06/1993");
    controller.save().await;

    let payloads = api.saved.lock().unwrap();
    assert_eq!(payloads[0].fields["birthday"], serde_json::json!("1993-06-14"));
}

#[tokio::test]
async fn empty_form_submit_sends_no_request() {
    // no profile record: the form stays blank
    let api = Arc::new(FakeApi::default().with_identity(Role::Employee));
    let view = Arc::new(FakeView::default());
    let mut controller =
        ProfileController::new(Arc::clone(&api), Arc::clone(&view), ManualTimer::new());

    controller.load().await;
    controller.save().await;

    assert!(api.saved.lock().unwrap().is_empty());
    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Editor));
    assert!(view.messages.lock().unwrap().is_empty());
}

#[tokio::test]
async fn partial_completion_save_reports_percent() {
    let api = Arc::new(
        FakeApi::default()
            .with_identity(Role::Employee)
            .with_save_result(Ok(profile_record(42))),
    );
    let view = Arc::new(FakeView::default());
    let mut controller =
        ProfileController::new(Arc::clone(&api), Arc::clone(&view), ManualTimer::new());

    controller.load().await;
    controller.form_mut().set_value("first_name", "Jane");
    controller.save().await;

    assert_eq!(controller.state(), ProfileState::Saved);
    let messages = view.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].text.contains("42%"));
    assert!(!messages[0].text.contains(FULL_COMPLETION_MESSAGE));
    // no modal close scheduled below full completion
    assert!(!view.modal_closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn full_completion_schedules_modal_close() {
    let api = Arc::new(
        FakeApi::default()
            .with_identity(Role::Employee)
            .with_save_result(Ok(profile_record(100))),
    );
    let view = Arc::new(FakeView::default());
    let timer = ManualTimer::new();
    let mut controller = ProfileController::new(Arc::clone(&api), Arc::clone(&view), timer.clone());

    controller.load().await;
    controller.form_mut().set_value("first_name", "Jane");
    controller.save().await;

    let messages = view.messages.lock().unwrap();
    assert_eq!(messages[0].text, FULL_COMPLETION_MESSAGE);
    drop(messages);

    assert!(!view.modal_closed.load(Ordering::SeqCst));
    timer.advance(MODAL_CLOSE_DELAY - Duration::from_millis(1));
    assert!(!view.modal_closed.load(Ordering::SeqCst));
    timer.advance(Duration::from_millis(1));
    assert!(view.modal_closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn save_failure_keeps_form_editable_for_retry() {
    let api = Arc::new(
        FakeApi::default()
            .with_identity(Role::Employee)
            .with_save_result(Err(request_error(500)))
            .with_save_result(Ok(profile_record(42))),
    );
    let view = Arc::new(FakeView::default());
    let mut controller =
        ProfileController::new(Arc::clone(&api), Arc::clone(&view), ManualTimer::new());

    controller.load().await;
    controller.form_mut().set_value("first_name", "Jane");
    controller.save().await;

    assert_eq!(controller.state(), ProfileState::SaveFailed);
    assert_eq!(view.messages.lock().unwrap()[0].text, SAVE_FAILED_MESSAGE);
    assert!(controller.form().fields().iter().all(|f| f.enabled));

    // manual retry succeeds
    controller.save().await;
    assert_eq!(controller.state(), ProfileState::Saved);
}

#[tokio::test]
async fn viewer_submit_is_ignored() {
    let api = Arc::new(FakeApi::default().with_identity(Role::Admin));
    let view = Arc::new(FakeView::default());
    let mut controller =
        ProfileController::new(Arc::clone(&api), Arc::clone(&view), ManualTimer::new());

    controller.load().await;
    controller.save().await;

    assert!(api.saved.lock().unwrap().is_empty());
    assert_eq!(controller.state(), ProfileState::Ready(ProfileAccess::Viewer));
}
