//! HR Console - presentation-layer controllers for the HR backend
//!
//! Each page controller (profile, admin directory, auth) talks to the
//! backend through an API port and to the UI through a view port, so
//! controllers unit-test against fakes with no live UI. Timed UI
//! effects go through a cancellable [`timer::Timer`] port that tests
//! drive with virtual time.

pub mod api;
pub mod auth;
pub mod directory;
pub mod error;
pub mod form;
pub mod notify;
pub mod profile;
pub mod progress;
pub mod timer;
pub mod view;

pub use api::{AuthApi, DirectoryApi, ProfileApi};
pub use auth::{AuthController, SignupInput};
pub use directory::DirectoryController;
pub use error::{ConsoleError, ConsoleResult};
pub use form::FormModel;
pub use notify::{Toast, show_toast};
pub use profile::{ProfileController, ProfileState};
pub use progress::Progress;
pub use timer::{ManualTimer, Timer, TimerHandle, TokioTimer};
pub use view::{AuthView, DirectoryView, Notice, NoticeKind, ProfileView, ToastView};
