pub mod api;
pub mod form;
pub mod speech;

pub use api::{ClientError, HttpRewriteApi, RewriteApi, RewritePayload};
pub use form::{FormController, FormError, FormState, Notification, NotificationKind, TabType};
pub use speech::{SpeechError, SpeechRecognizer, SPEECH_LOCALE};
