//! Waitlist signup core: the Landing/Signup view switch, the submission state
//! machine, and the HTTP client for the waitlist registration endpoint.

pub mod config;
pub mod error;
pub mod submission;
pub mod view;
pub mod waitlist;

pub use config::{load_settings, Settings, DEFAULT_ENDPOINT_URL};
pub use error::{SubmitRejected, WaitlistError};
pub use submission::{PendingSubmission, SubmissionController, SubmissionStatus};
pub use view::{ActiveView, ViewController, ViewState};
pub use waitlist::{HttpWaitlistClient, WaitlistClient};
