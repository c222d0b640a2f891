pub(crate) mod body;
pub(crate) mod compose;

pub(crate) use compose::{compose, EmailDraft, EmailRequest};
