use bytes::Bytes;

use crate::error::SubmissionError;

/// A package archive picked by the user, held in memory for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    name: String,
    data: Bytes,
}

impl Submission {
    /// Accepts a named blob as a submission.
    ///
    /// The name is trimmed and must end in an accepted archive extension
    /// (see [`rosgrade_config::ACCEPTED_EXTENSIONS`]); the blob must not be empty.
    pub fn new(name: impl Into<String>, data: impl Into<Bytes>) -> Result<Self, SubmissionError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(SubmissionError::MissingName);
        }
        if !rosgrade_config::has_accepted_extension(&name) {
            return Err(SubmissionError::UnsupportedExtension(name));
        }

        let data = data.into();
        if data.is_empty() {
            return Err(SubmissionError::EmptyFile(name));
        }

        Ok(Self { name, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
