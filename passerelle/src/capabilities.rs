use crate::errors::Error;

/// Text translation between two languages, identified by BCP 47 tags.
///
/// The store never calls this; it exists so presentation layers depend on
/// an abstraction instead of a vendor service.
pub trait Translator {
    fn translate(&self, text: &str, from: &str, to: &str) -> Result<String, Error>;
}

/// Speech to text.
pub trait SpeechRecognizer {
    fn transcribe(&self, audio: &[u8]) -> Result<String, Error>;
}

/// Text to speech.
pub trait Speaker {
    fn speak(&self, text: &str) -> Result<(), Error>;
}
