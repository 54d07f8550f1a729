/// Checked before a document is cached or written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
