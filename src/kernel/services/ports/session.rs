/// String-keyed session persistence.
///
/// The kernel reads and writes serialized JSON through this trait and never
/// touches the filesystem directly. Adapters decide where the strings
/// actually live.
pub trait SessionStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}
