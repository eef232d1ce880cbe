#[derive(Debug, Clone)]
pub enum AppEvent {
    Frame,
    ConfigReload,
}
