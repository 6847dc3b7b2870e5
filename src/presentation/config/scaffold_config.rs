/// Scaffold mode runs the whole service on mock engines, so it can be
/// exercised without any remote credentials.
#[derive(Debug, Clone, Copy)]
pub struct ScaffoldConfig {
    pub enabled: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            enabled: std::env::var("SCAFFOLD_MODE")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}
