//! Reporter gate: the single shared secret that unlocks status updates.

/// Checks candidate passwords against the configured reporter password.
///
/// There is one password for everyone; a successful check grants the
/// reporter role and carries no identity.
pub struct ReporterGate {
    password: String,
}

impl ReporterGate {
    /// Create a gate for the given shared password.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Whether `candidate` is exactly the shared password.
    #[must_use]
    pub fn authenticate(&self, candidate: &str) -> bool {
        let granted = !self.password.is_empty() && candidate == self.password;
        if granted {
            tracing::info!("reporter login accepted");
        } else {
            tracing::warn!("reporter login rejected");
        }
        granted
    }
}

impl std::fmt::Debug for ReporterGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReporterGate")
            .field("password", &"<redacted>")
            .finish()
    }
}
