use crate::types::Backend;

/// Which optional backends are present in the build.
///
/// The native backend is always available.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BackendAvailability {
    /// Whether Eigen was found.
    #[serde(default)]
    pub eigen: bool,

    /// Whether dune-istl was found.
    #[serde(default)]
    pub istl: bool,
}

impl BackendAvailability {
    /// Everything available.
    pub fn all() -> Self {
        Self {
            eigen: true,
            istl: true,
        }
    }

    pub fn is_available(&self, backend: Backend) -> bool {
        match backend {
            Backend::Common => true,
            Backend::Eigen => self.eigen,
            Backend::Istl => self.istl,
        }
    }

    pub fn have_eigen(&self) -> bool {
        self.eigen
    }

    pub fn have_istl(&self) -> bool {
        self.istl
    }
}
