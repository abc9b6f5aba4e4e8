use core::str::FromStr;

use crate::config::BackendAvailability;
use crate::error::CatalogError;

/// Library backend owning a container implementation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Backend {
    /// Native containers, always built.
    #[strum(to_string = "common")]
    #[serde(rename = "common")]
    Common,
    /// Containers backed by Eigen, only present when Eigen was found.
    #[strum(to_string = "eigen")]
    #[serde(rename = "eigen")]
    Eigen,
    /// Containers backed by dune-istl, only present when it was found.
    #[strum(to_string = "istl")]
    #[serde(rename = "istl")]
    Istl,
}

impl Backend {
    pub fn is_optional(&self) -> bool {
        !matches!(self, Backend::Common)
    }
}

/// Whether a container plays the vector or the matrix role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ContainerRole {
    #[strum(to_string = "vector")]
    Vector,
    #[strum(to_string = "matrix")]
    Matrix,
}

/// Every container the library knows about, in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum ContainerKind {
    CommonDenseVector,
    CommonSparseVector,
    EigenDenseVector,
    EigenMappedDenseVector,
    IstlDenseVector,
    CommonDenseMatrix,
    CommonSparseMatrix,
    EigenDenseMatrix,
    EigenRowMajorSparseMatrix,
    IstlRowMajorSparseMatrix,
}

impl ContainerKind {
    pub const fn backend(&self) -> Backend {
        match self {
            ContainerKind::CommonDenseVector
            | ContainerKind::CommonSparseVector
            | ContainerKind::CommonDenseMatrix
            | ContainerKind::CommonSparseMatrix => Backend::Common,
            ContainerKind::EigenDenseVector
            | ContainerKind::EigenMappedDenseVector
            | ContainerKind::EigenDenseMatrix
            | ContainerKind::EigenRowMajorSparseMatrix => Backend::Eigen,
            ContainerKind::IstlDenseVector | ContainerKind::IstlRowMajorSparseMatrix => {
                Backend::Istl
            }
        }
    }

    pub const fn role(&self) -> ContainerRole {
        match self {
            ContainerKind::CommonDenseVector
            | ContainerKind::CommonSparseVector
            | ContainerKind::EigenDenseVector
            | ContainerKind::EigenMappedDenseVector
            | ContainerKind::IstlDenseVector => ContainerRole::Vector,
            ContainerKind::CommonDenseMatrix
            | ContainerKind::CommonSparseMatrix
            | ContainerKind::EigenDenseMatrix
            | ContainerKind::EigenRowMajorSparseMatrix
            | ContainerKind::IstlRowMajorSparseMatrix => ContainerRole::Matrix,
        }
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Parse a container name, reporting unknown names as a catalog error.
    pub fn parse(name: &str) -> Result<Self, CatalogError> {
        ContainerKind::from_str(name).map_err(|_| CatalogError::UnknownContainer(name.to_string()))
    }
}

/// Backend selector of the library, pairing a vector with a matrix implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum ContainerBackend {
    #[strum(to_string = "common_dense")]
    CommonDense,
    #[strum(to_string = "common_sparse")]
    CommonSparse,
    #[strum(to_string = "istl_dense")]
    IstlDense,
    #[strum(to_string = "istl_sparse")]
    IstlSparse,
    #[strum(to_string = "eigen_dense")]
    EigenDense,
    #[strum(to_string = "eigen_sparse")]
    EigenSparse,
}

impl ContainerBackend {
    pub const fn backend(&self) -> Backend {
        match self {
            ContainerBackend::CommonDense | ContainerBackend::CommonSparse => Backend::Common,
            ContainerBackend::IstlDense | ContainerBackend::IstlSparse => Backend::Istl,
            ContainerBackend::EigenDense | ContainerBackend::EigenSparse => Backend::Eigen,
        }
    }

    /// Vector type paired with this selector, if the library defines one.
    pub const fn vector_kind(&self) -> Option<ContainerKind> {
        match self {
            ContainerBackend::CommonDense => Some(ContainerKind::CommonDenseVector),
            ContainerBackend::EigenDense | ContainerBackend::EigenSparse => {
                Some(ContainerKind::EigenDenseVector)
            }
            ContainerBackend::IstlSparse => Some(ContainerKind::IstlDenseVector),
            ContainerBackend::CommonSparse | ContainerBackend::IstlDense => None,
        }
    }

    /// Matrix type paired with this selector, if the library defines one.
    pub const fn matrix_kind(&self) -> Option<ContainerKind> {
        match self {
            ContainerBackend::CommonDense => Some(ContainerKind::CommonDenseMatrix),
            ContainerBackend::EigenDense => Some(ContainerKind::EigenDenseMatrix),
            ContainerBackend::EigenSparse => Some(ContainerKind::EigenRowMajorSparseMatrix),
            ContainerBackend::IstlSparse => Some(ContainerKind::IstlRowMajorSparseMatrix),
            ContainerBackend::CommonSparse | ContainerBackend::IstlDense => None,
        }
    }
}

/// Default backend of the library for the given build: eigen, then istl, then common.
pub fn default_backend(availability: &BackendAvailability) -> ContainerBackend {
    default_sparse_backend(availability)
}

/// Default sparse backend for the given build.
pub fn default_sparse_backend(availability: &BackendAvailability) -> ContainerBackend {
    if availability.eigen {
        ContainerBackend::EigenSparse
    } else if availability.istl {
        ContainerBackend::IstlSparse
    } else {
        ContainerBackend::CommonSparse
    }
}

/// Default dense backend for the given build. Istl has no dense default.
pub fn default_dense_backend(availability: &BackendAvailability) -> ContainerBackend {
    if availability.eigen {
        ContainerBackend::EigenDense
    } else {
        ContainerBackend::CommonDense
    }
}
