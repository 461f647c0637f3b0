//! The fixed 3x3 filter bank: edge, sharpen, blur, gauss, emboss and
//! identity. Filters are selected by name; an unrecognized name falls
//! back to identity instead of failing.

use std::collections::HashMap;

/// Row-major 3x3 coefficient matrix. `kernel[1][1]` is the center tap.
pub type Kernel = [[f32; 3]; 3];

const EDGE_KERNEL: Kernel = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];
const SHARPEN_KERNEL: Kernel = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];
const BLUR_KERNEL: Kernel = [[1.0 / 9.0; 3]; 3];
const GAUSS_KERNEL: Kernel = [
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    [1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
    [1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
];
const EMBOSS_KERNEL: Kernel = [[-2.0, -1.0, 0.0], [-1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];
const IDENTITY_KERNEL: Kernel = [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Edge,
    Sharpen,
    Blur,
    Gauss,
    Emboss,
    Identity,
}

lazy_static! {
    static ref FILTERS_BY_NAME: HashMap<&'static str, FilterKind> = FilterKind::ALL
        .iter()
        .map(|&kind| (kind.name(), kind))
        .collect();
}

impl FilterKind {
    pub const ALL: [FilterKind; 6] = [
        FilterKind::Edge,
        FilterKind::Sharpen,
        FilterKind::Blur,
        FilterKind::Gauss,
        FilterKind::Emboss,
        FilterKind::Identity,
    ];

    /// Looks a filter up by its lowercase name.
    pub fn lookup(name: &str) -> Option<FilterKind> {
        FILTERS_BY_NAME.get(name).copied()
    }

    /// Like [`lookup`](FilterKind::lookup), but unrecognized names map to
    /// [`FilterKind::Identity`].
    pub fn from_name(name: &str) -> FilterKind {
        FilterKind::lookup(name).unwrap_or(FilterKind::Identity)
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Edge => "edge",
            FilterKind::Sharpen => "sharpen",
            FilterKind::Blur => "blur",
            FilterKind::Gauss => "gauss",
            FilterKind::Emboss => "emboss",
            FilterKind::Identity => "identity",
        }
    }

    pub fn kernel(self) -> Kernel {
        match self {
            FilterKind::Edge => EDGE_KERNEL,
            FilterKind::Sharpen => SHARPEN_KERNEL,
            FilterKind::Blur => BLUR_KERNEL,
            FilterKind::Gauss => GAUSS_KERNEL,
            FilterKind::Emboss => EMBOSS_KERNEL,
            FilterKind::Identity => IDENTITY_KERNEL,
        }
    }
}
