pub use anyhow::{bail, ensure, format_err, Context as _, Error, Result};
pub use itertools::Itertools as _;
pub use log::{info, warn};
pub use once_cell::sync::Lazy;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fs,
    path::{Path, PathBuf},
};
