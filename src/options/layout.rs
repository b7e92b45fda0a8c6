use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::LayoutKind;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Formation selection.
pub struct LayoutOptions {
    /// Formation used for the first arrangement pass.
    #[schemars(title = "Initial Layout")]
    pub initial: LayoutKind,
}
