/// How null slots in an identifier column are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPolicy {
    /// Null slots stay null in the rectified column.
    #[default]
    Preserve,
    /// The first null slot fails the call with `Error::NullIdentifier`.
    Reject,
}

/// Knobs for a single rectification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectifyOptions {
    /// Strip leading and trailing ASCII whitespace from text before parsing.
    pub trim_text: bool,
    pub null_policy: NullPolicy,
}

impl Default for RectifyOptions {
    fn default() -> Self {
        Self {
            trim_text: true,
            null_policy: NullPolicy::Preserve,
        }
    }
}

impl RectifyOptions {
    pub fn with_trim_text(mut self, trim_text: bool) -> Self {
        self.trim_text = trim_text;
        self
    }

    pub fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }
}
