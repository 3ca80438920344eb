use super::TrailedInteger;

/// One undo record on the trail: which cell changed and the value it held before.
#[derive(Debug, Clone)]
pub(crate) struct TrailedChange {
    pub(crate) old_value: i64,
    pub(crate) reference: TrailedInteger,
}
