/// A savings goal and the progress recorded toward it.
///
/// Progress is not bounded by the target; it is whatever was last recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: i64,
    pub description: String,
    pub target: f64,
    pub progress: f64,
}
