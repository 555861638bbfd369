pub mod dishes;
pub mod health;
pub mod orders;

use serde::{Deserialize, Serialize};

/// Requests wrap their payload under a `data` key; a body without one is
/// treated as an empty payload and left for the pipeline to reject.
#[derive(Debug, Deserialize)]
pub struct Envelope<T: Default> {
    #[serde(default)]
    pub data: T,
}

/// Responses wrap their result the same way.
#[derive(Debug, Serialize)]
pub struct DataBody<T> {
    pub data: T,
}
